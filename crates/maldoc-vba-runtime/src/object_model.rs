use std::collections::HashMap;

use crate::runtime::VbaError;
use crate::value::Value;

/// Read access to a workbook loaded from the analysed document.
///
/// Row and column indices are zero-based.
pub trait Spreadsheet {
    fn sheet_by_name(&self, name: &str) -> Result<&dyn Sheet, VbaError>;
}

pub trait Sheet {
    fn name(&self) -> &str;
    fn cell_value(&self, row: usize, col: usize) -> Result<Value, VbaError>;
}

/// Attribute-style document metadata (author, title, company, ...), keyed by lowercased name.
pub trait DocumentMetadata {
    fn property(&self, name: &str) -> Option<Value>;
}

/// Convert an Excel column label to a zero-based index (`A` -> 0, `Z` -> 25, `AA` -> 26).
pub fn column_label_to_index(label: &str) -> Result<usize, VbaError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(VbaError::Runtime("Empty column label".to_string()));
    }
    let mut acc: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(VbaError::Runtime(format!("Invalid column label: {label}")));
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        acc = acc
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| VbaError::Runtime(format!("Column label out of range: {label}")))?;
    }
    Ok(acc - 1)
}

/// Split an A1-style cell reference into zero-based `(row, col)`.
pub fn parse_cell_ref(cell: &str) -> Result<(usize, usize), VbaError> {
    let mut col = String::new();
    let mut row = String::new();
    for ch in cell.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            col.push(ch);
        } else {
            row.push(ch);
        }
    }
    let row: usize = row
        .trim()
        .parse()
        .map_err(|_| VbaError::Runtime(format!("Invalid cell reference: {cell}")))?;
    if row == 0 {
        return Err(VbaError::Runtime(format!("Invalid cell reference: {cell}")));
    }
    Ok((row - 1, column_label_to_index(&col)?))
}

/// A very small in-memory workbook used by tests and embedders.
#[derive(Debug, Default)]
pub struct InMemoryWorkbook {
    sheets: Vec<InMemorySheet>,
}

#[derive(Debug, Default)]
pub struct InMemorySheet {
    name: String,
    cells: HashMap<(usize, usize), Value>,
}

impl InMemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, name: &str) -> usize {
        let idx = self.sheets.len();
        self.sheets.push(InMemorySheet {
            name: name.to_string(),
            cells: HashMap::new(),
        });
        idx
    }

    pub fn set_cell_value(
        &mut self,
        sheet: usize,
        row: usize,
        col: usize,
        value: impl Into<Value>,
    ) -> Result<(), VbaError> {
        let sh = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| VbaError::Runtime(format!("Unknown sheet index: {sheet}")))?;
        sh.cells.insert((row, col), value.into());
        Ok(())
    }

    pub fn set_value_a1(
        &mut self,
        sheet: &str,
        a1: &str,
        value: impl Into<Value>,
    ) -> Result<(), VbaError> {
        let idx = self
            .sheets
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(sheet))
            .ok_or_else(|| VbaError::Runtime(format!("Unknown sheet: {sheet}")))?;
        let (row, col) = parse_cell_ref(a1)?;
        self.set_cell_value(idx, row, col, value)
    }
}

impl Spreadsheet for InMemoryWorkbook {
    fn sheet_by_name(&self, name: &str) -> Result<&dyn Sheet, VbaError> {
        self.sheets
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s as &dyn Sheet)
            .ok_or_else(|| VbaError::Runtime(format!("Unknown sheet: {name}")))
    }
}

impl Sheet for InMemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell_value(&self, row: usize, col: usize) -> Result<Value, VbaError> {
        Ok(self.cells.get(&(row, col)).cloned().unwrap_or(Value::Null))
    }
}

/// Metadata store backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryMetadata {
    props: HashMap<String, Value>,
}

impl InMemoryMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.props.insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

impl DocumentMetadata for InMemoryMetadata {
    fn property(&self, name: &str) -> Option<Value> {
        self.props.get(&name.to_ascii_lowercase()).cloned()
    }
}
