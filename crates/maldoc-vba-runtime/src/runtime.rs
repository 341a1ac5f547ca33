use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Local;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::ast::{DllImport, Procedure, VbaType};
use crate::governor::{EmulationLimits, Governor};
use crate::library::Library;
use crate::object_model::{DocumentMetadata, Spreadsheet};
use crate::report::{ActionReporter, LogReporter};
use crate::value::{ObjectRef, Value};

#[derive(Debug, Error)]
pub enum VbaError {
    #[error("Name not found: {0}")]
    NameNotFound(String),
    #[error("Type mismatch: {0}")]
    TypeCoercion(String),
    #[error("Recursion depth limit exceeded")]
    RecursionLimitExceeded,
    #[error("Emulation time limit exceeded")]
    TimeLimitExceeded,
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl VbaError {
    /// Resource exhaustion: the run must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RecursionLimitExceeded | Self::TimeLimitExceeded
        )
    }
}

/// Everything one emulation run is configured with.
pub struct Environment {
    limits: EmulationLimits,
    workbook: Option<Rc<dyn Spreadsheet>>,
    metadata: Option<Rc<dyn DocumentMetadata>>,
    reporter: Rc<dyn ActionReporter>,
    output_dir: Option<PathBuf>,
    doc_vars: HashMap<String, Value>,
    globals: HashMap<String, Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            limits: EmulationLimits::default(),
            workbook: None,
            metadata: None,
            reporter: Rc::new(LogReporter),
            output_dir: None,
            doc_vars: HashMap::new(),
            globals: HashMap::new(),
        }
    }
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: EmulationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_workbook(mut self, workbook: Rc<dyn Spreadsheet>) -> Self {
        self.workbook = Some(workbook);
        self
    }

    pub fn with_metadata(mut self, metadata: Rc<dyn DocumentMetadata>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_reporter(mut self, reporter: Rc<dyn ActionReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Directory dropped files are persisted to. Without one, dumps are only hashed and reported.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_doc_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (name, value) in vars {
            self.doc_vars
                .insert(name.as_ref().to_lowercase(), value.into());
        }
        self
    }

    pub fn with_doc_var(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.doc_vars.insert(name.to_lowercase(), value.into());
        self
    }

    pub fn with_global(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.globals.insert(name.to_lowercase(), value.into());
        self
    }

    /// Start the run: seeds the per-run globals and arms the time limit.
    pub fn into_context(self) -> Context {
        let mut globals = HashMap::new();
        globals.insert("now".to_string(), Value::Date(Local::now().naive_local()));
        globals.insert("application.username".to_string(), Value::from("--"));
        for name in [
            "vbdirectory",
            "vba.vbdirectory",
            "vba.keycodeconstants.vbdirectory",
        ] {
            globals.insert(name.to_string(), Value::from("vbDirectory"));
        }
        globals.extend(self.globals);

        let shared = SharedState {
            globals: RefCell::new(globals),
            doc_vars: RefCell::new(self.doc_vars),
            files: RefCell::new(FileRegistry::default()),
            dll_func_true_names: RefCell::new(HashMap::new()),
            governor: Rc::new(Governor::new(self.limits)),
            reporter: self.reporter,
            workbook: self.workbook,
            metadata: self.metadata,
            output_dir: self.output_dir,
            library: Library::global(),
        };
        Context::from_shared(Rc::new(shared))
    }
}

#[derive(Debug)]
struct OpenFile {
    name: String,
    contents: Vec<u8>,
}

#[derive(Debug, Default)]
struct FileRegistry {
    open: BTreeMap<String, OpenFile>,
    closed: BTreeMap<String, Vec<u8>>,
}

/// State shared by every scope of one run.
struct SharedState {
    globals: RefCell<HashMap<String, Value>>,
    doc_vars: RefCell<HashMap<String, Value>>,
    files: RefCell<FileRegistry>,
    dll_func_true_names: RefCell<HashMap<String, String>>,
    governor: Rc<Governor>,
    reporter: Rc<dyn ActionReporter>,
    workbook: Option<Rc<dyn Spreadsheet>>,
    metadata: Option<Rc<dyn DocumentMetadata>>,
    output_dir: Option<PathBuf>,
    library: &'static Library,
}

/// One procedure-call scope: private locals on top of the run's shared state.
///
/// All names are lowercased before they are stored or looked up.
pub struct Context {
    shared: Rc<SharedState>,
    locals: HashMap<String, Value>,
    types: HashMap<String, VbaType>,
    with_prefix: String,
    loop_stack: Vec<bool>,
    exit_func: bool,
}

impl Default for Context {
    fn default() -> Self {
        Environment::default().into_context()
    }
}

impl Context {
    fn from_shared(shared: Rc<SharedState>) -> Self {
        Self {
            shared,
            locals: HashMap::new(),
            types: HashMap::new(),
            with_prefix: String::new(),
            loop_stack: Vec::new(),
            exit_func: false,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh scope for a callee. Globals, doc vars and files stay shared.
    pub fn child(&self) -> Self {
        Self::from_shared(Rc::clone(&self.shared))
    }

    pub fn governor(&self) -> &Rc<Governor> {
        &self.shared.governor
    }

    pub fn workbook(&self) -> Option<&Rc<dyn Spreadsheet>> {
        self.shared.workbook.as_ref()
    }

    pub fn metadata(&self) -> Option<&Rc<dyn DocumentMetadata>> {
        self.shared.metadata.as_ref()
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        let key = name.to_lowercase();
        if let Some(v) = self.locals.get(&key) {
            log::debug!("found {key:?} in locals");
            return Some(v.clone());
        }
        if let Some(v) = self.shared.globals.borrow().get(&key) {
            log::debug!("found {key:?} in globals");
            return Some(v.clone());
        }
        let v = self.shared.library.get(&key)?;
        log::debug!("found {key:?} in library");
        Some(v)
    }

    /// Resolve `name` as `<with prefix><name>`, then `name`, then `name$`, each through
    /// locals, globals and the built-in library.
    pub fn get(&self, name: &str) -> Result<Value, VbaError> {
        let prefixed = (!self.with_prefix.is_empty()).then(|| format!("{}{name}", self.with_prefix));
        let candidates = prefixed
            .into_iter()
            .chain([name.to_string(), format!("{name}$")]);
        for candidate in candidates {
            if let Some(v) = self.lookup(&candidate) {
                return Ok(v);
            }
        }
        log::debug!("name {name:?} not found");
        Err(VbaError::NameNotFound(name.to_string()))
    }

    /// First callable bound to `name`, skipping plain values that shadow it (such as a
    /// function's own result slot).
    pub fn get_callable(&self, name: &str) -> Option<ObjectRef> {
        let key = name.to_lowercase();
        if let Some(Value::Object(obj)) = self.locals.get(&key) {
            return Some(obj.clone());
        }
        if let Some(Value::Object(obj)) = self.shared.globals.borrow().get(&key) {
            return Some(obj.clone());
        }
        match self.shared.library.get(&key) {
            Some(Value::Object(obj)) => Some(obj),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str, local_only: bool) -> bool {
        if local_only {
            return self.locals.contains_key(&name.to_lowercase());
        }
        self.get(name).is_ok()
    }

    /// Whether `name` was defined by the program itself (locals or globals, not the library).
    pub fn contains_user_defined(&self, name: &str) -> bool {
        let key = name.to_lowercase();
        self.locals.contains_key(&key) || self.shared.globals.borrow().contains_key(&key)
    }

    pub fn get_type(&self, name: &str) -> Option<VbaType> {
        self.types.get(&name.to_lowercase()).copied()
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.set_inner(name, value.into(), None, true);
    }

    pub fn set_typed(&mut self, name: &str, value: impl Into<Value>, ty: VbaType) {
        self.set_inner(name, value.into(), Some(ty), true);
    }

    fn set_inner(&mut self, name: &str, value: Value, ty: Option<VbaType>, apply_with_prefix: bool) {
        let key = name.to_lowercase();

        let wrote_global = !self.locals.contains_key(&key) && {
            let mut globals = self.shared.globals.borrow_mut();
            match globals.get_mut(&key) {
                // Procedure definitions are never overwritten.
                Some(slot) if !slot.is_procedure() => {
                    log::debug!("set global {key} = {value:?}");
                    *slot = value.clone();
                    true
                }
                _ => false,
            }
        };
        if !wrote_global {
            self.locals.insert(key.clone(), value.clone());
        }

        if let Some(ty) = ty {
            self.types.insert(key.clone(), ty);
        }

        if apply_with_prefix && !self.with_prefix.is_empty() {
            let prefixed = format!("{}{key}", self.with_prefix);
            self.set_inner(&prefixed, value.clone(), ty, false);
        }

        if key.ends_with(".text") {
            self.decode_base64_text(&key, &value);
        }
    }

    /// `<obj>.text` written while `<obj>.datatype` is `bin.base64` also yields
    /// `<obj>.nodetypedvalue` holding the decoded bytes.
    fn decode_base64_text(&mut self, key: &str, value: &Value) {
        let datatype = match self.get(&key.replace(".text", ".datatype")) {
            Ok(v) => v,
            Err(_) => return,
        };
        if !datatype
            .to_string_lossy()
            .trim()
            .eq_ignore_ascii_case("bin.base64")
        {
            return;
        }
        let text = value.to_string_lossy();
        match BASE64.decode(text.trim()) {
            Ok(bytes) => {
                let target = key.replace(".text", ".nodetypedvalue");
                self.set(&target, Value::from_bytes(&bytes));
            }
            Err(err) => log::error!("base64 conversion of {text:?} failed: {err}"),
        }
    }

    /// Bind directly in this scope's locals (procedure parameters, function result slot).
    pub fn set_local(&mut self, name: &str, value: impl Into<Value>) {
        self.locals.insert(name.to_lowercase(), value.into());
    }

    pub fn set_global(&mut self, name: &str, value: impl Into<Value>) {
        self.shared
            .globals
            .borrow_mut()
            .insert(name.to_lowercase(), value.into());
    }

    /// Register a `Sub`/`Function`. Once registered the global cannot be overwritten by `set`.
    pub fn define_procedure(&mut self, procedure: Rc<Procedure>) {
        let name = procedure.name.clone();
        self.set_global(&name, ObjectRef::Procedure(procedure));
    }

    pub fn declare_dll_import(&mut self, import: DllImport) {
        let alias = import.alias.to_lowercase();
        self.shared
            .dll_func_true_names
            .borrow_mut()
            .insert(alias.clone(), import.true_name.clone());
        self.set_global(&alias, ObjectRef::DllImport(Rc::new(import)));
    }

    /// Real export name behind a `Declare ... Alias` import.
    pub fn get_true_name(&self, alias: &str) -> Option<String> {
        self.shared
            .dll_func_true_names
            .borrow()
            .get(&alias.to_lowercase())
            .cloned()
    }

    pub fn set_doc_var(&mut self, name: &str, value: impl Into<Value>) {
        self.shared
            .doc_vars
            .borrow_mut()
            .insert(name.to_lowercase(), value.into());
    }

    /// Look up a document variable/property.
    ///
    /// On a miss, a program variable holding a doc var name is followed, then the `*`
    /// wildcard entry is used if present.
    pub fn get_doc_var(&self, name: &str) -> Option<Value> {
        let mut seen = HashSet::new();
        self.doc_var_inner(name, &mut seen)
    }

    fn doc_var_inner(&self, name: &str, seen: &mut HashSet<String>) -> Option<Value> {
        let key = name.to_lowercase();
        log::info!("looking up doc var {key}");

        let direct = self.shared.doc_vars.borrow().get(&key).cloned();
        if let Some(v) = direct {
            log::debug!("found doc var {key} = {v:?}");
            return Some(v);
        }
        log::debug!("doc var {key} not found");

        if seen.insert(key.clone()) {
            match self.get(&key) {
                Ok(Value::Str(indirect)) => return self.doc_var_inner(&indirect, seen),
                Ok(Value::Null) | Err(_) => {}
                Ok(_) => return None,
            }
        }

        self.shared.doc_vars.borrow().get("*").cloned()
    }

    pub fn with_prefix(&self) -> &str {
        &self.with_prefix
    }

    /// Install a new `With` prefix (stored lowercased) and return the previous one.
    pub fn set_with_prefix(&mut self, prefix: &str) -> String {
        std::mem::replace(&mut self.with_prefix, prefix.to_lowercase())
    }

    pub fn push_loop(&mut self) {
        self.loop_stack.push(true);
    }

    pub fn pop_loop(&mut self) -> Option<bool> {
        self.loop_stack.pop()
    }

    /// Whether the innermost loop is still running. `false` outside any loop.
    pub fn loop_running(&self) -> bool {
        self.loop_stack.last().copied().unwrap_or(false)
    }

    /// `Exit For` / `Exit Do`.
    pub fn stop_loop(&mut self) {
        if let Some(top) = self.loop_stack.last_mut() {
            *top = false;
        }
    }

    pub fn exit_func(&self) -> bool {
        self.exit_func
    }

    pub fn set_exit_func(&mut self, exit: bool) {
        self.exit_func = exit;
    }

    pub fn report_action(&self, action: &str, params: &str, description: &str, strip_null_bytes: bool) {
        if strip_null_bytes {
            let strip = |s: &str| s.replace('\0', "");
            self.shared
                .reporter
                .report_action(&strip(action), &strip(params), &strip(description));
        } else {
            self.shared.reporter.report_action(action, params, description);
        }
    }

    pub fn open_file(&mut self, name: &str) {
        self.open_file_as(name, name);
    }

    /// Register an empty buffer under `file_id`; `display_name` is what it is saved as.
    pub fn open_file_as(&mut self, file_id: &str, display_name: &str) {
        log::debug!("opening file {display_name} as {file_id}");
        self.shared.files.borrow_mut().open.insert(
            file_id.to_string(),
            OpenFile {
                name: display_name.to_string(),
                contents: Vec::new(),
            },
        );
    }

    pub fn is_open(&self, file_id: &str) -> bool {
        self.shared.files.borrow().open.contains_key(file_id)
    }

    /// Append to an open buffer.
    pub fn write_file(&mut self, file_id: &str, bytes: &[u8]) -> Result<(), VbaError> {
        let mut files = self.shared.files.borrow_mut();
        let file = files
            .open
            .get_mut(file_id)
            .ok_or_else(|| VbaError::Runtime(format!("file {file_id} is not open")))?;
        file.contents.extend_from_slice(bytes);
        Ok(())
    }

    /// Close `file_id`: its bytes move to the closed registry, their SHA-256 is reported and,
    /// with an output directory configured, they are written to disk.
    pub fn dump_file(&mut self, file_id: &str) {
        let removed = self.shared.files.borrow_mut().open.remove(file_id);
        let Some(file) = removed else {
            log::error!("file {file_id} not open, cannot save");
            return;
        };

        let name = file.name.replace('#', "");
        log::info!("closing file {name}");

        let hash = sha256_hex(&file.contents);
        self.shared
            .files
            .borrow_mut()
            .closed
            .insert(name.clone(), file.contents.clone());
        self.report_action("Dropped File Hash", &hash, &format!("File Name: {name}"), false);

        match &self.shared.output_dir {
            Some(dir) => match maldoc_fs::write_dropped_file(dir, &name, &file.contents) {
                Ok(path) => log::info!("wrote dumped file (hash {hash}) to {}", path.display()),
                Err(err) => log::error!("writing file {name} failed: {err}"),
            },
            None => log::warn!("file {name} not dumped, no output directory"),
        }
    }

    pub fn dump_all_files(&mut self) {
        let ids: Vec<String> = self.shared.files.borrow().open.keys().cloned().collect();
        for id in ids {
            self.dump_file(&id);
        }
    }

    pub fn open_files(&self) -> Vec<String> {
        self.shared.files.borrow().open.keys().cloned().collect()
    }

    pub fn closed_files(&self) -> BTreeMap<String, Vec<u8>> {
        self.shared.files.borrow().closed.clone()
    }
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
