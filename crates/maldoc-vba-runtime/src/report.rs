use std::cell::RefCell;

/// Sink for observable actions (dropped files, external calls, ...).
pub trait ActionReporter {
    fn report_action(&self, action: &str, params: &str, description: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedAction {
    pub action: String,
    pub params: String,
    pub description: String,
}

/// Keeps every reported action in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    actions: RefCell<Vec<ReportedAction>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<ReportedAction> {
        self.actions.borrow().clone()
    }
}

impl ActionReporter for RecordingReporter {
    fn report_action(&self, action: &str, params: &str, description: &str) {
        self.actions.borrow_mut().push(ReportedAction {
            action: action.to_string(),
            params: params.to_string(),
            description: description.to_string(),
        });
    }
}

/// Default sink when the embedder does not install one: actions only go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ActionReporter for LogReporter {
    fn report_action(&self, action: &str, params: &str, description: &str) {
        log::info!("action: {action} | {params} | {description}");
    }
}
