pub const READY_STATUS: &str = "Ready. Ctrl+N adds a row, Ctrl+S accepts.";

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn row_added(&mut self, index: usize) {
        self.message = format!("Added row #{index}");
    }

    pub fn row_detached(&mut self, remaining: usize) {
        self.message = format!("Removed row • {remaining} left");
    }

    pub fn row_marked_deleted(&mut self, pending: usize) {
        self.message = format!("Row marked for deletion • {pending} pending");
    }

    pub fn nothing_to_remove(&mut self) {
        self.message = "No row to remove".to_string();
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
