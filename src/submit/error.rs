/// Failure while binding submission data back into a roster. Carries the
/// wire name of the offending field.
#[derive(Debug, Clone)]
pub struct BindError {
    pub field: String,
    pub message: String,
}

impl BindError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for BindError {}
