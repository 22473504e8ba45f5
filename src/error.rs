use thiserror::Error;

/// Errors raised while rendering, resolving or executing bridge commands.
///
/// A child process that exits non-zero is *not* an error by itself: it is
/// reported through the status of the returned result. `ExecutionFailure`
/// only appears when a caller asks for a strict result.
#[derive(Debug, Error)]
pub enum AdbxError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation '{operation}' expects {expected} parameter(s), got {given}")]
    ParameterMismatch {
        operation: String,
        expected: usize,
        given: usize,
    },

    #[error("Invalid template for '{operation}': {reason}")]
    InvalidTemplate { operation: String, reason: String },

    #[error("Failed to list devices (status {status}): {stderr}")]
    EnumerationFailure { status: i32, stderr: String },

    #[error("Requested {requested} device(s) but only {available} online")]
    IndexOutOfRange { requested: usize, available: usize },

    #[error("No device at index {index} ({available} online)")]
    NoDeviceAtIndex { index: usize, available: usize },

    #[error("Invalid device selection: {0}")]
    InvalidSelection(String),

    #[error("Device selection aborted")]
    SelectionAborted,

    #[error("Command failed with status {status}: {stderr}")]
    ExecutionFailure { status: i32, stderr: String },

    #[error("Invalid timeout: {0} (use -1 to disable)")]
    InvalidTimeout(i64),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for AdbxError {
    fn from(s: String) -> Self {
        AdbxError::Other(s)
    }
}

impl From<&str> for AdbxError {
    fn from(s: &str) -> Self {
        AdbxError::Other(s.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdbxError>;
