use crate::error::{AdbxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::time::Duration;

/// Strongly typed device identifier, as reported by `adb devices`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which devices a single dispatch should run against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TargetSelection {
    /// Let the resolver decide (single device, prompt, or nothing)
    #[default]
    Unspecified,
    /// Indexes into the freshly enumerated device list, in the given order
    Explicit(Vec<usize>),
}

impl TargetSelection {
    pub fn from_indexes(indexes: Vec<usize>) -> Self {
        if indexes.is_empty() {
            TargetSelection::Unspecified
        } else {
            TargetSelection::Explicit(indexes)
        }
    }

    /// Explicit indexes, or `None` when the resolution policy applies
    pub fn indexes(&self) -> Option<&[usize]> {
        match self {
            TargetSelection::Explicit(indexes) if !indexes.is_empty() => Some(indexes),
            _ => None,
        }
    }
}

/// Wall-clock limit for the timed execution path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    After(Duration),
    Disabled,
}

impl Timeout {
    /// `-1` disables the timeout; other negative values are rejected.
    pub fn from_secs(secs: i64) -> Result<Self> {
        match secs {
            -1 => Ok(Timeout::Disabled),
            s if s < 0 => Err(AdbxError::InvalidTimeout(s)),
            s => Ok(Timeout::After(Duration::from_secs(s as u64))),
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Timeout::After(d) => Some(*d),
            Timeout::Disabled => None,
        }
    }
}

/// Normalized outcome of a non-timed invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    pub status: i32,
    pub output: String,
}

impl ExecResult {
    pub fn new(status: i32, output: impl Into<String>) -> Self {
        Self {
            status,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Strict view: a non-zero status becomes `ExecutionFailure`.
    pub fn into_result(self) -> Result<String> {
        if self.success() {
            Ok(self.output)
        } else {
            Err(AdbxError::ExecutionFailure {
                status: self.status,
                stderr: self.output,
            })
        }
    }
}

/// Outcome of the timed path. Both streams are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimedResult {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl TimedResult {
    pub fn success(&self) -> bool {
        self.status == 0 && !self.timed_out
    }

    /// Collapse into the non-timed shape, preferring stdout.
    pub fn into_exec_result(self) -> ExecResult {
        let output = if self.status == 0 && self.stdout.is_empty() {
            self.stderr
        } else if self.status == 0 {
            self.stdout
        } else if self.stderr.is_empty() {
            self.stdout
        } else {
            self.stderr
        };
        ExecResult::new(self.status, output)
    }
}

/// Outcome of streaming stdout into a caller-supplied file.
///
/// On success the file has been closed. On failure it is handed back still
/// open and cleanup is up to the caller.
#[derive(Debug)]
pub enum RedirectResult {
    Written { status: i32 },
    Failed {
        status: i32,
        stderr: String,
        file: File,
    },
}

impl RedirectResult {
    pub fn status(&self) -> i32 {
        match self {
            RedirectResult::Written { status } => *status,
            RedirectResult::Failed { status, .. } => *status,
        }
    }
}

/// One entry of a dispatch: the target and what running on it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResult {
    pub device: DeviceId,
    #[serde(flatten)]
    pub result: ExecResult,
}

impl TargetResult {
    pub fn new(device: DeviceId, result: ExecResult) -> Self {
        Self { device, result }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Plain,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}
