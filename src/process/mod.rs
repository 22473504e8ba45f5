//! Child-process execution of fully assembled bridge command lines.

mod decode;
mod executor;

pub use decode::decode_output;
pub use executor::ProcessExecutor;

#[cfg(test)]
pub(crate) use executor::prepare;

use crate::core::types::{ExecResult, RedirectResult, TimedResult, Timeout};
use crate::error::Result;
use async_trait::async_trait;
use std::fs::File;

/// Runs an argv (program first) and normalizes what it produced.
///
/// `Err` is reserved for failing to start the process at all. Anything the
/// process itself reports, including a non-zero exit, comes back as a result.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run to completion. Output is stdout on success (stderr when stdout is
    /// empty) and stderr on failure.
    async fn run(&self, argv: &[String]) -> Result<ExecResult>;

    /// Run with a wall-clock limit, killing the process once it expires.
    async fn run_with_timeout(&self, argv: &[String], timeout: Timeout) -> Result<TimedResult>;

    /// Stream stdout into `file`. The file is closed on success and returned
    /// to the caller, still open, on failure.
    async fn run_to_file(&self, argv: &[String], file: File) -> Result<RedirectResult>;
}

#[cfg(test)]
mod executor_test;
