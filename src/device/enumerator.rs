use crate::core::types::DeviceId;
use crate::error::{AdbxError, Result};
use crate::process::Executor;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::sync::Arc;

lazy_static! {
    /// `<serial><whitespace>device`, nothing after the state
    static ref ONLINE_DEVICE: Regex = Regex::new(r"^(\S+)\s+device$").unwrap();
}

/// Lists the devices the bridge currently reports as online
#[derive(Clone)]
pub struct DeviceEnumerator {
    program: String,
    executor: Arc<dyn Executor>,
}

impl DeviceEnumerator {
    pub fn new(program: impl Into<String>, executor: Arc<dyn Executor>) -> Self {
        Self {
            program: program.into(),
            executor,
        }
    }

    /// Run `devices` and return online serials in the order the bridge
    /// printed them. A non-zero status is an error, never an empty list.
    pub async fn list_devices(&self) -> Result<Vec<DeviceId>> {
        let argv = vec![self.program.clone(), "devices".to_string()];
        let result = self.executor.run(&argv).await?;

        if !result.success() {
            return Err(AdbxError::EnumerationFailure {
                status: result.status,
                stderr: result.output,
            });
        }

        let devices = parse_device_list(&result.output);
        debug!("Found {} online device(s): {:?}", devices.len(), devices);
        Ok(devices)
    }
}

/// Extract online device serials from `adb devices` output.
///
/// Headers, daemon notices and devices in any other state (`offline`,
/// `unauthorized`, ...) are skipped.
pub fn parse_device_list(output: &str) -> Vec<DeviceId> {
    output
        .lines()
        .filter_map(|line| {
            ONLINE_DEVICE
                .captures(line.trim_end_matches('\r'))
                .map(|caps| DeviceId::new(&caps[1]))
        })
        .collect()
}
