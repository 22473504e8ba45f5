use crate::core::types::DeviceId;
use crate::error::{AdbxError, Result};
use colored::*;
use log::debug;
use std::io::{self, BufRead, Write};

/// Interactive surface used when several devices are online and the caller
/// did not say which ones to use.
///
/// `read_selection` returns the raw answer: empty means "all devices",
/// otherwise whitespace separated indexes into the presented list.
pub trait DeviceSelector: Send + Sync {
    fn present_choices(&self, devices: &[DeviceId]) -> Result<()>;
    fn read_selection(&self) -> Result<String>;
}

/// Menu on stderr, answer from one line of stdin. Stdout carries results only.
#[derive(Debug, Default)]
pub struct ConsoleSelector;

impl ConsoleSelector {
    pub fn new() -> Self {
        Self
    }
}

/// Write the numbered device menu and the prompt
pub fn write_menu<W: Write>(out: &mut W, devices: &[DeviceId]) -> Result<()> {
    writeln!(out, "{}", "Multiple devices attached:".bold())?;
    for (index, device) in devices.iter().enumerate() {
        writeln!(out, "  [{}] {}", index.to_string().cyan(), device)?;
    }
    write!(out, "Select devices (space separated indexes, empty for all): ")?;
    out.flush()?;
    Ok(())
}

impl DeviceSelector for ConsoleSelector {
    fn present_choices(&self, devices: &[DeviceId]) -> Result<()> {
        write_menu(&mut io::stderr().lock(), devices)
    }

    fn read_selection(&self) -> Result<String> {
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(AdbxError::SelectionAborted);
        }
        Ok(input.trim().to_string())
    }
}

/// Headless selector that always picks every device
#[derive(Debug, Default)]
pub struct SelectAll;

impl DeviceSelector for SelectAll {
    fn present_choices(&self, devices: &[DeviceId]) -> Result<()> {
        debug!("Selecting all {} devices", devices.len());
        Ok(())
    }

    fn read_selection(&self) -> Result<String> {
        Ok(String::new())
    }
}

/// Turn a selection answer into devices, in the order typed.
pub fn parse_selection(answer: &str, devices: &[DeviceId]) -> Result<Vec<DeviceId>> {
    if answer.trim().is_empty() {
        return Ok(devices.to_vec());
    }

    answer
        .split_whitespace()
        .map(|token| {
            let index: usize = token
                .parse()
                .map_err(|_| AdbxError::InvalidSelection(token.to_string()))?;
            devices
                .get(index)
                .cloned()
                .ok_or(AdbxError::NoDeviceAtIndex {
                    index,
                    available: devices.len(),
                })
        })
        .collect()
}
