use crate::error::Result;
use colored::*;
use comfy_table::Table;
use serde::Serialize;

/// Unified output formatter for all commands
pub struct OutputFormatter {
    color_enabled: bool,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            color_enabled: true,
            quiet: false,
        }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Format items as a table
    pub fn table<T: TableFormat>(&self, items: &[T]) -> Result<()> {
        println!("{}", render_table(items));
        Ok(())
    }

    /// Format items as JSON
    pub fn json<T: Serialize>(&self, items: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        if self.color_enabled {
            println!("{}", colorize_json_keys(&json));
        } else {
            println!("{}", json);
        }
        Ok(())
    }

    /// Format items as plain text
    pub fn plain<T: PlainFormat>(&self, items: &[T]) -> Result<()> {
        for item in items {
            println!("{}", item.plain());
        }
        Ok(())
    }

    /// Print a warning message
    pub fn warning(&self, msg: &str) {
        if self.quiet {
            return;
        }
        if self.color_enabled {
            eprintln!("{}", msg.bright_yellow());
        } else {
            eprintln!("WARNING: {}", msg);
        }
    }

    /// Print an error message (never silenced)
    pub fn error(&self, msg: &str) {
        if self.color_enabled {
            eprintln!("{}", msg.bright_red());
        } else {
            eprintln!("ERROR: {}", msg);
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for types that can be formatted as a table
pub trait TableFormat {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Trait for types that can be formatted as plain text
pub trait PlainFormat {
    fn plain(&self) -> String;
}

pub(crate) fn render_table<T: TableFormat>(items: &[T]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_header(T::headers());
    for item in items {
        table.add_row(item.row());
    }
    table
}

/// Color the keys of pretty-printed JSON, one line at a time
fn colorize_json_keys(json: &str) -> String {
    json.lines()
        .map(|line| {
            let body = line.trim_start();
            let indent = &line[..line.len() - body.len()];
            match body.strip_prefix('"').and_then(|rest| rest.split_once("\": ")) {
                Some((key, value)) => format!("{}{}: {}", indent, key.cyan(), value),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub mod result;

pub use result::{DeviceRow, TemplateRow};
