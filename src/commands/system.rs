//! Device state queries and control.

use crate::commands::OperationArgs;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum RebootTarget {
    Bootloader,
    Recovery,
    Sideload,
}

impl RebootTarget {
    fn as_str(&self) -> &'static str {
        match self {
            RebootTarget::Bootloader => "bootloader",
            RebootTarget::Recovery => "recovery",
            RebootTarget::Sideload => "sideload",
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct RebootArgs {
    /// Reboot into a special mode instead of the system image
    #[arg(value_enum)]
    pub target: Option<RebootTarget>,
}

impl OperationArgs for RebootArgs {
    fn operation(&self) -> &str {
        "reboot"
    }

    fn into_params(self) -> Vec<String> {
        vec![self
            .target
            .map(|t| t.as_str().to_string())
            .unwrap_or_default()]
    }
}

/// Parameterless device operation (`sync`, `get-serialno`, `get-state`)
#[derive(Debug, Clone, Copy)]
pub struct Query(pub &'static str);

impl OperationArgs for Query {
    fn operation(&self) -> &str {
        self.0
    }

    fn into_params(self) -> Vec<String> {
        Vec::new()
    }
}
