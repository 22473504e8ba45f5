//! File transfer between host and devices.

use crate::commands::OperationArgs;
use std::path::PathBuf;

#[derive(Debug, Clone, clap::Args)]
pub struct PushArgs {
    /// Local file or directory to push
    pub src: PathBuf,

    /// Remote destination path on each device
    pub dst: String,
}

impl OperationArgs for PushArgs {
    fn operation(&self) -> &str {
        "push"
    }

    fn into_params(self) -> Vec<String> {
        vec![self.src.to_string_lossy().into_owned(), self.dst]
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct PullArgs {
    /// Remote path on the device
    pub src: String,

    /// Local destination (defaults to the current directory)
    #[clap(default_value = ".")]
    pub dst: PathBuf,
}

impl OperationArgs for PullArgs {
    fn operation(&self) -> &str {
        "pull"
    }

    fn into_params(self) -> Vec<String> {
        vec![self.src, self.dst.to_string_lossy().into_owned()]
    }
}
