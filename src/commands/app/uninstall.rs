use super::option_list;
use crate::commands::OperationArgs;

#[derive(Debug, Clone, clap::Args)]
pub struct UninstallArgs {
    /// Package name
    pub package: String,

    /// Keep app data and cache
    #[clap(short, long)]
    pub keep_data: bool,
}

impl OperationArgs for UninstallArgs {
    fn operation(&self) -> &str {
        "uninstall"
    }

    fn into_params(self) -> Vec<String> {
        vec![option_list(&[(self.keep_data, "-k")]), self.package]
    }
}
