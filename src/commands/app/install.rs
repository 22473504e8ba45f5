use super::option_list;
use crate::commands::OperationArgs;
use std::path::PathBuf;

#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// APK to install
    pub apk: PathBuf,

    /// Replace an existing application
    #[clap(short, long)]
    pub replace: bool,

    /// Grant all runtime permissions
    #[clap(short, long)]
    pub grant: bool,

    /// Allow test packages
    #[clap(short, long)]
    pub test: bool,

    /// Allow version code downgrade
    #[clap(long)]
    pub downgrade: bool,
}

impl OperationArgs for InstallArgs {
    fn operation(&self) -> &str {
        "install"
    }

    fn into_params(self) -> Vec<String> {
        let options = option_list(&[
            (self.replace, "-r"),
            (self.grant, "-g"),
            (self.test, "-t"),
            (self.downgrade, "-d"),
        ]);
        vec![options, self.apk.to_string_lossy().into_owned()]
    }
}
