use crate::commands::OperationArgs;

#[derive(Debug, Clone, clap::Args)]
pub struct ShellArgs {
    /// Command line to run in the device shell
    #[clap(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl OperationArgs for ShellArgs {
    fn operation(&self) -> &str {
        "shell"
    }

    /// The device shell receives the whole line as one argument
    fn into_params(self) -> Vec<String> {
        vec![self.command.join(" ")]
    }
}
