use crate::commands::OperationArgs;

#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Operation name (see `adbx templates`)
    pub operation: String,

    /// Positional parameters, one per template slot
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,
}

impl OperationArgs for RunArgs {
    fn operation(&self) -> &str {
        &self.operation
    }

    fn into_params(self) -> Vec<String> {
        self.params
    }
}
