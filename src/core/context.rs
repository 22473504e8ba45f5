use crate::core::types::{OutputFormat, TargetSelection};

/// Shared context for all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub selection: TargetSelection,
    pub output_format: OutputFormat,
    pub quiet: bool,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            selection: TargetSelection::Unspecified,
            output_format: OutputFormat::Table,
            quiet: false,
        }
    }

    /// Check if progress/status messages should be shown
    /// Returns false if quiet mode is enabled or output format is JSON
    pub fn should_show_progress(&self) -> bool {
        !self.quiet && self.output_format != OutputFormat::Json
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating command contexts
pub struct CommandContextBuilder {
    ctx: CommandContext,
}

impl CommandContextBuilder {
    pub fn new() -> Self {
        Self {
            ctx: CommandContext::new(),
        }
    }

    pub fn device_indexes(mut self, indexes: Vec<usize>) -> Self {
        self.ctx.selection = TargetSelection::from_indexes(indexes);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.ctx.output_format = format;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.ctx.quiet = quiet;
        self
    }

    pub fn build(self) -> CommandContext {
        self.ctx
    }
}

impl Default for CommandContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
