use crate::commands::{formatter, SubCommand};
use crate::core::context::CommandContext;
use crate::core::types::OutputFormat;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::output::TemplateRow;
use async_trait::async_trait;

/// Lists every operation `adbx run` accepts
pub struct TemplatesCommand {
    dispatcher: Dispatcher,
}

impl TemplatesCommand {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl SubCommand for TemplatesCommand {
    type Args = ();

    async fn run(&self, ctx: &CommandContext, _args: Self::Args) -> Result<i32> {
        let rows = TemplateRow::from_catalog(self.dispatcher.catalog());
        let formatter = formatter(ctx);

        match ctx.output_format {
            OutputFormat::Table => formatter.table(&rows)?,
            OutputFormat::Json => formatter.json(&rows)?,
            OutputFormat::Plain => formatter.plain(&rows)?,
        }
        Ok(0)
    }
}
