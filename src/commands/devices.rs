use crate::commands::{formatter, report_host, SubCommand};
use crate::core::context::CommandContext;
use crate::core::types::OutputFormat;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::output::DeviceRow;
use async_trait::async_trait;

pub struct DevicesCommand {
    dispatcher: Dispatcher,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct DevicesArgs {
    /// Include device qualifiers (implies --raw)
    #[clap(short, long)]
    pub long: bool,

    /// Print the bridge's own listing, offline devices included
    #[clap(long)]
    pub raw: bool,
}

impl DevicesCommand {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl SubCommand for DevicesCommand {
    type Args = DevicesArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<i32> {
        if args.long || args.raw {
            let opts = if args.long {
                vec!["-l".to_string()]
            } else {
                Vec::new()
            };
            let result = self.dispatcher.devices_raw(opts).await?;
            return report_host(ctx, &result);
        }

        let rows = DeviceRow::from_devices(self.dispatcher.list_devices().await?);
        let formatter = formatter(ctx);

        if rows.is_empty() {
            formatter.warning("No devices attached");
            if ctx.output_format != OutputFormat::Json {
                return Ok(0);
            }
        }

        match ctx.output_format {
            OutputFormat::Table => formatter.table(&rows)?,
            OutputFormat::Json => formatter.json(&rows)?,
            OutputFormat::Plain => formatter.plain(&rows)?,
        }
        Ok(0)
    }
}
