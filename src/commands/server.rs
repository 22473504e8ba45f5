//! Host commands: they talk to the bridge itself, not to a device.

use crate::commands::{formatter, report_host, SubCommand};
use crate::core::context::CommandContext;
use crate::core::types::{OutputFormat, Timeout};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::progress::ProgressFactory;
use async_trait::async_trait;
use log::debug;

pub struct ServerCommand {
    dispatcher: Dispatcher,
}

#[derive(Debug, Clone)]
pub enum ServerOperation {
    Version,
    Start,
    Kill,
    WaitForDevice(WaitArgs),
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct WaitArgs {
    /// Seconds to wait before giving up; -1 waits forever
    #[clap(short, long, allow_negative_numbers = true)]
    pub timeout: Option<i64>,
}

impl ServerCommand {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    async fn wait_for_device(&self, ctx: &CommandContext, args: WaitArgs) -> Result<i32> {
        let secs = args
            .timeout
            .unwrap_or(self.dispatcher.config().bridge.wait_timeout);
        let timeout = Timeout::from_secs(secs)?;
        debug!("Waiting for device with {:?}", timeout);

        let progress = ProgressFactory::new(ctx.should_show_progress())
            .command("Waiting for a device");
        let result = self.dispatcher.wait_for_device(timeout).await;
        progress.finish();
        let result = result?;

        if result.timed_out {
            let formatter = formatter(ctx);
            formatter.error(&format!("Timed out after {} seconds waiting for a device", secs));
            if ctx.output_format == OutputFormat::Json {
                formatter.json(&result)?;
            }
            return Ok(result.status);
        }

        report_host(ctx, &result.into_exec_result())
    }
}

#[async_trait]
impl SubCommand for ServerCommand {
    type Args = ServerOperation;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<i32> {
        let result = match args {
            ServerOperation::Version => self.dispatcher.version().await?,
            ServerOperation::Start => self.dispatcher.start_server().await?,
            ServerOperation::Kill => self.dispatcher.kill_server().await?,
            ServerOperation::WaitForDevice(wait) => return self.wait_for_device(ctx, wait).await,
        };
        report_host(ctx, &result)
    }
}
