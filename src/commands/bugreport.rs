use crate::commands::{report_results, SubCommand};
use crate::core::context::CommandContext;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::progress::ProgressFactory;
use async_trait::async_trait;
use chrono::Local;
use std::path::PathBuf;

pub struct BugreportCommand {
    dispatcher: Dispatcher,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BugreportArgs {
    /// Output file; the device id is added to the name for several targets
    #[clap(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
}

impl BugreportArgs {
    pub fn destination(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_report_path)
    }
}

/// `bugreport-YYYYmmdd-HHMMSS.txt` in the current directory
fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "bugreport-{}.txt",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

impl BugreportCommand {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl SubCommand for BugreportCommand {
    type Args = BugreportArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<i32> {
        let dest = args.destination();

        // resolve before the spinner starts so a selection prompt stays readable
        let targets = self.dispatcher.resolve(&ctx.selection).await?;

        let progress = ProgressFactory::new(ctx.should_show_progress() && !targets.is_empty())
            .command(&format!("Collecting bug report from {} device(s)", targets.len()));
        let results = self.dispatcher.bugreport_on(&dest, &targets).await;
        progress.finish();

        report_results(ctx, &results?)
    }
}
