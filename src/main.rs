use adbx::cli::Cli;
use adbx::commands::runner::CommandRunner;
use adbx::config::Config;
use adbx::device::{ConsoleSelector, DeviceSelector, SelectAll};
use adbx::dispatch::Dispatcher;
use adbx::error::Result;
use adbx::output::OutputFormatter;
use adbx::process::ProcessExecutor;
use clap::Parser;
use log::debug;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            OutputFormatter::new().error(&format!("Error: {}", e));
            1
        }
    };

    std::process::exit(exit_status(code));
}

async fn run(cli: Cli) -> Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(program) = &cli.adb {
        config = config.with_program(program);
    }
    debug!("Using bridge program {}", config.bridge.program);

    let executor = Arc::new(ProcessExecutor::new().with_kill_tree(config.bridge.kill_tree));
    let selector: Arc<dyn DeviceSelector> = if cli.all {
        Arc::new(SelectAll)
    } else {
        Arc::new(ConsoleSelector::new())
    };

    let dispatcher = Dispatcher::new(Arc::new(config), executor, selector)?;
    CommandRunner::new(dispatcher)
        .with_config_path(cli.config.clone())
        .run(cli)
        .await
}

/// Signal deaths are reported as `-signal`; shells use `128 + signal`
fn exit_status(code: i32) -> i32 {
    if code < 0 {
        128 - code
    } else {
        code
    }
}
