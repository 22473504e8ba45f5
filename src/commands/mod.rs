use crate::core::context::CommandContext;
use crate::core::types::{ExecResult, OutputFormat, TargetResult};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::output::OutputFormatter;
use async_trait::async_trait;
use std::io::{self, IsTerminal};
use std::marker::PhantomData;

/// Base trait for all subcommands. The returned value is the process exit code.
#[async_trait]
pub trait SubCommand {
    type Args;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<i32>;
}

/// Arguments that map onto exactly one catalog operation
pub trait OperationArgs {
    fn operation(&self) -> &str;
    fn into_params(self) -> Vec<String>;
}

/// Command for args that carry everything needed to pick the operation
pub struct OperationCommand<A> {
    dispatcher: Dispatcher,
    _args: PhantomData<fn(A)>,
}

impl<A> OperationCommand<A> {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            _args: PhantomData,
        }
    }
}

#[async_trait]
impl<A> SubCommand for OperationCommand<A>
where
    A: OperationArgs + Send + 'static,
{
    type Args = A;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<i32> {
        run_operation(&self.dispatcher, ctx, args).await
    }
}

/// Render, dispatch and report one catalog operation
pub async fn run_operation<A: OperationArgs>(
    dispatcher: &Dispatcher,
    ctx: &CommandContext,
    args: A,
) -> Result<i32> {
    let operation = args.operation().to_string();
    let params = args.into_params();
    let results = dispatcher.dispatch(&operation, &params, &ctx.selection).await?;
    report_results(ctx, &results)
}

/// First non-zero status, or 0 when every target succeeded or nothing ran
pub fn exit_code(results: &[TargetResult]) -> i32 {
    results
        .iter()
        .map(|r| r.result.status)
        .find(|status| *status != 0)
        .unwrap_or(0)
}

/// Formatter honoring quiet mode; no colors when stdout is piped
pub fn formatter(ctx: &CommandContext) -> OutputFormatter {
    OutputFormatter::new()
        .with_color(io::stdout().is_terminal())
        .with_quiet(!ctx.should_show_progress())
}

/// Print per-target results in the requested format
pub fn report_results(ctx: &CommandContext, results: &[TargetResult]) -> Result<i32> {
    let formatter = formatter(ctx);

    if results.is_empty() {
        formatter.warning("No devices attached");
        if ctx.output_format == OutputFormat::Json {
            formatter.json(&results)?;
        }
        return Ok(0);
    }

    match ctx.output_format {
        OutputFormat::Table => formatter.table(results)?,
        OutputFormat::Json => formatter.json(&results)?,
        OutputFormat::Plain => formatter.plain(results)?,
    }

    Ok(exit_code(results))
}

/// Print the result of a host command
pub fn report_host(ctx: &CommandContext, result: &ExecResult) -> Result<i32> {
    match ctx.output_format {
        OutputFormat::Json => formatter(ctx).json(result)?,
        OutputFormat::Table | OutputFormat::Plain => {
            let output = result.output.trim_end();
            if !output.is_empty() {
                println!("{}", output);
            }
        }
    }
    Ok(result.status)
}

pub mod app;
pub mod bugreport;
pub mod config;
pub mod devices;
pub mod input;
pub mod run;
pub mod runner;
pub mod server;
pub mod shell;
pub mod system;
pub mod templates;
pub mod transfer;
