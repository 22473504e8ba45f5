use crate::cli::{Cli, Commands};
use crate::commands::bugreport::BugreportCommand;
use crate::commands::config::ConfigCommand;
use crate::commands::devices::DevicesCommand;
use crate::commands::server::{ServerCommand, ServerOperation};
use crate::commands::system::Query;
use crate::commands::templates::TemplatesCommand;
use crate::commands::{OperationArgs, OperationCommand, SubCommand};
use crate::core::context::{CommandContext, CommandContextBuilder};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use log::debug;
use std::path::PathBuf;

/// Command runner that handles routing and execution
pub struct CommandRunner {
    dispatcher: Dispatcher,
    config_path: Option<PathBuf>,
}

impl CommandRunner {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            config_path: None,
        }
    }

    /// Config file given with `--config`, shown by `adbx config`
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Build the context from global options
    pub fn context(cli: &Cli) -> CommandContext {
        CommandContextBuilder::new()
            .device_indexes(cli.devices.clone())
            .output_format(cli.output.into())
            .quiet(cli.quiet())
            .build()
    }

    /// Run a command based on CLI arguments; returns the exit code
    pub async fn run(&self, cli: Cli) -> Result<i32> {
        let command = cli.command();
        debug!("CommandRunner::run() called with command: {:?}", command);
        let ctx = Self::context(&cli);

        match command {
            Commands::Devices(args) => DevicesCommand::new(self.dispatcher.clone()).run(&ctx, args).await,
            Commands::Shell(args) => self.operation(&ctx, args).await,
            Commands::Push(args) => self.operation(&ctx, args).await,
            Commands::Pull(args) => self.operation(&ctx, args).await,
            Commands::Install(args) => self.operation(&ctx, args).await,
            Commands::Uninstall(args) => self.operation(&ctx, args).await,
            Commands::Tap(args) => self.operation(&ctx, args).await,
            Commands::Swipe(args) => self.operation(&ctx, args).await,
            Commands::Text(args) => self.operation(&ctx, args).await,
            Commands::Keyevent(args) => self.operation(&ctx, args).await,
            Commands::Reboot(args) => self.operation(&ctx, args).await,
            Commands::GetSerialno => self.operation(&ctx, Query("get-serialno")).await,
            Commands::GetState => self.operation(&ctx, Query("get-state")).await,
            Commands::Sync => self.operation(&ctx, Query("sync")).await,
            Commands::Run(args) => self.operation(&ctx, args).await,
            Commands::Bugreport(args) => BugreportCommand::new(self.dispatcher.clone()).run(&ctx, args).await,
            Commands::Templates => TemplatesCommand::new(self.dispatcher.clone()).run(&ctx, ()).await,
            Commands::Config(args) => {
                ConfigCommand::new(self.dispatcher.clone(), self.config_path.clone())
                    .run(&ctx, args)
                    .await
            }
            Commands::Version => self.server(&ctx, ServerOperation::Version).await,
            Commands::StartServer => self.server(&ctx, ServerOperation::Start).await,
            Commands::KillServer => self.server(&ctx, ServerOperation::Kill).await,
            Commands::WaitForDevice(args) => self.server(&ctx, ServerOperation::WaitForDevice(args)).await,
        }
    }

    async fn operation<A>(&self, ctx: &CommandContext, args: A) -> Result<i32>
    where
        A: OperationArgs + Send + 'static,
    {
        OperationCommand::new(self.dispatcher.clone()).run(ctx, args).await
    }

    async fn server(&self, ctx: &CommandContext, operation: ServerOperation) -> Result<i32> {
        ServerCommand::new(self.dispatcher.clone()).run(ctx, operation).await
    }
}
