use crate::commands::{formatter, SubCommand};
use crate::config::Config;
use crate::core::context::CommandContext;
use crate::core::types::OutputFormat;
use crate::dispatch::Dispatcher;
use crate::error::{AdbxError, Result};
use async_trait::async_trait;
use colored::*;
use serde_json::json;
use std::path::PathBuf;

/// Shows where settings come from and what is in effect
pub struct ConfigCommand {
    dispatcher: Dispatcher,
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Show configuration file path only
    #[clap(short = 'p', long = "path")]
    pub path_only: bool,
}

impl ConfigCommand {
    /// `path` is the `--config` override, if any
    pub fn new(dispatcher: Dispatcher, path: Option<PathBuf>) -> Self {
        Self { dispatcher, path }
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Config::get_config_path()
                .ok_or_else(|| AdbxError::Config("Could not determine home directory".to_string())),
        }
    }
}

#[async_trait]
impl SubCommand for ConfigCommand {
    type Args = ConfigArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<i32> {
        let config_path = self.config_path()?;

        if args.path_only {
            println!("{}", config_path.display());
            return Ok(0);
        }

        let bridge = &self.dispatcher.config().bridge;
        let mut overrides: Vec<_> = self.dispatcher.config().templates.keys().cloned().collect();
        overrides.sort();

        if ctx.output_format == OutputFormat::Json {
            let effective = json!({
                "path": config_path,
                "exists": config_path.exists(),
                "program": bridge.program,
                "wait_timeout": bridge.wait_timeout,
                "kill_tree": bridge.kill_tree,
                "parallel": bridge.parallel,
                "templates": overrides,
            });
            formatter(ctx).json(&effective)?;
            return Ok(0);
        }

        if config_path.exists() {
            println!("Reading {}\n", config_path.display().to_string().bright_cyan());
        } else {
            println!("No config file found at: {}", config_path.display().to_string().bright_cyan());
            println!("Default configuration will be used.\n");
        }

        println!("{}", "[bridge]".bold());
        println!("program      = {}", bridge.program);
        println!("wait_timeout = {}", bridge.wait_timeout);
        println!("kill_tree    = {}", bridge.kill_tree);
        println!("parallel     = {}", bridge.parallel);

        if !overrides.is_empty() {
            println!("\n{}", "[templates]".bold());
            for name in overrides {
                if let Ok(template) = self.dispatcher.catalog().get(&name) {
                    println!("{} = {:?}", name, template.source());
                }
            }
        }

        Ok(0)
    }
}
