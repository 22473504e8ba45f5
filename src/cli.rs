use crate::commands::app::{InstallArgs, UninstallArgs};
use crate::commands::bugreport::BugreportArgs;
use crate::commands::config::ConfigArgs;
use crate::commands::devices::DevicesArgs;
use crate::commands::input::{KeyeventArgs, SwipeArgs, TapArgs, TextArgs};
use crate::commands::run::RunArgs;
use crate::commands::server::WaitArgs;
use crate::commands::shell::ShellArgs;
use crate::commands::system::RebootArgs;
use crate::commands::transfer::{PullArgs, PushArgs};
use crate::core::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputType {
    Table,
    Json,
    Plain,
}

impl From<OutputType> for OutputFormat {
    fn from(output: OutputType) -> Self {
        match output {
            OutputType::Table => OutputFormat::Table,
            OutputType::Json => OutputFormat::Json,
            OutputType::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputType::Table)]
    pub output: OutputType,

    /// Device index as listed by `adbx devices` (repeatable or comma separated)
    #[arg(long = "device", short = 'd', global = true, value_delimiter = ',')]
    pub devices: Vec<usize>,

    /// Run on every online device without prompting
    #[arg(long, global = true, conflicts_with = "devices")]
    pub all: bool,

    /// Configuration file (default: ~/.adbxconfig)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bridge executable to run instead of the configured one
    #[arg(long, global = true)]
    pub adb: Option<String>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List online devices with their indexes
    Devices(DevicesArgs),

    /// Run a shell command on each device
    Shell(ShellArgs),

    /// Copy a local file to each device
    Push(PushArgs),

    /// Copy a file from each device
    Pull(PullArgs),

    /// Install an APK on each device
    Install(InstallArgs),

    /// Remove a package from each device
    Uninstall(UninstallArgs),

    /// Tap the screen at x y
    Tap(TapArgs),

    /// Swipe from x1 y1 to x2 y2
    Swipe(SwipeArgs),

    /// Type text into the focused field
    Text(TextArgs),

    /// Send a key event
    Keyevent(KeyeventArgs),

    /// Reboot each device
    Reboot(RebootArgs),

    /// Print each device's serial number
    GetSerialno,

    /// Print each device's state
    GetState,

    /// Flush device file systems
    Sync,

    /// Save a bug report from each device
    Bugreport(BugreportArgs),

    /// Run any catalog operation by name
    Run(RunArgs),

    /// List known operations and their templates
    Templates,

    /// Display configuration
    Config(ConfigArgs),

    /// Show the bridge version
    Version,

    /// Start the bridge server
    StartServer,

    /// Kill the bridge server
    KillServer,

    /// Block until a device is online
    WaitForDevice(WaitArgs),
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Devices(DevicesArgs::default()))
    }

    /// Quiet when logging is switched off with `-q`
    pub fn quiet(&self) -> bool {
        self.verbose.log_level().is_none()
    }
}
