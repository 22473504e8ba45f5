pub mod context;
pub mod types;

pub use context::{CommandContext, CommandContextBuilder};
pub use types::{
    DeviceId, ExecResult, OutputFormat, RedirectResult, TargetResult, TargetSelection,
    TimedResult, Timeout,
};
