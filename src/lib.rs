pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod process;
pub mod progress;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod config_test;

#[cfg(test)]
mod error_test;
