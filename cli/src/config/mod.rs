//! Configuration management for the SmartTasks CLI.
//!
//! Settings come from `~/.smarttasks/config.toml` (or `--config`), with
//! command-line flags layered on top.

mod app;
mod file;
mod types;


pub use app::{AppConfig, CliOverrides};
pub use file::ConfigFile;

pub const SMARTTASKS_CONFIG_PATH: &str = ".smarttasks/config.toml";
pub const SMARTTASKS_LOG_PATH: &str = ".smarttasks/logs/smarttasks.log";
