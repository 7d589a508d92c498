use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use commands::Commands;
use config::{AppConfig, CliOverrides};

#[derive(Parser, PartialEq, Debug)]
#[command(name = "smarttasks")]
#[command(about = "UTH SmartTasks splash and onboarding", long_about = None)]
struct Cli {
    /// Path to the config file (defaults to ~/.smarttasks/config.toml)
    #[arg(long = "config", env = "SMARTTASKS_CONFIG")]
    config: Option<PathBuf>,

    /// Route to start at: splash_screen, onboarding1, onboarding2 or onboarding3
    #[arg(long = "start")]
    start: Option<String>,

    /// How long the splash screen stays up before onboarding starts
    #[arg(long = "splash-delay-ms")]
    splash_delay_ms: Option<u64>,

    /// Duration of the splash logo fade-in
    #[arg(long = "fade-ms")]
    fade_ms: Option<u64>,

    /// Enable debug logging to a file
    #[arg(long = "debug", default_value_t = false)]
    debug: bool,

    /// Log file used with --debug (defaults to ~/.smarttasks/logs/smarttasks.log)
    #[arg(long = "log-file", requires = "debug")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            start: self.start.clone(),
            splash_delay_ms: self.splash_delay_ms,
            fade_ms: self.fade_ms,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_guard = if cli.debug {
        match logging::init(cli.log_file.as_deref()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Failed to initialize logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    let config = match AppConfig::load(cli.config.as_ref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ops! something went wrong: {}", e);
            drop(log_guard);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        Some(command) => command.run(&config),
        None => smarttasks_tui::run_tui(config.tui_options())
            .await
            .map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("Ops! something went wrong: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "smarttasks",
            "--start",
            "onboarding2",
            "--splash-delay-ms",
            "100",
        ])
        .unwrap();
        let overrides = cli.overrides();

        assert_eq!(overrides.start.as_deref(), Some("onboarding2"));
        assert_eq!(overrides.splash_delay_ms, Some(100));
        assert_eq!(overrides.fade_ms, None);
        assert!(cli.command.is_none());
    }

    #[test]
    fn log_file_requires_debug() {
        assert!(Cli::try_parse_from(["smarttasks", "--log-file", "/tmp/x.log"]).is_err());
        assert!(
            Cli::try_parse_from(["smarttasks", "--debug", "--log-file", "/tmp/x.log"]).is_ok()
        );
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["smarttasks", "init", "--force"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Init { force: true }));
    }
}
