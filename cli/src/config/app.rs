//! Main application configuration.

use config::ConfigError;
use smarttasks_flow::{Easing, FlowConfig, ScreenId};
use smarttasks_tui::TuiOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::SMARTTASKS_CONFIG_PATH;
use super::file::ConfigFile;
use super::types::{SplashSettings, UiSettings};

/// Values given on the command line; each one wins over the file.
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    pub start: Option<String>,
    pub splash_delay_ms: Option<u64>,
    pub fade_ms: Option<u64>,
}

/// The main application configuration, built from the config file and flags.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Path the config was read from
    pub config_path: PathBuf,
    pub start: ScreenId,
    pub splash_delay: Duration,
    pub fade_duration: Duration,
    pub easing: Easing,
    pub frame_interval: Duration,
    pub mouse_capture: bool,
}

impl AppConfig {
    /// Load configuration from file and apply command-line overrides.
    pub fn load<P: AsRef<Path>>(
        custom_config_path: Option<P>,
        overrides: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(custom_config_path);
        let mut config_file = Self::load_config_file(&config_path)?;
        overrides.apply(&mut config_file);
        Self::build(config_path, config_file)
    }

    pub(crate) fn build(config_path: PathBuf, file: ConfigFile) -> Result<Self, ConfigError> {
        let ConfigFile { splash, ui } = file;

        if ui.frame_interval_ms == 0 {
            return Err(ConfigError::Message(
                "ui.frame_interval_ms must be greater than zero".into(),
            ));
        }
        let start = ui
            .start_screen
            .parse::<ScreenId>()
            .map_err(|e| ConfigError::Message(format!("Invalid start screen: {}", e)))?;

        Ok(AppConfig {
            config_path,
            start,
            splash_delay: Duration::from_millis(splash.delay_ms),
            fade_duration: Duration::from_millis(splash.fade_ms),
            easing: splash.easing,
            frame_interval: Duration::from_millis(ui.frame_interval_ms),
            mouse_capture: ui.mouse_capture,
        })
    }

    /// Get the config file path, using custom path or default.
    pub fn get_config_path<P: AsRef<Path>>(path: Option<P>) -> PathBuf {
        match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::home_dir()
                .unwrap_or_default()
                .join(SMARTTASKS_CONFIG_PATH),
        }
    }

    /// Load config file from disk. A missing file yields the defaults.
    pub(crate) fn load_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> Result<ConfigFile, ConfigError> {
        match std::fs::read_to_string(config_path.as_ref()) {
            Ok(content) => ConfigFile::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ConfigFile::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Failed to read config file: {}",
                e
            ))),
        }
    }

    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            start: self.start,
            splash_delay: self.splash_delay,
            fade_duration: self.fade_duration,
            easing: self.easing,
        }
    }

    pub fn tui_options(&self) -> TuiOptions {
        TuiOptions {
            flow: self.flow_config(),
            frame_interval: self.frame_interval,
            mouse_capture: self.mouse_capture,
        }
    }
}

impl CliOverrides {
    fn apply(&self, file: &mut ConfigFile) {
        if let Some(start) = &self.start {
            file.ui.start_screen = start.clone();
        }
        if let Some(delay_ms) = self.splash_delay_ms {
            file.splash.delay_ms = delay_ms;
        }
        if let Some(fade_ms) = self.fade_ms {
            file.splash.fade_ms = fade_ms;
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl From<&AppConfig> for ConfigFile {
    fn from(config: &AppConfig) -> Self {
        ConfigFile {
            splash: SplashSettings {
                delay_ms: millis(config.splash_delay),
                fade_ms: millis(config.fade_duration),
                easing: config.easing,
            },
            ui: UiSettings {
                frame_interval_ms: millis(config.frame_interval),
                mouse_capture: config.mouse_capture,
                start_screen: config.start.route().to_string(),
            },
        }
    }
}
