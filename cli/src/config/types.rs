//! Sections of the configuration file.

use serde::{Deserialize, Serialize};
use smarttasks_flow::{Easing, FADE_DURATION_MS, SPLASH_DELAY_MS, ScreenId};

const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// `[splash]`: timing of the splash screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SplashSettings {
    /// Delay before the flow leaves the splash screen
    pub delay_ms: u64,
    /// Length of the logo fade-in
    pub fade_ms: u64,
    pub easing: Easing,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            delay_ms: SPLASH_DELAY_MS,
            fade_ms: FADE_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

/// `[ui]`: terminal host settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    /// Redraw cadence of the event loop
    pub frame_interval_ms: u64,
    /// Whether mouse clicks on buttons are captured
    pub mouse_capture: bool,
    /// Route the flow starts at
    pub start_screen: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            mouse_capture: true,
            start_screen: ScreenId::Splash.route().to_string(),
        }
    }
}
