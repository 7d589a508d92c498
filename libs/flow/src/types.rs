use crate::screen::ScreenId;
use crate::tween::Easing;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const SPLASH_DELAY_MS: u64 = 2_500;
pub const FADE_DURATION_MS: u64 = 2_000;

/// User-initiated navigation action raised by an onboarding button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    Back,
    Next,
    Skip,
}

/// What causes an edge of the navigation graph to be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    TimerElapsed,
    Action(NavAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// Sent by the splash timer task once its delay has elapsed.
    SplashElapsed { generation: u64 },
    /// A button callback, bound to the screen that rendered it.
    Action { origin: ScreenId, action: NavAction },
    /// Hardware/system back, independent of the on-screen back button.
    SystemBack,
}

/// Result of feeding an event to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowUpdate {
    Unchanged,
    Navigated(ScreenId),
    /// System back on the root screen; the host should exit.
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    pub start: ScreenId,
    pub splash_delay: Duration,
    pub fade_duration: Duration,
    pub easing: Easing,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            start: ScreenId::Splash,
            splash_delay: Duration::from_millis(SPLASH_DELAY_MS),
            fade_duration: Duration::from_millis(FADE_DURATION_MS),
            easing: Easing::default(),
        }
    }
}
