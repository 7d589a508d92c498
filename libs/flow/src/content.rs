//! Static per-screen content for the onboarding carousel.
//!
//! Every record lives for the whole process. The targets stored here are the
//! button half of the navigation graph; `graph::edges` must agree with them.

use crate::error::FlowError;
use crate::screen::ScreenId;
use crate::types::NavAction;

/// Illustration shown on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRef {
    UthLogo,
    TimeManagement,
    WorkEffectiveness,
    ReminderNotification,
}

impl ImageRef {
    pub fn description(self) -> &'static str {
        match self {
            ImageRef::UthLogo => "UTH Logo",
            _ => "Onboarding Illustration",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    pub image: ImageRef,
    pub title: &'static str,
    pub description: &'static str,
    pub show_back_button: bool,
    pub button_text: &'static str,
    pub show_skip_button: bool,
    pub next_target: ScreenId,
    pub back_target: Option<ScreenId>,
    pub skip_target: ScreenId,
    pub large_centered_button: bool,
}

impl ScreenConfig {
    /// Resolve a button action to its target. Hidden buttons resolve to `None`.
    pub fn target_for(&self, action: NavAction) -> Option<ScreenId> {
        match action {
            NavAction::Next => Some(self.next_target),
            NavAction::Back if self.show_back_button => self.back_target,
            NavAction::Skip if self.show_skip_button => Some(self.skip_target),
            NavAction::Back | NavAction::Skip => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashContent {
    pub logo: ImageRef,
    pub title: &'static str,
}

pub const PAGE_COUNT: usize = 3;

static SPLASH: SplashContent = SplashContent {
    logo: ImageRef::UthLogo,
    title: "UTH SmartTasks",
};

static ONBOARDING1: ScreenConfig = ScreenConfig {
    image: ImageRef::TimeManagement,
    title: "Easy Time Management",
    description: "With management based on priority and daily tasks, it will give you convenience in managing and determining the tasks that must be done first",
    show_back_button: false,
    button_text: "Next",
    show_skip_button: true,
    next_target: ScreenId::Onboarding2,
    back_target: None,
    skip_target: ScreenId::Onboarding3,
    large_centered_button: true,
};

static ONBOARDING2: ScreenConfig = ScreenConfig {
    image: ImageRef::WorkEffectiveness,
    title: "Increase Work Effectiveness",
    description: "Time management and the determination of more important tasks will give your job statistics better and always improve",
    show_back_button: true,
    button_text: "Next",
    show_skip_button: true,
    next_target: ScreenId::Onboarding3,
    back_target: Some(ScreenId::Onboarding1),
    skip_target: ScreenId::Onboarding3,
    large_centered_button: true,
};

// "Get Started" loops back to the first page rather than leaving the flow.
static ONBOARDING3: ScreenConfig = ScreenConfig {
    image: ImageRef::ReminderNotification,
    title: "Reminder Notification",
    description: "The advantage of this application is that it also provides reminders so you don\u{2019}t forget to keep doing your assignments well and according to the time you have set",
    show_back_button: true,
    button_text: "Get Started",
    show_skip_button: true,
    next_target: ScreenId::Onboarding1,
    back_target: Some(ScreenId::Onboarding2),
    skip_target: ScreenId::Onboarding1,
    large_centered_button: true,
};

pub fn screen_config(id: ScreenId) -> Result<&'static ScreenConfig, FlowError> {
    match id {
        ScreenId::Splash => Err(FlowError::NoContent(id)),
        ScreenId::Onboarding1 => Ok(&ONBOARDING1),
        ScreenId::Onboarding2 => Ok(&ONBOARDING2),
        ScreenId::Onboarding3 => Ok(&ONBOARDING3),
    }
}

pub fn splash_content() -> &'static SplashContent {
    &SPLASH
}

/// Zero-based carousel position, `None` for the splash screen.
pub fn page_index(id: ScreenId) -> Option<usize> {
    ScreenId::ONBOARDING.iter().position(|page| *page == id)
}
