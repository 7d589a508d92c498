pub mod back_stack;
pub mod content;
pub mod error;
pub mod graph;
pub mod navigator;
pub mod orchestrator;
pub mod render;
pub mod screen;
pub mod screens;
pub mod timer;
pub mod tween;
pub mod types;

pub use back_stack::BackStack;
pub use content::{ImageRef, PAGE_COUNT, ScreenConfig, SplashContent, screen_config, splash_content};
pub use error::FlowError;
pub use graph::{Edge, edges};
pub use navigator::Navigator;
pub use orchestrator::FlowOrchestrator;
pub use render::{ActionButton, OnboardingFrame, Renderer, SplashFrame};
pub use screen::ScreenId;
pub use screens::{
    ScreenEntry, ScreenScope, compose, entry_point, onboarding_screen1, onboarding_screen2,
    onboarding_screen3, splash_screen,
};
pub use timer::{SplashTimer, TimerPhase};
pub use tween::{Easing, FadeTween};
pub use types::{
    FADE_DURATION_MS, FlowConfig, FlowEvent, FlowUpdate, NavAction, SPLASH_DELAY_MS, Trigger,
};
