//! Boundary with the rendering layer.
//!
//! Screens hand the renderer a frame description; the renderer reports button
//! presses back as `FlowEvent::Action` built from the frame's buttons.

use crate::content::{ScreenConfig, SplashContent};
use crate::screen::ScreenId;
use crate::types::{FlowEvent, NavAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub action: NavAction,
    /// Screen that rendered the button; callbacks are bound to it.
    pub origin: ScreenId,
}

impl ActionButton {
    pub fn event(&self) -> FlowEvent {
        FlowEvent::Action {
            origin: self.origin,
            action: self.action,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplashFrame<'a> {
    pub content: &'a SplashContent,
    /// Logo and title opacity in `[0, 1]`.
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingFrame<'a> {
    pub screen: ScreenId,
    pub config: &'a ScreenConfig,
    pub page_index: usize,
    pub page_count: usize,
    pub back: Option<ActionButton>,
    pub primary: ActionButton,
    pub skip: Option<ActionButton>,
}

impl OnboardingFrame<'_> {
    pub fn buttons(&self) -> impl Iterator<Item = &ActionButton> {
        self.back.iter().chain(Some(&self.primary)).chain(self.skip.iter())
    }
}

pub trait Renderer {
    fn render_splash(&mut self, frame: &SplashFrame<'_>);
    fn render_onboarding(&mut self, frame: &OnboardingFrame<'_>);
}
