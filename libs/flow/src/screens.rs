//! The four screen entry points and the route table that selects them.

use crate::content::{PAGE_COUNT, page_index, screen_config, splash_content};
use crate::orchestrator::FlowOrchestrator;
use crate::render::{ActionButton, OnboardingFrame, Renderer, SplashFrame};
use crate::screen::ScreenId;
use crate::types::NavAction;

const BACK_LABEL: &str = "Back";
const SKIP_LABEL: &str = "Skip";

/// Implicit navigation handle passed to every entry point.
pub struct ScreenScope<'a> {
    flow: &'a FlowOrchestrator,
    renderer: &'a mut dyn Renderer,
}

impl<'a> ScreenScope<'a> {
    pub fn new(flow: &'a FlowOrchestrator, renderer: &'a mut dyn Renderer) -> Self {
        Self { flow, renderer }
    }
}

pub type ScreenEntry = fn(&mut ScreenScope<'_>);

pub fn splash_screen(scope: &mut ScreenScope<'_>) {
    let frame = SplashFrame {
        content: splash_content(),
        alpha: scope.flow.fade_alpha().unwrap_or(0.0),
    };
    scope.renderer.render_splash(&frame);
}

pub fn onboarding_screen1(scope: &mut ScreenScope<'_>) {
    onboarding_screen(scope, ScreenId::Onboarding1);
}

pub fn onboarding_screen2(scope: &mut ScreenScope<'_>) {
    onboarding_screen(scope, ScreenId::Onboarding2);
}

pub fn onboarding_screen3(scope: &mut ScreenScope<'_>) {
    onboarding_screen(scope, ScreenId::Onboarding3);
}

fn onboarding_screen(scope: &mut ScreenScope<'_>, screen: ScreenId) {
    let config = match screen_config(screen) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("cannot render {screen}: {e}");
            return;
        }
    };
    let button = |label, action| ActionButton {
        label,
        action,
        origin: screen,
    };
    let frame = OnboardingFrame {
        screen,
        config,
        page_index: page_index(screen).unwrap_or_default(),
        page_count: PAGE_COUNT,
        back: config
            .show_back_button
            .then(|| button(BACK_LABEL, NavAction::Back)),
        primary: button(config.button_text, NavAction::Next),
        skip: config
            .show_skip_button
            .then(|| button(SKIP_LABEL, NavAction::Skip)),
    };
    scope.renderer.render_onboarding(&frame);
}

pub fn entry_point(screen: ScreenId) -> ScreenEntry {
    match screen {
        ScreenId::Splash => splash_screen,
        ScreenId::Onboarding1 => onboarding_screen1,
        ScreenId::Onboarding2 => onboarding_screen2,
        ScreenId::Onboarding3 => onboarding_screen3,
    }
}

/// Render whichever screen is current.
pub fn compose(flow: &FlowOrchestrator, renderer: &mut dyn Renderer) {
    let entry = entry_point(flow.current());
    let mut scope = ScreenScope::new(flow, renderer);
    entry(&mut scope);
}
