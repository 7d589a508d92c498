//! Ratatui implementation of the flow's rendering boundary.

use crate::app::ButtonHit;
use crate::services::onboarding::render_onboarding;
use crate::services::splash::render_splash;
use ratatui::{Frame, layout::Rect};
use smarttasks_flow::{OnboardingFrame, Renderer, ScreenId, SplashFrame};

pub struct TuiRenderer<'a, 'f> {
    frame: &'a mut Frame<'f>,
    area: Rect,
    hits: Vec<ButtonHit>,
    rendered: Option<ScreenId>,
}

impl<'a, 'f> TuiRenderer<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>, area: Rect) -> Self {
        Self {
            frame,
            area,
            hits: Vec::new(),
            rendered: None,
        }
    }

    /// Screen that was drawn and the buttons it exposed.
    pub fn finish(self) -> (Option<ScreenId>, Vec<ButtonHit>) {
        (self.rendered, self.hits)
    }
}

impl Renderer for TuiRenderer<'_, '_> {
    fn render_splash(&mut self, frame: &SplashFrame<'_>) {
        render_splash(self.frame, self.area, frame);
        self.rendered = Some(ScreenId::Splash);
    }

    fn render_onboarding(&mut self, frame: &OnboardingFrame<'_>) {
        let hits = render_onboarding(self.frame, self.area, frame);
        self.hits.extend(hits);
        self.rendered = Some(frame.screen);
    }
}
