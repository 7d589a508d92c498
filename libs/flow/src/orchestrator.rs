use crate::error::FlowError;
use crate::graph;
use crate::navigator::Navigator;
use crate::screen::ScreenId;
use crate::timer::{SplashTimer, TimerPhase};
use crate::tween::FadeTween;
use crate::types::{FlowConfig, FlowEvent, FlowUpdate, NavAction, Trigger};
use std::time::Duration;
use tokio::sync::mpsc::Sender;

/// State that only exists while the splash screen is active.
#[derive(Debug)]
struct SplashInstance {
    timer: SplashTimer,
    fade: FadeTween,
}

/// Owns the navigation state and routes timer and button events into it.
///
/// Every mutation happens on the caller's thread; the splash timer task only
/// posts `FlowEvent`s back through `events`.
#[derive(Debug)]
pub struct FlowOrchestrator {
    config: FlowConfig,
    navigator: Navigator,
    events: Sender<FlowEvent>,
    splash: Option<SplashInstance>,
    started: bool,
}

impl FlowOrchestrator {
    pub fn new(config: FlowConfig, events: Sender<FlowEvent>) -> Self {
        Self {
            navigator: Navigator::new(config.start),
            config,
            events,
            splash: None,
            started: false,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.navigator.current()
    }

    pub fn history(&self) -> &[ScreenId] {
        self.navigator.history()
    }

    pub fn can_reach_by_back(&self, screen: ScreenId) -> bool {
        self.navigator.can_reach_by_back(screen)
    }

    /// Splash fade value, `None` when the splash screen is not active.
    pub fn fade_alpha(&self) -> Option<f32> {
        self.splash.as_ref().map(|splash| splash.fade.value())
    }

    pub fn timer_phase(&self) -> Option<TimerPhase> {
        self.splash.as_ref().map(|splash| splash.timer.phase())
    }

    /// Activate the start screen. Calling it again is a no-op.
    pub fn start(&mut self) -> Result<(), FlowError> {
        if self.events.is_closed() {
            return Err(FlowError::EventChannelClosed);
        }
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.activate(self.current());
        Ok(())
    }

    pub fn handle(&mut self, event: FlowEvent) -> FlowUpdate {
        match event {
            FlowEvent::SplashElapsed { generation } => self.on_splash_elapsed(generation),
            FlowEvent::Action { origin, action } => self.dispatch(origin, action),
            FlowEvent::SystemBack => self.system_back(),
        }
    }

    /// Run a button callback rendered by `origin`. Callbacks from a screen that
    /// is no longer current are stale and dropped.
    pub fn dispatch(&mut self, origin: ScreenId, action: NavAction) -> FlowUpdate {
        let current = self.current();
        if origin != current {
            tracing::debug!(%origin, %current, ?action, "dropping stale action");
            return FlowUpdate::Unchanged;
        }
        match graph::target(origin, Trigger::Action(action)) {
            Some(target) => self.navigate(target),
            None => {
                tracing::debug!(%origin, ?action, "action has no edge");
                FlowUpdate::Unchanged
            }
        }
    }

    /// Set the current screen, tearing down the previous one.
    pub fn transition(&mut self, target: ScreenId) -> bool {
        let previous = self.current();
        if !self.navigator.transition(target) {
            return false;
        }
        tracing::info!(from = %previous, to = %target, "transition");
        self.deactivate(previous);
        self.activate(target);
        true
    }

    pub fn system_back(&mut self) -> FlowUpdate {
        let previous = self.current();
        match self.navigator.back() {
            Some(top) => {
                tracing::info!(from = %previous, to = %top, "back");
                self.deactivate(previous);
                self.activate(top);
                FlowUpdate::Navigated(top)
            }
            None => FlowUpdate::Exit,
        }
    }

    /// Advance per-frame animation state.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(splash) = self.splash.as_mut() {
            splash.fade.tick(dt);
        }
    }

    /// Tear down the current screen; a pending splash timer never fires.
    pub fn teardown(&mut self) {
        if self.started {
            self.deactivate(self.current());
            self.started = false;
        }
    }

    fn navigate(&mut self, target: ScreenId) -> FlowUpdate {
        if self.transition(target) {
            FlowUpdate::Navigated(target)
        } else {
            FlowUpdate::Unchanged
        }
    }

    fn on_splash_elapsed(&mut self, generation: u64) -> FlowUpdate {
        let fired = self
            .splash
            .as_mut()
            .is_some_and(|splash| splash.timer.complete(generation));
        if !fired {
            tracing::debug!(generation, "ignoring stale splash expiry");
            return FlowUpdate::Unchanged;
        }
        match graph::target(self.current(), Trigger::TimerElapsed) {
            Some(target) => self.navigate(target),
            None => FlowUpdate::Unchanged,
        }
    }

    fn activate(&mut self, screen: ScreenId) {
        if screen == ScreenId::Splash {
            let mut fade = FadeTween::new(self.config.fade_duration, self.config.easing);
            fade.animate_to(1.0);
            let mut timer = SplashTimer::new(self.config.splash_delay);
            timer.activate(self.events.clone());
            self.splash = Some(SplashInstance { timer, fade });
        }
        tracing::debug!(%screen, "screen active");
    }

    fn deactivate(&mut self, screen: ScreenId) {
        if screen == ScreenId::Splash
            && let Some(mut splash) = self.splash.take()
            && splash.timer.cancel()
        {
            tracing::debug!("splash torn down before its timer fired");
        }
    }
}
