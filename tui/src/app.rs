mod events;
mod types;

pub use events::InputEvent;
pub use types::*;

use ratatui::layout::Size;
use smarttasks_flow::{FlowOrchestrator, ScreenId};
use std::time::Instant;

pub struct AppState {
    // ========== Flow State ==========
    pub flow: FlowOrchestrator,
    /// Screen drawn by the last frame; key presses act on its buttons.
    pub rendered_screen: Option<ScreenId>,
    pub button_hits: Vec<ButtonHit>,
    pub last_tick: Instant,

    // ========== Misc State ==========
    pub ctrl_c_pressed_once: bool,
    pub ctrl_c_timer: Option<Instant>,
    pub mouse_capture_enabled: bool,
    pub terminal_size: Size,
}

impl AppState {
    pub fn new(options: AppStateOptions) -> Self {
        let AppStateOptions {
            flow_config,
            flow_tx,
            mouse_capture,
        } = options;

        AppState {
            flow: FlowOrchestrator::new(flow_config, flow_tx),
            rendered_screen: None,
            button_hits: Vec::new(),
            last_tick: Instant::now(),
            ctrl_c_pressed_once: false,
            ctrl_c_timer: None,
            mouse_capture_enabled: mouse_capture,
            terminal_size: Size::new(0, 0),
        }
    }

    /// Screen that button actions originate from.
    pub fn action_origin(&self) -> ScreenId {
        self.rendered_screen.unwrap_or_else(|| self.flow.current())
    }

    /// Advance frame-driven animation by the time since the previous tick.
    pub fn tick(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.flow.tick(dt);
    }

    pub fn expire_ctrl_c(&mut self, now: Instant) {
        if self.ctrl_c_pressed_once
            && let Some(timer) = self.ctrl_c_timer
            && now > timer
        {
            self.ctrl_c_pressed_once = false;
            self.ctrl_c_timer = None;
        }
    }
}
