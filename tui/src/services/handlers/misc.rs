//! Miscellaneous Event Handlers

use crate::app::{AppState, InputEvent};
use crate::constants::CTRL_C_WINDOW;
use ratatui::layout::Size;
use std::time::Instant;

pub fn handle_resized(state: &mut AppState, width: u16, height: u16) {
    state.terminal_size = Size::new(width, height);
    // Hit areas belong to the old layout until the next draw.
    state.button_hits.clear();
}

pub fn handle_attempt_quit(state: &mut AppState, input_tx: &tokio::sync::mpsc::Sender<InputEvent>) {
    let now = Instant::now();
    if !state.ctrl_c_pressed_once
        || state.ctrl_c_timer.is_none()
        || state.ctrl_c_timer.map(|t| now > t).unwrap_or(true)
    {
        // First press or timer expired
        state.ctrl_c_pressed_once = true;
        state.ctrl_c_timer = Some(now + CTRL_C_WINDOW);
    } else {
        // Second press within the window
        state.ctrl_c_pressed_once = false;
        state.ctrl_c_timer = None;
        let _ = input_tx.try_send(InputEvent::Quit);
    }
}
