//! Event Handlers Module
//!
//! The main `update()` function routes InputEvents to the appropriate handler modules.

mod misc;
mod navigation;

pub use navigation::handle_flow_event;

use crate::app::{AppState, InputEvent};
use smarttasks_flow::NavAction;
use tokio::sync::mpsc::{Receiver, Sender};

pub fn update(state: &mut AppState, event: InputEvent, input_tx: &Sender<InputEvent>) {
    match event {
        InputEvent::Next => navigation::handle_nav_action(state, NavAction::Next, input_tx),
        InputEvent::Back => navigation::handle_nav_action(state, NavAction::Back, input_tx),
        InputEvent::Skip => navigation::handle_nav_action(state, NavAction::Skip, input_tx),
        InputEvent::SystemBack => navigation::handle_system_back(state, input_tx),
        InputEvent::MouseClick(column, row) => {
            navigation::handle_mouse_click(state, column, row, input_tx);
        }
        InputEvent::Resized(width, height) => misc::handle_resized(state, width, height),
        InputEvent::AttemptQuit => misc::handle_attempt_quit(state, input_tx),
        InputEvent::Quit => {
            // Quit is handled in the event loop
        }
    }
}

/// Handle `first` and every input already queued behind it before the next
/// draw, so a burst of presses all act on the screen the user saw.
/// Returns `true` once `Quit` is reached.
pub fn update_queued(
    state: &mut AppState,
    first: InputEvent,
    input_rx: &mut Receiver<InputEvent>,
    input_tx: &Sender<InputEvent>,
) -> bool {
    let mut next = Some(first);
    while let Some(event) = next {
        if event == InputEvent::Quit {
            return true;
        }
        update(state, event, input_tx);
        next = input_rx.try_recv().ok();
    }
    false
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::app::AppStateOptions;
    use smarttasks_flow::{FlowConfig, ScreenId};
    use tokio::sync::mpsc;

    fn state_at(start: ScreenId) -> (AppState, mpsc::Receiver<smarttasks_flow::FlowEvent>) {
        let (flow_tx, flow_rx) = mpsc::channel(8);
        let mut state = AppState::new(AppStateOptions {
            flow_config: FlowConfig {
                start,
                ..FlowConfig::default()
            },
            flow_tx,
            mouse_capture: false,
        });
        assert!(state.flow.start().is_ok());
        (state, flow_rx)
    }

    #[test]
    fn next_key_advances_the_carousel() {
        let (mut state, _flow_rx) = state_at(ScreenId::Onboarding1);
        let (input_tx, _input_rx) = mpsc::channel(4);
        update(&mut state, InputEvent::Next, &input_tx);
        assert_eq!(state.flow.current(), ScreenId::Onboarding2);
    }

    #[test]
    fn second_key_before_redraw_is_stale() {
        let (mut state, _flow_rx) = state_at(ScreenId::Onboarding1);
        state.rendered_screen = Some(ScreenId::Onboarding1);
        let (input_tx, _input_rx) = mpsc::channel(4);

        update(&mut state, InputEvent::Next, &input_tx);
        update(&mut state, InputEvent::Next, &input_tx);

        assert_eq!(state.flow.current(), ScreenId::Onboarding2);
    }

    #[test]
    fn system_back_at_root_requests_quit() {
        let (mut state, _flow_rx) = state_at(ScreenId::Onboarding1);
        let (input_tx, mut input_rx) = mpsc::channel(4);
        update(&mut state, InputEvent::SystemBack, &input_tx);
        assert_eq!(input_rx.try_recv().ok(), Some(InputEvent::Quit));
    }

    #[test]
    fn queued_presses_share_the_drawn_screen() {
        let (mut state, _flow_rx) = state_at(ScreenId::Onboarding1);
        state.rendered_screen = Some(ScreenId::Onboarding1);
        let (input_tx, mut input_rx) = mpsc::channel(4);
        input_tx.try_send(InputEvent::Next).unwrap();

        let quit = update_queued(&mut state, InputEvent::Next, &mut input_rx, &input_tx);

        assert!(!quit);
        assert_eq!(state.flow.current(), ScreenId::Onboarding2);
        assert!(input_rx.try_recv().is_err());
    }

    #[test]
    fn exit_raised_inside_a_batch_quits() {
        let (mut state, _flow_rx) = state_at(ScreenId::Onboarding1);
        let (input_tx, mut input_rx) = mpsc::channel(4);
        assert!(update_queued(
            &mut state,
            InputEvent::SystemBack,
            &mut input_rx,
            &input_tx
        ));
    }

    #[test]
    fn ctrl_c_twice_requests_quit() {
        let (mut state, _flow_rx) = state_at(ScreenId::Onboarding2);
        let (input_tx, mut input_rx) = mpsc::channel(4);

        update(&mut state, InputEvent::AttemptQuit, &input_tx);
        assert!(state.ctrl_c_pressed_once);
        assert!(input_rx.try_recv().is_err());

        update(&mut state, InputEvent::AttemptQuit, &input_tx);
        assert!(!state.ctrl_c_pressed_once);
        assert_eq!(input_rx.try_recv().ok(), Some(InputEvent::Quit));
    }
}
