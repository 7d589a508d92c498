//! Navigation Event Handlers
//!
//! Turns key presses, clicks and timer events into flow transitions.

use crate::app::{AppState, InputEvent};
use smarttasks_flow::{FlowEvent, FlowUpdate, NavAction};
use tokio::sync::mpsc::Sender;

pub fn handle_nav_action(state: &mut AppState, action: NavAction, input_tx: &Sender<InputEvent>) {
    let origin = state.action_origin();
    let update = state.flow.dispatch(origin, action);
    apply_update(state, update, input_tx);
}

pub fn handle_mouse_click(
    state: &mut AppState,
    column: u16,
    row: u16,
    input_tx: &Sender<InputEvent>,
) {
    let Some(hit) = state
        .button_hits
        .iter()
        .find(|hit| hit.contains(column, row))
        .copied()
    else {
        return;
    };
    let update = state.flow.handle(hit.button.event());
    apply_update(state, update, input_tx);
}

pub fn handle_system_back(state: &mut AppState, input_tx: &Sender<InputEvent>) {
    let update = state.flow.system_back();
    apply_update(state, update, input_tx);
}

/// Events posted by the flow itself (the splash timer).
pub fn handle_flow_event(state: &mut AppState, event: FlowEvent, input_tx: &Sender<InputEvent>) {
    let update = state.flow.handle(event);
    apply_update(state, update, input_tx);
}

fn apply_update(state: &mut AppState, update: FlowUpdate, input_tx: &Sender<InputEvent>) {
    match update {
        FlowUpdate::Navigated(screen) => {
            log::debug!("navigated to {}", screen);
            // Buttons drawn for the previous screen are no longer clickable.
            state.button_hits.clear();
        }
        FlowUpdate::Exit => {
            let _ = input_tx.try_send(InputEvent::Quit);
        }
        FlowUpdate::Unchanged => {}
    }
}
