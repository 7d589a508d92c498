//! Type Definitions Module
//!
//! Types shared between the event handlers and the view.

use ratatui::layout::{Position, Rect};
use smarttasks_flow::{ActionButton, FlowConfig, FlowEvent};
use tokio::sync::mpsc;

/// Screen area occupied by a rendered button, refreshed on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonHit {
    pub area: Rect,
    pub button: ActionButton,
}

impl ButtonHit {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

pub struct AppStateOptions {
    pub flow_config: FlowConfig,
    pub flow_tx: mpsc::Sender<FlowEvent>,
    pub mouse_capture: bool,
}
