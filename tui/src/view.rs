use crate::app::AppState;
use crate::services::hint_helper::render_hint;
use crate::services::renderer::TuiRenderer;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use smarttasks_flow::compose;

const HINT_HEIGHT: u16 = 1;

pub fn view(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(HINT_HEIGHT)])
        .split(f.area());

    let mut renderer = TuiRenderer::new(f, chunks[0]);
    compose(&state.flow, &mut renderer);
    let (rendered, hits) = renderer.finish();
    state.rendered_screen = rendered;
    state.button_hits = hits;

    render_hint(f, state, chunks[1]);
}
