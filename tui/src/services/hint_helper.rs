use crate::app::AppState;
use crate::constants::{APP_NAME, HINT_FG};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
};
use smarttasks_flow::ScreenId;

pub fn hint_text(state: &AppState) -> String {
    if state.ctrl_c_pressed_once && state.ctrl_c_timer.is_some() {
        return format!("Press Ctrl+C again to exit {APP_NAME}");
    }
    match state.flow.current() {
        ScreenId::Splash => "q quit".to_string(),
        ScreenId::Onboarding1 => "→ next . s skip . esc exit . q quit".to_string(),
        ScreenId::Onboarding2 | ScreenId::Onboarding3 => {
            "← back . → next . s skip . esc history . q quit".to_string()
        }
    }
}

pub fn render_hint(f: &mut Frame, state: &AppState, area: Rect) {
    let hint = Paragraph::new(Span::styled(
        hint_text(state),
        Style::default().fg(HINT_FG),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, area);
}
