use crate::constants::BRAND_BLUE;
use crate::services::illustration::{illustration_height, illustration_or_alt};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use smarttasks_flow::SplashFrame;

/// Below this opacity nothing is drawn.
const MIN_VISIBLE_ALPHA: f32 = 0.02;

/// Terminals have no opacity; approximate it by scaling toward black.
pub fn fade_color((r, g, b): (u8, u8, u8), alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let scale = |channel: u8| (channel as f32 * alpha).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

pub fn render_splash(f: &mut Frame, area: Rect, frame: &SplashFrame<'_>) {
    if frame.alpha < MIN_VISIBLE_ALPHA {
        return;
    }
    let logo_height = illustration_height(frame.content.logo);
    let content_height = logo_height + 2;
    let top = area.height.saturating_sub(content_height) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top),
            Constraint::Length(logo_height),
            Constraint::Length(1), // spacer
            Constraint::Length(1), // title
            Constraint::Min(0),
        ])
        .split(area);

    let color = fade_color(BRAND_BLUE, frame.alpha);
    let logo: Vec<Line> = illustration_or_alt(frame.content.logo, chunks[1].height)
        .into_iter()
        .map(Line::from)
        .collect();
    f.render_widget(
        Paragraph::new(logo)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(frame.content.title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        chunks[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_scales_toward_black() {
        assert_eq!(fade_color((0, 0, 255), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade_color((0, 0, 255), 1.0), Color::Rgb(0, 0, 255));
        assert_eq!(fade_color((200, 100, 0), 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn fade_clamps_alpha() {
        assert_eq!(fade_color((10, 10, 10), 3.0), Color::Rgb(10, 10, 10));
    }
}
