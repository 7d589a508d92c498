use crate::app::ButtonHit;
use crate::constants::{
    BACK_BUTTON_WIDTH, BUTTON_BG, BUTTON_FG, BUTTON_HEIGHT, DESCRIPTION_FG, INDICATOR_ACTIVE_FG,
    INDICATOR_FG, PRIMARY_BUTTON_WIDTH_PERCENT, SKIP_BUTTON_WIDTH, TITLE_FG,
};
use crate::services::illustration::{illustration_height, illustration_or_alt};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use smarttasks_flow::{ActionButton, NavAction, OnboardingFrame};

const DESCRIPTION_HEIGHT: u16 = 4;

/// Draw one carousel page and return the clickable button areas.
pub fn render_onboarding(
    f: &mut Frame,
    area: Rect,
    frame: &OnboardingFrame<'_>,
) -> Vec<ButtonHit> {
    let mut hits = Vec::new();
    let art_height = illustration_height(frame.config.image);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // indicator + skip
            Constraint::Min(art_height),
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(DESCRIPTION_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .split(area);

    render_top_row(f, chunks[0], frame, &mut hits);
    render_illustration(f, chunks[1], frame);

    f.render_widget(
        Paragraph::new(frame.config.title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(TITLE_FG).add_modifier(Modifier::BOLD)),
        chunks[2],
    );
    f.render_widget(
        Paragraph::new(frame.config.description)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(DESCRIPTION_FG)),
        horizontal_padding(chunks[4], 2),
    );

    render_bottom_row(f, chunks[5], frame, &mut hits);
    hits
}

pub fn page_indicator(page_index: usize, page_count: usize) -> Line<'static> {
    let spans: Vec<Span> = (0..page_count)
        .map(|i| {
            if i == page_index {
                Span::styled("● ", Style::default().fg(INDICATOR_ACTIVE_FG))
            } else {
                Span::styled("● ", Style::default().fg(INDICATOR_FG))
            }
        })
        .collect();
    Line::from(spans)
}

fn render_top_row(
    f: &mut Frame,
    area: Rect,
    frame: &OnboardingFrame<'_>,
    hits: &mut Vec<ButtonHit>,
) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SKIP_BUTTON_WIDTH)])
        .split(area);

    f.render_widget(
        Paragraph::new(page_indicator(frame.page_index, frame.page_count)),
        horizontal_padding(row[0], 1),
    );

    if let Some(skip) = frame.skip {
        f.render_widget(
            Paragraph::new(skip.label)
                .alignment(Alignment::Right)
                .style(Style::default().fg(INDICATOR_ACTIVE_FG)),
            row[1],
        );
        hits.push(ButtonHit {
            area: row[1],
            button: skip,
        });
    }
}

fn render_illustration(f: &mut Frame, area: Rect, frame: &OnboardingFrame<'_>) {
    let art: Vec<Line> = illustration_or_alt(frame.config.image, area.height)
        .into_iter()
        .map(Line::from)
        .collect();
    let top = area.height.saturating_sub(art.len() as u16) / 2;
    let art_area = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };
    f.render_widget(
        Paragraph::new(art)
            .alignment(Alignment::Center)
            .style(Style::default().fg(INDICATOR_ACTIVE_FG)),
        art_area,
    );
}

fn render_bottom_row(
    f: &mut Frame,
    area: Rect,
    frame: &OnboardingFrame<'_>,
    hits: &mut Vec<ButtonHit>,
) {
    let back_width = if frame.back.is_some() {
        BACK_BUTTON_WIDTH
    } else {
        0
    };
    let primary_constraint = if frame.config.large_centered_button {
        Constraint::Percentage(PRIMARY_BUTTON_WIDTH_PERCENT)
    } else {
        Constraint::Length(frame.primary.label.chars().count() as u16 + 6)
    };
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(back_width),
            Constraint::Min(0),
            primary_constraint,
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(back) = frame.back {
        render_button(f, row[0], &back);
        hits.push(ButtonHit {
            area: row[0],
            button: back,
        });
    }
    render_button(f, row[2], &frame.primary);
    hits.push(ButtonHit {
        area: row[2],
        button: frame.primary,
    });
}

fn render_button(f: &mut Frame, area: Rect, button: &ActionButton) {
    let label = match button.action {
        NavAction::Back => "←",
        NavAction::Next | NavAction::Skip => button.label,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BUTTON_BG));
    f.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(BUTTON_FG)
                    .bg(BUTTON_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block),
        area,
    );
}

fn horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(padding),
        width: area.width.saturating_sub(padding * 2),
        ..area
    }
}
