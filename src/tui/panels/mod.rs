pub mod alerts;
pub mod dashboard;
pub mod job_cards;
pub mod kpis;
pub mod schedule;
pub mod technicians;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Skeleton shown while a view's first fetch is in flight.
pub fn render_loading(frame: &mut Frame, area: Rect, text: &str) {
    let mut lines = vec![Line::styled(
        text.to_string(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )];
    let bar = "░".repeat(usize::from(area.width));
    for _ in 1..area.height.min(6) {
        lines.push(Line::styled(bar.clone(), Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string()).style(Style::default().fg(Color::Yellow)),
        area,
    );
}

/// Style for the row under the list cursor.
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn marker(selected: bool) -> &'static str {
    if selected {
        "●"
    } else {
        " "
    }
}
