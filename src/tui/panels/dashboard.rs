use crate::tui::app::App;
use crate::tui::panels::render_loading;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_dashboard_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Dashboard ")
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));

    if app.overview.is_loading() {
        render_loading(frame, inner, "Loading KPI overview…");
        return;
    }

    let kpi = app.overview.data();
    let cards = [
        ("Total Jobs", kpi.total_jobs.to_string(), Color::Blue),
        ("Pending Jobs", kpi.pending_jobs.to_string(), Color::Yellow),
        ("Completed Jobs", kpi.completed_jobs.to_string(), Color::Green),
        (
            "Avg Utilization",
            format!("{:.1}%", kpi.average_utilization),
            Color::Magenta,
        ),
        (
            "On-Time Rate",
            format!("{:.1}%", kpi.on_time_completion_rate),
            Color::Cyan,
        ),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(rows[0]);

    for ((title, value, color), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::styled(title, Style::default().fg(Color::Gray)),
            Line::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(card, *column);
    }

    let hint = Paragraph::new(
        "Press [2] for technicians, [3] for job cards, [4] for the schedule board.",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, rows[1].inner(Margin::new(1, 1)));
}
