use crate::api::{timestamp, Severity};
use crate::tui::app::App;
use crate::tui::panels::{render_empty, render_loading};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render_alerts_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Alerts ")
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));

    if app.alerts.is_loading() && app.alerts.data().is_empty() {
        render_loading(frame, inner, "Loading alerts…");
        return;
    }
    if app.alerts.data().is_empty() {
        render_empty(frame, inner, "No active alerts");
        return;
    }

    let items: Vec<ListItem> = app
        .alerts
        .data()
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let (icon, color) = match alert.severity() {
                Severity::Critical => ("!", Color::Red),
                Severity::Info => ("i", Color::Blue),
            };
            let mut style = Style::default();
            if i == app.selected_index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", icon),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        alert.alert_type.clone(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", timestamp::display(alert.created_at)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(format!("   {}", alert.message)),
            ])
            .style(style)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
