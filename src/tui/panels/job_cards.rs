use crate::api::timestamp;
use crate::schedule::TaskStatus;
use crate::tui::app::App;
use crate::tui::panels::{marker, render_empty, render_loading, row_style};
use ratatui::{
    layout::{Constraint, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn render_job_cards_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Job Cards ")
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));

    if app.job_cards.is_loading() && app.job_cards.data().is_empty() {
        render_loading(frame, inner, "Loading job cards…");
        return;
    }
    if app.job_cards.data().is_empty() {
        render_empty(frame, inner, "No job cards yet. Press [n] to create one.");
        return;
    }

    let header = Row::new(vec![
        "",
        "Job ID",
        "Customer",
        "Service Type",
        "Delivery Time",
        "Status",
        "Actions",
    ])
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .job_cards
        .data()
        .iter()
        .enumerate()
        .map(|(i, job)| {
            let selected = i == app.selected_index;
            let status = TaskStatus::from_label(&job.status);
            let action = if job.can_auto_assign() {
                "[a] Auto Assign"
            } else {
                ""
            };
            Row::new(vec![
                Cell::from(marker(selected)),
                Cell::from(format!("#{}", job.job_id)),
                Cell::from(job.customer_name.clone()),
                Cell::from(job.service_type.clone()),
                Cell::from(timestamp::display(job.promised_delivery_time)),
                Cell::from(Span::styled(
                    status.to_string(),
                    Style::default().fg(status.palette().fill),
                )),
                Cell::from(Span::styled(action, Style::default().fg(Color::Cyan))),
            ])
            .style(row_style(selected))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(18),
            Constraint::Length(17),
            Constraint::Length(12),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, inner);
}
