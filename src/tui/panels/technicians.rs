use crate::api::UtilizationBand;
use crate::tui::app::App;
use crate::tui::panels::{marker, render_empty, render_loading, row_style};
use ratatui::{
    layout::{Constraint, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

const BAR_CELLS: usize = 10;

pub fn render_technicians_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Technicians ")
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));

    if app.technicians.is_loading() && app.technicians.data().is_empty() {
        render_loading(frame, inner, "Loading technicians…");
        return;
    }
    if app.technicians.data().is_empty() {
        render_empty(frame, inner, "No technicians found");
        return;
    }

    let header = Row::new(vec!["", "ID", "Name", "Skill Level", "Utilization", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .technicians
        .data()
        .iter()
        .enumerate()
        .map(|(i, tech)| {
            let selected = i == app.selected_index;
            let (status, status_color) = if tech.available {
                ("Available", Color::Green)
            } else {
                ("Busy", Color::Red)
            };
            Row::new(vec![
                Cell::from(marker(selected)),
                Cell::from(tech.technician_id.to_string()),
                Cell::from(tech.name.clone()),
                Cell::from(tech.skill_level.clone()),
                Cell::from(utilization_bar(tech.utilization)),
                Cell::from(Span::styled(status, Style::default().fg(status_color))),
            ])
            .style(row_style(selected))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(17),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, inner);
}

fn band_color(utilization: f64) -> Color {
    match UtilizationBand::of(utilization) {
        UtilizationBand::Low => Color::Green,
        UtilizationBand::Moderate => Color::Yellow,
        UtilizationBand::High => Color::Red,
    }
}

fn utilization_bar(utilization: f64) -> Line<'static> {
    let filled = ((utilization.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
    let color = band_color(utilization);
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(BAR_CELLS - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {:.0}%", utilization)),
    ])
}
