use crate::api::{TechnicianPerformance, TrendPoint};
use crate::tui::app::App;
use crate::tui::panels::{render_empty, render_loading};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

pub fn render_kpis_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" KPIs ")
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let charts = app.kpis.data();

    if app.kpis.is_loading() && charts.trends.is_empty() && charts.performance.is_empty() {
        render_loading(frame, inner, "Loading KPI charts…");
        return;
    }
    if charts.trends.is_empty() && charts.performance.is_empty() {
        render_empty(frame, inner, "No KPI data available");
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[1]);

    render_trends(frame, &charts.trends, halves[0]);
    render_jobs_completed(frame, &charts.performance, bottom[0]);
    render_average_time(frame, &charts.performance, bottom[1]);
}

fn render_trends(frame: &mut Frame, trends: &[TrendPoint], area: Rect) {
    let total: Vec<(f64, f64)> = trends
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.total_jobs as f64))
        .collect();
    let completed: Vec<(f64, f64)> = trends
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.completed_jobs as f64))
        .collect();

    let y_max = trends
        .iter()
        .map(|p| p.total_jobs.max(p.completed_jobs))
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let x_max = trends.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Line> = match (trends.first(), trends.last()) {
        (Some(first), Some(last)) => vec![
            Line::from(first.date.clone()),
            Line::from(last.date.clone()),
        ],
        _ => Vec::new(),
    };

    let datasets = vec![
        Dataset::default()
            .name("Total Jobs")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&total),
        Dataset::default()
            .name("Completed Jobs")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&completed),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Job Trends "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![Line::from("0"), Line::from(format!("{}", y_max as u64))]),
        );

    frame.render_widget(chart, area);
}

fn render_jobs_completed(frame: &mut Frame, performance: &[TechnicianPerformance], area: Rect) {
    let bars: Vec<Bar> = performance
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.jobs_completed)
                .label(Line::from(short_name(&p.technician_name)))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Jobs Completed "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

fn render_average_time(frame: &mut Frame, performance: &[TechnicianPerformance], area: Rect) {
    // Bars take integers; tenths of an hour keep one decimal of resolution.
    let bars: Vec<Bar> = performance
        .iter()
        .map(|p| {
            Bar::default()
                .value((p.average_time.max(0.0) * 10.0).round() as u64)
                .text_value(format!(
                    "{}: {:.1}h",
                    short_name(&p.technician_name),
                    p.average_time
                ))
                .label(Line::from(short_name(&p.technician_name)))
                .style(Style::default().fg(Color::Magenta))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Average Time (hours) "),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0);

    frame.render_widget(chart, area);
}

fn short_name(name: &str) -> String {
    name.chars().take(10).collect()
}
