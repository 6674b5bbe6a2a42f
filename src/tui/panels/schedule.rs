use crate::api::timestamp;
use crate::schedule::board::{axis_line, technician_label, tick_column};
use crate::schedule::window::hour_labels;
use crate::schedule::{board_rows, PlacedBlock};
use crate::tui::app::App;
use crate::tui::panels::{render_empty, render_loading};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Fixed width of the technician name column.
const NAME_COLUMN: u16 = 18;
/// Lines per technician row: the block line plus a spacer.
const ROW_HEIGHT: u16 = 2;
const DETAIL_WIDTH: u16 = 42;
const DETAIL_HEIGHT: u16 = 8;

/// What the last frame put on screen, for pointer hit-testing.
#[derive(Debug, Default)]
pub struct BoardHits {
    /// Every block drawn, in draw order.
    pub blocks: Vec<(Rect, i64)>,
    /// The detail panel, which sits on top of the blocks.
    pub detail: Option<Rect>,
}

pub fn render_schedule_panel(frame: &mut Frame, app: &App, area: Rect) -> BoardHits {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Schedule Board ")
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let view = &app.schedule;

    if view.board.is_loading() {
        render_loading(frame, inner, "Loading schedule…");
        return BoardHits::default();
    }
    if view.board.data().is_empty() {
        render_empty(frame, inner, "No scheduled jobs found");
        return BoardHits::default();
    }
    if inner.width <= NAME_COLUMN + 2 || inner.height < 3 {
        return BoardHits::default();
    }

    let track_x = inner.x + NAME_COLUMN + 1;
    let track_width = inner.width - NAME_COLUMN - 1;

    render_axis(frame, inner, track_x, track_width);

    let rows = board_rows(view.board.data());
    let body_top = inner.y + 2;
    let visible_rows = usize::from((inner.y + inner.height - body_top) / ROW_HEIGHT).max(1);
    let first_row = match view.selected_row() {
        Some(row) if row >= visible_rows => row + 1 - visible_rows,
        _ => 0,
    };

    let mut hitboxes = Vec::new();
    let mut hovered: Option<(Rect, &PlacedBlock)> = None;

    for (offset, row) in rows.iter().skip(first_row).take(visible_rows).enumerate() {
        let y = body_top + offset as u16 * ROW_HEIGHT;

        let name: String = technician_label(row.technician)
            .chars()
            .take(usize::from(NAME_COLUMN))
            .collect();
        frame.render_widget(
            Paragraph::new(name).style(Style::default().add_modifier(Modifier::BOLD)),
            Rect::new(inner.x, y, NAME_COLUMN, 1),
        );
        frame.render_widget(
            Paragraph::new("│").style(Style::default().fg(Color::DarkGray)),
            Rect::new(inner.x + NAME_COLUMN, y, 1, 1),
        );
        frame.render_widget(
            Paragraph::new(grid_line(track_width)).style(Style::default().fg(Color::DarkGray)),
            Rect::new(track_x, y, track_width, 1),
        );

        for placed in &row.blocks {
            let Some(span) = placed.geometry.to_cells(track_width) else {
                continue;
            };
            let rect = Rect::new(track_x + span.offset, y, span.width, 1);
            let is_hovered = view.hover.is_hovered(placed.entry.job_id);

            let mut style = Style::default()
                .bg(placed.status.palette().fill)
                .fg(Color::Black);
            if is_hovered {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            let label: String = format!(" #{}", placed.entry.job_id)
                .chars()
                .take(usize::from(span.width))
                .collect();
            frame.render_widget(Paragraph::new(label).style(style), rect);

            hitboxes.push((rect, placed.entry.job_id));
            if is_hovered {
                hovered = Some((rect, placed));
            }
        }
    }

    let detail = hovered.map(|(anchor, placed)| render_detail(frame, area, anchor, placed));

    BoardHits {
        blocks: hitboxes,
        detail,
    }
}

fn render_axis(frame: &mut Frame, inner: Rect, track_x: u16, track_width: u16) {
    frame.render_widget(
        Paragraph::new("Technician").style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ),
        Rect::new(inner.x, inner.y, NAME_COLUMN, 1),
    );
    frame.render_widget(
        Paragraph::new(axis_line(track_width)).style(Style::default().fg(Color::Gray)),
        Rect::new(track_x, inner.y, track_width, 1),
    );

    let mut rule: Vec<char> = vec!['─'; usize::from(track_width)];
    for index in 0..hour_labels().len() {
        let column = usize::from(tick_column(index, track_width));
        if let Some(cell) = rule.get_mut(column) {
            *cell = '┬';
        }
    }
    let rule: String = std::iter::repeat('─')
        .take(usize::from(NAME_COLUMN))
        .chain(std::iter::once('┼'))
        .chain(rule)
        .collect();
    frame.render_widget(
        Paragraph::new(rule).style(Style::default().fg(Color::DarkGray)),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );
}

/// Faint hour guides behind the blocks.
fn grid_line(track_width: u16) -> String {
    let mut line = vec![' '; usize::from(track_width)];
    for index in 0..hour_labels().len() {
        let column = usize::from(tick_column(index, track_width));
        if let Some(cell) = line.get_mut(column) {
            *cell = '┊';
        }
    }
    line.into_iter().collect()
}

/// Detail panel anchored below the hovered block, flipped above it when
/// there is no room, and kept inside `bounds`.
fn render_detail(frame: &mut Frame, bounds: Rect, anchor: Rect, placed: &PlacedBlock) -> Rect {
    let width = DETAIL_WIDTH.min(bounds.width);
    let height = DETAIL_HEIGHT.min(bounds.height);
    let right = bounds.x + bounds.width;
    let bottom = bounds.y + bounds.height;

    let x = anchor.x.min(right.saturating_sub(width)).max(bounds.x);
    let y = if anchor.y + 1 + height <= bottom {
        anchor.y + 1
    } else {
        anchor.y.saturating_sub(height).max(bounds.y)
    };
    let rect = Rect::new(x, y, width, height);

    let entry = placed.entry;
    let palette = placed.status.palette();

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Job #{} ", entry.job_id))
        .border_style(Style::default().fg(palette.badge_border))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    let badge = Span::styled(
        format!(" {} ", placed.status),
        Style::default()
            .bg(palette.badge_bg)
            .fg(palette.badge_fg)
            .add_modifier(Modifier::BOLD),
    );
    let label = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(vec![Span::styled("Status   ", label), badge]),
        Line::from(vec![
            Span::styled("Service  ", label),
            Span::raw(entry.service_type.clone()),
        ]),
        Line::from(vec![
            Span::styled("Car      ", label),
            Span::raw(entry.car_model.clone()),
        ]),
        Line::from(vec![
            Span::styled("Start    ", label),
            Span::raw(timestamp::display(entry.scheduled_time)),
        ]),
        Line::from(vec![
            Span::styled("End      ", label),
            Span::raw(timestamp::display(entry.promised_delivery)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_marks_every_hour() {
        let line = grid_line(131);
        assert_eq!(line.chars().filter(|c| *c == '┊').count(), 14);
        assert_eq!(line.chars().next(), Some('┊'));
        assert_eq!(line.chars().last(), Some('┊'));
    }
}
