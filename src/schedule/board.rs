use crate::api::timestamp;
use crate::api::ScheduleEntry;
use crate::schedule::group::group_by_technician;
use crate::schedule::layout::{entry_geometry, BlockGeometry};
use crate::schedule::status::TaskStatus;
use crate::schedule::window::{hour_labels, WINDOW_SPAN_HOURS};

/// One placed block: the entry, its resolved status and its geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBlock<'a> {
    pub entry: &'a ScheduleEntry,
    pub status: TaskStatus,
    pub geometry: BlockGeometry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardRow<'a> {
    pub technician: &'a str,
    pub blocks: Vec<PlacedBlock<'a>>,
}

/// Group and place every entry. Recomputed from scratch on each render.
pub fn board_rows(entries: &[ScheduleEntry]) -> Vec<BoardRow<'_>> {
    group_by_technician(entries)
        .into_iter()
        .map(|(technician, group)| BoardRow {
            technician,
            blocks: group
                .into_iter()
                .map(|entry| PlacedBlock {
                    entry,
                    status: TaskStatus::from_label(&entry.task_status),
                    geometry: entry_geometry(entry),
                })
                .collect(),
        })
        .collect()
}

/// Label that stands in for an empty technician name.
pub fn technician_label(name: &str) -> &str {
    if name.trim().is_empty() {
        "(unassigned)"
    } else {
        name
    }
}

/// Column of hour `index` (0 = window start) on a track of `width` cells.
pub fn tick_column(index: usize, width: u16) -> u16 {
    let span = f64::from(width.saturating_sub(1));
    (index as f64 / WINDOW_SPAN_HOURS * span).round() as u16
}

/// Hour axis laid out over `width` cells.
///
/// Labels are placed right to left so the closing hour always shows.
/// A label that would collide with its right neighbour is shortened to
/// the bare hour, then dropped.
pub fn axis_line(width: u16) -> String {
    let cells = usize::from(width);
    let mut line = vec![' '; cells];
    let mut right_start = cells + 1;

    for (index, label) in hour_labels().iter().enumerate().rev() {
        let tick = usize::from(tick_column(index, width));
        let gap = usize::from(tick_column(index + 1, width)).saturating_sub(tick);
        let all = [label.as_str(), &label[..2]];
        let candidates = if gap > label.len() { &all[..] } else { &all[1..] };

        for text in candidates {
            if text.len() > cells {
                continue;
            }
            let column = tick.min(cells - text.len());
            if column + text.len() < right_start {
                for (offset, ch) in text.chars().enumerate() {
                    line[column + offset] = ch;
                }
                right_start = column;
                break;
            }
        }
    }

    line.into_iter().collect::<String>().trim_end().to_string()
}

/// Plain-text rendering: axis, one timeline row per technician, then a
/// per-technician detail listing.
pub fn render_text(entries: &[ScheduleEntry], track_width: u16) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No scheduled jobs found".to_string()];
    }

    let rows = board_rows(entries);
    let name_width = rows
        .iter()
        .map(|row| technician_label(row.technician).chars().count())
        .max()
        .unwrap_or(0)
        .clamp(10, 24);

    let mut out = Vec::new();
    out.push(format!("{:name_width$} │{}", "Technician", axis_line(track_width)));
    out.push(format!(
        "{}─┼{}",
        "─".repeat(name_width),
        "─".repeat(usize::from(track_width))
    ));

    for row in &rows {
        let mut track = vec![' '; usize::from(track_width)];
        for block in &row.blocks {
            if let Some(span) = block.geometry.to_cells(track_width) {
                let glyph = block.status.glyph();
                let start = usize::from(span.offset);
                for cell in track.iter_mut().skip(start).take(usize::from(span.width)) {
                    *cell = glyph;
                }
            }
        }
        let name: String = technician_label(row.technician)
            .chars()
            .take(name_width)
            .collect();
        out.push(format!(
            "{:name_width$} │{}",
            name,
            track.into_iter().collect::<String>()
        ));
    }

    out.push(String::new());
    out.push(format!(
        "Legend: {} completed  {} in progress  {} planned  {} other",
        TaskStatus::Completed.glyph(),
        TaskStatus::InProgress.glyph(),
        TaskStatus::Planned.glyph(),
        TaskStatus::Other(String::new()).glyph()
    ));

    for row in &rows {
        out.push(String::new());
        out.push(technician_label(row.technician).to_string());
        for block in &row.blocks {
            let entry = block.entry;
            // Same-day jobs only repeat the clock time.
            let end = match (entry.scheduled_time, entry.promised_delivery) {
                (Some(start), Some(end)) if start.date() == end.date() => {
                    timestamp::display_time(Some(end))
                }
                (_, end) => timestamp::display(end),
            };
            out.push(format!(
                "  Job #{:<6} {:<12} {} - {}  {} / {}",
                entry.job_id,
                block.status.to_string(),
                timestamp::display(entry.scheduled_time),
                end,
                entry.service_type,
                entry.car_model
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
    }

    fn entry(tech: &str, job_id: i64, status: &str, start: u32, end: u32) -> ScheduleEntry {
        ScheduleEntry {
            technician_name: tech.to_string(),
            job_id,
            car_model: "Corolla".to_string(),
            service_type: "Service".to_string(),
            task_status: status.to_string(),
            scheduled_time: at(start),
            promised_delivery: at(end),
        }
    }

    #[test]
    fn rows_follow_grouping_and_resolve_status() {
        let entries = vec![
            entry("Bob", 1, "completed", 7, 9),
            entry("Alice", 2, "weird", 10, 11),
            entry("Bob", 3, "Planned", 12, 20),
        ];
        let rows = board_rows(&entries);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].technician, "Bob");
        assert_eq!(rows[0].blocks[1].status, TaskStatus::Planned);
        assert!(matches!(rows[1].blocks[0].status, TaskStatus::Other(_)));
    }

    #[test]
    fn axis_has_full_labels_when_wide() {
        let axis = axis_line(131);
        assert!(axis.starts_with("07:00"));
        assert!(axis.ends_with("20:00"));
        assert_eq!(axis.matches(":00").count(), 14);
    }

    #[test]
    fn axis_degrades_when_narrow() {
        let axis = axis_line(20);
        assert!(axis.starts_with("07"));
        assert!(axis.len() <= 20);
    }

    #[test]
    fn text_board_draws_blocks() {
        let entries = vec![entry("Bob", 1, "completed", 7, 20)];
        let lines = render_text(&entries, 26);
        let bob = lines.iter().find(|l| l.starts_with("Bob")).unwrap();
        assert_eq!(bob.matches('█').count(), 26);
        assert!(lines.iter().any(|l| l.contains("Job #1")));
    }

    #[test]
    fn empty_board_message() {
        assert_eq!(render_text(&[], 40), vec!["No scheduled jobs found".to_string()]);
    }

    #[test]
    fn blank_technician_gets_placeholder() {
        assert_eq!(technician_label("  "), "(unassigned)");
        assert_eq!(technician_label("Bob"), "Bob");
    }
}
