use crate::api::ScheduleEntry;
use crate::schedule::window::{hour_of_day, WINDOW_SPAN_HOURS, WINDOW_START_HOUR};

/// Smallest width a block may have, in percent of the row.
pub const MIN_WIDTH_PERCENT: f64 = 5.0;

/// Horizontal placement of one block, in percent of the row width.
///
/// `left` is never negative and `width` is never below
/// [`MIN_WIDTH_PERCENT`]. Neither is capped above, so a job running past
/// the window is truncated only when projected onto a concrete track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockGeometry {
    pub left: f64,
    pub width: f64,
}

pub fn block_geometry(start_hour: f64, end_hour: f64) -> BlockGeometry {
    let start_offset = start_hour - f64::from(WINDOW_START_HOUR);
    let left = (start_offset / WINDOW_SPAN_HOURS * 100.0).max(0.0);
    let width = ((end_hour - start_hour) / WINDOW_SPAN_HOURS * 100.0).max(MIN_WIDTH_PERCENT);
    BlockGeometry { left, width }
}

/// Geometry for an entry. A missing start pins to the window start; a
/// missing end collapses to the minimum width.
pub fn entry_geometry(entry: &ScheduleEntry) -> BlockGeometry {
    let start = entry
        .scheduled_time
        .map(hour_of_day)
        .unwrap_or(f64::from(WINDOW_START_HOUR));
    let end = entry.promised_delivery.map(hour_of_day).unwrap_or(start);
    block_geometry(start, end)
}

/// A block projected onto a track `track_width` cells wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub offset: u16,
    pub width: u16,
}

impl BlockGeometry {
    /// Project onto whole terminal cells. Every block keeps at least one
    /// cell and nothing reaches past the right edge of the track.
    pub fn to_cells(self, track_width: u16) -> Option<CellSpan> {
        if track_width == 0 {
            return None;
        }
        let total = f64::from(track_width);
        let last = track_width - 1;
        let offset = ((self.left / 100.0 * total).round() as u16).min(last);
        let wanted = ((self.width / 100.0 * total).round() as u16).max(1);
        let width = wanted.min(track_width - offset);
        Some(CellSpan { offset, width })
    }
}
