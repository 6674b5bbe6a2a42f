use chrono::{NaiveDateTime, Timelike};

/// First hour shown on the board.
pub const WINDOW_START_HOUR: u32 = 7;
/// Last hour shown on the board.
pub const WINDOW_END_HOUR: u32 = 20;
/// Width of the board in hours.
pub const WINDOW_SPAN_HOURS: f64 = (WINDOW_END_HOUR - WINDOW_START_HOUR) as f64;

/// Hour labels `07:00` through `20:00`, both ends inclusive.
pub fn hour_labels() -> Vec<String> {
    (WINDOW_START_HOUR..=WINDOW_END_HOUR)
        .map(|hour| format!("{:02}:00", hour))
        .collect()
}

/// Local wall-clock hour as a real number; seconds are ignored.
pub fn hour_of_day(ts: NaiveDateTime) -> f64 {
    f64::from(ts.hour()) + f64::from(ts.minute()) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fourteen_zero_padded_labels() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 14);
        assert_eq!(labels.first().map(String::as_str), Some("07:00"));
        assert_eq!(labels.get(2).map(String::as_str), Some("09:00"));
        assert_eq!(labels.last().map(String::as_str), Some("20:00"));
    }

    #[test]
    fn hour_of_day_uses_minutes_not_seconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(9, 45, 59)
            .unwrap();
        assert_eq!(hour_of_day(ts), 9.75);
    }
}
