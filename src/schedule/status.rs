use ratatui::style::Color;
use std::fmt;

/// Task status as it drives colour coding.
///
/// The backend sends free text; anything unrecognised lands on `Other`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    InProgress,
    Planned,
    Other(String),
}

impl TaskStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "completed" => TaskStatus::Completed,
            "in progress" => TaskStatus::InProgress,
            "planned" => TaskStatus::Planned,
            _ => TaskStatus::Other(label.trim().to_string()),
        }
    }

    pub fn palette(&self) -> StatusPalette {
        match self {
            TaskStatus::Completed => StatusPalette {
                fill: Color::Rgb(34, 197, 94),
                badge_bg: Color::Rgb(220, 252, 231),
                badge_fg: Color::Rgb(22, 101, 52),
                badge_border: Color::Rgb(134, 239, 172),
            },
            TaskStatus::InProgress => StatusPalette {
                fill: Color::Rgb(234, 179, 8),
                badge_bg: Color::Rgb(254, 249, 195),
                badge_fg: Color::Rgb(133, 77, 14),
                badge_border: Color::Rgb(253, 224, 71),
            },
            TaskStatus::Planned => StatusPalette {
                fill: Color::Rgb(59, 130, 246),
                badge_bg: Color::Rgb(219, 234, 254),
                badge_fg: Color::Rgb(30, 64, 175),
                badge_border: Color::Rgb(147, 197, 253),
            },
            TaskStatus::Other(_) => StatusPalette {
                fill: Color::Rgb(156, 163, 175),
                badge_bg: Color::Rgb(243, 244, 246),
                badge_fg: Color::Rgb(31, 41, 55),
                badge_border: Color::Rgb(209, 213, 219),
            },
        }
    }

    /// Single-character fill used by the plain-text board.
    pub fn glyph(&self) -> char {
        match self {
            TaskStatus::Completed => '█',
            TaskStatus::InProgress => '▓',
            TaskStatus::Planned => '▒',
            TaskStatus::Other(_) => '░',
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::InProgress => write!(f, "in progress"),
            TaskStatus::Planned => write!(f, "planned"),
            TaskStatus::Other(label) if label.is_empty() => write!(f, "Pending"),
            TaskStatus::Other(label) => write!(f, "{}", label),
        }
    }
}

/// Block fill plus the badge colours used in the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPalette {
    pub fill: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub badge_border: Color,
}
