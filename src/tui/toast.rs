use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(3);
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
    pub shown_at: Instant,
}

/// Transient notifications, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into(), Instant::now());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into(), Instant::now());
    }

    fn push(&mut self, level: ToastLevel, text: String, shown_at: Instant) {
        if self.queue.len() == MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            level,
            text,
            shown_at,
        });
    }

    /// Drop every toast older than [`TOAST_TTL`] at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.queue
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < TOAST_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_toasts_are_dropped() {
        let mut toasts = Toasts::default();
        let start = Instant::now();
        toasts.push(ToastLevel::Error, "old".to_string(), start);
        toasts.push(
            ToastLevel::Success,
            "new".to_string(),
            start + Duration::from_secs(2),
        );

        toasts.expire(start + Duration::from_secs(4));
        let texts: Vec<&str> = toasts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["new"]);

        toasts.expire(start + Duration::from_secs(6));
        assert!(toasts.is_empty());
    }

    #[test]
    fn queue_is_bounded_oldest_first() {
        let mut toasts = Toasts::default();
        for i in 0..5 {
            toasts.error(format!("e{i}"));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.iter().next().map(|t| t.text.as_str()), Some("e2"));
    }
}
