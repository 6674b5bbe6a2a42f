/// The one block whose detail panel is showing, if any.
///
/// A single slot means at most one panel can ever be visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<i64>,
}

impl HoverState {
    pub fn current(&self) -> Option<i64> {
        self.current
    }

    pub fn is_hovered(&self, job_id: i64) -> bool {
        self.current == Some(job_id)
    }

    /// The most recently entered block always wins.
    pub fn enter(&mut self, job_id: i64) {
        self.current = Some(job_id);
    }

    /// Leaving a block that is no longer current is a no-op, so a late
    /// leave cannot hide the panel of the block entered after it.
    pub fn leave(&mut self, job_id: i64) {
        if self.current == Some(job_id) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_leave_clears() {
        let mut hover = HoverState::default();
        hover.enter(1);
        assert_eq!(hover.current(), Some(1));
        hover.leave(1);
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn a_then_b_then_leave_b_shows_nothing() {
        let mut hover = HoverState::default();
        hover.enter(1);
        hover.enter(2);
        hover.leave(2);
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn a_then_b_shows_only_b() {
        let mut hover = HoverState::default();
        hover.enter(1);
        hover.enter(2);
        assert_eq!(hover.current(), Some(2));
        assert!(!hover.is_hovered(1));
    }

    #[test]
    fn stale_leave_does_not_hide_newer_panel() {
        let mut hover = HoverState::default();
        hover.enter(1);
        hover.enter(2);
        hover.leave(1);
        assert_eq!(hover.current(), Some(2));
    }
}
