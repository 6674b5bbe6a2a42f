use crate::error::Error;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Identifies one fetch attempt. Only the newest ticket may settle, once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, PartialEq, Eq)]
pub enum Settled {
    Ready,
    /// Data was cleared; the caller shows one notification.
    Failed,
    /// Superseded by a newer fetch; nothing changed.
    Stale,
}

/// Data owned by a view plus the state of its most recent fetch.
#[derive(Debug)]
pub struct Resource<T> {
    data: T,
    state: LoadState,
    latest: u64,
}

impl<T: Default> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            state: LoadState::Idle,
            latest: 0,
        }
    }
}

impl<T: Default> Resource<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Enter Loading from any state. Previous data stays until settled.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = LoadState::Loading;
        Ticket(self.latest)
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<T, Error>) -> Settled {
        if ticket.0 != self.latest || self.state != LoadState::Loading {
            warn!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding response from a superseded fetch"
            );
            return Settled::Stale;
        }
        match result {
            Ok(data) => {
                self.data = data;
                self.state = LoadState::Ready;
                Settled::Ready
            }
            Err(e) => {
                warn!(error = %e, "fetch failed; clearing view data");
                self.data = T::default();
                self.state = LoadState::Failed;
                Settled::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Error {
        Error::Config("unreachable".to_string())
    }

    #[test]
    fn starts_idle_and_empty() {
        let res: Resource<Vec<i32>> = Resource::default();
        assert_eq!(res.state(), LoadState::Idle);
        assert!(res.data().is_empty());
    }

    #[test]
    fn success_replaces_data_wholesale() {
        let mut res: Resource<Vec<i32>> = Resource::default();
        let t = res.begin();
        assert!(res.is_loading());
        assert_eq!(res.settle(t, Ok(vec![1, 2])), Settled::Ready);
        let t = res.begin();
        assert_eq!(res.settle(t, Ok(vec![3])), Settled::Ready);
        assert_eq!(res.data(), &vec![3]);
        assert_eq!(res.state(), LoadState::Ready);
    }

    #[test]
    fn failure_clears_and_settles() {
        let mut res: Resource<Vec<i32>> = Resource::default();
        let t = res.begin();
        res.settle(t, Ok(vec![1, 2]));
        let t = res.begin();
        assert_eq!(res.settle(t, Err(failure())), Settled::Failed);
        assert!(res.data().is_empty());
        assert_eq!(res.state(), LoadState::Failed);
        assert!(!res.is_loading());
    }

    #[test]
    fn late_response_from_superseded_fetch_is_dropped() {
        let mut res: Resource<Vec<i32>> = Resource::default();
        let old = res.begin();
        let new = res.begin();
        assert_eq!(res.settle(new, Ok(vec![9])), Settled::Ready);
        assert_eq!(res.settle(old, Ok(vec![1])), Settled::Stale);
        assert_eq!(res.data(), &vec![9]);
    }

    #[test]
    fn stale_failure_neither_clears_nor_notifies() {
        let mut res: Resource<Vec<i32>> = Resource::default();
        let old = res.begin();
        let new = res.begin();
        assert_eq!(res.settle(old, Err(failure())), Settled::Stale);
        assert!(res.is_loading());
        assert_eq!(res.settle(new, Ok(vec![4])), Settled::Ready);
        assert_eq!(res.data(), &vec![4]);
    }

    #[test]
    fn a_ticket_settles_only_once() {
        let mut res: Resource<Vec<i32>> = Resource::default();
        let t = res.begin();
        assert_eq!(res.settle(t, Err(failure())), Settled::Failed);
        // A duplicate delivery of the same ticket must not fire a second toast.
        assert_eq!(res.settle(t, Err(failure())), Settled::Stale);
    }
}
