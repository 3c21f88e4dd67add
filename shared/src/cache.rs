//! Cached query state with optimistic updates.
//!
//! A [`Query`] holds the last fetched value for one cache key. Fetches are
//! tagged with a generation; finishing a fetch whose generation has been
//! superseded is a no-op. Optimistic updates go through a [`Snapshot`]:
//! capture the previous value, apply the speculative change, then either
//! [`commit`](Snapshot::commit) or [`restore`](Snapshot::restore).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Identifies one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
pub struct Query<T> {
    data: Option<T>,
    status: QueryStatus,
    stale: bool,
    generation: u64,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
            stale: false,
            generation: 0,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Whether a cached read should hit the network.
    pub fn needs_fetch(&self) -> bool {
        !self.is_loading() && (self.data.is_none() || self.stale)
    }

    /// Mark the cached value as out of date. The value stays readable.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Start a fetch. Any fetch already in flight is superseded.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = QueryStatus::Loading;
        FetchTicket(self.generation)
    }

    /// Drop any in-flight fetch without starting a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.is_loading() {
            self.status = if self.data.is_some() {
                QueryStatus::Ready
            } else {
                QueryStatus::Idle
            };
        }
    }

    /// Apply a fetch outcome. Returns `false` when the ticket was superseded.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, outcome: Result<T, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.status = QueryStatus::Ready;
                self.stale = false;
            }
            Err(message) => {
                self.status = QueryStatus::Failed(message);
            }
        }
        true
    }

    /// Replace the cached value directly.
    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
        self.status = QueryStatus::Ready;
    }
}

impl<T: Clone> Query<T> {
    /// Cancel in-flight fetches, capture the current value and apply `apply`
    /// to it. Returns `None` when nothing is cached yet.
    pub fn apply_optimistic<F>(&mut self, apply: F) -> Option<Snapshot<T>>
    where
        F: FnOnce(&mut T),
    {
        self.cancel();
        let data = self.data.as_mut()?;
        let previous = data.clone();
        apply(data);
        Some(Snapshot { previous })
    }
}

/// The value a query held before an optimistic update.
#[derive(Debug, Clone)]
#[must_use = "an optimistic update must be committed or restored"]
pub struct Snapshot<T> {
    previous: T,
}

impl<T> Snapshot<T> {
    pub fn previous(&self) -> &T {
        &self.previous
    }

    /// Keep the speculative value and mark it for a refetch.
    pub fn commit(self, query: &mut Query<T>) {
        query.invalidate();
    }

    /// Put back exactly the value captured before the update.
    pub fn restore(self, query: &mut Query<T>) {
        query.cancel();
        query.data = Some(self.previous);
        query.status = QueryStatus::Ready;
        query.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(items: &[&'static str]) -> Query<Vec<&'static str>> {
        let mut query = Query::new();
        let ticket = query.begin_fetch();
        assert!(query.finish_fetch(ticket, Ok(items.to_vec())));
        query
    }

    #[test]
    fn test_new_query_needs_fetch() {
        let query: Query<Vec<u32>> = Query::new();
        assert!(query.needs_fetch());
        assert_eq!(query.status(), &QueryStatus::Idle);
        assert!(query.data().is_none());
    }

    #[test]
    fn test_fetch_success() {
        let query = ready(&["A", "B"]);
        assert_eq!(query.data(), Some(&vec!["A", "B"]));
        assert_eq!(query.status(), &QueryStatus::Ready);
        assert!(!query.needs_fetch());
    }

    #[test]
    fn test_fetch_failure_keeps_old_data() {
        let mut query = ready(&["A"]);
        let ticket = query.begin_fetch();
        query.finish_fetch(ticket, Err("boom".to_string()));
        assert_eq!(query.error(), Some("boom"));
        assert_eq!(query.data(), Some(&vec!["A"]));
    }

    #[test]
    fn test_superseded_fetch_is_ignored() {
        let mut query = Query::new();
        let first = query.begin_fetch();
        let second = query.begin_fetch();

        assert!(query.finish_fetch(second, Ok(vec!["new"])));
        assert!(!query.finish_fetch(first, Ok(vec!["old"])));
        assert_eq!(query.data(), Some(&vec!["new"]));
    }

    #[test]
    fn test_loading_query_does_not_need_fetch() {
        let mut query: Query<Vec<u32>> = Query::new();
        let _ticket = query.begin_fetch();
        assert!(!query.needs_fetch());
    }

    #[test]
    fn test_invalidate_marks_stale() {
        let mut query = ready(&["A"]);
        query.invalidate();
        assert!(query.is_stale());
        assert!(query.needs_fetch());
        assert_eq!(query.data(), Some(&vec!["A"]));
    }

    #[test]
    fn test_optimistic_delete_then_restore() {
        let mut query = ready(&["A", "B", "C"]);

        let snapshot = query
            .apply_optimistic(|items| items.retain(|item| *item != "B"))
            .unwrap();
        assert_eq!(query.data(), Some(&vec!["A", "C"]));
        assert_eq!(snapshot.previous(), &vec!["A", "B", "C"]);

        snapshot.restore(&mut query);
        assert_eq!(query.data(), Some(&vec!["A", "B", "C"]));
        assert!(query.is_stale());
    }

    #[test]
    fn test_optimistic_delete_then_commit() {
        let mut query = ready(&["A", "B", "C"]);
        let snapshot = query
            .apply_optimistic(|items| items.retain(|item| *item != "B"))
            .unwrap();

        snapshot.commit(&mut query);
        assert_eq!(query.data(), Some(&vec!["A", "C"]));
        assert!(query.needs_fetch());
    }

    #[test]
    fn test_optimistic_update_cancels_in_flight_fetch() {
        let mut query = ready(&["A", "B", "C"]);
        let in_flight = query.begin_fetch();

        let snapshot = query
            .apply_optimistic(|items| items.retain(|item| *item != "B"))
            .unwrap();
        assert!(!query.finish_fetch(in_flight, Ok(vec!["A", "B", "C"])));
        assert_eq!(query.data(), Some(&vec!["A", "C"]));
        assert_eq!(query.status(), &QueryStatus::Ready);

        snapshot.commit(&mut query);
    }

    #[test]
    fn test_restore_ignores_later_fetch_started_before() {
        let mut query = ready(&["A", "B"]);
        let snapshot = query.apply_optimistic(|items| items.clear()).unwrap();
        let racing = query.begin_fetch();

        snapshot.restore(&mut query);
        assert!(!query.finish_fetch(racing, Ok(vec![])));
        assert_eq!(query.data(), Some(&vec!["A", "B"]));
    }

    #[test]
    fn test_optimistic_without_data() {
        let mut query: Query<Vec<u32>> = Query::new();
        assert!(query.apply_optimistic(|items| items.clear()).is_none());
    }

    #[test]
    fn test_set_data() {
        let mut query = Query::new();
        query.set_data(vec![1, 2]);
        assert_eq!(query.data(), Some(&vec![1, 2]));
        assert_eq!(query.status(), &QueryStatus::Ready);
    }
}
