use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::services::ServiceError;

/// Request lifecycle of one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    #[serde(skip)]
    generation: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

/// Handed out by [`QueryState::begin`]; only the newest ticket can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RequestTicket(u64);

impl<T> QueryState<T> {
    /// Mark a new request in flight. Any ticket handed out before this one
    /// goes stale.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.loading = true;
        RequestTicket(self.generation)
    }

    /// Apply a finished request. Returns `false` and leaves the state alone
    /// when a newer request was started in the meantime.
    ///
    /// A failure keeps the previously loaded data.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<T, ServiceError>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.generation,
                "Dropping stale response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Forget the data and invalidate whatever is in flight.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.data = None;
        self.loading = false;
        self.error = None;
    }
}

/// A `QueryState` shared between a hook and its in-flight requests.
pub struct SharedQuery<T> {
    state: Arc<RwLock<QueryState<T>>>,
}

impl<T> Clone for SharedQuery<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for SharedQuery<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(QueryState::default())),
        }
    }
}

impl<T: Clone> SharedQuery<T> {
    pub async fn snapshot(&self) -> QueryState<T> {
        self.state.read().await.clone()
    }

    /// Run `request` under a fresh ticket. The lock is not held while the
    /// request is pending.
    pub async fn run<F>(&self, request: F) -> bool
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        let ticket = self.state.write().await.begin();
        let result = request.await;
        self.state.write().await.resolve(ticket, result)
    }

    pub async fn clear(&self) {
        self.state.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[test]
    fn stale_ticket_cannot_overwrite_newer_request() {
        let mut state: QueryState<&str> = QueryState::default();

        let first = state.begin();
        let second = state.begin();

        assert!(state.resolve(second, Ok("second")));
        assert!(!state.resolve(first, Ok("first")));
        assert_eq!(state.data, Some("second"));
        assert!(!state.loading);
    }

    #[test]
    fn stale_ticket_keeps_loading_until_latest_resolves() {
        let mut state: QueryState<u32> = QueryState::default();

        let first = state.begin();
        let second = state.begin();

        assert!(!state.resolve(first, Ok(1)));
        assert!(state.loading);
        assert!(state.data.is_none());

        assert!(state.resolve(second, Ok(2)));
        assert!(!state.loading);
    }

    #[test]
    fn error_keeps_previous_data() {
        let mut state = QueryState::default();

        let ticket = state.begin();
        state.resolve(ticket, Ok(vec![1, 2]));
        let ticket = state.begin();
        state.resolve(ticket, Err(ServiceError::LoadExercises));

        assert_eq!(state.data, Some(vec![1, 2]));
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load exercises. Please try again.")
        );

        let ticket = state.begin();
        state.resolve(ticket, Ok(vec![3]));
        assert!(state.error.is_none());
    }

    #[test]
    fn clear_invalidates_in_flight_request() {
        let mut state = QueryState::default();

        let ticket = state.begin();
        state.clear();

        assert!(!state.resolve(ticket, Ok(5)));
        assert!(state.data.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn last_requested_wins_when_responses_arrive_out_of_order() {
        let query: SharedQuery<&str> = SharedQuery::default();
        let (slow_tx, slow_rx) = oneshot::channel();
        let (fast_tx, fast_rx) = oneshot::channel();

        let (slow_applied, fast_applied, _) = tokio::join!(
            query.run(async { slow_rx.await.unwrap() }),
            query.run(async { fast_rx.await.unwrap() }),
            async {
                fast_tx.send(Ok("fast")).unwrap();
                tokio::task::yield_now().await;
                slow_tx.send(Ok("slow")).unwrap();
            }
        );

        assert!(!slow_applied);
        assert!(fast_applied);
        let state = query.snapshot().await;
        assert_eq!(state.data, Some("fast"));
        assert!(!state.loading);
    }
}
