//! Latest-only snapshot cell.
//!
//! Overlapping refreshes may complete out of order. Each refresh takes a
//! token before it starts; its result is applied only if no newer token was
//! issued in the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::warn;

/// Ticket handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Holds the result of the most recently *issued* request that completed.
pub struct LatestOnly<T> {
    issued: AtomicU64,
    current: RwLock<Option<(RequestToken, T)>>,
}

impl<T: Clone> LatestOnly<T> {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    /// Starts a new request, superseding every earlier one.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.issued.load(Ordering::SeqCst) == token.0
    }

    /// Stores `value` if `token` is still the latest. Returns whether it was applied.
    pub async fn apply(&self, token: RequestToken, value: T) -> bool {
        let mut current = self.current.write().await;
        if !self.is_latest(token) {
            warn!(
                token = token.value(),
                latest = self.issued.load(Ordering::SeqCst),
                "Discarding superseded result"
            );
            return false;
        }
        *current = Some((token, value));
        true
    }

    /// The applied result, if it came from a request issued after `token`.
    pub async fn newer_than(&self, token: RequestToken) -> Option<T> {
        self.current
            .read()
            .await
            .as_ref()
            .filter(|(applied, _)| *applied > token)
            .map(|(_, v)| v.clone())
    }
}

impl<T: Clone> Default for LatestOnly<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase_monotonically() {
        let cell: LatestOnly<u32> = LatestOnly::new();
        let first = cell.issue();
        let second = cell.issue();
        assert!(second > first);
        assert!(cell.is_latest(second));
        assert!(!cell.is_latest(first));
    }

    #[tokio::test]
    async fn applied_result_is_visible_to_older_requests_only() {
        let cell = LatestOnly::new();
        let token = cell.issue();

        assert!(cell.apply(token, "fresh").await);
        assert_eq!(cell.newer_than(token).await, None);
        assert_eq!(cell.newer_than(RequestToken(0)).await, Some("fresh"));
    }

    #[tokio::test]
    async fn late_completion_of_older_request_is_discarded() {
        let cell = LatestOnly::new();
        let older = cell.issue();
        let newer = cell.issue();

        assert!(cell.apply(newer, "newer").await);
        assert!(!cell.apply(older, "older").await);

        assert_eq!(cell.newer_than(older).await, Some("newer"));
    }

    #[tokio::test]
    async fn older_result_is_discarded_even_before_newer_completes() {
        let cell = LatestOnly::new();
        let older = cell.issue();
        let _newer = cell.issue();

        assert!(!cell.apply(older, 1).await);
        assert_eq!(cell.newer_than(RequestToken(0)).await, None);
    }
}
