//! Fetch policies and per-query cached state.
//!
//! A [`Query`] owns the last fetched value for one backend endpoint along
//! with its loading/error state. Its [`FetchPolicy`] decides whether a load
//! request actually reaches the network:
//!
//! - [`FetchPolicy::Cached`] fetches when there is no data or the data is
//!   older than the freshness window.
//! - [`FetchPolicy::Manual`] only fetches on an explicit trigger.
//!
//! Either way at most one request is in flight per query.

mod loader;

pub use loader::Loader;

use crate::error::Error;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// When a query is allowed to hit the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Only explicit triggers fetch.
    Manual,
    /// Fetch on demand, reuse data younger than `stale_after`.
    Cached { stale_after: Duration },
}

/// Coarse query status for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched.
    Idle,
    /// A request is in flight.
    Loading,
    /// Last request succeeded.
    Success,
    /// Last request failed.
    Failed,
}

/// A failed fetch, kept in state and carried by actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    Timeout,
    Status(u16),
    Connectivity(String),
    Decode(String),
}

impl FetchFailure {
    /// Whether the failure is about reaching the backend at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Timeout | Self::Connectivity(_))
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "Tempo limite de conexão excedido"),
            Self::Status(status) => write!(f, "Erro da API: {}", status),
            Self::Connectivity(msg) => write!(f, "Não foi possível conectar ao servidor: {}", msg),
            Self::Decode(msg) => write!(f, "Resposta inválida do servidor: {}", msg),
        }
    }
}

impl From<&Error> for FetchFailure {
    fn from(err: &Error) -> Self {
        match err {
            Error::Timeout => Self::Timeout,
            Error::Api { status } => Self::Status(*status),
            Error::Serialization(e) => Self::Decode(e.to_string()),
            other => Self::Connectivity(other.to_string()),
        }
    }
}

impl From<Error> for FetchFailure {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

/// Outcome of a fetch as delivered back to the store.
pub type FetchResult<T> = std::result::Result<T, FetchFailure>;

/// Cached state of one backend query.
#[derive(Debug, Clone)]
pub struct Query<T> {
    policy: FetchPolicy,
    data: Option<T>,
    error: Option<FetchFailure>,
    in_flight: bool,
    fetched_at: Option<Instant>,
}

impl<T> Query<T> {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            policy,
            data: None,
            error: None,
            in_flight: false,
            fetched_at: None,
        }
    }

    /// A query that fetches eagerly and stays fresh for `stale_after`.
    pub fn cached(stale_after: Duration) -> Self {
        Self::new(FetchPolicy::Cached { stale_after })
    }

    /// A query that only fetches when triggered.
    pub fn manual() -> Self {
        Self::new(FetchPolicy::Manual)
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> QueryStatus {
        if self.in_flight {
            QueryStatus::Loading
        } else if self.error.is_some() {
            QueryStatus::Failed
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Idle
        }
    }

    /// Whether cached data is still inside its freshness window.
    pub fn is_fresh(&self, now: Instant) -> bool {
        match (self.policy, self.fetched_at) {
            (FetchPolicy::Cached { stale_after }, Some(at)) if self.data.is_some() => {
                now.saturating_duration_since(at) < stale_after
            }
            _ => false,
        }
    }

    /// Decide whether a load request should reach the network.
    ///
    /// `forced` marks an explicit trigger (refetch button, generate key).
    pub fn should_fetch(&self, now: Instant, forced: bool) -> bool {
        if self.in_flight {
            return false;
        }
        if forced {
            return true;
        }
        match self.policy {
            FetchPolicy::Manual => false,
            FetchPolicy::Cached { .. } => !self.is_fresh(now),
        }
    }

    /// Mark a request as started.
    pub fn begin(&mut self) {
        self.in_flight = true;
    }

    /// Record a finished request. Failures keep previously fetched data.
    pub fn resolve(&mut self, result: FetchResult<T>, now: Instant) {
        self.in_flight = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.fetched_at = Some(now);
            }
            Err(failure) => {
                self.error = Some(failure);
            }
        }
    }

    /// Drop freshness so the next non-forced load fetches again.
    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(300);

    #[test]
    fn test_cached_query_fetches_until_fresh() {
        let now = Instant::now();
        let mut query: Query<u32> = Query::cached(WINDOW);
        assert_eq!(query.status(), QueryStatus::Idle);
        assert!(query.should_fetch(now, false));

        query.begin();
        assert_eq!(query.status(), QueryStatus::Loading);
        assert!(!query.should_fetch(now, false));
        assert!(!query.should_fetch(now, true), "one request in flight at most");

        query.resolve(Ok(7), now);
        assert_eq!(query.status(), QueryStatus::Success);
        assert_eq!(query.data(), Some(&7));
        assert!(!query.should_fetch(now + Duration::from_secs(299), false));
        assert!(query.should_fetch(now + Duration::from_secs(300), false));
        assert!(query.should_fetch(now, true), "explicit refetch bypasses freshness");
    }

    #[test]
    fn test_manual_query_needs_trigger() {
        let now = Instant::now();
        let mut query: Query<u32> = Query::manual();
        assert_eq!(query.policy(), FetchPolicy::Manual);
        assert!(!query.should_fetch(now, false));
        assert!(query.should_fetch(now, true));

        query.begin();
        query.resolve(Ok(1), now);
        assert!(!query.is_fresh(now));
        assert!(!query.should_fetch(now, false));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let now = Instant::now();
        let mut query: Query<u32> = Query::cached(WINDOW);
        query.begin();
        query.resolve(Ok(1), now);
        query.begin();
        query.resolve(Err(FetchFailure::Timeout), now);

        assert_eq!(query.status(), QueryStatus::Failed);
        assert_eq!(query.data(), Some(&1));
        assert_eq!(query.error(), Some(&FetchFailure::Timeout));

        query.begin();
        query.resolve(Ok(2), now);
        assert_eq!(query.error(), None);
        assert_eq!(query.data(), Some(&2));
    }

    #[test]
    fn test_invalidate_forces_next_load() {
        let now = Instant::now();
        let mut query: Query<u32> = Query::cached(WINDOW);
        query.begin();
        query.resolve(Ok(1), now);
        assert!(!query.should_fetch(now, false));
        query.invalidate();
        assert!(query.should_fetch(now, false));
    }

    #[test]
    fn test_failure_from_error() {
        assert_eq!(FetchFailure::from(Error::Timeout), FetchFailure::Timeout);
        assert_eq!(
            FetchFailure::from(Error::Api { status: 502 }),
            FetchFailure::Status(502)
        );
        assert!(FetchFailure::from(Error::network("refused")).is_connectivity());
        assert_eq!(FetchFailure::Status(404).to_string(), "Erro da API: 404");
    }
}
