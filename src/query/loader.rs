//! Runs backend requests according to each query's fetch policy.

use super::{FetchResult, Query};
use crate::api::LotteryApi;
use crate::error::Result;
use crate::model::{RefreshStatus, Results, Suggestions};
use crate::state::Action;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Starts fetches on the runtime and reports completion as actions.
#[derive(Clone)]
pub struct Loader {
    api: Arc<dyn LotteryApi>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Loader {
    pub fn new(api: Arc<dyn LotteryApi>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { api, action_tx }
    }

    /// Load results, honouring the cache unless `forced`.
    ///
    /// Returns whether a request was started.
    pub fn load_results(&self, query: &mut Query<Results>, forced: bool) -> bool {
        let api = Arc::clone(&self.api);
        self.spawn(
            "resultados",
            query,
            forced,
            async move { api.fetch_results().await },
            Action::ResultsLoaded,
        )
    }

    /// Ask the backend for a fresh batch of suggestions.
    pub fn generate_suggestions(&self, query: &mut Query<Suggestions>) -> bool {
        let api = Arc::clone(&self.api);
        self.spawn(
            "palpites",
            query,
            true,
            async move { api.fetch_suggestions().await },
            Action::SuggestionsLoaded,
        )
    }

    /// Ask the backend to ingest new draws.
    pub fn update_backend(&self, query: &mut Query<RefreshStatus>) -> bool {
        let api = Arc::clone(&self.api);
        self.spawn(
            "atualizar",
            query,
            true,
            async move { api.refresh().await },
            Action::BackendUpdated,
        )
    }

    fn spawn<T, F>(
        &self,
        name: &'static str,
        query: &mut Query<T>,
        forced: bool,
        fetch: F,
        complete: fn(FetchResult<T>) -> Action,
    ) -> bool
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        if !query.should_fetch(Instant::now(), forced) {
            tracing::debug!(query = name, forced, "fetch skipped");
            return false;
        }

        query.begin();
        tracing::debug!(query = name, forced, "fetch started");

        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = fetch.await.map_err(Into::into);
            if action_tx.send(complete(result)).is_err() {
                tracing::debug!(query = name, "action channel closed before completion");
            }
        });
        true
    }
}
