//! Reactive query cache shared by every page.

use std::future::Future;

use leptos::*;
use shared::cache::{Query, Snapshot};
use shared::{ApiResult, ClientError, Draw, Game};

use crate::api::ApiClient;

const FETCH_FALLBACK: &str = "Could not load data.";

/// Text stored for a failed fetch: the backend detail when there is one.
pub fn fetch_error_message(err: &ClientError) -> String {
    err.user_message(FETCH_FALLBACK)
}

/// One cached query held in a signal.
pub struct QueryHandle<T: 'static> {
    state: RwSignal<Query<T>>,
}

impl<T: 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for QueryHandle<T> {}

impl<T: Clone + 'static> QueryHandle<T> {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(Query::new()),
        }
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|q| q.data().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|q| q.is_loading() && q.data().is_none())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|q| q.error().map(str::to_string))
    }

    /// Fetch unconditionally. A response from an older fetch is discarded.
    pub fn fetch<F, Fut>(&self, fetcher: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, ClientError>> + 'static,
    {
        let state = self.state;
        let ticket = state.try_update(|q| q.begin_fetch());
        let Some(ticket) = ticket else {
            return;
        };
        log::debug!("query fetch {:?} started", ticket);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetcher().await.map_err(|e| {
                log::warn!("query fetch failed: {}", e);
                fetch_error_message(&e)
            });
            state.update(|q| {
                if !q.finish_fetch(ticket, outcome) {
                    log::debug!("dropping superseded query response");
                }
            });
        });
    }

    /// Fetch only when nothing is cached or the cache was invalidated.
    pub fn ensure<F, Fut>(&self, fetcher: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, ClientError>> + 'static,
    {
        if self.state.with_untracked(|q| q.needs_fetch()) {
            self.fetch(fetcher);
        }
    }

    pub fn invalidate(&self) {
        self.state.update(|q| q.invalidate());
    }

    /// Apply a speculative change now; returns the snapshot to commit or
    /// restore once the server answers.
    pub fn apply_optimistic(&self, apply: impl FnOnce(&mut T)) -> Option<Snapshot<T>> {
        self.state.try_update(|q| q.apply_optimistic(apply)).flatten()
    }

    pub fn commit(&self, snapshot: Snapshot<T>) {
        self.state.update(|q| snapshot.commit(q));
    }

    pub fn restore(&self, snapshot: Snapshot<T>) {
        self.state.update(|q| snapshot.restore(q));
    }
}

impl<T: Clone + 'static> Default for QueryHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All cached backend lists, provided once at the app root.
#[derive(Clone, Copy)]
pub struct QueryClient {
    pub games: QueryHandle<Vec<Game>>,
    pub draws: QueryHandle<Vec<Draw>>,
    pub results: QueryHandle<Vec<ApiResult>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            games: QueryHandle::new(),
            draws: QueryHandle::new(),
            results: QueryHandle::new(),
        }
    }

    pub fn load_games(&self) {
        self.games.ensure(ApiClient::get_games);
    }

    pub fn refetch_games(&self) {
        self.games.fetch(ApiClient::get_games);
    }

    pub fn load_draws(&self) {
        self.draws.ensure(ApiClient::get_draws);
    }

    pub fn refetch_draws(&self) {
        self.draws.fetch(ApiClient::get_draws);
    }

    pub fn load_results(&self) {
        self.results.ensure(ApiClient::get_results);
    }

    pub fn refetch_results(&self) {
        self.results.fetch(ApiClient::get_results);
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_query_client() {
    provide_context(QueryClient::new());
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}
