//! Incremental paginated list controller.
//!
//! Translates a declarative [`QueryState`] plus explicit pagination requests
//! into an ordered, deduplicated [`ListState`], with at most one fetch
//! outstanding at a time.
//!
//! Query changes are debounced: a change schedules a page-1 reset fetch
//! after a quiescence delay, and a newer change silently supersedes any
//! pending one, so only the last query in a quiet window reaches the
//! network. `load_more` appends the next page, dropping (not queuing)
//! re-entrant calls while a fetch is in flight.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::{CatalogEntry, QueryState};
use crate::traits::CatalogStore;
use crate::types::EntryId;

use super::state::ListState;

/// Quiescence delay before a query change triggers a fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Entries requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Controller for an incrementally loaded, searchable catalog listing.
///
/// Requires a tokio runtime: query changes are settled on a spawned timer
/// task.
pub struct ListController<C> {
    inner: Arc<Inner<C>>,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

struct Inner<C> {
    catalog: Arc<C>,
    page_size: u32,
    query: Mutex<QueryState>,
    state: Mutex<ListState>,
    /// Serializes network fetches. `load_more` uses `try_lock` so re-entrant
    /// calls are dropped; reset fetches wait their turn.
    fetch: tokio::sync::Mutex<()>,
    generation: AtomicU64,
    tx: watch::Sender<ListState>,
}

impl<C: CatalogStore + 'static> ListController<C> {
    /// Create a controller over the given catalog with default settings.
    pub fn new(catalog: Arc<C>) -> Self {
        Self::with_settings(catalog, DEFAULT_PAGE_SIZE, DEFAULT_DEBOUNCE)
    }

    /// Create a controller with an explicit page size and quiescence delay.
    pub fn with_settings(catalog: Arc<C>, page_size: u32, debounce: Duration) -> Self {
        let (tx, _) = watch::channel(ListState::default());
        Self {
            inner: Arc::new(Inner {
                catalog,
                page_size,
                query: Mutex::new(QueryState::default()),
                state: Mutex::new(ListState::default()),
                fetch: tokio::sync::Mutex::new(()),
                generation: AtomicU64::new(0),
                tx,
            }),
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Apply a full replacement query, scheduling a page-1 reset fetch after
    /// the quiescence delay.
    ///
    /// Calling again before the delay elapses cancels the pending fetch and
    /// supersedes it; cancellation is silent. On success the fetch replaces
    /// the item sequence, it never appends.
    pub fn apply_query_change(&self, query: QueryState) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        let delay = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if inner.generation.load(Ordering::SeqCst) != generation {
                return;
            }
            inner.reset_fetch(generation, query).await;
        });

        let mut pending = self.pending.lock().unwrap();
        if let Some(prev) = pending.replace(handle) {
            prev.abort();
        }
    }

    /// Fetch the next page and append it, deduplicating by identifier.
    ///
    /// Returns `false` without touching state or the network when no more
    /// pages exist or a fetch is already in flight (re-entrant calls are
    /// dropped, not queued).
    pub async fn load_more(&self) -> bool {
        // In-flight guard: a held fetch lock means another fetch is running.
        let Ok(_guard) = self.inner.fetch.try_lock() else {
            debug!("load_more dropped: fetch already in flight");
            return false;
        };

        let (next_page, query) = {
            let state = self.inner.state.lock().unwrap();
            if !state.has_more {
                return false;
            }
            (state.page + 1, self.inner.query.lock().unwrap().clone())
        };

        let flight = Flight::begin(&self.inner);
        debug!(page = next_page, "Fetching next page");

        let result = self
            .inner
            .catalog
            .list(&query, next_page, self.inner.page_size)
            .await;

        {
            let mut state = self.inner.state.lock().unwrap();
            match result {
                Ok(page) => {
                    // A concurrent local create can shift server pagination
                    // boundaries, so the same entry may appear on two
                    // consecutive pages.
                    let existing: HashSet<EntryId> =
                        state.entries.iter().map(|e| e.id.clone()).collect();
                    state
                        .entries
                        .extend(page.entries.into_iter().filter(|e| !existing.contains(&e.id)));
                    state.page = next_page;
                    state.has_more = page.has_more;
                    state.error = None;
                }
                Err(e) => {
                    warn!(error = %e, page = next_page, "Page fetch failed");
                    state.error = Some(e.to_string());
                }
            }
        }

        drop(flight);
        true
    }

    /// Record a locally created entry by prepending it.
    ///
    /// No dedup check is needed: the identifier was freshly assigned by the
    /// server.
    pub fn record_created(&self, entry: CatalogEntry) {
        let mut state = self.inner.state.lock().unwrap();
        state.entries.insert(0, entry);
        self.inner.publish(&state);
    }

    /// Record a locally updated entry, replacing it in place.
    ///
    /// If the entry is not present (scrolled out or not yet fetched) the
    /// update is silently dropped; it stays absent until a future refetch.
    pub fn record_updated(&self, entry: CatalogEntry) {
        let mut state = self.inner.state.lock().unwrap();
        if let Some(existing) = state.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
            self.inner.publish(&state);
        }
    }

    /// Record a locally deleted entry. Absence of a match is a no-op.
    pub fn record_deleted(&self, id: &EntryId) {
        let mut state = self.inner.state.lock().unwrap();
        let before = state.entries.len();
        state.entries.retain(|e| &e.id != id);
        if state.entries.len() != before {
            self.inner.publish(&state);
        }
    }

    /// Returns a snapshot of the current list state.
    pub fn snapshot(&self) -> ListState {
        self.inner.state.lock().unwrap().clone()
    }

    /// Returns the current query.
    pub fn query(&self) -> QueryState {
        self.inner.query.lock().unwrap().clone()
    }

    /// Subscribe to list state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.inner.tx.subscribe()
    }
}

impl<C> Drop for ListController<C> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl<C: CatalogStore + 'static> Inner<C> {
    /// Perform a page-1 reset fetch for the given query.
    async fn reset_fetch(self: Arc<Self>, generation: u64, query: QueryState) {
        // Wait for any in-flight fetch rather than overlapping it.
        let _guard = self.fetch.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            // Superseded while waiting for the lock.
            return;
        }

        *self.query.lock().unwrap() = query.clone();
        let flight = Flight::begin(&self);
        debug!(search = %query.search, sort = %query.sort, "Reset fetch");

        let result = self.catalog.list(&query, 1, self.page_size).await;

        {
            let mut state = self.state.lock().unwrap();
            match result {
                Ok(page) => {
                    state.entries = page.entries;
                    state.page = 1;
                    state.has_more = page.has_more;
                    state.error = None;
                }
                Err(e) => {
                    warn!(error = %e, "Reset fetch failed");
                    state.error = Some(e.to_string());
                }
            }
        }

        drop(flight);
    }

    fn publish(&self, state: &ListState) {
        let _ = self.tx.send(state.clone());
    }
}

/// RAII marker for an outstanding fetch.
///
/// Sets `in_flight` and clears any stale error on creation; clears
/// `in_flight` and publishes the final state on drop, including when the
/// owning task is cancelled at an await point.
struct Flight<'a, C> {
    inner: &'a Inner<C>,
}

impl<'a, C> Flight<'a, C> {
    fn begin(inner: &'a Inner<C>) -> Self {
        {
            let mut state = inner.state.lock().unwrap();
            state.in_flight = true;
            state.error = None;
            let _ = inner.tx.send(state.clone());
        }
        Self { inner }
    }
}

impl<C> Drop for Flight<'_, C> {
    fn drop(&mut self) {
        let mut state = self.inner.state.lock().unwrap();
        state.in_flight = false;
        let _ = self.inner.tx.send(state.clone());
    }
}
