use super::guard::InFlightGuard;
use crate::provider::types::Query;

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Mutable pagination state of one widget page.
#[derive(Debug, Clone)]
struct SessionState {
    query: Option<Query>,
    /// Bumped by every search; pages fetched under an older value are stale.
    generation: u64,
    /// Last page successfully fetched.
    page: u32,
    /// Total reported by the first page of the current search.
    total_hits: Option<u64>,
    /// Hits fetched so far in the current search.
    fetched: u64,
    /// `total_hits - fetched`, unset until the first page lands.
    remaining: Option<i64>,
    /// Whether scroll events are still acted upon.
    listening: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            query: None,
            generation: 0,
            page: 1,
            total_hits: None,
            fetched: 0,
            remaining: None,
            listening: true,
        }
    }
}

/// Point-in-time copy of the session, including both guard flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub query: Option<Query>,
    pub generation: u64,
    pub page: u32,
    pub total_hits: Option<u64>,
    pub remaining: Option<i64>,
    pub listening: bool,
    pub fetching: bool,
    pub searching: bool,
}

impl SessionSnapshot {
    /// True when the remaining counter says more results exist.
    pub fn has_more(&self) -> bool {
        self.remaining.is_some_and(|remaining| remaining > 0)
    }
}

/// State shared by the search and scroll-pagination controllers.
#[derive(Debug, Default)]
pub struct PaginationSession {
    state: RwLock<SessionState>,
    fetching: AtomicBool,
    searching: AtomicBool,
}

impl PaginationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the pagination guard. `None` while a page fetch is outstanding.
    pub fn try_begin_fetch(&self) -> Option<InFlightGuard<'_>> {
        InFlightGuard::try_acquire(&self.fetching)
    }

    /// Claims the search guard. `None` while a search is outstanding.
    pub fn try_begin_search(&self) -> Option<InFlightGuard<'_>> {
        InFlightGuard::try_acquire(&self.searching)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    pub fn is_searching(&self) -> bool {
        self.searching.load(Ordering::Acquire)
    }

    /// Starts a new search and returns its generation.
    ///
    /// Resets the cursor to 1, clears the remaining counter and re-attaches
    /// the scroll listener.
    pub async fn begin_search(&self, query: Query) -> u64 {
        let mut state = self.state.write().await;
        let generation = state.generation + 1;
        *state = SessionState {
            query: Some(query),
            generation,
            ..SessionState::default()
        };
        generation
    }

    /// Records the first page of `generation`.
    ///
    /// Returns the new remaining count, or `None` if a newer search has
    /// started in the meantime.
    pub async fn record_first_page(
        &self,
        generation: u64,
        total_hits: u64,
        hits: usize,
    ) -> Option<i64> {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return None;
        }

        state.page = 1;
        state.total_hits = Some(total_hits);
        state.fetched = hits as u64;
        let remaining = remaining_after(total_hits, state.fetched);
        state.remaining = Some(remaining);
        Some(remaining)
    }

    /// Records a successfully fetched follow-up page of `generation`.
    ///
    /// Returns the new remaining count, or `None` if the page is stale.
    pub async fn record_next_page(&self, generation: u64, page: u32, hits: usize) -> Option<i64> {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return None;
        }

        state.page = page;
        state.fetched = state.fetched.saturating_add(hits as u64);
        let remaining = remaining_after(state.total_hits.unwrap_or(0), state.fetched);
        state.remaining = Some(remaining);
        Some(remaining)
    }

    /// Stops pagination for `generation`. Returns false if the page is stale.
    pub async fn detach(&self, generation: u64) -> bool {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return false;
        }
        state.listening = false;
        true
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            query: state.query.clone(),
            generation: state.generation,
            page: state.page,
            total_hits: state.total_hits,
            remaining: state.remaining,
            listening: state.listening,
            fetching: self.is_fetching(),
            searching: self.is_searching(),
        }
    }
}

/// Signed `total - fetched`, clamped to the `i64` range.
fn remaining_after(total: u64, fetched: u64) -> i64 {
    let total = i64::try_from(total).unwrap_or(i64::MAX);
    let fetched = i64::try_from(fetched).unwrap_or(i64::MAX);
    total.saturating_sub(fetched)
}
