//! Scroll-Pagination Controller
//!
//! Loads the next page when the viewport nears the bottom of the gallery.
//!
//! Per event the guard moves `IDLE -> FETCHING -> IDLE`, or `IDLE -> STOPPED`
//! once the results are exhausted. `STOPPED` detaches the scroll listener and
//! lasts until the next search.

use super::messages;
use super::ports::WidgetSurface;
use crate::gallery::markup::{MarkupFn, gallery_markup};
use crate::provider::client::ImageSearch;
use crate::provider::types::Query;
use crate::session::state::PaginationSession;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Distance from the bottom, in pixels, at which the next page is requested.
pub const NEAR_BOTTOM_THRESHOLD: f64 = 10.0;

/// Scroll geometry reported by the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn is_near_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - NEAR_BOTTOM_THRESHOLD
    }
}

/// What a scroll event ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScrollOutcome {
    NotNearBottom,
    /// A page fetch is already outstanding.
    Busy,
    /// The listener was detached earlier in this search.
    Detached,
    /// The remaining counter is unset or not positive.
    NoMore,
    /// The next page would run past the reported total; nothing was fetched.
    Exhausted,
    /// The provider returned an empty page.
    EndReached,
    Loaded {
        page: u32,
        hits: usize,
        remaining: i64,
    },
    /// A newer search replaced the one this page was fetched for.
    Stale,
    Failed,
}

pub struct ScrollController<F> {
    provider: Arc<F>,
    markup: MarkupFn,
}

impl<F> Clone for ScrollController<F> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            markup: self.markup,
        }
    }
}

impl<F: ImageSearch> ScrollController<F> {
    pub fn new(provider: Arc<F>) -> Self {
        Self::with_markup(provider, gallery_markup)
    }

    pub fn with_markup(provider: Arc<F>, markup: MarkupFn) -> Self {
        Self { provider, markup }
    }

    /// Handles one scroll event for `session`.
    pub async fn on_scroll<S>(
        &self,
        session: &PaginationSession,
        metrics: ScrollMetrics,
        surface: &mut S,
    ) -> ScrollOutcome
    where
        S: WidgetSurface + Send,
    {
        if !metrics.is_near_bottom() {
            return ScrollOutcome::NotNearBottom;
        }

        // Raised before the first await; dropped on every return below.
        let Some(_guard) = session.try_begin_fetch() else {
            tracing::trace!("Scroll ignored, page fetch already in flight");
            return ScrollOutcome::Busy;
        };

        let snapshot = session.snapshot().await;
        if !snapshot.listening {
            return ScrollOutcome::Detached;
        }
        if !snapshot.has_more() {
            return ScrollOutcome::NoMore;
        }
        let Some(query) = snapshot.query else {
            return ScrollOutcome::NoMore;
        };

        let generation = snapshot.generation;
        let next_page = snapshot.page + 1;
        let total_hits = snapshot.total_hits.unwrap_or(0);

        if u64::from(next_page) * u64::from(self.provider.per_page()) > total_hits {
            tracing::info!(
                "Page {} of '{}' would start past {} results, stopping",
                next_page,
                query,
                total_hits
            );
            self.stop(session, generation, surface).await;
            return ScrollOutcome::Exhausted;
        }

        let e = match self
            .load_page(session, generation, &query, next_page, surface)
            .await
        {
            Ok(outcome) => return outcome,
            Err(e) => e,
        };

        if session.snapshot().await.generation != generation {
            tracing::debug!(
                "Dropping failure of page {} for superseded search '{}': {:#}",
                next_page,
                query,
                e
            );
            return ScrollOutcome::Stale;
        }

        tracing::error!(
            "An error occurred while loading page {} for '{}': {:#}",
            next_page,
            query,
            e
        );
        surface.failure(messages::PAGINATION_FAILED);
        ScrollOutcome::Failed
    }

    async fn load_page<S>(
        &self,
        session: &PaginationSession,
        generation: u64,
        query: &Query,
        page_number: u32,
        surface: &mut S,
    ) -> Result<ScrollOutcome>
    where
        S: WidgetSurface + Send,
    {
        let page = self.provider.fetch_page(query, page_number).await?;

        if page.is_empty() {
            return Ok(if self.stop(session, generation, surface).await {
                ScrollOutcome::EndReached
            } else {
                ScrollOutcome::Stale
            });
        }

        let hits = page.hits.len();
        let Some(remaining) = session
            .record_next_page(generation, page_number, hits)
            .await
        else {
            tracing::debug!("Discarding page {} of superseded search '{}'", page_number, query);
            return Ok(ScrollOutcome::Stale);
        };

        surface.append_markup((self.markup)(&page.hits));
        surface.refresh_lightbox();
        surface.smooth_scroll();

        tracing::info!(
            "Loaded page {} for '{}' ({} hits, {} remaining)",
            page_number,
            query,
            hits,
            remaining
        );

        if remaining <= 0 {
            self.stop(session, generation, surface).await;
        }

        Ok(ScrollOutcome::Loaded {
            page: page_number,
            hits,
            remaining,
        })
    }

    /// Detaches the listener and reports the end of results.
    ///
    /// Returns false when `generation` is no longer current; nothing is shown then.
    async fn stop<S>(&self, session: &PaginationSession, generation: u64, surface: &mut S) -> bool
    where
        S: WidgetSurface + Send,
    {
        if !session.detach(generation).await {
            return false;
        }
        surface.detach_scroll();
        surface.info(messages::END_OF_RESULTS);
        true
    }
}
