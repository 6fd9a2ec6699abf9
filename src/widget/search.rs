//! Search Controller
//!
//! Handles one form submission: validate, reset the session, fetch page 1,
//! render it or report why nothing was rendered.

use super::messages;
use super::ports::WidgetSurface;
use crate::gallery::markup::{MarkupFn, gallery_markup};
use crate::provider::client::ImageSearch;
use crate::provider::types::Query;
use crate::session::state::PaginationSession;

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

/// What a submission ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Another search of this session is still outstanding; nothing was done.
    Busy,
    /// The query was blank; no fetch was made.
    Rejected,
    /// The provider had no matches.
    Empty,
    /// The first page was rendered.
    Loaded {
        total_hits: u64,
        shown: usize,
        remaining: i64,
    },
    /// The session moved to a newer search before the page landed.
    Stale,
    /// The fetch failed; a generic notice was shown.
    Failed,
}

pub struct SearchController<F> {
    provider: Arc<F>,
    markup: MarkupFn,
}

impl<F> Clone for SearchController<F> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            markup: self.markup,
        }
    }
}

impl<F: ImageSearch> SearchController<F> {
    pub fn new(provider: Arc<F>) -> Self {
        Self::with_markup(provider, gallery_markup)
    }

    pub fn with_markup(provider: Arc<F>, markup: MarkupFn) -> Self {
        Self { provider, markup }
    }

    /// Runs a form submission against `session`, driving `surface`.
    pub async fn submit<S>(
        &self,
        session: &PaginationSession,
        raw_query: &str,
        surface: &mut S,
    ) -> SearchOutcome
    where
        S: WidgetSurface + Send,
    {
        let Some(_guard) = session.try_begin_search() else {
            tracing::debug!("Ignoring submission while a search is in flight");
            return SearchOutcome::Busy;
        };

        surface.clear_gallery();
        surface.show_loading();

        let Some(query) = Query::parse(raw_query) else {
            surface.hide_loading();
            surface.failure(messages::EMPTY_QUERY);
            return SearchOutcome::Rejected;
        };

        let generation = session.begin_search(query.clone()).await;
        tracing::info!("Searching for '{}' (generation {})", query, generation);

        match self
            .load_first_page(session, generation, &query, surface)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                surface.hide_loading();
                tracing::error!("An error occurred during the search for '{}': {:#}", query, e);
                surface.failure(messages::SEARCH_FAILED);
                SearchOutcome::Failed
            }
        }
    }

    async fn load_first_page<S>(
        &self,
        session: &PaginationSession,
        generation: u64,
        query: &Query,
        surface: &mut S,
    ) -> Result<SearchOutcome>
    where
        S: WidgetSurface + Send,
    {
        let page = self.provider.fetch_page(query, 1).await?;

        if page.is_empty() {
            surface.hide_loading();
            surface.failure(messages::NO_MATCHES);
            tracing::info!("No images found for '{}'", query);
            return Ok(SearchOutcome::Empty);
        }

        let shown = page.hits.len();
        let Some(remaining) = session
            .record_first_page(generation, page.total_hits, shown)
            .await
        else {
            surface.hide_loading();
            return Ok(SearchOutcome::Stale);
        };

        surface.success(&messages::found_images(page.total_hits));
        surface.append_markup((self.markup)(&page.hits));
        surface.hide_loading();
        surface.refresh_lightbox();

        tracing::info!(
            "Rendered {} of {} images for '{}' ({} remaining)",
            shown,
            page.total_hits,
            query,
            remaining
        );

        Ok(SearchOutcome::Loaded {
            total_hits: page.total_hits,
            shown,
            remaining,
        })
    }
}
