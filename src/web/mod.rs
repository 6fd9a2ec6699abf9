//! Widget HTTP Server Module
//!
//! Serves the gallery page and the JSON endpoints its script calls.
//!
//! ## Overview
//! Each browser page opens a session (`POST /api/session`) and then forwards
//! form submissions and scroll metrics. The controllers run server-side
//! against a `Frame`; the recorded effects are returned for the page to
//! replay on its DOM.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers.
//! - **`protocol`**: Request/response DTOs and endpoint paths.
//! - **`registry`**: Live pagination sessions keyed by id; idle ones are evicted.

pub mod handlers;
pub mod protocol;
pub mod registry;


use crate::provider::client::ImageSearch;
use crate::widget::scroll::ScrollController;
use crate::widget::search::SearchController;
use axum::Router;
use axum::routing::{delete, get, post};
use handlers::*;
use protocol::*;
use registry::SessionRegistry;
use std::sync::Arc;

/// Shared state of the server.
pub struct AppState<F> {
    pub sessions: Arc<SessionRegistry>,
    pub search: SearchController<F>,
    pub scroll: ScrollController<F>,
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            search: self.search.clone(),
            scroll: self.scroll.clone(),
        }
    }
}

impl<F: ImageSearch> AppState<F> {
    pub fn new(provider: Arc<F>) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            search: SearchController::new(provider.clone()),
            scroll: ScrollController::new(provider),
        }
    }
}

/// Builds the widget router.
pub fn router<F: ImageSearch + 'static>(state: AppState<F>) -> Router {
    Router::new()
        .route("/", get(handle_ui))
        .route(ENDPOINT_SESSION, post(handle_open_session::<F>))
        .route(
            &format!("{}/:id", ENDPOINT_SESSION),
            delete(handle_close_session::<F>),
        )
        .route(ENDPOINT_SEARCH, post(handle_search::<F>))
        .route(ENDPOINT_SCROLL, post(handle_scroll::<F>))
        .with_state(state)
}
