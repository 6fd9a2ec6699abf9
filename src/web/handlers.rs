use super::AppState;
use super::protocol::*;
use super::registry::SessionId;
use crate::provider::client::ImageSearch;
use crate::session::state::PaginationSession;
use crate::widget::frame::Frame;
use crate::widget::scroll::{ScrollMetrics, ScrollOutcome};
use crate::widget::search::SearchOutcome;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use std::sync::Arc;

pub async fn handle_ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

pub async fn handle_open_session<F: ImageSearch + 'static>(
    State(state): State<AppState<F>>,
) -> (StatusCode, Json<SessionResponse>) {
    let session_id = state.sessions.open();
    tracing::debug!(
        "Opened session {} ({} live)",
        session_id,
        state.sessions.len()
    );
    (StatusCode::CREATED, Json(SessionResponse { session_id }))
}

pub async fn handle_close_session<F: ImageSearch + 'static>(
    State(state): State<AppState<F>>,
    Path(id): Path<String>,
) -> StatusCode {
    let session_id = SessionId(id);
    if state.sessions.close(&session_id) {
        tracing::debug!("Closed session {}", session_id);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn handle_search<F: ImageSearch + 'static>(
    State(state): State<AppState<F>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<FrameResponse<SearchOutcome>>, (StatusCode, String)> {
    let session = lookup_session(&state, &req.session_id)?;

    let mut frame = Frame::new();
    let outcome = state.search.submit(&session, &req.query, &mut frame).await;
    tracing::debug!("Search in session {}: {:?}", req.session_id, outcome);

    Ok(Json(FrameResponse {
        outcome,
        effects: frame.effects,
    }))
}

pub async fn handle_scroll<F: ImageSearch + 'static>(
    State(state): State<AppState<F>>,
    Json(req): Json<ScrollRequest>,
) -> Result<Json<FrameResponse<ScrollOutcome>>, (StatusCode, String)> {
    let session = lookup_session(&state, &req.session_id)?;
    let metrics = ScrollMetrics {
        scroll_top: req.scroll_top,
        client_height: req.client_height,
        scroll_height: req.scroll_height,
    };

    let mut frame = Frame::new();
    let outcome = state.scroll.on_scroll(&session, metrics, &mut frame).await;
    tracing::trace!("Scroll in session {}: {:?}", req.session_id, outcome);

    Ok(Json(FrameResponse {
        outcome,
        effects: frame.effects,
    }))
}

fn lookup_session<F>(
    state: &AppState<F>,
    session_id: &SessionId,
) -> Result<Arc<PaginationSession>, (StatusCode, String)> {
    state.sessions.get(session_id).ok_or_else(|| {
        tracing::warn!("Request for unknown session {}", session_id);
        (
            StatusCode::NOT_FOUND,
            format!("Unknown session: {}", session_id),
        )
    })
}
