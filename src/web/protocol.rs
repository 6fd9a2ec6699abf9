//! HTTP contracts between the gallery page and the server.

use super::registry::SessionId;
use crate::widget::frame::UiEffect;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_SESSION: &str = "/api/session";
pub const ENDPOINT_SEARCH: &str = "/api/search";
pub const ENDPOINT_SCROLL: &str = "/api/scroll";

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub session_id: SessionId,
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub session_id: SessionId,
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

/// Controller outcome plus the UI effects to replay, in order.
#[derive(Debug, Serialize, Deserialize)]
pub struct FrameResponse<O> {
    pub outcome: O,
    pub effects: Vec<UiEffect>,
}
