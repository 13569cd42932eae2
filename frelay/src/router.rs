//! HTTP routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::Uri,
    routing::get,
};
use fprovider::Repertory;

use crate::envelope::{Envelope, TextContext};

const SAY_PREFIX: &str = "/api/say/";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repertory: Arc<Repertory>,
    /// Provider name the say route dispatches to.
    pub provider: Arc<str>,
}

impl AppState {
    pub fn new(repertory: Arc<Repertory>, provider: impl Into<Arc<str>>) -> Self {
        Self {
            repertory,
            provider: provider.into(),
        }
    }
}

/// Build the axum router with the `/api/say/{context}` endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/say/{context}", get(say))
        .with_state(state)
}

/// Answer the question in the path. Always a 200 envelope.
async fn say(State(state): State<AppState>, uri: Uri) -> Json<Envelope<TextContext>> {
    let question = decode_question(uri.path());
    let answer = state.repertory.acquire(&state.provider, &question).await;
    Json(Envelope::ok(TextContext::from(answer)))
}

/// Percent-decode the question segment. Bytes that are not UTF-8 become
/// U+FFFD instead of rejecting the request.
fn decode_question(path: &str) -> String {
    let raw = path.strip_prefix(SAY_PREFIX).unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}
