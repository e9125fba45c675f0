// src/shell.rs
// Static shell gate: login page for anonymous callers, the app shell for
// authenticated ones.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        HeaderMap, StatusCode, Uri,
        header::{CONTENT_TYPE, COOKIE},
    },
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::session::token_from_cookie_header;
use crate::state::AppState;

/// Router fallback for every unmatched path.
pub async fn shell_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let logged_in = match session_token(&headers) {
        Some(token) => state.sessions.is_logged_in(&token).await,
        None => false,
    };

    // Anonymous callers always get the login page.
    if !logged_in {
        return serve_document(&state.static_dir.join("login.html"), "login.html not found").await;
    }

    let requested = uri.path().trim_start_matches('/');
    if !requested.is_empty() {
        if let Some(asset) = resolve_asset(&state.static_dir, requested) {
            return serve_document(&asset, "asset not found").await;
        }
    }

    serve_document(&state.static_dir.join("index.html"), "index.html not found").await
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)?
        .to_str()
        .ok()
        .and_then(token_from_cookie_header)
}

/// A requested asset must resolve to an existing file inside the static
/// directory; traversal components disqualify it.
fn resolve_asset(static_dir: &Path, requested: &str) -> Option<PathBuf> {
    let rel = Path::new(requested);
    if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
        return None;
    }
    let candidate = static_dir.join(rel);
    candidate.is_file().then_some(candidate)
}

/// Serve a file from disk. Failures here answer in plain text, not JSON.
async fn serve_document(path: &Path, missing: &str) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(path).first_or_text_plain();
            ([(CONTENT_TYPE, mime.to_string())], bytes).into_response()
        }
        Err(e) => {
            debug!("Static document {} unavailable: {}", path.display(), e);
            (StatusCode::NOT_FOUND, missing.to_string()).into_response()
        }
    }
}
