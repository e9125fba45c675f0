// src/api/http/browse.rs
// GET /api/browse - directory listing

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::debug;

use crate::api::error::ApiResult;
use crate::browser::{self, DirectoryListing};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

/// List the immediate children of an absolute directory path.
pub async fn browse_directory(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> ApiResult<Json<DirectoryListing>> {
    debug!("Browsing {}", params.path);

    let path = PathBuf::from(&params.path);
    let listing = browser::list_directory(&path, &state.browse_root)?;

    Ok(Json(listing))
}
