// src/api/http/media.rs
// GET /api/image/{*path} and GET /api/thumbnail/{*path}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path as UrlPath, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::browser::{check_path_allowed, is_image_file, placeholder_data_uri};
use crate::state::AppState;

/// The wildcard segment names an absolute filesystem path; axum strips
/// the leading slash, so it is restored here.
fn target_path(raw: &str) -> PathBuf {
    PathBuf::from(format!("/{}", raw.trim_start_matches('/')))
}

/// Shared preconditions for both media endpoints: confinement, existence,
/// and a recognized image extension.
fn check_image_target(path: &Path, root: &Path) -> ApiResult<()> {
    check_path_allowed(path, root)?;

    if !path.exists() {
        return Err(ApiError::not_found("Image not found"));
    }
    if !is_image_file(&path.to_string_lossy()) {
        return Err(ApiError::bad_request("Not an image file"));
    }

    Ok(())
}

/// Stream raw image bytes with an inferred content type.
pub async fn serve_image(
    State(state): State<Arc<AppState>>,
    UrlPath(raw): UrlPath<String>,
) -> ApiResult<impl IntoResponse> {
    let path = target_path(&raw);
    debug!("Serving image {}", path.display());

    check_image_target(&path, &state.browse_root)?;

    let bytes = std::fs::read(&path)
        .map_err(|e| ApiError::internal(format!("Error serving image: {e}")))?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok(([(CONTENT_TYPE, mime.to_string())], bytes))
}

/// Serve the placeholder thumbnail for an image path.
pub async fn serve_thumbnail(
    State(state): State<Arc<AppState>>,
    UrlPath(raw): UrlPath<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let path = target_path(&raw);
    debug!("Serving thumbnail for {}", path.display());

    check_image_target(&path, &state.browse_root)?;

    Ok(Json(json!({ "thumbnail": placeholder_data_uri() })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_restores_leading_slash() {
        assert_eq!(target_path("tmp/pics/cat.jpg"), PathBuf::from("/tmp/pics/cat.jpg"));
        assert_eq!(target_path("/tmp/pics/cat.jpg"), PathBuf::from("/tmp/pics/cat.jpg"));
    }
}
