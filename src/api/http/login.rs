// src/api/http/login.rs
// POST /api/login - trust-the-client login gate

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::session::{Session, session_cookie};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

/// Marks the caller's session authenticated when every connection field
/// is present. The credentials are recorded verbatim, never verified
/// against the remote host.
pub async fn login(State(state): State<Arc<AppState>>, Json(req): Json<LoginRequest>) -> Response {
    if req.ip.is_empty() || req.port.is_empty() || req.username.is_empty() || req.password.is_empty()
    {
        let body = LoginResponse {
            success: false,
            msg: Some("Missing connection details".to_string()),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let session = Session {
        logged_in: true,
        ip: req.ip.clone(),
        port: req.port,
        username: req.username.clone(),
        password: req.password,
        created_at: Utc::now(),
    };
    let token = state.sessions.create(session).await;

    info!("Login recorded for {}@{}", req.username, req.ip);

    (
        [(SET_COOKIE, session_cookie(&token))],
        Json(LoginResponse {
            success: true,
            msg: None,
        }),
    )
        .into_response()
}
