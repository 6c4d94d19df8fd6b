use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use service::auth::domain::LoginInput;
use service::auth::AuthService;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
}

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::LoginResponse),
        (status = 400, description = "Malformed body or input", body = crate::openapi::ErrorResponse),
        (status = 401, description = "Incorrect e-mail or password", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<LoginOutput>, ApiError> {
    let Json(input) = payload.map_err(|e| {
        debug!(reason = %e.body_text(), "login body rejected");
        ApiError::BadRequest("invalid request body".into())
    })?;
    let token = state.auth.login_input(input).await?;
    Ok(Json(LoginOutput { token }))
}
