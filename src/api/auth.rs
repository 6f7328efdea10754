// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::ApiError,
    models::{AuthResult, LoginRequest},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, body = AuthResult),
        (status = 400, description = "Empty username or malformed payload"),
        (status = 401, description = "Unknown username or wrong secret"),
        (status = 503, description = "Identity store unavailable")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResult>, Response> {
    if request.username.is_empty() {
        return Err(ApiError::bad_request("Username must not be empty").into_response());
    }

    state
        .auth
        .login(&request.username, &request.secret)
        .map(Json)
        .map_err(IntoResponse::into_response)
}
