// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{CreateTeacherRequest, Teacher, UpdateTeacherRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = "Teachers",
    responses((status = 200, body = [Teacher]))
)]
pub async fn list_teachers(State(state): State<AppState>) -> Json<Vec<Teacher>> {
    let registry = state.registry.read().await;
    Json(registry.list_teachers())
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher identifier")),
    tag = "Teachers",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = Teacher),
        (status = 404, description = "No teacher with this id")
    )
)]
pub async fn get_teacher(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Teacher>, ApiError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.get_teacher(id)?))
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherRequest,
    tag = "Teachers",
    security(("bearer_token" = [])),
    responses((status = 201, body = Teacher))
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    Json(request): Json<CreateTeacherRequest>,
) -> (StatusCode, Json<Teacher>) {
    let mut registry = state.registry.write().await;
    let teacher = registry.create_teacher(request);
    (StatusCode::CREATED, Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher identifier")),
    request_body = UpdateTeacherRequest,
    tag = "Teachers",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = Teacher),
        (status = 404, description = "No teacher with this id")
    )
)]
pub async fn update_teacher(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateTeacherRequest>,
) -> Result<Json<Teacher>, ApiError> {
    let mut registry = state.registry.write().await;
    Ok(Json(registry.update_teacher(id, request)?))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = i64, Path, description = "Teacher identifier")),
    tag = "Teachers",
    security(("bearer_token" = [])),
    responses(
        (status = 204),
        (status = 404, description = "No teacher with this id")
    )
)]
pub async fn delete_teacher(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut registry = state.registry.write().await;
    registry.delete_teacher(id)?;
    Ok(StatusCode::NO_CONTENT)
}
