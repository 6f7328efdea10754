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
    models::{CreateClassRequest, SchoolClass, UpdateClassRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/classes",
    tag = "Classes",
    responses((status = 200, body = [SchoolClass]))
)]
pub async fn list_classes(State(state): State<AppState>) -> Json<Vec<SchoolClass>> {
    let registry = state.registry.read().await;
    Json(registry.list_classes())
}

#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class identifier")),
    tag = "Classes",
    responses(
        (status = 200, body = SchoolClass),
        (status = 404, description = "No class with this id")
    )
)]
pub async fn get_class(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<SchoolClass>, ApiError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.get_class(id)?))
}

#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassRequest,
    tag = "Classes",
    responses((status = 201, body = SchoolClass))
)]
pub async fn create_class(
    State(state): State<AppState>,
    Json(request): Json<CreateClassRequest>,
) -> (StatusCode, Json<SchoolClass>) {
    let mut registry = state.registry.write().await;
    let class = registry.create_class(request);
    (StatusCode::CREATED, Json(class))
}

#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class identifier")),
    request_body = UpdateClassRequest,
    tag = "Classes",
    responses(
        (status = 200, body = SchoolClass),
        (status = 404, description = "No class with this id")
    )
)]
pub async fn update_class(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateClassRequest>,
) -> Result<Json<SchoolClass>, ApiError> {
    let mut registry = state.registry.write().await;
    Ok(Json(registry.update_class(id, request)?))
}

#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(("id" = i64, Path, description = "Class identifier")),
    tag = "Classes",
    responses(
        (status = 204),
        (status = 404, description = "No class with this id")
    )
)]
pub async fn delete_class(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut registry = state.registry.write().await;
    registry.delete_class(id)?;
    Ok(StatusCode::NO_CONTENT)
}
