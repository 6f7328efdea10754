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
    models::{CreateStudentRequest, Student, UpdateStudentRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    responses((status = 200, body = [Student]))
)]
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let registry = state.registry.read().await;
    Json(registry.list_students())
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    tag = "Students",
    responses(
        (status = 200, body = Student),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn get_student(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Student>, ApiError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.get_student(id)?))
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    tag = "Students",
    responses((status = 201, body = Student))
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> (StatusCode, Json<Student>) {
    let mut registry = state.registry.write().await;
    let student = registry.create_student(request);
    (StatusCode::CREATED, Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = UpdateStudentRequest,
    tag = "Students",
    responses(
        (status = 200, body = Student),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn update_student(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<Student>, ApiError> {
    let mut registry = state.registry.write().await;
    Ok(Json(registry.update_student(id, request)?))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    tag = "Students",
    responses(
        (status = 204),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn delete_student(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut registry = state.registry.write().await;
    registry.delete_student(id)?;
    Ok(StatusCode::NO_CONTENT)
}
