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
    models::{Course, CreateCourseRequest, UpdateCourseRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    responses((status = 200, body = [Course]))
)]
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let registry = state.registry.read().await;
    Json(registry.list_courses())
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course identifier")),
    tag = "Courses",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = Course),
        (status = 404, description = "No course with this id")
    )
)]
pub async fn get_course(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Course>, ApiError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.get_course(id)?))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequest,
    tag = "Courses",
    security(("bearer_token" = [])),
    responses((status = 201, body = Course))
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> (StatusCode, Json<Course>) {
    let mut registry = state.registry.write().await;
    let course = registry.create_course(request);
    (StatusCode::CREATED, Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course identifier")),
    request_body = UpdateCourseRequest,
    tag = "Courses",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = Course),
        (status = 404, description = "No course with this id")
    )
)]
pub async fn update_course(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<Json<Course>, ApiError> {
    let mut registry = state.registry.write().await;
    Ok(Json(registry.update_course(id, request)?))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = i64, Path, description = "Course identifier")),
    tag = "Courses",
    responses(
        (status = 204),
        (status = 404, description = "No course with this id")
    )
)]
pub async fn delete_course(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut registry = state.registry.write().await;
    registry.delete_course(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::store::{InMemoryIdentities, SchoolRegistry};
    use std::sync::Arc;

    fn test_state() -> AppState {
        let tokens = Arc::new(TokenService::new(
            "0123456789abcdef0123456789abcdef",
            "registrar",
            "registrar-clients",
        ));
        AppState::new(Arc::new(InMemoryIdentities::new()), tokens, SchoolRegistry::new())
    }

    #[tokio::test]
    async fn course_crud_round_trip() {
        let state = test_state();

        let (status, Json(created)) = create_course(
            State(state.clone()),
            Json(CreateCourseRequest {
                name: "Mathematics".into(),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.course_id, 1);
        assert_eq!(created.name, "Mathematics");

        let Json(updated) = update_course(
            Path(1),
            State(state.clone()),
            Json(UpdateCourseRequest {
                name: "Applied Mathematics".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Applied Mathematics");

        let status = delete_course(Path(1), State(state.clone())).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = get_course(Path(1), State(state)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Course 1 not found");
    }

    #[tokio::test]
    async fn list_courses_returns_all() {
        let state = test_state();
        {
            let mut registry = state.registry.write().await;
            registry.create_course(CreateCourseRequest { name: "History".into() });
            registry.create_course(CreateCourseRequest { name: "Physics".into() });
        }

        let Json(courses) = list_courses(State(state)).await;
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_id, 1);
    }
}
