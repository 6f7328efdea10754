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
    models::{CreateExamRequest, Exam, ExamView, UpdateExamRequest},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/exams",
    tag = "Exams",
    security(("bearer_token" = [])),
    responses((status = 200, body = [ExamView]))
)]
pub async fn list_exams(State(state): State<AppState>) -> Json<Vec<ExamView>> {
    let registry = state.registry.read().await;
    Json(registry.list_exams())
}

#[utoipa::path(
    get,
    path = "/api/exams/{id}",
    params(("id" = i64, Path, description = "Exam identifier")),
    tag = "Exams",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = ExamView),
        (status = 404, description = "No exam with this id")
    )
)]
pub async fn get_exam(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ExamView>, ApiError> {
    let registry = state.registry.read().await;
    Ok(Json(registry.get_exam(id)?))
}

#[utoipa::path(
    post,
    path = "/api/exams",
    request_body = CreateExamRequest,
    tag = "Exams",
    responses((status = 201, body = Exam))
)]
pub async fn create_exam(
    State(state): State<AppState>,
    Json(request): Json<CreateExamRequest>,
) -> (StatusCode, Json<Exam>) {
    let mut registry = state.registry.write().await;
    let exam = registry.create_exam(request);
    (StatusCode::CREATED, Json(exam))
}

#[utoipa::path(
    put,
    path = "/api/exams/{id}",
    params(("id" = i64, Path, description = "Exam identifier")),
    request_body = UpdateExamRequest,
    tag = "Exams",
    responses(
        (status = 200, body = Exam),
        (status = 404, description = "No exam with this id")
    )
)]
pub async fn update_exam(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateExamRequest>,
) -> Result<Json<Exam>, ApiError> {
    let mut registry = state.registry.write().await;
    Ok(Json(registry.update_exam(id, request)?))
}

#[utoipa::path(
    delete,
    path = "/api/exams/{id}",
    params(("id" = i64, Path, description = "Exam identifier")),
    tag = "Exams",
    responses(
        (status = 204),
        (status = 404, description = "No exam with this id")
    )
)]
pub async fn delete_exam(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut registry = state.registry.write().await;
    registry.delete_exam(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::models::{CreateCourseRequest, CreateStudentRequest, CreateTeacherRequest};
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

    async fn seed_references(state: &AppState) {
        let mut registry = state.registry.write().await;
        registry.create_course(CreateCourseRequest { name: "Chemistry".into() });
        registry.create_student(CreateStudentRequest {
            first_name: "Ada".into(),
            last_name: "Kaya".into(),
        });
        registry.create_teacher(CreateTeacherRequest {
            first_name: "Erk".into(),
            last_name: "Demir".into(),
        });
    }

    #[tokio::test]
    async fn exam_reads_carry_joined_names() {
        let state = test_state();
        seed_references(&state).await;

        let (status, Json(exam)) = create_exam(
            State(state.clone()),
            Json(CreateExamRequest {
                course_id: 1,
                student_id: 1,
                teacher_id: 1,
                grade: 87,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(exam.exam_id, 1);

        let Json(view) = get_exam(Path(1), State(state.clone())).await.unwrap();
        assert_eq!(view.course_name, "Chemistry");
        assert_eq!(view.student_first_name, "Ada");
        assert_eq!(view.teacher_last_name, "Demir");
        assert_eq!(view.grade, 87);

        let Json(listed) = list_exams(State(state)).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], view);
    }

    #[tokio::test]
    async fn create_accepts_dangling_references_but_reads_hide_them() {
        let state = test_state();

        let (status, Json(exam)) = create_exam(
            State(state.clone()),
            Json(CreateExamRequest {
                course_id: 99,
                student_id: 99,
                teacher_id: 99,
                grade: 50,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let Json(listed) = list_exams(State(state.clone())).await;
        assert!(listed.is_empty());

        let err = get_exam(Path(exam.exam_id), State(state)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_exam_changes_grade() {
        let state = test_state();
        seed_references(&state).await;
        create_exam(
            State(state.clone()),
            Json(CreateExamRequest {
                course_id: 1,
                student_id: 1,
                teacher_id: 1,
                grade: 40,
            }),
        )
        .await;

        let Json(updated) = update_exam(
            Path(1),
            State(state.clone()),
            Json(UpdateExamRequest {
                course_id: 1,
                student_id: 1,
                teacher_id: 1,
                grade: 95,
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated.grade, 95);

        let Json(view) = get_exam(Path(1), State(state)).await.unwrap();
        assert_eq!(view.grade, 95);
    }

    #[tokio::test]
    async fn delete_missing_exam_is_404() {
        let state = test_state();
        let err = delete_exam(Path(7), State(state)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Exam 7 not found");
    }
}
