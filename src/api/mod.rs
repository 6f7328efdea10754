// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! # HTTP API
//!
//! One handler per (route, verb), JSON in and out. Every `/api/..` route is
//! wrapped by [`enforce_policy`], which consults the static policy table
//! before the handler runs; the routes here are registered with the exact
//! templates the table lists, so the two can never drift apart silently.
//! Swagger UI is mounted outside that layer at `/docs`.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{enforce_policy, Role},
    models::{
        AuthResult, Course, CreateClassRequest, CreateCourseRequest, CreateExamRequest,
        CreateStudentRequest, CreateTeacherRequest, Exam, ExamView, LoginRequest, SchoolClass,
        Student, Teacher, UpdateClassRequest, UpdateCourseRequest, UpdateExamRequest,
        UpdateStudentRequest, UpdateTeacherRequest,
    },
    state::AppState,
};

pub mod auth;
pub mod classes;
pub mod courses;
pub mod exams;
pub mod students;
pub mod teachers;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route(
            "/api/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/api/students/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/api/teachers",
            get(teachers::list_teachers).post(teachers::create_teacher),
        )
        .route(
            "/api/teachers/{id}",
            get(teachers::get_teacher)
                .put(teachers::update_teacher)
                .delete(teachers::delete_teacher),
        )
        .route(
            "/api/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/courses/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/api/exams",
            get(exams::list_exams).post(exams::create_exam),
        )
        .route(
            "/api/exams/{id}",
            get(exams::get_exam)
                .put(exams::update_exam)
                .delete(exams::delete_exam),
        )
        .route(
            "/api/classes",
            get(classes::list_classes).post(classes::create_class),
        )
        .route(
            "/api/classes/{id}",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), enforce_policy))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        students::list_students,
        students::get_student,
        students::create_student,
        students::update_student,
        students::delete_student,
        teachers::list_teachers,
        teachers::get_teacher,
        teachers::create_teacher,
        teachers::update_teacher,
        teachers::delete_teacher,
        courses::list_courses,
        courses::get_course,
        courses::create_course,
        courses::update_course,
        courses::delete_course,
        exams::list_exams,
        exams::get_exam,
        exams::create_exam,
        exams::update_exam,
        exams::delete_exam,
        classes::list_classes,
        classes::get_class,
        classes::create_class,
        classes::update_class,
        classes::delete_class
    ),
    components(
        schemas(
            Role,
            LoginRequest,
            AuthResult,
            Student,
            Teacher,
            Course,
            SchoolClass,
            Exam,
            ExamView,
            CreateStudentRequest,
            UpdateStudentRequest,
            CreateTeacherRequest,
            UpdateTeacherRequest,
            CreateCourseRequest,
            UpdateCourseRequest,
            CreateClassRequest,
            UpdateClassRequest,
            CreateExamRequest,
            UpdateExamRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Credential verification and token issuance"),
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Exams", description = "Exam results with joined names"),
        (name = "Classes", description = "Class groups")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
