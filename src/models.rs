// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Students / Teachers**: people records (name pairs keyed by id)
//! - **Courses / Classes**: named units keyed by id
//! - **Exams**: a grade linking a student, a course, and a teacher, plus the
//!   joined [`ExamView`] projection used by read endpoints
//! - **Authentication**: login request and result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;

// =============================================================================
// Student Models
// =============================================================================

/// A student record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Student {
    /// Unique identifier, assigned by the registry.
    pub student_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Request to create a student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Request to update an existing student.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// Teacher Models
// =============================================================================

/// A teacher record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Teacher {
    /// Unique identifier, assigned by the registry.
    pub teacher_id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Request to create a teacher.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Request to update an existing teacher.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// Course Models
// =============================================================================

/// A course offered by the school.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Course {
    /// Unique identifier, assigned by the registry.
    pub course_id: i64,
    /// Course name, e.g. "Mathematics".
    pub name: String,
}

/// Request to create a course.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    pub name: String,
}

/// Request to update an existing course.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub name: String,
}

// =============================================================================
// Class Models
// =============================================================================

/// A school class (homeroom grouping).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SchoolClass {
    /// Unique identifier, assigned by the registry.
    pub class_id: i64,
    /// Class name, e.g. "10-B".
    pub name: String,
}

/// Request to create a class.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateClassRequest {
    pub name: String,
}

/// Request to update an existing class.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateClassRequest {
    pub name: String,
}

// =============================================================================
// Exam Models
// =============================================================================

/// An exam result: a grade linking a student, a course, and the teacher
/// who graded it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Exam {
    /// Unique identifier, assigned by the registry.
    pub exam_id: i64,
    /// Course the exam was taken in.
    pub course_id: i64,
    /// Student who took the exam.
    pub student_id: i64,
    /// Teacher who graded the exam.
    pub teacher_id: i64,
    /// Grade awarded.
    pub grade: i32,
}

/// Request to create an exam record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateExamRequest {
    pub course_id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub grade: i32,
}

/// Request to update an existing exam record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateExamRequest {
    pub course_id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub grade: i32,
}

/// An exam joined with the names of its course, student, and teacher.
///
/// Read endpoints return this projection instead of the raw [`Exam`] row.
/// The join is inner: an exam whose course, student, or teacher no longer
/// exists has no view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ExamView {
    pub exam_id: i64,
    pub course_id: i64,
    /// Name of the course.
    pub course_name: String,
    pub student_id: i64,
    /// Given name of the student.
    pub student_first_name: String,
    /// Family name of the student.
    pub student_last_name: String,
    pub teacher_id: i64,
    /// Given name of the teacher.
    pub teacher_first_name: String,
    /// Family name of the teacher.
    pub teacher_last_name: String,
    /// Grade awarded.
    pub grade: i32,
}

// =============================================================================
// Authentication Models
// =============================================================================

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username to authenticate as.
    pub username: String,
    /// The account secret. Never stored or logged in plaintext.
    pub secret: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResult {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Username the token was issued to.
    pub username: String,
    /// Role embedded in the token.
    pub role: Role,
    /// When the token stops being accepted. Equals the token's own expiry
    /// claim, not a separately computed timestamp.
    pub expires_at: DateTime<Utc>,
}
