// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Registrar Contributors

//! In-memory school registry.
//!
//! Holds the five entity collections behind the CRUD endpoints. Ids are
//! assigned sequentially per entity, starting at 1. List operations return
//! rows sorted by id so output is deterministic across runs.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{
    Course, CreateClassRequest, CreateCourseRequest, CreateExamRequest, CreateStudentRequest,
    CreateTeacherRequest, Exam, ExamView, SchoolClass, Student, Teacher, UpdateClassRequest,
    UpdateCourseRequest, UpdateExamRequest, UpdateStudentRequest, UpdateTeacherRequest,
};

#[derive(Default)]
pub struct SchoolRegistry {
    students: HashMap<i64, Student>,
    teachers: HashMap<i64, Teacher>,
    courses: HashMap<i64, Course>,
    classes: HashMap<i64, SchoolClass>,
    exams: HashMap<i64, Exam>,
    next_student_id: i64,
    next_teacher_id: i64,
    next_course_id: i64,
    next_class_id: i64,
    next_exam_id: i64,
}

impl SchoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Students
    // =========================================================================

    pub fn list_students(&self) -> Vec<Student> {
        let mut students: Vec<_> = self.students.values().cloned().collect();
        students.sort_by_key(|s| s.student_id);
        students
    }

    pub fn get_student(&self, id: i64) -> Result<Student, ApiError> {
        self.students
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Student {id} not found")))
    }

    pub fn create_student(&mut self, request: CreateStudentRequest) -> Student {
        self.next_student_id += 1;
        let student = Student {
            student_id: self.next_student_id,
            first_name: request.first_name,
            last_name: request.last_name,
        };
        self.students.insert(student.student_id, student.clone());
        student
    }

    pub fn update_student(
        &mut self,
        id: i64,
        request: UpdateStudentRequest,
    ) -> Result<Student, ApiError> {
        let Some(student) = self.students.get_mut(&id) else {
            return Err(ApiError::not_found(format!("Student {id} not found")));
        };
        student.first_name = request.first_name;
        student.last_name = request.last_name;
        Ok(student.clone())
    }

    pub fn delete_student(&mut self, id: i64) -> Result<(), ApiError> {
        if self.students.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found(format!("Student {id} not found")))
        }
    }

    // =========================================================================
    // Teachers
    // =========================================================================

    pub fn list_teachers(&self) -> Vec<Teacher> {
        let mut teachers: Vec<_> = self.teachers.values().cloned().collect();
        teachers.sort_by_key(|t| t.teacher_id);
        teachers
    }

    pub fn get_teacher(&self, id: i64) -> Result<Teacher, ApiError> {
        self.teachers
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Teacher {id} not found")))
    }

    pub fn create_teacher(&mut self, request: CreateTeacherRequest) -> Teacher {
        self.next_teacher_id += 1;
        let teacher = Teacher {
            teacher_id: self.next_teacher_id,
            first_name: request.first_name,
            last_name: request.last_name,
        };
        self.teachers.insert(teacher.teacher_id, teacher.clone());
        teacher
    }

    pub fn update_teacher(
        &mut self,
        id: i64,
        request: UpdateTeacherRequest,
    ) -> Result<Teacher, ApiError> {
        let Some(teacher) = self.teachers.get_mut(&id) else {
            return Err(ApiError::not_found(format!("Teacher {id} not found")));
        };
        teacher.first_name = request.first_name;
        teacher.last_name = request.last_name;
        Ok(teacher.clone())
    }

    pub fn delete_teacher(&mut self, id: i64) -> Result<(), ApiError> {
        if self.teachers.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found(format!("Teacher {id} not found")))
        }
    }

    // =========================================================================
    // Courses
    // =========================================================================

    pub fn list_courses(&self) -> Vec<Course> {
        let mut courses: Vec<_> = self.courses.values().cloned().collect();
        courses.sort_by_key(|c| c.course_id);
        courses
    }

    pub fn get_course(&self, id: i64) -> Result<Course, ApiError> {
        self.courses
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Course {id} not found")))
    }

    pub fn create_course(&mut self, request: CreateCourseRequest) -> Course {
        self.next_course_id += 1;
        let course = Course {
            course_id: self.next_course_id,
            name: request.name,
        };
        self.courses.insert(course.course_id, course.clone());
        course
    }

    pub fn update_course(
        &mut self,
        id: i64,
        request: UpdateCourseRequest,
    ) -> Result<Course, ApiError> {
        let Some(course) = self.courses.get_mut(&id) else {
            return Err(ApiError::not_found(format!("Course {id} not found")));
        };
        course.name = request.name;
        Ok(course.clone())
    }

    pub fn delete_course(&mut self, id: i64) -> Result<(), ApiError> {
        if self.courses.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found(format!("Course {id} not found")))
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub fn list_classes(&self) -> Vec<SchoolClass> {
        let mut classes: Vec<_> = self.classes.values().cloned().collect();
        classes.sort_by_key(|c| c.class_id);
        classes
    }

    pub fn get_class(&self, id: i64) -> Result<SchoolClass, ApiError> {
        self.classes
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Class {id} not found")))
    }

    pub fn create_class(&mut self, request: CreateClassRequest) -> SchoolClass {
        self.next_class_id += 1;
        let class = SchoolClass {
            class_id: self.next_class_id,
            name: request.name,
        };
        self.classes.insert(class.class_id, class.clone());
        class
    }

    pub fn update_class(
        &mut self,
        id: i64,
        request: UpdateClassRequest,
    ) -> Result<SchoolClass, ApiError> {
        let Some(class) = self.classes.get_mut(&id) else {
            return Err(ApiError::not_found(format!("Class {id} not found")));
        };
        class.name = request.name;
        Ok(class.clone())
    }

    pub fn delete_class(&mut self, id: i64) -> Result<(), ApiError> {
        if self.classes.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found(format!("Class {id} not found")))
        }
    }

    // =========================================================================
    // Exams
    // =========================================================================

    /// List all exams as joined views.
    ///
    /// The join is inner: exams whose course, student, or teacher has been
    /// deleted are omitted rather than shown with holes.
    pub fn list_exams(&self) -> Vec<ExamView> {
        let mut views: Vec<_> = self
            .exams
            .values()
            .filter_map(|exam| self.join_exam(exam))
            .collect();
        views.sort_by_key(|v| v.exam_id);
        views
    }

    /// Get one exam as a joined view.
    ///
    /// An exam with a dangling reference has no view and reads as not found,
    /// same as a missing id.
    pub fn get_exam(&self, id: i64) -> Result<ExamView, ApiError> {
        self.exams
            .get(&id)
            .and_then(|exam| self.join_exam(exam))
            .ok_or_else(|| ApiError::not_found(format!("Exam {id} not found")))
    }

    /// Create an exam row.
    ///
    /// References are not checked here; a row pointing at entities that do
    /// not (or no longer) exist simply never joins into a view.
    pub fn create_exam(&mut self, request: CreateExamRequest) -> Exam {
        self.next_exam_id += 1;
        let exam = Exam {
            exam_id: self.next_exam_id,
            course_id: request.course_id,
            student_id: request.student_id,
            teacher_id: request.teacher_id,
            grade: request.grade,
        };
        self.exams.insert(exam.exam_id, exam.clone());
        exam
    }

    pub fn update_exam(&mut self, id: i64, request: UpdateExamRequest) -> Result<Exam, ApiError> {
        let Some(exam) = self.exams.get_mut(&id) else {
            return Err(ApiError::not_found(format!("Exam {id} not found")));
        };
        exam.course_id = request.course_id;
        exam.student_id = request.student_id;
        exam.teacher_id = request.teacher_id;
        exam.grade = request.grade;
        Ok(exam.clone())
    }

    pub fn delete_exam(&mut self, id: i64) -> Result<(), ApiError> {
        if self.exams.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found(format!("Exam {id} not found")))
        }
    }

    fn join_exam(&self, exam: &Exam) -> Option<ExamView> {
        let course = self.courses.get(&exam.course_id)?;
        let student = self.students.get(&exam.student_id)?;
        let teacher = self.teachers.get(&exam.teacher_id)?;

        Some(ExamView {
            exam_id: exam.exam_id,
            course_id: course.course_id,
            course_name: course.name.clone(),
            student_id: student.student_id,
            student_first_name: student.first_name.clone(),
            student_last_name: student.last_name.clone(),
            teacher_id: teacher.teacher_id,
            teacher_first_name: teacher.first_name.clone(),
            teacher_last_name: teacher.last_name.clone(),
            grade: exam.grade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn student_request(first: &str, last: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: first.into(),
            last_name: last.into(),
        }
    }

    /// Seed one course/student/teacher and an exam linking them.
    fn registry_with_exam() -> (SchoolRegistry, Exam) {
        let mut registry = SchoolRegistry::new();
        let course = registry.create_course(CreateCourseRequest {
            name: "Mathematics".into(),
        });
        let student = registry.create_student(student_request("Ada", "Kaya"));
        let teacher = registry.create_teacher(CreateTeacherRequest {
            first_name: "Mehmet".into(),
            last_name: "Demir".into(),
        });
        let exam = registry.create_exam(CreateExamRequest {
            course_id: course.course_id,
            student_id: student.student_id,
            teacher_id: teacher.teacher_id,
            grade: 85,
        });
        (registry, exam)
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut registry = SchoolRegistry::new();
        let created = registry.create_student(student_request("Ada", "Kaya"));
        assert_eq!(created.student_id, 1);

        let fetched = registry.get_student(1).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn ids_are_sequential_per_entity() {
        let mut registry = SchoolRegistry::new();
        let s1 = registry.create_student(student_request("A", "B"));
        let s2 = registry.create_student(student_request("C", "D"));
        let c1 = registry.create_course(CreateCourseRequest { name: "Art".into() });

        assert_eq!(s1.student_id, 1);
        assert_eq!(s2.student_id, 2);
        // Course numbering is independent of student numbering.
        assert_eq!(c1.course_id, 1);
    }

    #[test]
    fn lists_are_sorted_by_id() {
        let mut registry = SchoolRegistry::new();
        for i in 0..10 {
            registry.create_student(student_request(&format!("S{i}"), "X"));
        }
        let ids: Vec<_> = registry
            .list_students()
            .iter()
            .map(|s| s.student_id)
            .collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn update_missing_returns_not_found() {
        let mut registry = SchoolRegistry::new();
        let err = registry
            .update_course(99, UpdateCourseRequest { name: "X".into() })
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Course 99 not found");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut registry = SchoolRegistry::new();
        let teacher = registry.create_teacher(CreateTeacherRequest {
            first_name: "Mehmet".into(),
            last_name: "Demir".into(),
        });

        registry.delete_teacher(teacher.teacher_id).unwrap();
        let err = registry.get_teacher(teacher.teacher_id).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = registry.delete_teacher(teacher.teacher_id).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn exam_view_joins_names() {
        let (registry, exam) = registry_with_exam();

        let view = registry.get_exam(exam.exam_id).unwrap();
        assert_eq!(view.course_name, "Mathematics");
        assert_eq!(view.student_first_name, "Ada");
        assert_eq!(view.student_last_name, "Kaya");
        assert_eq!(view.teacher_first_name, "Mehmet");
        assert_eq!(view.grade, 85);
    }

    #[test]
    fn exam_with_dangling_reference_is_omitted_and_not_found() {
        let (mut registry, exam) = registry_with_exam();

        registry.delete_student(exam.student_id).unwrap();

        assert!(registry.list_exams().is_empty());
        let err = registry.get_exam(exam.exam_id).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        // The raw row still exists and can be repointed.
        let student = registry.create_student(student_request("New", "Student"));
        let updated = registry
            .update_exam(
                exam.exam_id,
                UpdateExamRequest {
                    course_id: exam.course_id,
                    student_id: student.student_id,
                    teacher_id: exam.teacher_id,
                    grade: 90,
                },
            )
            .unwrap();
        assert_eq!(updated.grade, 90);
        assert!(registry.get_exam(exam.exam_id).is_ok());
    }
}
