//! Read operations over the entity store.
//!
//! Every lookup is a linear scan returning the first matching record.
//! A missing id yields `None`, never an error.

use roster_core::{Course, Grade, RecordId, Student};

use crate::store::{find_by_id, EntityStore};

impl EntityStore {
    // ── Collections ──────────────────────────────────────────────

    /// All courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All students in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All grades in insertion order.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    // ── Single Record Lookups ────────────────────────────────────

    pub fn course(&self, id: RecordId) -> Option<&Course> {
        find_by_id(&self.courses, id)
    }

    pub fn student(&self, id: RecordId) -> Option<&Student> {
        find_by_id(&self.students, id)
    }

    pub fn grade(&self, id: RecordId) -> Option<&Grade> {
        find_by_id(&self.grades, id)
    }

    // ── Cross-References ─────────────────────────────────────────

    /// The course a student is enrolled in, if it still exists.
    pub fn course_of_student(&self, student: &Student) -> Option<&Course> {
        self.course(student.course_id)
    }

    pub fn course_of_grade(&self, grade: &Grade) -> Option<&Course> {
        self.course(grade.course_id)
    }

    pub fn student_of_grade(&self, grade: &Grade) -> Option<&Student> {
        self.student(grade.student_id)
    }
}
