//! Write operations over the entity store.
//!
//! Inserts take id = current collection size + 1 and append. Deletes remove
//! every record carrying the id and never cascade to referencing records.
//! No referenced id is checked for existence.

use roster_core::{Course, Grade, NewCourse, NewGrade, NewStudent, RecordId, Student};

use crate::store::{next_id, remove_by_id, EntityStore};

impl EntityStore {
    // ── Inserts ──────────────────────────────────────────────────

    pub fn add_course(&mut self, input: NewCourse) -> Course {
        let course = input.into_record(next_id(self.courses.len()));
        self.courses.push(course.clone());
        tracing::debug!(id = course.id, "Course added");
        course
    }

    pub fn add_student(&mut self, input: NewStudent) -> Student {
        let student = input.into_record(next_id(self.students.len()));
        self.students.push(student.clone());
        tracing::debug!(id = student.id, course_id = student.course_id, "Student added");
        student
    }

    pub fn add_grade(&mut self, input: NewGrade) -> Grade {
        let grade = input.into_record(next_id(self.grades.len()));
        self.grades.push(grade.clone());
        tracing::debug!(
            id = grade.id,
            course_id = grade.course_id,
            student_id = grade.student_id,
            "Grade added"
        );
        grade
    }

    // ── Deletes ──────────────────────────────────────────────────

    /// Remove every course with this id. Returns the number removed.
    pub fn delete_course(&mut self, id: RecordId) -> usize {
        let removed = remove_by_id(&mut self.courses, id);
        tracing::debug!(id, removed, "Course delete");
        removed
    }

    pub fn delete_student(&mut self, id: RecordId) -> usize {
        let removed = remove_by_id(&mut self.students, id);
        tracing::debug!(id, removed, "Student delete");
        removed
    }

    pub fn delete_grade(&mut self, id: RecordId) -> usize {
        let removed = remove_by_id(&mut self.grades, id);
        tracing::debug!(id, removed, "Grade delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> EntityStore {
        let mut store = EntityStore::default();
        store.add_course(NewCourse {
            name: "Programming".to_string(),
            description: "Basics".to_string(),
        });
        store
    }

    #[test]
    fn add_course_assigns_count_plus_one() {
        let mut store = seeded();
        let course = store.add_course(NewCourse {
            name: "Math".to_string(),
            description: "Algebra".to_string(),
        });
        assert_eq!(course.id, 2);
        assert_eq!(course.name, "Math");
        assert_eq!(course.description, "Algebra");
        assert_eq!(store.courses().last(), Some(&course));
    }

    #[test]
    fn add_student_accepts_unknown_course() {
        let mut store = seeded();
        let student = store.add_student(NewStudent {
            name: "Ana".to_string(),
            last_name: "Garcia".to_string(),
            course_id: 42,
        });
        assert_eq!(student.id, 1);
        assert_eq!(student.course_id, 42);
        assert!(store.course_of_student(&student).is_none());
    }

    #[test]
    fn add_grade_stores_score() {
        let mut store = seeded();
        let grade = store.add_grade(NewGrade {
            course_id: 1,
            student_id: 5,
            score: 95,
        });
        assert_eq!(grade.id, 1);
        assert_eq!(store.grade(1).unwrap().score, 95);
        assert!(store.student_of_grade(&grade).is_none());
        assert_eq!(store.course_of_grade(&grade).unwrap().id, 1);
    }

    #[test]
    fn delete_does_not_cascade() {
        let mut store = seeded();
        let student = store.add_student(NewStudent {
            name: "Ana".to_string(),
            last_name: "Garcia".to_string(),
            course_id: 1,
        });

        assert_eq!(store.delete_course(1), 1);
        assert!(store.course(1).is_none());
        assert_eq!(store.students(), &[student.clone()]);
        assert!(store.course_of_student(&student).is_none());
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let mut store = seeded();
        assert_eq!(store.delete_course(7), 0);
        assert_eq!(store.delete_student(7), 0);
        assert_eq!(store.delete_grade(7), 0);
        assert_eq!(store.courses().len(), 1);
    }

    #[test]
    fn ids_repeat_after_delete() {
        // Ids follow the collection size, so a delete can make the next
        // insert reuse an id that is still present.
        let mut store = seeded();
        store.add_course(NewCourse {
            name: "Math".to_string(),
            description: "Algebra".to_string(),
        });
        store.delete_course(1);
        let again = store.add_course(NewCourse {
            name: "Physics".to_string(),
            description: "Mechanics".to_string(),
        });
        assert_eq!(again.id, 2);
        assert_eq!(store.courses().iter().filter(|c| c.id == 2).count(), 2);

        assert_eq!(store.delete_course(2), 2);
        assert!(store.courses().is_empty());
    }
}
