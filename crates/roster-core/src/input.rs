//! Typed inputs for new records.
//!
//! Ids are not part of an input: the store assigns them on insert.

use crate::types::{Course, Grade, RecordId, Student};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub last_name: String,
    pub course_id: RecordId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrade {
    pub course_id: RecordId,
    pub student_id: RecordId,
    pub score: i32,
}

impl NewCourse {
    /// Build the stored record under the given id.
    pub fn into_record(self, id: RecordId) -> Course {
        Course {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl NewStudent {
    pub fn into_record(self, id: RecordId) -> Student {
        Student {
            id,
            name: self.name,
            last_name: self.last_name,
            course_id: self.course_id,
        }
    }
}

impl NewGrade {
    pub fn into_record(self, id: RecordId) -> Grade {
        Grade {
            id,
            student_id: self.student_id,
            course_id: self.course_id,
            score: self.score,
        }
    }
}
