//! Record types for the three entity collections.
//!
//! Records are flat: cross-references are plain ids and are resolved by
//! scanning the referenced collection. Nothing guarantees a referenced id
//! exists.

use serde::{Deserialize, Serialize};

/// Identifier of a record within its own collection.
pub type RecordId = i32;

/// Anything stored in the entity store, addressable by id.
pub trait Record {
    fn id(&self) -> RecordId;
}

// ── Records ───────────────────────────────────────────────────────

/// A course students can enrol in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

/// A student, enrolled in at most one course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub last_name: String,
    pub course_id: RecordId,
}

/// A grade given to a student for a course.
///
/// `score` is kept on the record but is not part of the public schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub id: RecordId,
    pub student_id: RecordId,
    pub course_id: RecordId,
    #[serde(rename = "grade", default)]
    pub score: i32,
}

impl Record for Course {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Student {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Grade {
    fn id(&self) -> RecordId {
        self.id
    }
}
