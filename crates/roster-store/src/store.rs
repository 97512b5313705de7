//! Entity store ownership and the shared handle passed to request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use roster_core::{Course, Grade, Record, RecordId, Student};
use tokio::sync::RwLock;

use crate::fixtures::Fixtures;

/// Errors from loading the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read fixture file {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode fixture {name}: {source}")]
    FixtureDecode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Store handle shared across requests.
///
/// Reads take the read lock; every mutation holds the write lock for
/// exactly one append or filter.
pub type SharedStore = Arc<RwLock<EntityStore>>;

/// Owner of the three record collections, each kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub(crate) courses: Vec<Course>,
    pub(crate) students: Vec<Student>,
    pub(crate) grades: Vec<Grade>,
}

impl EntityStore {
    pub fn new(courses: Vec<Course>, students: Vec<Student>, grades: Vec<Grade>) -> Self {
        Self {
            courses,
            students,
            grades,
        }
    }

    /// Seed a store from fixture collections.
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        tracing::info!(
            courses = fixtures.courses.len(),
            students = fixtures.students.len(),
            grades = fixtures.grades.len(),
            "Entity store seeded"
        );
        Self::new(fixtures.courses, fixtures.students, fixtures.grades)
    }

    /// Wrap the store in its shared, lockable handle.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }
}

/// First record in `items` with the given id.
pub(crate) fn find_by_id<T: Record>(items: &[T], id: RecordId) -> Option<&T> {
    items.iter().find(|record| record.id() == id)
}

/// Drop every record with the given id. Returns how many were removed.
pub(crate) fn remove_by_id<T: Record>(items: &mut Vec<T>, id: RecordId) -> usize {
    let before = items.len();
    items.retain(|record| record.id() != id);
    before - items.len()
}

/// Id for the next record appended to a collection of `len` records.
pub(crate) fn next_id(len: usize) -> RecordId {
    RecordId::try_from(len).map_or(RecordId::MAX, |n| n.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: RecordId, name: &str) -> Course {
        Course {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn find_returns_first_match() {
        let courses = vec![course(1, "a"), course(2, "b"), course(2, "c")];
        assert_eq!(find_by_id(&courses, 2).unwrap().name, "b");
        assert!(find_by_id(&courses, 9).is_none());
    }

    #[test]
    fn remove_drops_every_match() {
        let mut courses = vec![course(1, "a"), course(2, "b"), course(1, "c")];
        assert_eq!(remove_by_id(&mut courses, 1), 2);
        assert_eq!(courses, vec![course(2, "b")]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut courses = vec![course(1, "a")];
        assert_eq!(remove_by_id(&mut courses, 5), 0);
        assert_eq!(courses.len(), 1);
    }

    #[test]
    fn next_id_is_count_plus_one() {
        assert_eq!(next_id(0), 1);
        assert_eq!(next_id(41), 42);
        assert_eq!(next_id(usize::MAX), RecordId::MAX);
    }

    #[tokio::test]
    async fn shared_handle_reads_and_writes() {
        let shared = EntityStore::default().into_shared();
        shared.write().await.courses.push(course(1, "a"));
        assert_eq!(shared.read().await.courses.len(), 1);
    }
}
