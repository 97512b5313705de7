//! Seed data loaded into the store at startup.
//!
//! A fixture set is three JSON arrays of flat records:
//! ```text
//! {dir}/
//!   courses.json
//!   students.json
//!   grades.json
//! ```
//! A default set is compiled into the crate.

use std::fs;
use std::path::Path;

use roster_core::{Course, Grade, Student};
use serde_json::from_str;

use crate::store::StoreError;

const COURSES_FILE: &str = "courses.json";
const STUDENTS_FILE: &str = "students.json";
const GRADES_FILE: &str = "grades.json";

const BUILTIN_COURSES: &str = include_str!("../fixtures/courses.json");
const BUILTIN_STUDENTS: &str = include_str!("../fixtures/students.json");
const BUILTIN_GRADES: &str = include_str!("../fixtures/grades.json");

/// The three seed collections, in file order.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub grades: Vec<Grade>,
}

impl Fixtures {
    /// The fixture set shipped with the crate.
    pub fn builtin() -> Result<Self, StoreError> {
        Ok(Self {
            courses: decode(COURSES_FILE, BUILTIN_COURSES)?,
            students: decode(STUDENTS_FILE, BUILTIN_STUDENTS)?,
            grades: decode(GRADES_FILE, BUILTIN_GRADES)?,
        })
    }

    /// Read all three fixture files from `dir`. Every file must exist.
    pub fn from_dir(dir: &Path) -> Result<Self, StoreError> {
        tracing::info!(dir = %dir.display(), "Loading fixtures");
        Ok(Self {
            courses: decode(COURSES_FILE, &read(dir, COURSES_FILE)?)?,
            students: decode(STUDENTS_FILE, &read(dir, STUDENTS_FILE)?)?,
            grades: decode(GRADES_FILE, &read(dir, GRADES_FILE)?)?,
        })
    }
}

fn read(dir: &Path, name: &str) -> Result<String, StoreError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| StoreError::FixtureRead { path, source })
}

fn decode<T: serde::de::DeserializeOwned>(name: &str, text: &str) -> Result<Vec<T>, StoreError> {
    from_str(text).map_err(|source| StoreError::FixtureDecode {
        name: name.to_string(),
        source,
    })
}
