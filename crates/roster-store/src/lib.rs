//! Roster Store — in-memory entity store for courses, students and grades.
//!
//! This crate is the single owner of every record. All reads and writes
//! flow through `EntityStore`: lookups are linear scans, inserts append,
//! deletes filter. Nothing is persisted.

pub mod fixtures;
pub mod mutations;
pub mod queries;
pub mod store;

pub use fixtures::Fixtures;
pub use store::{EntityStore, SharedStore, StoreError};
