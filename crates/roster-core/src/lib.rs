//! roster-core: Shared record types for the roster service.
//!
//! This crate provides the plain records held by the entity store:
//! - Course, Student and Grade records as stored and seeded from fixtures
//! - Typed inputs for creating new records
//! - The `Record` trait used for id-based linear lookups

pub mod input;
pub mod types;

pub use input::{NewCourse, NewGrade, NewStudent};
pub use types::{Course, Grade, Record, RecordId, Student};
