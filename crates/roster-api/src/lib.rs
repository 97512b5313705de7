//! roster-api: GraphQL API for the roster course/student/grade store.
//!
//! Exposes list, lookup, insert and delete operations over the in-memory
//! entity store on a single `/graphql` route, with GraphiQL served on GET.

pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use schema::{build_schema, RosterSchema};
