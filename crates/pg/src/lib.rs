//! PostgreSQL integration for trail finder.
//!
//! ## Connectivity
//!
//! - [`Session`] — The one database session a process owns
//!
//! ## Metadata
//!
//! - [`Schema`] — Table metadata and DDL generation
//!
//! ## Table Names
//!
//! Constants for all persistent entities.
mod schema;
mod session;

pub use schema::*;
pub use session::*;

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for trailhead records.
#[rustfmt::skip]
pub const TRAILS: &str = "trails";
