//! Trail storage: transactional bulk replacement and filtered queries.
//!
//! ## Storage
//!
//! - [`Store`] — Replace the whole table, search one page of it
//! - [`Check`] — Row counts for seeding, health and status
//! - [`Migrate`] — Creates the trails table
//!
//! `Store`, `Check` and `Migrate` are implemented for [`trails_pg::Session`].
//! With the `memory` feature an in-process [`Memory`] store is available
//! for tests.
//!
//! ## Services
//!
//! - [`Loader`] — Parses a CSV file and replaces the table with its rows
//! - [`Finder`] — Runs a [`Search`] and wraps the rows in a [`Page`](trails_dto::Page)
mod check;
mod error;
mod finder;
mod loader;
mod postgres;
mod search;
mod store;

#[cfg(any(test, feature = "memory"))]
mod memory;

pub use check::*;
pub use error::*;
pub use finder::*;
pub use loader::*;
pub use postgres::*;
pub use search::*;
pub use store::*;

#[cfg(any(test, feature = "memory"))]
pub use memory::*;
