//! Trailhead records and the CSV layouts they are read from.
//!
//! ## Types
//!
//! - [`Trail`] — One trailhead and its amenities
//! - [`Column`] — The text attributes of a trail, by database name
//! - [`Layout`] — Field offsets of a source CSV file
//!
//! With the `database` feature, [`Trail`] also implements
//! `trails_pg::Schema` and decodes from `tokio_postgres::Row`.
mod column;
mod layout;
mod trail;

pub use column::*;
pub use layout::*;
pub use trail::*;
