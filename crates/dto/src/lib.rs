//! Data transfer objects for API communication.
//!
//! Request and response types for the trail API, serializable via `serde`.
//! These types bridge the gap between the domain model and JSON payloads.
mod request;
mod response;

pub use request::*;
pub use response::*;
