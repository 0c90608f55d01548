use super::*;
use trails_records::Trail;

/// Persistent set of trails.
///
/// Implementations must make [`replace`](Store::replace) atomic: a reader
/// sees either the previous rows or the new ones, and a failed replace
/// leaves the previous rows in place.
#[async_trait::async_trait]
pub trait Store: Check {
    /// Swaps the stored rows for `trails`, returning how many were written.
    async fn replace(&self, trails: Vec<Trail>) -> Result<usize, Error>;
    /// One page of rows matching every filter of `search`.
    async fn search(&self, search: &Search) -> Result<Vec<Trail>, Error>;
}
