use std::path::PathBuf;
use trails_pg::PgErr;
use trails_records::Fid;
use trails_records::Trail;

/// Everything that can go wrong while loading or querying trails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate trail id {0}")]
    Duplicate(Fid),
    #[error("database error: {0}")]
    Database(#[from] PgErr),
}

/// First identifier that appears more than once.
pub(crate) fn duplicate(trails: &[Trail]) -> Option<Fid> {
    let mut seen = std::collections::HashSet::with_capacity(trails.len());
    trails.iter().map(|t| t.fid).find(|fid| !seen.insert(*fid))
}
