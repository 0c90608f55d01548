use super::*;
use std::path::Path;
use std::sync::Arc;
use trails_records::Layout;
use trails_records::Trail;

/// Replaces the stored trails with the contents of a CSV file.
pub struct Loader<S> {
    store: Arc<S>,
    layout: Layout,
}

impl<S: Store> Loader<S> {
    pub fn new(store: Arc<S>, layout: Layout) -> Self {
        Self { store, layout }
    }

    /// Reads and validates every row of `path` without touching the store.
    pub async fn read(&self, path: &Path) -> Result<Vec<Trail>, Error> {
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trails = self.layout.parse(bytes.as_slice())?;
        match duplicate(&trails) {
            Some(fid) => Err(Error::Duplicate(fid)),
            None => Ok(trails),
        }
    }

    /// Atomically swaps the stored trails for the rows of `path`.
    ///
    /// On any failure the previous rows stay in place.
    pub async fn load(&self, path: &Path) -> Result<usize, Error> {
        log::info!("loading trails from {}", path.display());
        let result = match self.read(path).await {
            Ok(trails) => self.store.replace(trails).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(n) => {
                log::info!("replaced trails with {} rows from {}", n, path.display());
                Ok(n)
            }
            Err(e) => {
                log::error!("failed to load {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Loads `path` only when the store is empty. Returns the number of
    /// rows written, or `None` if existing rows were kept.
    pub async fn seed(&self, path: &Path) -> Result<Option<usize>, Error> {
        match self.store.count().await? {
            0 => self.load(path).await.map(Some),
            n => {
                log::info!("found {} trails, skipping seed", n);
                Ok(None)
            }
        }
    }
}
