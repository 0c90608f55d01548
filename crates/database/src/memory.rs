use super::*;
use tokio::sync::Mutex;
use trails_records::Column;
use trails_records::Trail;

/// Trails held in process memory, kept in insertion order.
#[derive(Default)]
pub struct Memory {
    trails: Mutex<Vec<Trail>>,
}

impl Memory {
    pub fn new(trails: Vec<Trail>) -> Self {
        Self {
            trails: Mutex::new(trails),
        }
    }

    /// A copy of every stored trail.
    pub async fn trails(&self) -> Vec<Trail> {
        self.trails.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Check for Memory {
    async fn count(&self) -> Result<usize, Error> {
        Ok(self.trails.lock().await.len())
    }
    async fn tally(&self, column: Column, value: &str) -> Result<usize, Error> {
        let search = Search::default().filter(column, value);
        Ok(self
            .trails
            .lock()
            .await
            .iter()
            .filter(|t| search.matches(t))
            .count())
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn replace(&self, trails: Vec<Trail>) -> Result<usize, Error> {
        if let Some(fid) = duplicate(&trails) {
            return Err(Error::Duplicate(fid));
        }
        let n = trails.len();
        *self.trails.lock().await = trails;
        Ok(n)
    }
    async fn search(&self, search: &Search) -> Result<Vec<Trail>, Error> {
        let skip = usize::try_from(search.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(search.limit()).unwrap_or(usize::MAX);
        Ok(self
            .trails
            .lock()
            .await
            .iter()
            .filter(|t| search.matches(t))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tally_ignores_case() {
        let store = Memory::new(vec![
            Trail::new(1).with(Column::Grills, "yes"),
            Trail::new(2).with(Column::Grills, "YES"),
            Trail::new(3).with(Column::Grills, "no"),
        ]);
        assert_eq!(store.tally(Column::Grills, "Yes").await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 3);
        store.status().await.unwrap();
    }

    #[tokio::test]
    async fn replace_rejects_duplicates() {
        let store = Memory::new(vec![Trail::new(1)]);
        let result = store.replace(vec![Trail::new(2), Trail::new(2)]).await;
        assert!(matches!(result, Err(Error::Duplicate(2))));
        assert_eq!(store.trails().await, vec![Trail::new(1)]);
    }
}
