use super::*;
use std::sync::Arc;
use trails_dto::Page;

/// Answers paginated trail queries.
pub struct Finder<S> {
    store: Arc<S>,
}

impl<S: Store> Finder<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn find(&self, search: &Search) -> Result<Page, Error> {
        log::debug!("query: {}", search.sql());
        log::debug!("filters: {:?}", search.filters());
        match self.store.search(search).await {
            Ok(results) => {
                log::info!(
                    "found {} trails (page {}, limit {})",
                    results.len(),
                    search.page(),
                    search.limit()
                );
                Ok(Page {
                    page: search.page(),
                    limit: search.limit(),
                    results,
                })
            }
            Err(e) => {
                log::error!("failed to query trails: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trails_records::Column;
    use trails_records::Trail;

    fn store() -> Arc<Memory> {
        let trails = (1..=25)
            .map(|fid| {
                Trail::new(fid)
                    .with(Column::Restrooms, if fid % 2 == 0 { "yes" } else { "no" })
                    .with(Column::Fishing, if fid % 5 == 0 { "yes" } else { "no" })
            })
            .collect();
        Arc::new(Memory::new(trails))
    }

    #[tokio::test]
    async fn first_page_by_default() {
        let page = Finder::new(store()).find(&Search::default()).await.unwrap();
        assert_eq!((page.page, page.limit), (1, 10));
        assert_eq!(page.results.len(), 10);
        assert_eq!(page.results[0].fid, 1);
    }

    #[tokio::test]
    async fn last_partial_page() {
        let search = Search::new(Some(3), Some(10));
        let page = Finder::new(store()).find(&search).await.unwrap();
        assert_eq!(page.results.len(), 5);
    }

    #[tokio::test]
    async fn past_the_end_is_empty() {
        let search = Search::new(Some(100), None);
        let page = Finder::new(store()).find(&search).await.unwrap();
        assert_eq!(page.page, 100);
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn filters_combine() {
        let search = Search::new(None, Some(50))
            .filter(Column::Restrooms, "YES")
            .filter(Column::Fishing, "Yes");
        let page = Finder::new(store()).find(&search).await.unwrap();
        let fids = page.results.iter().map(|t| t.fid).collect::<Vec<_>>();
        assert_eq!(fids, vec![10, 20]);
    }
}
