use super::*;
use trails_records::Column;

/// Row counts over the stored trails.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    /// Number of stored trails.
    async fn count(&self) -> Result<usize, Error>;
    /// Number of stored trails whose `column` equals `value`, ignoring case.
    async fn tally(&self, column: Column, value: &str) -> Result<usize, Error>;
    async fn empty(&self) -> Result<bool, Error> {
        Ok(self.count().await? == 0)
    }
    /// Logs the row count and how many trails offer each filterable amenity.
    async fn status(&self) -> Result<(), Error> {
        log::info!("┌──────────────┬──────────┐");
        log::info!("│ Trails       │ {:>8} │", self.count().await?);
        log::info!("├──────────────┼──────────┤");
        for column in Column::filters() {
            let yes = self.tally(column, "yes").await?;
            log::info!("│ {:<12} │ {:>8} │", column.as_str(), yes);
        }
        log::info!("└──────────────┴──────────┘");
        Ok(())
    }
}
