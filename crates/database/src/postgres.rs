use super::*;
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::types::ToSql;
use trails_pg::*;
use trails_records::Column;
use trails_records::Trail;

/// Creates the tables a fresh database needs.
#[async_trait::async_trait]
pub trait Migrate {
    async fn migrate(&self) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl Migrate for Session {
    async fn migrate(&self) -> Result<(), Error> {
        self.read().await.batch_execute(Trail::creates()).await?;
        log::info!("table {} ready", Trail::name());
        Ok(())
    }
}

#[async_trait::async_trait]
impl Check for Session {
    async fn count(&self) -> Result<usize, Error> {
        const SQL: &str = const_format::concatcp!("SELECT COUNT(*) FROM ", TRAILS);
        let row = self.read().await.query_one(SQL, &[]).await?;
        Ok(row.try_get::<_, i64>(0)? as usize)
    }
    async fn tally(&self, column: Column, value: &str) -> Result<usize, Error> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE lower({}) = lower($1)",
            TRAILS, column
        );
        let row = self.read().await.query_one(sql.as_str(), &[&value]).await?;
        Ok(row.try_get::<_, i64>(0)? as usize)
    }
}

#[async_trait::async_trait]
impl Store for Session {
    /// Deletes every row and COPYs the new ones in, inside one
    /// transaction. Any failure drops the transaction, which rolls back.
    async fn replace(&self, trails: Vec<Trail>) -> Result<usize, Error> {
        let mut client = self.write().await;
        let tx = client.transaction().await?;
        let deleted = tx.execute(Trail::deletes(), &[]).await?;
        log::debug!("deleted {} trails", deleted);
        let sink = tx.copy_in(Trail::copy()).await?;
        let writer = BinaryCopyInWriter::new(sink, Trail::columns());
        futures::pin_mut!(writer);
        for trail in trails.iter() {
            #[rustfmt::skip]
            let row: [&(dyn ToSql + Sync); 16] = [
                &trail.fid,
                &trail.name,
                &trail.restrooms,
                &trail.picnic,
                &trail.fishing,
                &trail.kind,
                &trail.difficulty,
                &trail.access_type,
                &trail.th_leash,
                &trail.bike_trail,
                &trail.horse_trail,
                &trail.fee,
                &trail.recycle_bin,
                &trail.grills,
                &trail.bike_rack,
                &trail.dog_tube,
            ];
            writer.as_mut().write(&row).await?;
        }
        let written = writer.finish().await?;
        tx.commit().await?;
        Ok(written as usize)
    }

    async fn search(&self, search: &Search) -> Result<Vec<Trail>, Error> {
        let sql = search.sql();
        let params = search.params();
        let rows = self.read().await.query(sql.as_str(), &params).await?;
        rows.iter()
            .map(|row| Trail::try_from(row).map_err(Error::from))
            .collect()
    }
}
