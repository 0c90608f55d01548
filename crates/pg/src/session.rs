use super::*;
use tokio::sync::RwLock;
use tokio::sync::RwLockReadGuard;
use tokio::sync::RwLockWriteGuard;
use tokio::task::JoinHandle;
use tokio_postgres::Client;

/// A single database session shared by every request in the process.
///
/// `tokio_postgres::Client` pipelines statements from concurrent callers
/// over one connection, so anything that opens a transaction must hold
/// the session exclusively. Readers take [`Session::read`] and may run
/// concurrently; writers take [`Session::write`].
///
/// Opened once at startup with [`Session::connect`] and closed with
/// [`Session::close`], which also waits for the connection task to end.
pub struct Session {
    client: RwLock<Client>,
    connection: JoinHandle<()>,
}

impl Session {
    /// Connects to PostgreSQL using a `postgres://` connection string.
    pub async fn connect(url: &str) -> Result<Self, PgErr> {
        log::info!("connecting to database");
        let tls = tokio_postgres::tls::NoTls;
        let (client, connection) = tokio_postgres::connect(url, tls).await?;
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("database connection failed: {}", e);
            }
        });
        client
            .execute("SET client_min_messages TO WARNING", &[])
            .await?;
        Ok(Self {
            client: RwLock::new(client),
            connection,
        })
    }

    /// Shared access for statements that run outside a transaction.
    pub async fn read(&self) -> RwLockReadGuard<'_, Client> {
        self.client.read().await
    }

    /// Exclusive access, required to open a transaction.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Client> {
        self.client.write().await
    }

    /// Drops the client and waits for the connection task to finish.
    pub async fn close(self) {
        let Self { client, connection } = self;
        drop(client);
        match connection.await {
            Ok(()) => log::info!("database connection closed"),
            Err(e) => log::warn!("database connection task aborted: {}", e),
        }
    }
}
