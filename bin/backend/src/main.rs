//! Trail API Binary
//!
//! Creates the trails table if absent, seeds it when empty, then serves
//! the API on BIND_ADDR (e.g. 127.0.0.1:8080) until SIGINT or SIGTERM.
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use trails_database::Loader;
use trails_database::Migrate;
use trails_pg::Session;
use trails_records::Layout;

#[derive(Parser, Debug)]
#[command(name = "backend", about = "Serve the trail API")]
struct Args {
    /// PostgreSQL connection string (falls back to DB_URL, then DB_CONN_STRING)
    #[arg(long)]
    db: Option<String>,
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = trails_core::DEFAULT_BIND)]
    bind: String,
    /// CSV file loaded when the table is empty
    #[arg(long, env = "TRAILS_SEED", default_value = trails_core::DEFAULT_SEED)]
    seed: PathBuf,
    /// Start without seeding an empty table
    #[arg(long)]
    no_seed: bool,
    /// TOML column layout of CSV files (defaults to BoulderTrailHeads.csv)
    #[arg(long, env = "TRAILS_LAYOUT")]
    layout: Option<PathBuf>,
}

fn layout(path: Option<&Path>) -> anyhow::Result<Layout> {
    match path {
        None => Ok(Layout::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            let layout = Layout::from_toml(&text)
                .with_context(|| format!("parsing layout {}", path.display()))?;
            log::info!("using column layout from {}", path.display());
            Ok(layout)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trails_core::env();
    trails_core::log();
    let args = Args::parse();
    let layout = layout(args.layout.as_deref())?;
    let url = trails_core::db_url(args.db).context("set --db, DB_URL or DB_CONN_STRING")?;
    let session = Session::connect(&url)
        .await
        .context("connecting to database")?;
    let session = Arc::new(session);
    session.migrate().await.context("creating trails table")?;
    match args.no_seed {
        true => log::info!("seeding disabled"),
        false => {
            let loader = Loader::new(session.clone(), layout.clone());
            if let Err(e) = loader.seed(&args.seed).await {
                log::warn!("starting without seed data: {}", e);
            }
        }
    }
    trails_server::run(session.clone(), layout, &args.bind).await?;
    log::info!("server stopped");
    match Arc::try_unwrap(session) {
        Ok(session) => session.close().await,
        Err(_) => log::warn!("database session still in use at shutdown"),
    }
    Ok(())
}
