//! Trail Operator Binary
//!
//! Runs table maintenance and queries against the database from a shell.
//!
//! Commands: migrate, load --file, filter, status
mod args;

use anyhow::Context;
use args::*;
use clap::Parser;
use comfy_table::Cell;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use std::path::Path;
use std::sync::Arc;
use trails_database::Check;
use trails_database::Finder;
use trails_database::Loader;
use trails_database::Migrate;
use trails_dto::Page;
use trails_pg::Session;
use trails_records::Column;
use trails_records::Layout;

fn layout(path: Option<&Path>) -> anyhow::Result<Layout> {
    match path {
        None => Ok(Layout::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            Layout::from_toml(&text).with_context(|| format!("parsing layout {}", path.display()))
        }
    }
}

/// Trail columns shown by `filter`, in storage order.
fn columns() -> impl Iterator<Item = Column> {
    Column::all().into_iter().filter(|c| *c != Column::Type)
}

fn table(page: &Page) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(columns().map(|c| Cell::new(c.as_str())).collect::<Vec<_>>());
    for trail in page.results.iter() {
        table.add_row(columns().map(|c| Cell::new(trail.get(c))).collect::<Vec<_>>());
    }
    table
}

fn print(page: &Page) {
    match page.results.is_empty() {
        true => println!("no trails match (page {}, limit {})", page.page, page.limit),
        false => {
            println!("{}", table(page));
            println!("page {}, limit {}, {} trails", page.page, page.limit, page.results.len());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trails_core::env();
    trails_core::log();
    let cli = Cli::parse();
    let layout = layout(cli.layout.as_deref())?;
    let url = trails_core::db_url(cli.db).context("set --db, DB_URL or DB_CONN_STRING")?;
    let session = Session::connect(&url)
        .await
        .context("connecting to database")?;
    let session = Arc::new(session);
    let result = match cli.command {
        Command::Migrate => session.migrate().await.map_err(anyhow::Error::from),
        Command::Load { file } => match file.is_file() {
            false => Err(anyhow::anyhow!("file not found: {}", file.display())),
            true => Loader::new(session.clone(), layout)
                .load(&file)
                .await
                .map(|n| println!("loaded {} trails from {}", n, file.display()))
                .map_err(anyhow::Error::from),
        },
        Command::Filter(args) => Finder::new(session.clone())
            .find(&args.search())
            .await
            .map(|page| print(&page))
            .map_err(anyhow::Error::from),
        Command::Status => match session.count().await {
            Ok(n) => {
                println!("{} trails loaded", n);
                session.status().await.map_err(anyhow::Error::from)
            }
            Err(e) => Err(e.into()),
        },
    };
    if let Ok(session) = Arc::try_unwrap(session) {
        session.close().await;
    }
    result
}
