//! Command-line arguments for the trail operator.
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use trails_database::Search;
use trails_records::Column;

#[derive(Parser, Debug)]
#[command(name = "trail-cli", about = "Operate the trails table")]
pub struct Cli {
    /// PostgreSQL connection string (falls back to DB_URL, then DB_CONN_STRING)
    #[arg(long)]
    pub db: Option<String>,
    /// TOML column layout of CSV files (defaults to BoulderTrailHeads.csv)
    #[arg(long, env = "TRAILS_LAYOUT")]
    pub layout: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the trails table if absent
    Migrate,
    /// Replace every trail with the rows of a CSV file
    Load {
        /// CSV file to load
        #[arg(long)]
        file: PathBuf,
    },
    /// Print one page of trails matching amenity filters
    Filter(FilterArgs),
    /// Print how many trails are loaded
    Status,
}

/// Amenity filters and pagination; matching ignores case.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub restrooms: Option<String>,
    #[arg(long)]
    pub fishing: Option<String>,
    #[arg(long)]
    pub bike_trail: Option<String>,
    #[arg(long)]
    pub horse_trail: Option<String>,
    #[arg(long)]
    pub fee: Option<String>,
    #[arg(long)]
    pub recycle_bin: Option<String>,
    #[arg(long)]
    pub grills: Option<String>,
    #[arg(long)]
    pub bike_rack: Option<String>,
    #[arg(long)]
    pub dog_tube: Option<String>,
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<i64>,
    /// Trails per page
    #[arg(long)]
    pub limit: Option<i64>,
}

impl FilterArgs {
    pub fn search(&self) -> Search {
        let values = [
            &self.restrooms,
            &self.fishing,
            &self.bike_trail,
            &self.horse_trail,
            &self.fee,
            &self.recycle_bin,
            &self.grills,
            &self.bike_rack,
            &self.dog_tube,
        ];
        Column::filters()
            .into_iter()
            .zip(values)
            .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
            .fold(Search::new(self.page, self.limit), |search, (column, value)| {
                search.filter(column, value)
            })
    }
}
