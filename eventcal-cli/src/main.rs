mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use eventcal_core::calendar::{ViewMode, YearMonth};
use eventcal_core::{EventcalConfig, FacetSelection};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::Session;

#[derive(Parser)]
#[command(name = "eventcal")]
#[command(about = "Browse, filter and search the events calendar")]
struct Cli {
    /// Config file (defaults to ./eventcal.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only events on these continents or in these countries (comma-separated)
    #[arg(long, global = true)]
    location: Option<String>,

    /// Only events in these categories (comma-separated)
    #[arg(long, global = true)]
    category: Option<String>,

    /// Only events with these tags (comma-separated)
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upcoming events grouped by month
    List {
        /// First month to show (YYYY-MM), defaults to the current month
        #[arg(long)]
        from: Option<YearMonth>,

        /// Number of months to show
        #[arg(long)]
        months: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Month grid with the events of each day
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<YearMonth>,

        /// How many months to show: 1M, 3M or 6M
        #[arg(long, default_value = "1M")]
        view: ViewMode,
    },
    /// Events taking place on a day
    Day {
        /// Day to show (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Search events by title, location, category and description
    Search {
        query: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a single event
    Show {
        /// Event id, e.g. 2026-02-17_ethdenver
        id: String,
    },
    /// Available filter values
    Options,
    /// Check every event file and report invalid ones
    Validate,
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = EventcalConfig::load(cli.config.as_deref())?;

    let selection = FacetSelection::from_params(
        cli.location.as_deref(),
        cli.category.as_deref(),
        cli.tag.as_deref(),
    );

    let session = Session::load(config, selection);

    match cli.command {
        Commands::List { from, months, json } => commands::list::run(&session, from, months, json),
        Commands::Month { month, view } => {
            commands::month::run(&session, month.unwrap_or_else(YearMonth::current), view)
        }
        Commands::Day { date } => commands::day::run(&session, date),
        Commands::Search { query, json } => commands::search::run(&session, &query, json),
        Commands::Show { id } => commands::show::run(&session, &id),
        Commands::Options => commands::options::run(&session),
        Commands::Validate => commands::validate::run(&session),
        Commands::Config => commands::config::run(&session.config, cli.config.as_deref()),
    }
}
