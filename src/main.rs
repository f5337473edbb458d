//! CLI entry point for the bikeshare statistics tool.
//!
//! Loads a city data set or an arbitrary trip CSV, optionally restricts it
//! to a month and/or weekday, and prints time, station, duration and user
//! statistics as text or JSON.

use anyhow::Result;
use bikeshare_stats::{
    config::Vocabulary,
    filter::TripFilter,
    output::{print_pretty, render_json, render_text},
    parser::{City, load_city, load_trips},
    stats::TripReport,
    table::TripTable,
};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the published data set of a city
    City {
        #[arg(value_enum)]
        city: City,

        /// Directory holding the city CSV files [env: BIKESHARE_DATA_DIR]
        #[arg(short = 'd', long)]
        data_dir: Option<String>,

        #[command(flatten)]
        options: ReportOptions,
    },
    /// Analyze any trip CSV file
    File {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        path: String,

        #[command(flatten)]
        options: ReportOptions,
    },
}

#[derive(Args)]
struct ReportOptions {
    /// Month to focus on (e.g. "january"), or "all"
    #[arg(short, long, default_value = "all")]
    month: String,

    /// Day of week to focus on (e.g. "monday"), or "all"
    #[arg(short = 'w', long, default_value = "all")]
    day: String,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// JSON file overriding the accepted user types and genders
    #[arg(long)]
    vocabulary: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::City {
            city,
            data_dir,
            options,
        } => {
            let data_dir = data_dir
                .or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok())
                .unwrap_or_else(|| ".".to_string());
            let table = load_city(&data_dir, city)?;
            run_report(&table, city.file_name(), &options)?;
        }
        Commands::File { path, options } => {
            let table = load_trips(&path)?;
            run_report(&table, &path, &options)?;
        }
    }

    Ok(())
}

/// Filters the table, computes the report and prints it to stdout.
#[tracing::instrument(skip(table, options))]
fn run_report(table: &TripTable, source: &str, options: &ReportOptions) -> Result<()> {
    let vocabulary = match &options.vocabulary {
        Some(path) => Vocabulary::load(path)?,
        None => Vocabulary::default(),
    };

    let filter = TripFilter::parse(&options.month, &options.day)?;
    let table = filter.apply(table)?;
    info!(
        month = %options.month,
        day = %options.day,
        rows = table.row_count(),
        "Computing trip statistics"
    );

    let report = TripReport::from_table(&table, &vocabulary).with_source(source);
    print_pretty(&report);

    if options.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report)?);
    }

    Ok(())
}
