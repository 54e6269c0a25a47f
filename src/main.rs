use anyhow::{Context, Result};
use campus_seed::config::DEFAULT_DATABASE;
use campus_seed::report::EXIT_SEED_FAILED;
use campus_seed::{open_database, setup_database, Orchestrator, RunReporter, SeedOptions};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Populate the campus information store with its canonical reference data.
///
/// Safe to re-run: existing records are found by natural key and left alone
/// or refreshed, never duplicated.
#[derive(Parser, Debug)]
#[command(name = "campus-seed", version, about)]
struct Cli {
    /// Delete previously seeded records before seeding (destructive)
    #[arg(long)]
    clear: bool,

    /// SQLite database file (created if missing)
    #[arg(long, env = "CAMPUS_SEED_DB", default_value = DEFAULT_DATABASE)]
    database: PathBuf,

    /// First calendar year of the current academic year [default: this year]
    #[arg(long, env = "CAMPUS_SEED_BASE_YEAR")]
    base_year: Option<i32>,

    /// Run everything, then roll back instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON instead of progress lines
    #[arg(long)]
    json: bool,

    /// Debug-level diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("❌ {:#}", err);
            ExitCode::from(EXIT_SEED_FAILED)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr only: stdout carries progress lines and the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<u8> {
    let mut options = SeedOptions {
        database: cli.database.clone(),
        clear: cli.clear,
        dry_run: cli.dry_run,
        ..SeedOptions::default()
    };
    if let Some(year) = cli.base_year {
        options.base_year = year;
    }

    let orchestrator = Orchestrator::new(&options).context("Invalid seed options")?;

    let mut conn = open_database(&options.database)
        .with_context(|| format!("Failed to open database {}", options.database.display()))?;
    setup_database(&conn).context("Failed to create schema")?;

    let out: Box<dyn Write> = if cli.json {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout())
    };
    let mut reporter = RunReporter::new(out, options.dry_run);
    reporter.run_started(&options.database.display().to_string());

    let report = orchestrator.run(&mut conn, &mut reporter);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    Ok(report.exit_code())
}
