//! habit_report - Derived stats and today's incoming damage for one user

mod input;
mod render;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use habit_core::{default_constants, hydrate, Clock, GameConstants, Reporter, SystemClock};
use std::path::PathBuf;

/// Report derived stats, daily damage and due todos from saved API responses
#[derive(Parser, Debug)]
#[command(name = "habit_report")]
#[command(about = "Forecast damage from unfinished dailies", long_about = None)]
#[command(version)]
struct Cli {
    /// User record (bare or wrapped in a `{ "data": ... }` envelope)
    #[arg(short, long, value_name = "FILE")]
    user: PathBuf,

    /// Task list, in list order
    #[arg(short, long, value_name = "FILE")]
    tasks: PathBuf,

    /// Game content used to resolve gear and quest keys
    #[arg(short, long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Constants TOML overriding the bundled values
    #[arg(long, value_name = "FILE")]
    constants: Option<PathBuf>,

    /// Deadline for due todos (RFC 3339); defaults to the end of today
    #[arg(long, value_name = "INSTANT", value_parser = parse_deadline)]
    due_by: Option<DateTime<Utc>>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|instant| instant.with_timezone(&Utc))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let constants = match &cli.constants {
        Some(path) => GameConstants::load(path)
            .with_context(|| format!("failed to load constants from {}", path.display()))?,
        None => default_constants(),
    };

    let mut user = input::load_user(&cli.user)?;
    match &cli.content {
        Some(path) => {
            let catalog = input::load_content(path)?;
            user = hydrate(user, &catalog);
        }
        None => tracing::info!("no content given, gear and quest keys stay unresolved"),
    }

    let tasks = input::load_tasks(&cli.tasks)?;
    tracing::info!("loaded {} tasks for {}", tasks.len(), user.display_name());

    let deadline = cli.due_by.unwrap_or_else(|| SystemClock.end_of_day());
    let report = Reporter::with_constants(constants)
        .report_by(&user, &tasks, deadline)
        .context("failed to build report")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut out = String::new();
        render::text(&mut out, &user, &report, deadline)?;
        print!("{}", out);
    }

    Ok(())
}
