//! tvsched: genetic-algorithm TV scheduling [command line]
//!
//! Loads a program ratings CSV, runs one optimization per trial setting and
//! prints each trial's schedule followed by a summary ranking.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tv_schedule_ga::cli::{render_json, render_text, Cli};
use tv_schedule_ga::loader::ProgramTable;
use tv_schedule_ga::trials::run_trials;
use tv_schedule_ga::Error;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let table = ProgramTable::from_path(cli.data_path())?;
    let trials = cli.trial_parameters()?;
    let seed = cli.seed();
    tracing::info!(programs = table.len(), trials = trials.len(), seed, "Starting trials");

    let outcomes = run_trials(&table.programs, &table.ratings, &cli.config(), &trials, seed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        render_json(&mut out, &outcomes)?;
    } else {
        render_text(&mut out, &outcomes)?;
    }
    Ok(())
}
