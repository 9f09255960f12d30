//! Command-line front end: argument parsing and result rendering.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::error::Result;
use crate::ga::GaConfig;
use crate::trials::{best_trial, TrialOutcome, TrialParameters};

/// Dataset used when no path is given.
pub const DEFAULT_DATA: &str = "data/program_ratings.csv";

#[derive(Parser, Debug, Clone)]
#[command(name = "tvsched")]
#[command(author, version, about = "Genetic-algorithm TV program scheduling", long_about = None)]
pub struct Cli {
    /// Program ratings CSV, defaults to data/program_ratings.csv
    pub data: Option<PathBuf>,

    /// Generations per trial
    #[arg(short, long, default_value_t = 50)]
    pub generations: usize,

    /// Schedules per generation
    #[arg(short, long, default_value_t = 10)]
    pub population: usize,

    /// Base random seed; trial i uses seed + i. Random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Trial rates as CROSSOVER:MUTATION, repeatable
    #[arg(short, long = "trial", value_name = "CO:MUT", value_parser = parse_trial_rates)]
    pub trials: Vec<(f64, f64)>,

    /// JSON array of trial parameters
    #[arg(long, value_name = "FILE", conflicts_with = "trials")]
    pub trials_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn data_path(&self) -> PathBuf {
        self.data.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_DATA))
    }

    /// Base configuration shared by all trials.
    pub fn config(&self) -> GaConfig {
        GaConfig::default()
            .with_generations(self.generations)
            .with_population_size(self.population)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Trials from `--trial`, `--trials-file`, or the built-in defaults.
    pub fn trial_parameters(&self) -> Result<Vec<TrialParameters>> {
        if let Some(path) = &self.trials_file {
            let content = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&content)?);
        }
        if self.trials.is_empty() {
            return Ok(TrialParameters::defaults());
        }
        Ok(self
            .trials
            .iter()
            .enumerate()
            .map(|(i, &(co, mutation))| TrialParameters::new(i + 1, co, mutation))
            .collect())
    }
}

/// Parses `"0.8:0.02"` into `(0.8, 0.02)`.
pub fn parse_trial_rates(value: &str) -> std::result::Result<(f64, f64), String> {
    let (co, mutation) = value
        .split_once(':')
        .ok_or_else(|| format!("expected CROSSOVER:MUTATION, got {value:?}"))?;
    let co: f64 = co
        .trim()
        .parse()
        .map_err(|_| format!("invalid crossover rate {co:?}"))?;
    let mutation: f64 = mutation
        .trim()
        .parse()
        .map_err(|_| format!("invalid mutation rate {mutation:?}"))?;
    Ok((co, mutation))
}

/// Writes every trial's schedule, a summary table, and the best trial.
pub fn render_text<W: Write>(out: &mut W, outcomes: &[TrialOutcome<String>]) -> io::Result<()> {
    for outcome in outcomes {
        let p = &outcome.parameters;
        writeln!(out, "Trial {} results", p.trial)?;
        writeln!(out, "  Crossover rate (CO_R): {}", p.crossover_rate)?;
        writeln!(out, "  Mutation rate (MUT_R): {}", p.mutation_rate)?;
        writeln!(out, "  Fitness score:         {}", outcome.fitness())?;

        let width = outcome
            .solution
            .schedule
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
            .max("Program".len());
        writeln!(out, "  {:>5} | {:<width$}", "Order", "Program")?;
        writeln!(out, "  {}-+-{}", "-".repeat(5), "-".repeat(width))?;
        for slot in outcome.solution.slots() {
            writeln!(out, "  {:>5} | {:<width$}", slot.order, slot.item)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Summary of all trials")?;
    writeln!(
        out,
        "  {:>5} | {:>9} | {:>8} | {:>13}",
        "Trial", "Crossover", "Mutation", "Fitness score"
    )?;
    for outcome in outcomes {
        let p = &outcome.parameters;
        writeln!(
            out,
            "  {:>5} | {:>9} | {:>8} | {:>13}",
            p.trial,
            p.crossover_rate,
            p.mutation_rate,
            outcome.fitness()
        )?;
    }

    if let Some(best) = best_trial(outcomes) {
        let p = &best.parameters;
        writeln!(
            out,
            "Best performance: trial {} (CO_R = {}, MUT_R = {}) -> fitness score = {}",
            p.trial,
            p.crossover_rate,
            p.mutation_rate,
            best.fitness()
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    trials: &'a [TrialOutcome<String>],
    best_trial: Option<usize>,
}

/// Writes the outcomes and the best trial label as pretty JSON.
pub fn render_json<W: Write>(out: &mut W, outcomes: &[TrialOutcome<String>]) -> Result<()> {
    let report = JsonReport {
        trials: outcomes,
        best_trial: best_trial(outcomes).map(|b| b.parameters.trial),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
