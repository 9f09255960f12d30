//! Program ratings loader.
//!
//! Reads a CSV file with a header row and turns it into the item list and
//! score table consumed by the optimizer. Column names vary between datasets,
//! so each column is located by trying a list of candidate headers in order.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::models::ScoreTable;

/// Candidate headers for the program column, in priority order.
pub const PROGRAM_COLUMNS: [&str; 4] = ["Program", "Type of Program", "Show", "Title"];

/// Candidate headers for the rating column, in priority order.
pub const RATING_COLUMNS: [&str; 4] = ["Rating", "Ratings", "Score", "Popularity"];

/// Programs and their ratings, as loaded from a dataset.
#[derive(Debug, Clone)]
pub struct ProgramTable {
    /// Program names in file order.
    pub programs: Vec<String>,
    /// Rating per program.
    pub ratings: ScoreTable<String>,
    /// Header used for program names.
    pub program_column: String,
    /// Header used for ratings.
    pub rating_column: String,
}

impl ProgramTable {
    /// Loads a CSV file from disk.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Loads CSV data from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        tracing::info!(columns = ?headers.iter().collect::<Vec<_>>(), "Columns detected in dataset");

        let program_idx = find_column(&headers, &PROGRAM_COLUMNS, "program")?;
        let rating_idx = find_column(&headers, &RATING_COLUMNS, "rating")?;

        let mut programs = Vec::new();
        let mut pairs = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let program = record.get(program_idx).unwrap_or_default().to_string();
            let raw = record.get(rating_idx).unwrap_or_default();
            let rating: f64 = raw.parse().map_err(|_| Error::InvalidRating {
                row: row + 1,
                value: raw.to_string(),
            })?;
            programs.push(program.clone());
            pairs.push((program, rating));
        }

        Ok(Self {
            programs,
            ratings: ScoreTable::from_pairs(pairs)?,
            program_column: headers[program_idx].to_string(),
            rating_column: headers[rating_idx].to_string(),
        })
    }

    /// Number of programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether no programs were loaded.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

fn find_column(
    headers: &StringRecord,
    candidates: &[&'static str],
    kind: &'static str,
) -> Result<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|h| h == *name))
        .ok_or_else(|| Error::MissingColumn {
            kind,
            tried: candidates.to_vec(),
        })
}
