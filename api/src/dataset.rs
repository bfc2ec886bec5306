//! FODA score dataset: one row per (business idea, factor, score).
//!
//! The CSV carries three required columns, named the way the source
//! spreadsheets name them:
//!
//! ```text
//! Idea de Negocio,Factor,Puntaje
//! Cafe-Bar,Fortalezas,2
//! Cafe-Bar,Debilidades,1
//! ```
//!
//! Rows are kept in file order. A blank or non-finite score is treated as
//! missing: the row contributes nothing, but its idea still counts. Distinct
//! idea labels are computed once at load time in first-seen order and drive
//! the idea picker options.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const IDEA_COLUMN: &str = "Idea de Negocio";
pub const FACTOR_COLUMN: &str = "Factor";
pub const SCORE_COLUMN: &str = "Puntaje";

/// The four FODA/SWOT scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Factor {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl Factor {
    /// Aggregation order: Strengths, Weaknesses, Opportunities, Threats.
    pub const ALL: [Factor; 4] = [
        Factor::Strengths,
        Factor::Weaknesses,
        Factor::Opportunities,
        Factor::Threats,
    ];

    /// Literal used in the dataset files.
    pub fn dataset_label(self) -> &'static str {
        match self {
            Factor::Strengths => "Fortalezas",
            Factor::Weaknesses => "Debilidades",
            Factor::Opportunities => "Oportunidades",
            Factor::Threats => "Amenazas",
        }
    }

    /// Position inside [`Factor::ALL`].
    pub fn index(self) -> usize {
        match self {
            Factor::Strengths => 0,
            Factor::Weaknesses => 1,
            Factor::Opportunities => 2,
            Factor::Threats => 3,
        }
    }

    /// Parse a factor cell. Accepts the Spanish dataset literals and the English
    /// names, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim().to_lowercase();
        match value.as_str() {
            "fortalezas" | "strengths" => Some(Factor::Strengths),
            "debilidades" | "weaknesses" => Some(Factor::Weaknesses),
            "oportunidades" | "opportunities" => Some(Factor::Opportunities),
            "amenazas" | "threats" => Some(Factor::Threats),
            _ => None,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dataset_label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub idea: String,
    pub factor: Factor,
    pub score: f64,
}

impl ScoreRecord {
    pub fn new(idea: impl Into<String>, factor: Factor, score: f64) -> Self {
        Self {
            idea: idea.into(),
            factor,
            score,
        }
    }
}

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file is missing or unreadable.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A required column is absent from the header row.
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    /// A score cell is not a number.
    #[error("row {row}: score `{value}` is not a number")]
    InvalidScore { row: usize, value: String },
    /// The CSV itself is malformed.
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

impl DatasetError {
    /// True for format problems (as opposed to I/O failures).
    pub fn is_format_error(&self) -> bool {
        !matches!(self, DatasetError::Io(_))
    }
}

/// Immutable, ordered collection of score records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<ScoreRecord>,
    ideas: Vec<String>,
}

impl Dataset {
    /// Load a dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dataset");
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a dataset from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}') == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let idea_idx = column(IDEA_COLUMN)?;
        let factor_idx = column(FACTOR_COLUMN)?;
        let score_idx = column(SCORE_COLUMN)?;

        let mut records = Vec::new();
        let mut ideas = IdeaList::default();
        for (offset, row) in csv_reader.records().enumerate() {
            let row = row?;
            // Header is line 1.
            let line = offset + 2;
            let idea = row.get(idea_idx).unwrap_or_default();
            let factor_cell = row.get(factor_idx).unwrap_or_default();
            let score_cell = row.get(score_idx).unwrap_or_default();

            // Every labelled idea is an option, even if none of its rows score.
            ideas.insert(idea);

            let Some(factor) = Factor::parse(factor_cell) else {
                warn!(row = line, factor = factor_cell, "skipping row with unknown factor");
                continue;
            };
            let Some(score) = parse_score(score_cell, line)? else {
                warn!(row = line, score = score_cell, "skipping row without a score");
                continue;
            };

            records.push(ScoreRecord::new(idea, factor, score));
        }

        Ok(Self {
            records,
            ideas: ideas.into_vec(),
        })
    }

    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut ideas = IdeaList::default();
        for record in &records {
            ideas.insert(&record.idea);
        }
        Self {
            records,
            ideas: ideas.into_vec(),
        }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Distinct idea labels in first-seen order.
    pub fn ideas(&self) -> &[String] {
        &self.ideas
    }
}

/// A blank or non-finite cell is a missing score (`Ok(None)`); other
/// non-numeric text is a format error.
fn parse_score(cell: &str, row: usize) -> Result<Option<f64>, DatasetError> {
    if cell.is_empty() {
        return Ok(None);
    }
    let value = cell.parse::<f64>().map_err(|_| DatasetError::InvalidScore {
        row,
        value: cell.to_string(),
    })?;
    Ok(value.is_finite().then_some(value))
}

/// Distinct non-blank idea labels in first-seen order.
#[derive(Default)]
struct IdeaList {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl IdeaList {
    fn insert(&mut self, idea: &str) {
        if !idea.is_empty() && self.seen.insert(idea.to_string()) {
            self.ordered.push(idea.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
