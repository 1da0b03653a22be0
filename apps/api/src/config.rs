use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::hierarchy::fuzzy::SimilarityKind;
use crate::hierarchy::loader::{
    ColumnLayout, DEFAULT_DELIMITER, DEFAULT_DIVISION_COLUMN, DEFAULT_TITLE_COLUMN,
};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is set but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// HR export loaded at startup when set; also the default for `POST /load`.
    pub hierarchy_csv_path: Option<PathBuf>,
    pub title_column: usize,
    pub division_column: usize,
    pub delimiter: u8,
    pub seed_path: Option<PathBuf>,
    pub similarity: SimilarityKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            hierarchy_csv_path: optional_env("HIERARCHY_CSV_PATH").map(PathBuf::from),
            title_column: parse_env("HIERARCHY_TITLE_COLUMN", DEFAULT_TITLE_COLUMN)?,
            division_column: parse_env("HIERARCHY_DIVISION_COLUMN", DEFAULT_DIVISION_COLUMN)?,
            delimiter: delimiter_env("HIERARCHY_DELIMITER")?,
            seed_path: optional_env("HIERARCHY_SEED_PATH").map(PathBuf::from),
            similarity: match optional_env("HIERARCHY_SIMILARITY") {
                Some(value) => value
                    .parse()
                    .map_err(anyhow::Error::msg)
                    .context("HIERARCHY_SIMILARITY must be 'levenshtein' or 'jaro_winkler'")?,
                None => SimilarityKind::default(),
            },
        })
    }

    pub fn column_layout(&self) -> ColumnLayout {
        ColumnLayout {
            title_column: self.title_column,
            division_column: self.division_column,
            delimiter: self.delimiter,
        }
    }
}

/// Set and non-blank, or `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env(key: &str, default: usize) -> Result<usize> {
    match optional_env(key) {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .with_context(|| format!("'{key}' must be a non-negative integer")),
        None => Ok(default),
    }
}

fn delimiter_env(key: &str) -> Result<u8> {
    let Some(value) = std::env::var(key).ok().filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_DELIMITER);
    };
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => bail!("'{key}' must be a single ASCII character"),
    }
}
