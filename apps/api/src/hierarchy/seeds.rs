//! Seed table — literal (title, division) → superior overrides.
//!
//! Consulted before the staged search. Keys and values are normalized on load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::hierarchy::normalize::{normalize, normalize_opt};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub title: String,
    #[serde(default)]
    pub division: Option<String>,
    pub superior_title: String,
    #[serde(default)]
    pub superior_division: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSuperior {
    pub title: String,
    pub division: Option<String>,
}

#[derive(Debug, Default)]
pub struct SeedTable {
    /// (title, division) → superior; division is "" for division-less seeds.
    exact: HashMap<(String, String), SeededSuperior>,
    /// title → superior of the first seed listed for that title.
    by_title: HashMap<String, SeededSuperior>,
}

impl SeedTable {
    pub fn from_entries(entries: impl IntoIterator<Item = SeedEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            let title = normalize(&entry.title);
            let superior_title = normalize(&entry.superior_title);
            if title.is_empty() || superior_title.is_empty() {
                continue;
            }
            let superior = SeededSuperior {
                title: superior_title,
                division: normalize_opt(entry.superior_division.as_deref()),
            };
            let division = normalize_opt(entry.division.as_deref()).unwrap_or_default();

            table
                .by_title
                .entry(title.clone())
                .or_insert_with(|| superior.clone());
            table.exact.entry((title, division)).or_insert(superior);
        }
        table
    }

    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_json_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Exact (title, division) first, then the division-less seed for the
    /// title. A query without a division accepts the first seed in any division.
    /// Both arguments must already be normalized.
    pub fn lookup(&self, title: &str, division: Option<&str>) -> Option<&SeededSuperior> {
        let exact = |division: &str| self.exact.get(&(title.to_string(), division.to_string()));
        match division {
            Some(division) => exact(division).or_else(|| exact("")),
            None => exact("").or_else(|| self.by_title.get(title)),
        }
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}
