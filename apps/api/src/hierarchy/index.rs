//! Scope Index — per-division and global (title, best rank) sequences.
//!
//! Built once from the full set of title records and read-only afterwards.

use std::collections::HashMap;

use serde::Serialize;

use crate::hierarchy::classifier::infer_rank;
use crate::hierarchy::normalize::normalize;

/// One row of the HR export reduced to what the resolver needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleRecord {
    pub original_title: String,
    pub original_division: String,
    pub normalized_title: String,
    pub normalized_division: String,
    pub rank: u16,
}

impl TitleRecord {
    pub fn new(title: &str, division: &str) -> Self {
        let normalized_title = normalize(title);
        let rank = infer_rank(&normalized_title);
        Self {
            original_title: title.to_string(),
            original_division: division.to_string(),
            normalized_division: normalize(division),
            normalized_title,
            rank,
        }
    }
}

/// A distinct normalized title with the most senior rank observed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTitle {
    pub title: String,
    pub rank: u16,
}

/// Collapses repeated titles to their best rank, remembering first-seen order.
#[derive(Default)]
struct RankCollector {
    entries: Vec<RankedTitle>,
    positions: HashMap<String, usize>,
}

impl RankCollector {
    fn observe(&mut self, title: &str, rank: u16) {
        match self.positions.get(title) {
            Some(&idx) => {
                let entry = &mut self.entries[idx];
                entry.rank = entry.rank.min(rank);
            }
            None => {
                self.positions.insert(title.to_string(), self.entries.len());
                self.entries.push(RankedTitle {
                    title: title.to_string(),
                    rank,
                });
            }
        }
    }

    /// Sorted ascending by rank; `sort_by_key` is stable, so equal ranks keep
    /// first-seen order.
    fn finish(mut self) -> Vec<RankedTitle> {
        self.entries.sort_by_key(|e| e.rank);
        self.entries
    }
}

#[derive(Debug, Default)]
pub struct ScopeIndex {
    /// Division names in first-seen order.
    divisions: Vec<String>,
    by_division: HashMap<String, Vec<RankedTitle>>,
    global: Vec<RankedTitle>,
    home_division: HashMap<String, String>,
}

impl ScopeIndex {
    /// Builds the index. Records with an empty normalized title are ignored;
    /// records with an empty division only feed the global sequence.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a TitleRecord>) -> Self {
        let mut divisions: Vec<String> = Vec::new();
        let mut per_division: HashMap<String, RankCollector> = HashMap::new();
        let mut global = RankCollector::default();

        for record in records {
            if record.normalized_title.is_empty() {
                continue;
            }
            global.observe(&record.normalized_title, record.rank);

            if record.normalized_division.is_empty() {
                continue;
            }
            let collector = per_division
                .entry(record.normalized_division.clone())
                .or_insert_with(|| {
                    divisions.push(record.normalized_division.clone());
                    RankCollector::default()
                });
            collector.observe(&record.normalized_title, record.rank);
        }

        let by_division: HashMap<String, Vec<RankedTitle>> = per_division
            .into_iter()
            .map(|(division, collector)| (division, collector.finish()))
            .collect();

        let mut home_division = HashMap::new();
        for division in &divisions {
            for entry in &by_division[division] {
                home_division
                    .entry(entry.title.clone())
                    .or_insert_with(|| division.clone());
            }
        }

        Self {
            divisions,
            by_division,
            global: global.finish(),
            home_division,
        }
    }

    /// Entries of one division; empty when the division is unknown.
    pub fn division(&self, division: &str) -> &[RankedTitle] {
        self.by_division
            .get(division)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All divisions with their entries, in first-seen order.
    pub fn divisions(&self) -> impl Iterator<Item = (&str, &[RankedTitle])> {
        self.divisions
            .iter()
            .map(|d| (d.as_str(), self.division(d)))
    }

    pub fn global(&self) -> &[RankedTitle] {
        &self.global
    }

    /// First division (in first-seen order) whose entries contain `title`.
    pub fn home_division(&self, title: &str) -> Option<&str> {
        self.home_division.get(title).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    pub fn division_count(&self) -> usize {
        self.divisions.len()
    }

    pub fn title_count(&self) -> usize {
        self.global.len()
    }
}
