//! Approximate Matcher — pluggable string similarity plus a `closest` lookup.
//!
//! Default: `LevenshteinRatio` (normalized edit distance).
//! Alternative: `JaroWinkler`, selected via `HIERARCHY_SIMILARITY`.
//!
//! The registry holds an `Arc<dyn Similarity>`, so the metric can be swapped
//! without touching resolver logic.

use std::str::FromStr;

/// A string-similarity strategy. Scores are in `[0.0, 1.0]`, 1.0 = identical.
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;

    /// Short name used in logs and stats.
    fn name(&self) -> &'static str;
}

/// `1 - levenshtein(a, b) / max(len(a), len(b))`.
pub struct LevenshteinRatio;

impl Similarity for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Jaro-Winkler similarity; favours shared prefixes.
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

/// Config-level selector for the similarity backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityKind {
    #[default]
    Levenshtein,
    JaroWinkler,
}

impl SimilarityKind {
    pub fn build(self) -> Box<dyn Similarity> {
        match self {
            Self::Levenshtein => Box::new(LevenshteinRatio),
            Self::JaroWinkler => Box::new(JaroWinkler),
        }
    }
}

impl FromStr for SimilarityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "levenshtein" => Ok(Self::Levenshtein),
            "jaro_winkler" | "jaro-winkler" => Ok(Self::JaroWinkler),
            other => Err(format!("unknown similarity backend '{other}'")),
        }
    }
}

/// Candidates scoring at least `min_similarity` against `query`, best first,
/// at most `max_results`. Equal scores keep candidate order.
pub fn closest<'a>(
    similarity: &dyn Similarity,
    query: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    max_results: usize,
    min_similarity: f64,
) -> Vec<&'a str> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(&'a str, f64)> = candidates
        .into_iter()
        .map(|c| (c, similarity.score(query, c)))
        .filter(|(_, score)| *score >= min_similarity)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(max_results);
    scored.into_iter().map(|(c, _)| c).collect()
}
