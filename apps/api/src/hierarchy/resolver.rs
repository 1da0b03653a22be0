//! Superior Resolver — staged search for the direct superior of a title.
//!
//! Stages run in fixed order and the first hit wins:
//! 1. same division, closest more-senior rank
//! 2. related divisions (≥ 2 shared name tokens), closest more-senior rank
//! 3. category escalation to the next ladder label, matched against real titles
//! 4. global closest more-senior rank
//! 5. keyword fallback rules
//! 6. the stage-3 label with no division, or nothing
//!
//! Resolution is a pure function of the index and the query; it never fails.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::hierarchy::classifier::infer_rank;
use crate::hierarchy::fallback::fallback_superior;
use crate::hierarchy::fuzzy::{closest, Similarity};
use crate::hierarchy::index::{RankedTitle, ScopeIndex};
use crate::hierarchy::ladder::{next_higher_label, CanonicalLabel};
use crate::hierarchy::normalize::{contains_keyword, normalize_opt, words};

/// Label-to-title bridging in category escalation.
const ESCALATION_MAX_MATCHES: usize = 2;
const ESCALATION_MIN_SIMILARITY: f64 = 0.5;

/// Minimum shared division-name tokens for two divisions to count as related.
const RELATED_DIVISION_MIN_SHARED: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// `title: None` means no superior could be determined.
/// `title: Some, division: None` means the title is known but not its division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuperiorDescriptor {
    pub title: Option<String>,
    pub division: Option<String>,
}

impl SuperiorDescriptor {
    pub fn unknown() -> Self {
        Self::default()
    }

    fn found(title: &str, division: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            division: division.map(str::to_string),
        }
    }
}

/// Which stage produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    SameDivision,
    RelatedDivision,
    CategoryEscalation,
    GlobalRank,
    KeywordFallback,
    UnresolvedTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub descriptor: SuperiorDescriptor,
    /// `None` when nothing was found.
    pub stage: Option<Stage>,
}

impl Resolution {
    fn at(stage: Stage, descriptor: SuperiorDescriptor) -> Self {
        Self {
            descriptor,
            stage: Some(stage),
        }
    }

    fn unknown() -> Self {
        Self {
            descriptor: SuperiorDescriptor::unknown(),
            stage: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

pub struct Resolver<'a> {
    index: &'a ScopeIndex,
    similarity: &'a dyn Similarity,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a ScopeIndex, similarity: &'a dyn Similarity) -> Self {
        Self { index, similarity }
    }

    pub fn resolve(&self, title: &str, division: Option<&str>) -> SuperiorDescriptor {
        self.resolve_with_stage(title, division).descriptor
    }

    /// Like [`Resolver::resolve`], also reporting the stage that answered.
    pub fn resolve_with_stage(&self, title: &str, division: Option<&str>) -> Resolution {
        let Some(title) = normalize_opt(Some(title)) else {
            return Resolution::unknown();
        };
        let division = normalize_opt(division);
        let division = division.as_deref();
        let rank = infer_rank(&title);

        if let Some(div) = division {
            if let Some(hit) = closest_above(scoped(self.index, div), rank) {
                debug!(%title, superior = %hit.1.title, "resolved in same division");
                return Resolution::at(
                    Stage::SameDivision,
                    SuperiorDescriptor::found(&hit.1.title, Some(hit.0)),
                );
            }

            if let Some(hit) = closest_above(related(self.index, div), rank) {
                debug!(%title, superior = %hit.1.title, related = hit.0, "resolved in related division");
                return Resolution::at(
                    Stage::RelatedDivision,
                    SuperiorDescriptor::found(&hit.1.title, Some(hit.0)),
                );
            }
        }

        let target = next_higher_label(&title);
        if let Some(label) = target {
            if let Some(found) = self.find_for_label(&title, label, division) {
                debug!(%title, %label, superior = ?found.title, "resolved by category escalation");
                return Resolution::at(Stage::CategoryEscalation, found);
            }
        }

        let global = self.index.global().iter().map(|e| ((), e));
        if let Some(((), entry)) = closest_above(global, rank) {
            debug!(%title, superior = %entry.title, "resolved by global rank");
            return Resolution::at(
                Stage::GlobalRank,
                SuperiorDescriptor::found(&entry.title, self.index.home_division(&entry.title)),
            );
        }

        if let Some(generic) = fallback_superior(&title) {
            let found = self
                .find_for_generic(&title, generic, division)
                .unwrap_or_else(|| SuperiorDescriptor::found(generic, division));
            debug!(%title, %generic, superior = ?found.title, "resolved by keyword fallback");
            return Resolution::at(Stage::KeywordFallback, found);
        }

        match target {
            Some(label) => {
                debug!(%title, %label, "no real title for target label");
                Resolution::at(
                    Stage::UnresolvedTarget,
                    SuperiorDescriptor::found(label.as_str(), None),
                )
            }
            None => {
                debug!(%title, "no superior found");
                Resolution::unknown()
            }
        }
    }

    /// A real title containing the whole label or one of its `/`-pieces,
    /// searched in the query division, then globally, then by similarity.
    fn find_for_label(
        &self,
        query: &str,
        label: CanonicalLabel,
        division: Option<&str>,
    ) -> Option<SuperiorDescriptor> {
        let matches = |candidate: &str| {
            candidate != query
                && (contains_keyword(candidate, label.as_str())
                    || label.pieces().any(|p| contains_keyword(candidate, p)))
        };
        if let Some(found) = self.search(division, matches) {
            return Some(found);
        }

        let candidates = self
            .index
            .global()
            .iter()
            .map(|e| e.title.as_str())
            .filter(|t| *t != query);
        closest(
            self.similarity,
            label.as_str(),
            candidates,
            ESCALATION_MAX_MATCHES,
            ESCALATION_MIN_SIMILARITY,
        )
        .first()
        .map(|t| SuperiorDescriptor::found(t, self.index.home_division(t)))
    }

    /// A real title containing the generic title or any of its words.
    fn find_for_generic(
        &self,
        query: &str,
        generic: &str,
        division: Option<&str>,
    ) -> Option<SuperiorDescriptor> {
        self.search(division, |candidate| {
            candidate != query
                && (contains_keyword(candidate, generic)
                    || words(generic).any(|w| contains_keyword(candidate, w)))
        })
    }

    /// First entry matching `accept` in the query division, else in global
    /// with the division taken from the reverse lookup.
    fn search(
        &self,
        division: Option<&str>,
        accept: impl Fn(&str) -> bool,
    ) -> Option<SuperiorDescriptor> {
        if let Some(div) = division {
            if let Some(entry) = self.index.division(div).iter().find(|e| accept(&e.title)) {
                return Some(SuperiorDescriptor::found(&entry.title, Some(div)));
            }
        }
        self.index
            .global()
            .iter()
            .find(|e| accept(&e.title))
            .map(|e| SuperiorDescriptor::found(&e.title, self.index.home_division(&e.title)))
    }
}

fn scoped<'a>(
    index: &'a ScopeIndex,
    division: &'a str,
) -> impl Iterator<Item = (&'a str, &'a RankedTitle)> + 'a {
    index.division(division).iter().map(move |e| (division, e))
}

/// Entries of divisions sharing enough name tokens with `division`, in
/// first-seen division order.
fn related<'a>(
    index: &'a ScopeIndex,
    division: &'a str,
) -> impl Iterator<Item = (&'a str, &'a RankedTitle)> + 'a {
    let tokens: HashSet<&'a str> = words(division).collect();
    index
        .divisions()
        .filter(move |(other, _)| {
            *other != division
                && words(other)
                    .collect::<HashSet<_>>()
                    .intersection(&tokens)
                    .count()
                    >= RELATED_DIVISION_MIN_SHARED
        })
        .flat_map(|(other, entries)| entries.iter().map(move |e| (other, e)))
}

/// The candidate with the smallest positive rank gap below `rank`; the first
/// one wins on ties.
fn closest_above<'e, T>(
    candidates: impl IntoIterator<Item = (T, &'e RankedTitle)>,
    rank: u16,
) -> Option<(T, &'e RankedTitle)> {
    let mut best: Option<(T, &'e RankedTitle)> = None;
    for (scope, entry) in candidates {
        if entry.rank >= rank {
            continue;
        }
        let better = match &best {
            Some((_, current)) => rank - entry.rank < rank - current.rank,
            None => true,
        };
        if better {
            best = Some((scope, entry));
        }
    }
    best
}
