//! Hierarchy registry — owns the loaded Scope Index and answers superior queries.
//!
//! The index is built once per `load` and shared as an `Arc` snapshot, so
//! queries never hold the lock while resolving. A second `load` without a
//! `clear` is a no-op even when given different data.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::hierarchy::fuzzy::{closest, Similarity};
use crate::hierarchy::index::ScopeIndex;
use crate::hierarchy::loader::{read_path, records_from_rows, ColumnLayout, LoadError, LoadStats};
use crate::hierarchy::normalize::normalize_opt;
use crate::hierarchy::resolver::{Resolution, Resolver, Stage};
use crate::hierarchy::seeds::SeedTable;

/// Approximate title matching on a miss.
const APPROX_MAX_MATCHES: usize = 3;
const APPROX_MIN_SIMILARITY: f64 = 0.6;

struct LoadedHierarchy {
    index: ScopeIndex,
    stats: LoadStats,
    loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HierarchyStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub records: usize,
    pub divisions: usize,
    pub titles: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Seed,
    Staged,
    Approximate,
    Unknown,
}

/// Answer to a superior query. `title: None` means "no action".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuperiorAnswer {
    pub title: Option<String>,
    pub division: Option<String>,
    pub source: AnswerSource,
    pub stage: Option<Stage>,
}

impl SuperiorAnswer {
    fn unknown() -> Self {
        Self {
            title: None,
            division: None,
            source: AnswerSource::Unknown,
            stage: None,
        }
    }

    fn from_resolution(resolution: Resolution, source: AnswerSource) -> Self {
        Self {
            title: resolution.descriptor.title,
            division: resolution.descriptor.division,
            source,
            stage: resolution.stage,
        }
    }
}

pub struct HierarchyRegistry {
    loaded: RwLock<Option<Arc<LoadedHierarchy>>>,
    seeds: RwLock<Arc<SeedTable>>,
    similarity: Arc<dyn Similarity>,
}

impl HierarchyRegistry {
    pub fn new(similarity: Arc<dyn Similarity>) -> Self {
        Self {
            loaded: RwLock::new(None),
            seeds: RwLock::new(Arc::new(SeedTable::default())),
            similarity,
        }
    }

    pub fn similarity_name(&self) -> &'static str {
        self.similarity.name()
    }

    /// Builds the index from data rows (header already removed).
    /// Returns `false` when an index was already loaded.
    pub async fn load<R, S>(&self, rows: impl IntoIterator<Item = R>, layout: &ColumnLayout) -> bool
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if self.loaded.read().await.is_some() {
            debug!("hierarchy already loaded; skipping build");
            return false;
        }

        let mut guard = self.loaded.write().await;
        // Another caller may have built it while we waited for the write lock.
        if guard.is_some() {
            return false;
        }

        let (records, stats) = records_from_rows(rows, layout);
        let index = ScopeIndex::build(&records);
        info!(
            rows_read = stats.rows_read,
            rows_skipped = stats.rows_skipped,
            divisions = index.division_count(),
            titles = index.title_count(),
            "hierarchy index built"
        );

        *guard = Some(Arc::new(LoadedHierarchy {
            index,
            stats,
            loaded_at: Utc::now(),
        }));
        true
    }

    /// Reads an export file and loads it. Nothing is read when an index is
    /// already loaded; on error the registry stays as it was.
    pub async fn load_path(&self, path: &Path, layout: &ColumnLayout) -> Result<bool, LoadError> {
        if self.is_loaded().await {
            debug!(path = %path.display(), "hierarchy already loaded; skipping read");
            return Ok(false);
        }
        let rows = read_path(path, layout)?;
        info!(path = %path.display(), rows = rows.len(), "hierarchy export read");
        Ok(self.load(&rows, layout).await)
    }

    /// Drops the index; the next load rebuilds from scratch.
    pub async fn clear(&self) {
        if self.loaded.write().await.take().is_some() {
            info!("hierarchy index cleared");
        }
    }

    pub async fn is_loaded(&self) -> bool {
        self.loaded.read().await.is_some()
    }

    pub async fn set_seeds(&self, seeds: SeedTable) {
        info!(seeds = seeds.len(), "seed table installed");
        *self.seeds.write().await = Arc::new(seeds);
    }

    pub async fn stats(&self) -> Option<HierarchyStats> {
        let loaded = self.snapshot().await?;
        Some(HierarchyStats {
            rows_read: loaded.stats.rows_read,
            rows_skipped: loaded.stats.rows_skipped,
            records: loaded.stats.records,
            divisions: loaded.index.division_count(),
            titles: loaded.index.title_count(),
            loaded_at: loaded.loaded_at,
        })
    }

    /// Superior of a (title, division) pair.
    ///
    /// Order: seeds, staged search, staged search on the closest known title.
    pub async fn get_superior(&self, title: &str, division: Option<&str>) -> SuperiorAnswer {
        let Some(title) = normalize_opt(Some(title)) else {
            return SuperiorAnswer::unknown();
        };
        let division = normalize_opt(division);

        let seeds = self.seeds.read().await.clone();
        if let Some(seed) = seeds.lookup(&title, division.as_deref()) {
            debug!(%title, superior = %seed.title, "answered from seed table");
            return SuperiorAnswer {
                title: Some(seed.title.clone()),
                division: seed.division.clone(),
                source: AnswerSource::Seed,
                stage: None,
            };
        }

        let Some(loaded) = self.snapshot().await else {
            debug!(%title, "no hierarchy loaded");
            return SuperiorAnswer::unknown();
        };
        let index = &loaded.index;
        let resolver = Resolver::new(index, self.similarity.as_ref());

        let scope = division.as_deref().or_else(|| index.home_division(&title));
        let resolution = resolver.resolve_with_stage(&title, scope);
        if resolution.descriptor.title.is_some() {
            return SuperiorAnswer::from_resolution(resolution, AnswerSource::Staged);
        }

        let known = index.global().iter().map(|e| e.title.as_str());
        let matches = closest(
            self.similarity.as_ref(),
            &title,
            known,
            APPROX_MAX_MATCHES,
            APPROX_MIN_SIMILARITY,
        );
        if let Some(best) = matches.into_iter().find(|m| *m != title) {
            let scope = division.as_deref().or_else(|| index.home_division(best));
            let resolution = resolver.resolve_with_stage(best, scope);
            if resolution.descriptor.title.is_some() {
                debug!(%title, matched = best, "answered via approximate title");
                return SuperiorAnswer::from_resolution(resolution, AnswerSource::Approximate);
            }
        }

        SuperiorAnswer::unknown()
    }

    async fn snapshot(&self) -> Option<Arc<LoadedHierarchy>> {
        self.loaded.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fuzzy::LevenshteinRatio;
    use std::io::Write;

    fn registry() -> HierarchyRegistry {
        HierarchyRegistry::new(Arc::new(LevenshteinRatio))
    }

    fn layout() -> ColumnLayout {
        ColumnLayout {
            title_column: 0,
            division_column: 1,
            ..ColumnLayout::default()
        }
    }

    fn rows(pairs: &[(&str, &str)]) -> Vec<Vec<String>> {
        pairs
            .iter()
            .map(|(t, d)| vec![t.to_string(), d.to_string()])
            .collect()
    }

    #[tokio::test]
    async fn test_unloaded_registry_answers_unknown() {
        let reg = registry();
        let answer = reg.get_superior("Analista", Some("Ventas")).await;
        assert_eq!(answer.title, None);
        assert_eq!(answer.source, AnswerSource::Unknown);
        assert!(reg.stats().await.is_none());
    }

    #[tokio::test]
    async fn test_load_then_resolve() {
        let reg = registry();
        assert!(reg.load(rows(&[("Analyst", "Sales"), ("Manager", "Sales")]), &layout()).await);

        let answer = reg.get_superior("analyst", Some("sales")).await;
        assert_eq!(answer.title.as_deref(), Some("MANAGER"));
        assert_eq!(answer.division.as_deref(), Some("SALES"));
        assert_eq!(answer.source, AnswerSource::Staged);
        assert_eq!(answer.stage, Some(Stage::SameDivision));
    }

    #[tokio::test]
    async fn test_case_and_accent_invariant() {
        let reg = registry();
        reg.load(rows(&[("Asociado", "Ventas"), ("Jefe de Área", "Ventas")]), &layout())
            .await;

        let a = reg.get_superior("asociado", Some("Ventas")).await;
        let b = reg.get_superior("ASOCIADO", Some("VENTAS")).await;
        assert_eq!(a, b);
        assert_eq!(a.title.as_deref(), Some("JEFE DE AREA"));
    }

    #[tokio::test]
    async fn test_second_load_is_noop_until_clear() {
        let reg = registry();
        assert!(reg.load(rows(&[("Analista", "A"), ("Jefe", "A")]), &layout()).await);
        assert!(!reg.load(rows(&[("Analista", "A"), ("Gerente", "A")]), &layout()).await);

        let answer = reg.get_superior("Analista", Some("A")).await;
        assert_eq!(answer.title.as_deref(), Some("JEFE"));

        reg.clear().await;
        assert!(!reg.is_loaded().await);
        assert!(reg.load(rows(&[("Analista", "A"), ("Gerente", "A")]), &layout()).await);
        let answer = reg.get_superior("Analista", Some("A")).await;
        assert_eq!(answer.title.as_deref(), Some("GERENTE"));
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_build_once() {
        let reg = Arc::new(registry());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&reg);
                tokio::spawn(async move {
                    reg.load(rows(&[("Analista", "A"), ("Jefe", "A")]), &layout()).await
                })
            })
            .collect();

        let mut built = 0;
        for handle in handles {
            if handle.await.unwrap() {
                built += 1;
            }
        }
        assert_eq!(built, 1);
    }

    #[tokio::test]
    async fn test_division_less_query_uses_home_division() {
        let reg = registry();
        reg.load(
            rows(&[("Coordinador", "Global"), ("Analista", "Ops"), ("Jefe", "Ops")]),
            &layout(),
        )
        .await;

        // A global scan would pick COORDINADOR (23); the home division OPS holds JEFE.
        let answer = reg.get_superior("Analista", None).await;
        assert_eq!(answer.title.as_deref(), Some("JEFE"));
        assert_eq!(answer.division.as_deref(), Some("OPS"));
    }

    #[tokio::test]
    async fn test_seeds_override_staged_search() {
        let reg = registry();
        reg.load(rows(&[("Analista", "Ventas"), ("Jefe", "Ventas")]), &layout())
            .await;
        let seeds = SeedTable::from_json_str(
            r#"[{"title": "Analista", "division": "Ventas", "superior_title": "Coordinador Comercial"}]"#,
        )
        .unwrap();
        reg.set_seeds(seeds).await;

        let answer = reg.get_superior("analista", Some("ventas")).await;
        assert_eq!(answer.title.as_deref(), Some("COORDINADOR COMERCIAL"));
        assert_eq!(answer.source, AnswerSource::Seed);
        assert_eq!(answer.stage, None);
    }

    #[tokio::test]
    async fn test_seed_stays_in_its_division() {
        let reg = registry();
        reg.load(
            rows(&[("Analista", "Ventas"), ("Analista", "Marketing"), ("Supervisor", "Marketing")]),
            &layout(),
        )
        .await;
        let seeds = SeedTable::from_json_str(
            r#"[{"title": "Analista", "division": "Ventas", "superior_title": "Coordinador Comercial"}]"#,
        )
        .unwrap();
        reg.set_seeds(seeds).await;

        let answer = reg.get_superior("analista", Some("marketing")).await;
        assert_eq!(answer.source, AnswerSource::Staged);
        assert_eq!(answer.title.as_deref(), Some("SUPERVISOR"));
        assert_eq!(answer.division.as_deref(), Some("MARKETING"));
    }

    #[tokio::test]
    async fn test_seeds_answer_without_index() {
        let reg = registry();
        let seeds =
            SeedTable::from_json_str(r#"[{"title": "Cajero", "superior_title": "Supervisor"}]"#)
                .unwrap();
        reg.set_seeds(seeds).await;

        assert_eq!(reg.get_superior("Cajero", None).await.source, AnswerSource::Seed);
        assert_eq!(reg.get_superior("Otro", None).await.source, AnswerSource::Unknown);
    }

    #[tokio::test]
    async fn test_no_signal_stays_unknown() {
        let reg = registry();
        reg.load(rows(&[("Operario Zzyzx", "Planta"), ("Zzyzx Role", "Planta")]), &layout())
            .await;

        let answer = reg.get_superior("Operario Zzyzx", Some("Planta")).await;
        assert_eq!(answer.source, AnswerSource::Unknown);
        assert_eq!(answer.title, None);
    }

    #[tokio::test]
    async fn test_approximate_match_resolves_typo() {
        let reg = registry();
        // Both rank as LEAD, so neither outranks the other; only TEAM LEADER has a
        // fallback rule.
        reg.load(rows(&[("Team Leader", "Planta")]), &layout()).await;

        let direct = reg.get_superior("Team Leadr", None).await;
        assert_eq!(direct.source, AnswerSource::Approximate);
        assert_eq!(direct.title.as_deref(), Some("TEAM MANAGER"));
        assert_eq!(direct.division.as_deref(), Some("PLANTA"));
        assert_eq!(direct.stage, Some(Stage::KeywordFallback));
    }

    #[tokio::test]
    async fn test_empty_title_is_unknown() {
        let reg = registry();
        reg.load(rows(&[("Jefe", "A")]), &layout()).await;
        assert_eq!(reg.get_superior("   ", Some("A")).await, SuperiorAnswer::unknown());
    }

    #[tokio::test]
    async fn test_load_path_and_stats() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cargo;division").unwrap();
        writeln!(file, "Analista;Ventas").unwrap();
        writeln!(file, "Jefe;Ventas").unwrap();
        writeln!(file, "corta").unwrap();

        let reg = registry();
        assert!(reg.load_path(file.path(), &layout()).await.unwrap());
        let stats = reg.stats().await.unwrap();
        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.rows_skipped, 1);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.divisions, 1);
        assert_eq!(stats.titles, 2);

        assert!(!reg.load_path(file.path(), &layout()).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_source_leaves_registry_unbuilt() {
        let reg = registry();
        let err = reg
            .load_path(Path::new("/nonexistent/export.csv"), &layout())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
        assert!(!reg.is_loaded().await);
        assert_eq!(
            reg.get_superior("Analista", None).await.source,
            AnswerSource::Unknown
        );
    }
}
