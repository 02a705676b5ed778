//! Core domain types shared across the repo-galaxy workspace.
//!
//! Everything in this crate is pure data and pure transformation: the
//! normalized repository record, the filter/sort pipeline that prepares a
//! record list for layout, and the statistics summary shown alongside the
//! galaxy. No I/O happens here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Placeholder substituted when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Sentinel language for repositories without a detected primary language.
///
/// Normalization happens at the ingestion boundary; by the time a record
/// reaches the filter or attribute logic, `language` is never empty.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Star count above which a repository gets the "popular" glow treatment.
pub const POPULAR_STARS: u64 = 1000;

// =============================================================================
// Repository Records
// =============================================================================

/// One normalized unit of repository metadata.
///
/// Produced wholesale by a fetch and replaced wholesale by the next one;
/// never merged incrementally. `id` is the stable key used for selection,
/// hover, and layout jitter seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Stable unique identifier from the hosting service.
    pub id: u64,
    /// Display name, non-empty.
    pub name: String,
    /// Description, or [`NO_DESCRIPTION`] when the source had none.
    pub description: String,
    /// Star count, drives sphere size and the popularity flag.
    pub stars: u64,
    /// Primary language, or [`UNKNOWN_LANGUAGE`] when the source had none.
    pub language: String,
    /// Canonical link to the repository page.
    pub url: String,
    /// Last update timestamp, used by the `updated` sort order.
    pub updated_at: DateTime<Utc>,
    /// Fork count, detail view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    /// Watcher count, detail view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<u64>,
    /// Topic tags, detail view only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

impl RepoRecord {
    /// Whether this repository crosses the popularity threshold.
    pub fn is_popular(&self) -> bool {
        self.stars > POPULAR_STARS
    }
}

// =============================================================================
// Filter / Sort Pipeline
// =============================================================================

/// Sort orders the galaxy supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending by star count (the default).
    #[default]
    Stars,
    /// Ascending lexicographic by name.
    Name,
    /// Descending by last-update timestamp.
    Updated,
}

impl SortKey {
    /// Get a display label for the sort key.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Name => "name",
            SortKey::Updated => "updated",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stars" => Ok(SortKey::Stars),
            "name" => Ok(SortKey::Name),
            "updated" => Ok(SortKey::Updated),
            other => Err(format!(
                "unknown sort key '{other}' (expected stars, name, or updated)"
            )),
        }
    }
}

/// Inclusive star-count bounds. `max: None` means unbounded above.
///
/// The upper bound is a true "no ceiling", not a large finite number; a
/// repository with any star count passes an unbounded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRange {
    /// Inclusive lower bound.
    pub min: u64,
    /// Inclusive upper bound, or `None` for unbounded.
    pub max: Option<u64>,
}

impl Default for StarRange {
    fn default() -> Self {
        Self { min: 0, max: None }
    }
}

impl StarRange {
    /// Check whether a star count falls inside the range.
    pub fn contains(&self, stars: u64) -> bool {
        stars >= self.min && self.max.is_none_or(|max| stars <= max)
    }
}

/// Bounds for the animation speed multiplier.
pub const MIN_ANIMATION_SPEED: f64 = 0.5;
/// Upper clamp for the animation speed multiplier.
pub const MAX_ANIMATION_SPEED: f64 = 3.0;

/// Mutable view configuration owned by the interactive shell.
///
/// Passed by reference into the pipeline on every recomputation; the
/// pipeline itself holds no state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Languages to keep. Empty set means no language filter.
    pub languages: BTreeSet<String>,
    /// Inclusive star-count bounds.
    pub star_range: StarRange,
    /// Active sort order.
    pub sort: SortKey,
    /// Animation speed multiplier, clamped to [0.5, 3.0].
    animation_speed: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            languages: BTreeSet::new(),
            star_range: StarRange::default(),
            sort: SortKey::default(),
            animation_speed: 1.0,
        }
    }
}

impl FilterConfig {
    /// Current animation speed multiplier.
    pub fn animation_speed(&self) -> f64 {
        self.animation_speed
    }

    /// Set the animation speed, clamped to the supported range.
    pub fn set_animation_speed(&mut self, speed: f64) {
        self.animation_speed = speed.clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED);
    }

    /// Toggle a language in the filter set.
    pub fn toggle_language(&mut self, language: &str) {
        if !self.languages.remove(language) {
            self.languages.insert(language.to_string());
        }
    }

    /// Check whether a single record passes both filters.
    pub fn matches(&self, record: &RepoRecord) -> bool {
        let language_ok =
            self.languages.is_empty() || self.languages.contains(record.language.as_str());
        language_ok && self.star_range.contains(record.stars)
    }

    /// Apply the language and star filters, then sort the survivors.
    ///
    /// Filtering runs first so excluded records never participate in
    /// tie-breaking. All sorts are stable: records with equal keys keep
    /// their relative input order, which keeps the layout visually calm
    /// across trivial re-sorts.
    pub fn apply(&self, records: &[RepoRecord]) -> Vec<RepoRecord> {
        let mut kept: Vec<RepoRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Stars => kept.sort_by(|a, b| b.stars.cmp(&a.stars)),
            SortKey::Name => kept.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Updated => kept.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        }

        kept
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Aggregate statistics over a fetched repository list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalaxyStats {
    /// Number of repositories.
    pub total_repos: usize,
    /// Sum of all star counts.
    pub total_stars: u64,
    /// Repository count per language.
    pub language_distribution: HashMap<String, usize>,
    /// Language with the most repositories.
    pub top_language: String,
    /// The single most-starred repository, if any.
    pub most_starred: Option<RepoRecord>,
}

impl GalaxyStats {
    /// Compute statistics for a record list.
    pub fn compute(records: &[RepoRecord]) -> Self {
        let mut language_distribution: HashMap<String, usize> = HashMap::new();
        for record in records {
            *language_distribution
                .entry(record.language.clone())
                .or_default() += 1;
        }

        let top_language = language_distribution
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(lang, _)| lang.clone())
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

        let most_starred = records.iter().max_by_key(|r| r.stars).cloned();

        Self {
            total_repos: records.len(),
            total_stars: records.iter().map(|r| r.stars).sum(),
            language_distribution,
            top_language,
            most_starred,
        }
    }

    /// Languages ranked by repository count, descending, at most `n`.
    ///
    /// Ties break alphabetically so the dashboard ordering is stable.
    pub fn top_languages(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .language_distribution
            .iter()
            .map(|(lang, count)| (lang.clone(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: u64, name: &str, stars: u64, language: &str) -> RepoRecord {
        RepoRecord {
            id,
            name: name.to_string(),
            description: NO_DESCRIPTION.to_string(),
            stars,
            language: language.to_string(),
            url: format!("https://github.com/octocat/{name}"),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(id as i64),
            forks: None,
            watchers: None,
            topics: Vec::new(),
        }
    }

    #[test]
    fn test_empty_language_set_is_no_filter() {
        let records = vec![record(1, "a", 1, "Rust"), record(2, "b", 2, "Go")];
        let out = FilterConfig::default().apply(&records);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_language_filter_keeps_only_members() {
        let records = vec![
            record(1, "b", 5, "Go"),
            record(2, "a", 50, "Rust"),
            record(3, "c", 5, "Go"),
        ];
        let mut config = FilterConfig::default();
        config.toggle_language("Rust");
        let out = config.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_star_sort_is_stable_on_ties() {
        let records = vec![
            record(1, "b", 5, "Go"),
            record(2, "a", 50, "Rust"),
            record(3, "c", 5, "Go"),
        ];
        let out = FilterConfig::default().apply(&records);
        let ids: Vec<u64> = out.iter().map(|r| r.id).collect();
        // 50 first, then the two 5-star records in input order.
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_name_sort_ascending_and_stable() {
        let mut records = vec![
            record(1, "zeta", 0, "Go"),
            record(2, "alpha", 0, "Go"),
            record(3, "alpha", 0, "Rust"),
        ];
        records[2].stars = 9;

        let config = FilterConfig {
            sort: SortKey::Name,
            ..Default::default()
        };
        let ids: Vec<u64> = config.apply(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_updated_sort_most_recent_first() {
        let records = vec![
            record(1, "old", 0, "Go"),
            record(3, "new", 0, "Go"),
            record(2, "mid", 0, "Go"),
        ];
        let config = FilterConfig {
            sort: SortKey::Updated,
            ..Default::default()
        };
        let ids: Vec<u64> = config.apply(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_unbounded_star_range_is_no_op() {
        let range = StarRange { min: 0, max: None };
        assert!(range.contains(0));
        assert!(range.contains(u64::MAX));
    }

    #[test]
    fn test_exact_star_range() {
        let records = vec![
            record(1, "a", 99, "Go"),
            record(2, "b", 100, "Go"),
            record(3, "c", 101, "Go"),
        ];
        let config = FilterConfig {
            star_range: StarRange {
                min: 100,
                max: Some(100),
            },
            ..Default::default()
        };
        let out = config.apply(&records);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }

    #[test]
    fn test_animation_speed_clamps() {
        let mut config = FilterConfig::default();
        config.set_animation_speed(10.0);
        assert_eq!(config.animation_speed(), MAX_ANIMATION_SPEED);
        config.set_animation_speed(0.0);
        assert_eq!(config.animation_speed(), MIN_ANIMATION_SPEED);
        config.set_animation_speed(1.5);
        assert_eq!(config.animation_speed(), 1.5);
    }

    #[test]
    fn test_toggle_language_round_trips() {
        let mut config = FilterConfig::default();
        config.toggle_language("Rust");
        assert!(config.languages.contains("Rust"));
        config.toggle_language("Rust");
        assert!(config.languages.is_empty());
    }

    #[test]
    fn test_popularity_threshold_is_exclusive() {
        assert!(!record(1, "a", 1000, "Go").is_popular());
        assert!(record(2, "b", 1001, "Go").is_popular());
    }

    #[test]
    fn test_stats_totals_and_top_language() {
        let records = vec![
            record(1, "a", 10, "Rust"),
            record(2, "b", 20, "Rust"),
            record(3, "c", 5, "Go"),
        ];
        let stats = GalaxyStats::compute(&records);
        assert_eq!(stats.total_repos, 3);
        assert_eq!(stats.total_stars, 35);
        assert_eq!(stats.top_language, "Rust");
        assert_eq!(stats.most_starred.as_ref().unwrap().id, 2);

        let top = stats.top_languages(5);
        assert_eq!(top[0], ("Rust".to_string(), 2));
        assert_eq!(top[1], ("Go".to_string(), 1));
    }

    #[test]
    fn test_stats_of_empty_list() {
        let stats = GalaxyStats::compute(&[]);
        assert_eq!(stats.total_repos, 0);
        assert_eq!(stats.total_stars, 0);
        assert_eq!(stats.top_language, UNKNOWN_LANGUAGE);
        assert!(stats.most_starred.is_none());
    }
}
