//! Per-repository visual attributes.
//!
//! A pure, total mapping from one record to the sphere's rest appearance:
//! radius from star count on a logarithmic scale, color from language, and
//! the popularity flag that gates the pulsing glow.

use serde::{Deserialize, Serialize};

use crate::palette::LanguagePalette;
use repo_galaxy_core::RepoRecord;

/// Radius of a zero-star sphere.
pub const BASE_RADIUS: f32 = 0.3;
/// Multiplier on `log10(stars + 1)`.
pub const RADIUS_SCALE: f32 = 0.5;

/// Derived rest appearance of one sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAttributes {
    /// Sphere radius, monotone non-decreasing in star count.
    pub radius: f32,
    /// Hex color from the language palette.
    pub color: String,
    /// Whether the sphere gets the pulsing glow treatment.
    pub popular: bool,
}

/// Derive the visual attributes for one record.
pub fn derive(palette: &LanguagePalette, record: &RepoRecord) -> VisualAttributes {
    VisualAttributes {
        radius: BASE_RADIUS + ((record.stars + 1) as f32).log10() * RADIUS_SCALE,
        color: palette.color(&record.language).to_string(),
        popular: record.is_popular(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FALLBACK_COLOR;
    use chrono::{TimeZone, Utc};
    use repo_galaxy_core::{NO_DESCRIPTION, UNKNOWN_LANGUAGE};

    fn record(stars: u64, language: &str) -> RepoRecord {
        RepoRecord {
            id: 1,
            name: "probe".to_string(),
            description: NO_DESCRIPTION.to_string(),
            stars,
            language: language.to_string(),
            url: "https://github.com/octocat/probe".to_string(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            forks: None,
            watchers: None,
            topics: Vec::new(),
        }
    }

    #[test]
    fn test_zero_stars_is_exactly_base_radius() {
        let palette = LanguagePalette::embedded();
        let attrs = derive(&palette, &record(0, "Rust"));
        assert_eq!(attrs.radius, BASE_RADIUS);
        assert!(!attrs.popular);
    }

    #[test]
    fn test_radius_strictly_increases_with_stars() {
        let palette = LanguagePalette::embedded();
        let mut previous = f32::NEG_INFINITY;
        for stars in [0, 1, 10, 100, 1000, 100_000, 10_000_000] {
            let radius = derive(&palette, &record(stars, "Go")).radius;
            assert!(radius.is_finite());
            assert!(radius > previous, "radius not increasing at {stars} stars");
            previous = radius;
        }
    }

    #[test]
    fn test_color_from_language() {
        let palette = LanguagePalette::embedded();
        assert_eq!(derive(&palette, &record(5, "Rust")).color, "#dea584");
        assert_eq!(
            derive(&palette, &record(5, UNKNOWN_LANGUAGE)).color,
            FALLBACK_COLOR
        );
    }

    #[test]
    fn test_popularity_gate() {
        let palette = LanguagePalette::embedded();
        assert!(!derive(&palette, &record(1000, "Go")).popular);
        assert!(derive(&palette, &record(1001, "Go")).popular);
    }
}
