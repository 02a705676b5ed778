//! Language to color lookup.
//!
//! The table is a static data asset (GitHub's official language colors)
//! injected into attribute derivation, so it can be updated independently
//! of any logic. Lookup is a case-sensitive exact match on the normalized
//! language name; there is no fuzzy matching.

use serde::Deserialize;
use std::collections::HashMap;

use repo_galaxy_core::UNKNOWN_LANGUAGE;

/// Neutral gray used for unknown or unmapped languages.
pub const FALLBACK_COLOR: &str = "#8B8B8B";

/// Color table keyed by language name.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct LanguagePalette {
    colors: HashMap<String, String>,
}

impl Default for LanguagePalette {
    fn default() -> Self {
        Self::embedded()
    }
}

impl LanguagePalette {
    /// The palette bundled with the crate.
    pub fn embedded() -> Self {
        serde_json::from_str(include_str!("../assets/language_colors.json"))
            .expect("embedded language palette is valid JSON")
    }

    /// Load a palette from a JSON object of `language -> hex color`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Hex color for a language, falling back to neutral gray.
    pub fn color(&self, language: &str) -> &str {
        if language == UNKNOWN_LANGUAGE {
            return FALLBACK_COLOR;
        }
        self.colors
            .get(language)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Number of mapped languages.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette maps no languages at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_palette_has_common_languages() {
        let palette = LanguagePalette::embedded();
        assert_eq!(palette.color("Rust"), "#dea584");
        assert_eq!(palette.color("Go"), "#00ADD8");
        assert_eq!(palette.color("JavaScript"), "#f1e05a");
    }

    #[test]
    fn test_unknown_language_maps_to_gray() {
        let palette = LanguagePalette::embedded();
        assert_eq!(palette.color(UNKNOWN_LANGUAGE), FALLBACK_COLOR);
        assert_eq!(palette.color("Befunge-93"), FALLBACK_COLOR);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let palette = LanguagePalette::embedded();
        assert_eq!(palette.color("rust"), FALLBACK_COLOR);
    }

    #[test]
    fn test_palette_from_json() {
        let palette = LanguagePalette::from_json(r##"{"Ferrous": "#123456"}"##).unwrap();
        assert_eq!(palette.color("Ferrous"), "#123456");
        assert_eq!(palette.len(), 1);
    }
}
