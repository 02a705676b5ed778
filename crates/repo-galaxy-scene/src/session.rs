//! The session coordinator.
//!
//! Owns everything the interactive shell mutates: the current record list,
//! the filter configuration, hover/selection state, per-sphere animation
//! state, and the fetch generation counter that guards against a stale
//! in-flight search overwriting a newer one. All shared state lives here
//! and is passed by reference into the pure derivations; mutation only
//! happens in response to discrete events.

use tracing::debug;

use crate::animation::{FrameTransform, SphereAnimation};
use crate::layout::{build_scene, PositionedSphere};
use crate::palette::LanguagePalette;
use repo_galaxy_core::{FilterConfig, GalaxyStats, RepoRecord, SortKey, StarRange};

/// Hover and selection, held independently of each other.
///
/// Pure data flowing outward to the render layer; the core never reaches
/// into platform cursor or window state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Repo id under the pointer, if any.
    pub hovered: Option<u64>,
    /// Repo id whose detail panel is open, if any.
    pub selected: Option<u64>,
}

impl InteractionState {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Single-owner state for one galaxy view.
#[derive(Debug)]
pub struct GalaxySession {
    palette: LanguagePalette,
    records: Vec<RepoRecord>,
    config: FilterConfig,
    interaction: InteractionState,
    spheres: Vec<PositionedSphere>,
    animations: Vec<SphereAnimation>,
    generation: u64,
}

impl GalaxySession {
    /// Create an empty session with the given color palette.
    pub fn new(palette: LanguagePalette) -> Self {
        Self {
            palette,
            records: Vec::new(),
            config: FilterConfig::default(),
            interaction: InteractionState::default(),
            spheres: Vec::new(),
            animations: Vec::new(),
            generation: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Search lifecycle
    // -------------------------------------------------------------------------

    /// Start a new search, invalidating any fetch still in flight.
    ///
    /// Returns the generation token the eventual result must present to
    /// [`install`](Self::install).
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.records.clear();
        self.interaction.clear();
        self.rebuild();
        self.generation
    }

    /// Install fetched records, unless a newer search has started since.
    ///
    /// Returns whether the results were applied. Stale results are dropped
    /// wholesale; a slow first fetch can never overwrite a newer one.
    pub fn install(&mut self, generation: u64, records: Vec<RepoRecord>) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation,
                current = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }
        self.records = records;
        self.interaction.clear();
        self.rebuild();
        true
    }

    // -------------------------------------------------------------------------
    // Filter configuration
    // -------------------------------------------------------------------------

    /// Current filter configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Replace the whole configuration (e.g. "reset filters").
    pub fn set_config(&mut self, config: FilterConfig) {
        self.config = config;
        self.rebuild();
    }

    /// Toggle one language in the filter set.
    pub fn toggle_language(&mut self, language: &str) {
        self.config.toggle_language(language);
        self.rebuild();
    }

    /// Change the star range filter.
    pub fn set_star_range(&mut self, range: StarRange) {
        self.config.star_range = range;
        self.rebuild();
    }

    /// Change the sort order.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.config.sort = sort;
        self.rebuild();
    }

    /// Change the animation speed. Does not touch the layout.
    pub fn set_animation_speed(&mut self, speed: f64) {
        self.config.set_animation_speed(speed);
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Current interaction state.
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Pointer entered (or left, with `None`) a sphere.
    pub fn hover(&mut self, id: Option<u64>) {
        self.interaction.hovered = id.filter(|id| self.contains(*id));
    }

    /// Open the detail panel for a sphere. Independent of hover.
    pub fn select(&mut self, id: u64) {
        if self.contains(id) {
            self.interaction.selected = Some(id);
        }
    }

    /// Close the detail panel.
    pub fn clear_selection(&mut self) {
        self.interaction.selected = None;
    }

    /// Record under the pointer, if any.
    pub fn hovered_record(&self) -> Option<&RepoRecord> {
        self.find(self.interaction.hovered?)
    }

    /// Record whose detail panel is open, if any.
    pub fn selected_record(&self) -> Option<&RepoRecord> {
        self.find(self.interaction.selected?)
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// All fetched records, unfiltered.
    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    /// The current filtered, sorted, positioned, styled sphere list.
    pub fn spheres(&self) -> &[PositionedSphere] {
        &self.spheres
    }

    /// Statistics over the full fetched list (not the filtered view).
    pub fn stats(&self) -> GalaxyStats {
        GalaxyStats::compute(&self.records)
    }

    /// Advance one frame at elapsed time `t` (seconds).
    ///
    /// Returns one transform per sphere, index-aligned with
    /// [`spheres`](Self::spheres).
    pub fn tick(&mut self, t: f32) -> Vec<FrameTransform> {
        let speed = self.config.animation_speed() as f32;
        let hovered = self.interaction.hovered;

        self.spheres
            .iter()
            .zip(self.animations.iter_mut())
            .map(|(sphere, animation)| {
                animation.frame(
                    t,
                    speed,
                    hovered == Some(sphere.record.id),
                    sphere.position,
                    sphere.attrs.popular,
                )
            })
            .collect()
    }

    fn contains(&self, id: u64) -> bool {
        self.spheres.iter().any(|s| s.record.id == id)
    }

    fn find(&self, id: u64) -> Option<&RepoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Recompute the sphere list wholesale.
    ///
    /// Animation state restarts from rest for every sphere; the hovered id
    /// is kept only if its sphere survived the filter.
    fn rebuild(&mut self) {
        let visible = self.config.apply(&self.records);
        self.spheres = build_scene(&self.palette, &visible);
        self.animations = vec![SphereAnimation::default(); self.spheres.len()];

        if let Some(id) = self.interaction.hovered {
            if !self.contains(id) {
                self.interaction.hovered = None;
            }
        }
    }
}
