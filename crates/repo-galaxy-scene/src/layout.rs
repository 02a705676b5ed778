//! Spiral layout.
//!
//! Maps an ordered (already filtered and sorted) record list onto an
//! expanding spiral: two full turns across the list, radius growing from 5
//! to 20, with a bounded per-sphere jitter so the galaxy looks organic
//! rather than drawn with a compass. The jitter is seeded from the stable
//! repository id, so a sphere keeps its offsets across recomputations and
//! only moves when its rank actually changes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::attributes::{self, VisualAttributes};
use crate::palette::LanguagePalette;
use repo_galaxy_core::RepoRecord;

/// Innermost spiral radius.
const SPIRAL_INNER: f32 = 5.0;
/// Radial spread from the innermost to the outermost sphere.
const SPIRAL_SPREAD: f32 = 15.0;
/// Total sweep across the list: two full turns.
const SPIRAL_SWEEP: f32 = 4.0 * PI;
/// Vertical jitter bound, uniform in [-4, 4].
const HEIGHT_JITTER: f32 = 4.0;
/// Radial jitter bound, uniform in [-1.5, 1.5].
const RADIAL_JITTER: f32 = 1.5;

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One laid-out, styled sphere.
///
/// Ephemeral: the whole list is rebuilt on every data or filter change,
/// never patched incrementally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionedSphere {
    /// The record this sphere represents.
    pub record: RepoRecord,
    /// Layout-assigned rest position.
    pub position: Vec3,
    /// Derived rest appearance.
    pub attrs: VisualAttributes,
}

/// Jitter offsets (height, radial) as a pure function of the repo id.
fn jitter(id: u64) -> (f32, f32) {
    let mut rng = StdRng::seed_from_u64(id);
    let height = rng.gen_range(-HEIGHT_JITTER..=HEIGHT_JITTER);
    let radial = rng.gen_range(-RADIAL_JITTER..=RADIAL_JITTER);
    (height, radial)
}

/// Rest position for the sphere at `index` of a list of `len` records.
fn spiral_position(index: usize, len: usize, id: u64) -> Vec3 {
    let t = index as f32 / len as f32;
    let angle = t * SPIRAL_SWEEP;
    let radius = SPIRAL_INNER + t * SPIRAL_SPREAD;
    let (height, radial) = jitter(id);

    Vec3 {
        x: angle.cos() * (radius + radial),
        y: height,
        z: angle.sin() * (radius + radial),
    }
}

/// Lay out and style a record list, index-aligned with the input.
///
/// An empty list produces an empty scene; the spiral formulas are never
/// evaluated with a zero length.
pub fn build_scene(palette: &LanguagePalette, records: &[RepoRecord]) -> Vec<PositionedSphere> {
    let len = records.len();
    records
        .iter()
        .enumerate()
        .map(|(index, record)| PositionedSphere {
            position: spiral_position(index, len, record.id),
            attrs: attributes::derive(palette, record),
            record: record.clone(),
        })
        .collect()
}
