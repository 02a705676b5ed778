//! Per-frame sphere animation.
//!
//! Runs once per render tick for every visible sphere and must stay well
//! inside a frame budget: no I/O, no allocation beyond the returned
//! transform. Everything is a pure function of elapsed time and the inputs
//! except two accumulators: the rotation angles (only monotonicity is
//! observable) and the exponentially-smoothed hover scale, which depends on
//! the previous frame's value by design.

use serde::{Deserialize, Serialize};

use crate::layout::Vec3;

/// Amplitude of the floating bob.
const FLOAT_AMPLITUDE: f32 = 0.2;
/// Per-frame rotation increments around x and y.
const ROTATION_RATE: (f32, f32) = (0.001, 0.002);
/// Scale a hovered sphere settles toward.
const HOVER_SCALE: f32 = 1.3;
/// Fraction of the remaining distance covered per frame.
const SCALE_SMOOTHING: f32 = 0.1;
/// Fixed glow when hovering a non-popular sphere.
const HOVER_GLOW: (f32, f32) = (1.8, 0.4);

/// Final transform for one sphere at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTransform {
    /// Rest position with the floating offset applied to y.
    pub position: Vec3,
    /// Accumulated rotation around (x, y).
    pub rotation: (f32, f32),
    /// Smoothed uniform scale.
    pub scale: f32,
    /// Scale of the secondary glow ring.
    pub glow_scale: f32,
    /// Opacity of the secondary glow ring, 0 when suppressed.
    pub glow_opacity: f32,
}

/// The carried-across-frames part of one sphere's animation.
#[derive(Debug, Clone, Copy)]
pub struct SphereAnimation {
    rotation: (f32, f32),
    scale: f32,
}

impl Default for SphereAnimation {
    fn default() -> Self {
        Self {
            rotation: (0.0, 0.0),
            scale: 1.0,
        }
    }
}

impl SphereAnimation {
    /// Current smoothed scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Advance one frame and produce the transform.
    ///
    /// `t` is elapsed wall-clock seconds, `speed` the clamped multiplier,
    /// `base` the layout rest position. The floating phase is offset by the
    /// sphere's x coordinate so neighbors desynchronize.
    pub fn frame(
        &mut self,
        t: f32,
        speed: f32,
        hovered: bool,
        base: Vec3,
        popular: bool,
    ) -> FrameTransform {
        let time = t * speed;

        let position = Vec3 {
            x: base.x,
            y: base.y + (time + base.x).sin() * FLOAT_AMPLITUDE,
            z: base.z,
        };

        self.rotation.0 += ROTATION_RATE.0 * speed;
        self.rotation.1 += ROTATION_RATE.1 * speed;

        let target = if hovered { HOVER_SCALE } else { 1.0 };
        self.scale += (target - self.scale) * SCALE_SMOOTHING;

        let (glow_scale, glow_opacity) = if popular {
            let pulse = 0.7 + 0.3 * (2.0 * time).sin();
            (pulse * if hovered { 1.5 } else { 1.2 }, pulse * 0.3)
        } else if hovered {
            HOVER_GLOW
        } else {
            (1.0, 0.0)
        };

        FrameTransform {
            position,
            rotation: self.rotation,
            scale: self.scale,
            glow_scale,
            glow_opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_offset_is_bounded_and_phase_shifted() {
        let mut a = SphereAnimation::default();
        let mut b = SphereAnimation::default();
        let base_a = Vec3::new(0.0, 2.0, 0.0);
        let base_b = Vec3::new(3.0, 2.0, 0.0);

        let frame_a = a.frame(1.0, 1.0, false, base_a, false);
        let frame_b = b.frame(1.0, 1.0, false, base_b, false);

        assert!((frame_a.position.y - base_a.y).abs() <= FLOAT_AMPLITUDE);
        // Different x, different phase.
        assert_ne!(
            frame_a.position.y - base_a.y,
            frame_b.position.y - base_b.y
        );
    }

    #[test]
    fn test_rotation_is_monotone_while_speed_positive() {
        let mut anim = SphereAnimation::default();
        let base = Vec3::default();
        let mut previous = (0.0, 0.0);
        for frame in 0..10 {
            let t = frame as f32 / 60.0;
            let transform = anim.frame(t, 1.5, false, base, false);
            assert!(transform.rotation.0 > previous.0);
            assert!(transform.rotation.1 > previous.1);
            previous = transform.rotation;
        }
    }

    #[test]
    fn test_hover_scale_converges_without_overshoot() {
        let mut anim = SphereAnimation::default();
        let base = Vec3::default();

        let mut previous = 1.0;
        for frame in 0..200 {
            let t = frame as f32 / 60.0;
            let scale = anim.frame(t, 1.0, true, base, false).scale;
            assert!(scale >= previous, "shrank while approaching the target");
            assert!(scale <= HOVER_SCALE, "overshot the hover scale");
            previous = scale;
        }
        assert!((previous - HOVER_SCALE).abs() < 1e-3);

        // And back down once the pointer leaves.
        for frame in 200..400 {
            let t = frame as f32 / 60.0;
            let scale = anim.frame(t, 1.0, false, base, false).scale;
            assert!(scale <= previous, "grew while settling back");
            assert!(scale >= 1.0);
            previous = scale;
        }
        assert!((previous - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_glow_suppressed_when_neither_popular_nor_hovered() {
        let mut anim = SphereAnimation::default();
        let transform = anim.frame(0.5, 1.0, false, Vec3::default(), false);
        assert_eq!(transform.glow_opacity, 0.0);
        assert_eq!(transform.glow_scale, 1.0);
    }

    #[test]
    fn test_popular_glow_pulses_within_bounds() {
        let mut anim = SphereAnimation::default();
        for frame in 0..120 {
            let t = frame as f32 / 60.0;
            let transform = anim.frame(t, 2.0, false, Vec3::default(), true);
            // pulse in [0.4, 1.0], opacity = pulse * 0.3
            assert!(transform.glow_opacity >= 0.4 * 0.3 - 1e-6);
            assert!(transform.glow_opacity <= 0.3 + 1e-6);
            assert!(transform.glow_scale >= 0.4 * 1.2 - 1e-6);
            assert!(transform.glow_scale <= 1.2 + 1e-6);
        }
    }

    #[test]
    fn test_hovered_non_popular_uses_fixed_glow() {
        let mut anim = SphereAnimation::default();
        let transform = anim.frame(0.25, 1.0, true, Vec3::default(), false);
        assert_eq!((transform.glow_scale, transform.glow_opacity), HOVER_GLOW);
    }
}
