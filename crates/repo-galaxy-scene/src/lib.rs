//! Scene derivation for the repo-galaxy visualization.
//!
//! Turns a filtered repository list into declarative scene data: spiral
//! positions, per-sphere visual attributes, and per-frame animation
//! transforms. Nothing here paints pixels; the render substrate consumes
//! the output. All derivations are pure except the hover-scale smoothing,
//! which carries one value across frames by design.

pub mod animation;
pub mod attributes;
pub mod layout;
pub mod palette;
pub mod session;

pub use animation::{FrameTransform, SphereAnimation};
pub use attributes::VisualAttributes;
pub use layout::{build_scene, PositionedSphere, Vec3};
pub use palette::LanguagePalette;
pub use session::{GalaxySession, InteractionState};
