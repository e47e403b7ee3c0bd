//! Render backend contract.
//!
//! The core computes poses and transforms; a backend writes them to whatever
//! actually draws (the WebGL scene graph through the web bridge, or a
//! recording stub in tests). Textures, materials, post-processing and overlay
//! markup live behind this trait and are never interpreted by the core.

use glam::Vec3;

use super::instance::PlacementInstance;
use crate::api::types::BodyId;
use crate::camera::{CameraPose, ControlsState, OverlayState};
use crate::field::FieldKind;

/// Render quality tier chosen from the viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityTier {
    /// Full effects, including bloom.
    #[default]
    Standard,
    /// Viewport beyond the threshold: post-processing is skipped.
    Large,
}

impl QualityTier {
    /// Large when either dimension exceeds the threshold.
    pub fn from_viewport(width: u32, height: u32, max_width: u32, max_height: u32) -> Self {
        if width > max_width || height > max_height {
            QualityTier::Large
        } else {
            QualityTier::Standard
        }
    }

    pub fn post_processing(self) -> bool {
        self == QualityTier::Standard
    }

    pub fn code(self) -> u32 {
        match self {
            QualityTier::Standard => 0,
            QualityTier::Large => 1,
        }
    }
}

/// Cursor hint for the host while hovering bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerHint {
    #[default]
    Default,
    /// Hovering something clickable.
    Pointer,
}

impl PointerHint {
    pub fn code(self) -> u32 {
        match self {
            PointerHint::Default => 0,
            PointerHint::Pointer => 1,
        }
    }
}

/// Output sink for everything the scene produces.
///
/// Only the first five methods are required; the rest default to no-ops so a
/// minimal backend can ignore cosmetic outputs.
pub trait RenderBackend {
    /// Replace the instance data of `field` in one batch.
    fn write_instances(&mut self, field: FieldKind, instances: &[PlacementInstance]);

    /// Flag the instance buffer of `field` for re-upload.
    fn mark_instances_dirty(&mut self, field: FieldKind);

    fn set_body_position(&mut self, body: BodyId, position: Vec3);

    fn set_camera(&mut self, pose: &CameraPose);

    fn set_overlay(&mut self, overlay: &OverlayState);

    /// Radii of the orbit guide rings, once at init.
    fn set_orbit_guides(&mut self, _radii: &[f32]) {}

    fn set_controls(&mut self, _controls: &ControlsState) {}

    fn set_pointer_hint(&mut self, _hint: PointerHint) {}

    fn set_quality(&mut self, _tier: QualityTier) {}

    /// Central body spin and debris ring yaw, in radians.
    fn set_spin(&mut self, _central: f32, _debris: f32) {}
}
