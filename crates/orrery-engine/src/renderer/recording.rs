//! In-memory backend for tests.

use std::collections::HashMap;

use glam::Vec3;

use super::instance::PlacementInstance;
use super::traits::{PointerHint, QualityTier, RenderBackend};
use crate::api::types::BodyId;
use crate::camera::{CameraPose, ControlsState, OverlayState};
use crate::field::FieldKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    WriteInstances(FieldKind, usize),
    MarkDirty(FieldKind),
}

/// Records instance uploads as calls and keeps the latest value of every
/// per-frame output.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    pub instances: HashMap<FieldKind, Vec<PlacementInstance>>,
    pub bodies: HashMap<BodyId, Vec3>,
    pub camera: Option<CameraPose>,
    pub overlay: OverlayState,
    pub guides: Vec<f32>,
    pub controls: Option<ControlsState>,
    pub pointer: PointerHint,
    pub quality: QualityTier,
    pub spin: (f32, f32),
}

impl RenderBackend for RecordingBackend {
    fn write_instances(&mut self, field: FieldKind, instances: &[PlacementInstance]) {
        self.calls.push(Call::WriteInstances(field, instances.len()));
        self.instances.insert(field, instances.to_vec());
    }

    fn mark_instances_dirty(&mut self, field: FieldKind) {
        self.calls.push(Call::MarkDirty(field));
    }

    fn set_body_position(&mut self, body: BodyId, position: Vec3) {
        self.bodies.insert(body, position);
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        self.camera = Some(*pose);
    }

    fn set_overlay(&mut self, overlay: &OverlayState) {
        self.overlay = *overlay;
    }

    fn set_orbit_guides(&mut self, radii: &[f32]) {
        self.guides = radii.to_vec();
    }

    fn set_controls(&mut self, controls: &ControlsState) {
        self.controls = Some(*controls);
    }

    fn set_pointer_hint(&mut self, hint: PointerHint) {
        self.pointer = hint;
    }

    fn set_quality(&mut self, tier: QualityTier) {
        self.quality = tier;
    }

    fn set_spin(&mut self, central: f32, debris: f32) {
        self.spin = (central, debris);
    }
}
