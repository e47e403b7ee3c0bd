use glam::Vec3;
use orrery_engine::bridge::protocol::*;
use orrery_engine::{
    BodyId, CameraMode, CameraPose, ControlsState, FieldKind, FrameLayout, InstanceBatch,
    OverlayState, PlacementInstance, PointerHint, QualityTier, RenderBackend,
};

/// Render backend that writes into flat f32 buffers read by the JS renderer.
///
/// The frame buffer follows [`FrameLayout`]. Each placement field gets its own
/// instance buffer, written once and flagged through `HEADER_INSTANCES_DIRTY`.
pub struct SharedBufferBackend {
    layout: FrameLayout,
    frame: Vec<f32>,
    stars: InstanceBatch,
    debris: InstanceBatch,
    frame_counter: u32,
}

impl SharedBufferBackend {
    pub fn new(body_count: usize) -> Self {
        let layout = FrameLayout::new(body_count);
        let mut frame = vec![0.0; layout.buffer_total_floats];
        frame[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        frame[HEADER_BODY_COUNT] = body_count as f32;
        frame[HEADER_FOCUSED_BODY] = -1.0;
        Self {
            layout,
            frame,
            stars: InstanceBatch::default(),
            debris: InstanceBatch::default(),
            frame_counter: 0,
        }
    }

    /// Stamp per-frame header fields the backend trait does not carry.
    pub fn finish_frame(&mut self, elapsed: f64, mode: CameraMode) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        self.frame[HEADER_FRAME_COUNTER] = self.frame_counter as f32;
        self.frame[HEADER_ELAPSED] = elapsed as f32;
        self.frame[HEADER_CAMERA_MODE] = mode.code() as f32;
    }

    /// Called by JS once it has re-uploaded `kind`'s instances.
    pub fn clear_dirty(&mut self, kind: FieldKind) {
        let bits = self.frame[HEADER_INSTANCES_DIRTY] as u32 & !(1 << kind.code());
        self.frame[HEADER_INSTANCES_DIRTY] = bits as f32;
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    fn batch(&self, kind: FieldKind) -> &InstanceBatch {
        match kind {
            FieldKind::Stars => &self.stars,
            FieldKind::Debris => &self.debris,
        }
    }

    pub fn instances_ptr(&self, kind: FieldKind) -> *const f32 {
        self.batch(kind).instances_ptr()
    }

    pub fn instance_count(&self, kind: FieldKind) -> u32 {
        self.batch(kind).len() as u32
    }

    fn write_vec3(&mut self, offset: usize, v: Vec3) {
        self.frame[offset] = v.x;
        self.frame[offset + 1] = v.y;
        self.frame[offset + 2] = v.z;
    }
}

impl RenderBackend for SharedBufferBackend {
    fn write_instances(&mut self, field: FieldKind, instances: &[PlacementInstance]) {
        let (batch, header) = match field {
            FieldKind::Stars => (&mut self.stars, HEADER_STAR_COUNT),
            FieldKind::Debris => (&mut self.debris, HEADER_DEBRIS_COUNT),
        };
        batch.instances.clear();
        batch.instances.extend_from_slice(instances);
        self.frame[header] = instances.len() as f32;
    }

    fn mark_instances_dirty(&mut self, field: FieldKind) {
        let bits = self.frame[HEADER_INSTANCES_DIRTY] as u32 | (1 << field.code());
        self.frame[HEADER_INSTANCES_DIRTY] = bits as f32;
    }

    fn set_body_position(&mut self, body: BodyId, position: Vec3) {
        if body.index() < self.layout.body_count {
            let offset = self.layout.body_offset(body.index());
            self.write_vec3(offset, position);
        }
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        self.write_vec3(HEADER_CAMERA_POS_X, pose.position);
        self.write_vec3(HEADER_CAMERA_LOOK_X, pose.look_at);
    }

    fn set_overlay(&mut self, overlay: &OverlayState) {
        self.frame[HEADER_OVERLAY_VISIBLE] = if overlay.visible { 1.0 } else { 0.0 };
        self.frame[HEADER_FOCUSED_BODY] = overlay.body.map_or(-1.0, |id| id.0 as f32);
        self.write_vec3(HEADER_FROZEN_X, overlay.frozen.unwrap_or(Vec3::ZERO));
        self.write_vec3(HEADER_OVERLAY_ANCHOR_X, overlay.anchor.unwrap_or(Vec3::ZERO));
    }

    fn set_orbit_guides(&mut self, radii: &[f32]) {
        let start = self.layout.guide_data_offset;
        let n = radii.len().min(self.layout.guide_data_floats);
        self.frame[start..start + n].copy_from_slice(&radii[..n]);
    }

    fn set_controls(&mut self, controls: &ControlsState) {
        self.frame[HEADER_CONTROLS_ENABLED] = if controls.enabled { 1.0 } else { 0.0 };
        self.write_vec3(HEADER_CONTROLS_ANCHOR_X, controls.anchor);
    }

    fn set_pointer_hint(&mut self, hint: PointerHint) {
        self.frame[HEADER_POINTER_HINT] = hint.code() as f32;
    }

    fn set_quality(&mut self, tier: QualityTier) {
        self.frame[HEADER_QUALITY] = tier.code() as f32;
    }

    fn set_spin(&mut self, central: f32, debris: f32) {
        self.frame[HEADER_CENTRAL_SPIN] = central;
        self.frame[HEADER_DEBRIS_YAW] = debris;
    }
}
