use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::field::ParticlePlacement;

/// Per-instance transform written to the instance buffer read by the JS renderer.
/// Must match the JS protocol: 12 floats = 48 bytes stride.
///
/// Rotation is XYZ Euler, applied X first.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PlacementInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_z: f32,
    /// 0.0 to 1.0. Point fields only; mesh fields write 1.0.
    pub brightness: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl PlacementInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rot_x, self.rot_y, self.rot_z)
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::new(self.scale_x, self.scale_y, self.scale_z)
    }

    /// Model matrix (scale, then rotate, then translate).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale(), self.rotation(), self.position())
    }
}

impl From<&ParticlePlacement> for PlacementInstance {
    fn from(p: &ParticlePlacement) -> Self {
        Self {
            x: p.position.x,
            y: p.position.y,
            z: p.position.z,
            rot_x: p.rotation.x,
            rot_y: p.rotation.y,
            rot_z: p.rotation.z,
            scale_x: p.scale.x,
            scale_y: p.scale.y,
            scale_z: p.scale.z,
            brightness: p.brightness,
            _pad0: 0.0,
            _pad1: 0.0,
        }
    }
}

/// Contiguous instance records for one field, ready for a single upload.
#[derive(Debug, Clone, Default)]
pub struct InstanceBatch {
    pub instances: Vec<PlacementInstance>,
}

impl InstanceBatch {
    pub fn from_placements(placements: &[ParticlePlacement]) -> Self {
        Self {
            instances: placements.iter().map(PlacementInstance::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
