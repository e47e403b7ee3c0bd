use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Top-down view of the whole system: 200 units above the origin.
    pub const fn overview() -> Self {
        Self::new(Vec3::new(0.0, 200.0, 0.0), Vec3::ZERO)
    }

    /// Component-wise interpolation of position and look-at.
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// Largest per-component distance to `other`, over both vectors.
    pub fn max_abs_diff(&self, other: &CameraPose) -> f32 {
        let p = (self.position - other.position).abs().max_element();
        let l = (self.look_at - other.look_at).abs().max_element();
        p.max(l)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::overview()
    }
}

/// Camera placement relative to a focused body, scaled by the body's visual
/// radius so the apparent size stays roughly constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusFraming {
    /// Backward distance along +Z, in multiples of the visual radius.
    pub distance_factor: f32,
    /// Height above the orbital plane, in multiples of the visual radius.
    pub height_factor: f32,
}

impl Default for FocusFraming {
    fn default() -> Self {
        Self {
            distance_factor: 10.0,
            height_factor: 2.0,
        }
    }
}

impl FocusFraming {
    pub fn offset(&self, visual_radius: f32) -> Vec3 {
        Vec3::new(
            0.0,
            visual_radius * self.height_factor,
            visual_radius * self.distance_factor,
        )
    }

    /// Pose that frames a body of `visual_radius` sitting at `target`.
    pub fn pose_for(&self, target: Vec3, visual_radius: f32) -> CameraPose {
        CameraPose::new(target + self.offset(visual_radius), target)
    }
}
