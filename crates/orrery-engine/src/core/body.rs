use serde::{Deserialize, Serialize};

use crate::api::types::{BodyId, MaterialRef};

/// Maps orbital radius to angular speed.
///
/// `speed(d) = reference_speed * sqrt(reference_distance / d) * scale`.
/// An inverse-square-root falloff chosen for looks (closer bodies move faster);
/// it only approximates Kepler's third law, which would give `d^-1.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedLaw {
    /// Orbital radius of the baseline body.
    pub reference_distance: f64,
    /// Angular speed of the baseline body, rad/s.
    pub reference_speed: f64,
    /// Global multiplier on every derived speed.
    pub scale: f64,
}

impl Default for SpeedLaw {
    fn default() -> Self {
        Self {
            reference_distance: 40.0,
            reference_speed: 0.4,
            scale: 1.0,
        }
    }
}

impl SpeedLaw {
    /// Angular speed (rad/s) for a body orbiting at `distance`.
    pub fn angular_speed(&self, distance: f64) -> f64 {
        self.reference_speed * (self.reference_distance / distance).sqrt() * self.scale
    }
}

/// Static table row describing one orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    pub name: String,
    /// Orbital radius (distance from the central body).
    pub distance: f64,
    /// Visual radius, relative to Earth = 1.
    pub size: f32,
    #[serde(default)]
    pub material: MaterialRef,
}

impl BodyDesc {
    pub fn new(name: &str, distance: f64, size: f32, material: &str) -> Self {
        Self {
            name: name.to_string(),
            distance,
            size,
            material: MaterialRef::new(material),
        }
    }
}

/// Immutable orbiting body, built once at scene initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    pub orbital_radius: f64,
    /// Radians per second; derived from `orbital_radius` through a [`SpeedLaw`].
    pub angular_speed: f64,
    pub visual_radius: f32,
    pub material: MaterialRef,
}

impl CelestialBody {
    pub fn from_desc(id: BodyId, desc: &BodyDesc, law: &SpeedLaw) -> Self {
        Self {
            id,
            name: desc.name.clone(),
            orbital_radius: desc.distance,
            angular_speed: law.angular_speed(desc.distance),
            visual_radius: desc.size,
            material: desc.material.clone(),
        }
    }
}

/// The body at the origin. Spins in place; never orbits or takes focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralBody {
    pub visual_radius: f32,
    /// Spin about the vertical axis, rad/s.
    pub spin_rate: f64,
    pub material: MaterialRef,
}

impl Default for CentralBody {
    fn default() -> Self {
        Self {
            visual_radius: 16.0,
            spin_rate: 0.1,
            material: MaterialRef::new("2k_sun.jpg"),
        }
    }
}

impl CentralBody {
    /// Spin angle at `elapsed` seconds, wrapped to [0, 2π).
    pub fn spin_at(&self, elapsed: f64) -> f32 {
        (self.spin_rate * elapsed).rem_euclid(std::f64::consts::TAU) as f32
    }
}
