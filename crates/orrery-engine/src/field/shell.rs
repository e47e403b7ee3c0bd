//! Shell mode: background point-lights scattered over a thin spherical shell.

use std::f64::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::hash::Sampler;
use super::ParticlePlacement;

const AZIMUTH: u32 = 0;
const ELEVATION: u32 = 1;
const DEPTH: u32 = 2;
const BRIGHTNESS: u32 = 3;

/// Shape of the background point field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellParams {
    /// Mean shell radius in world units.
    pub radius: f32,
    /// Radial jitter as a fraction of `radius` (total spread, centered).
    pub radial_jitter: f32,
    /// Dimmest possible point.
    pub brightness_floor: f32,
    /// Power-curve exponent applied to the uniform brightness draw. Must be < 1
    /// for a heavy-tailed spread.
    pub brightness_exponent: f32,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            radius: 600.0,
            radial_jitter: 0.1,
            brightness_floor: 0.05,
            brightness_exponent: 0.3,
        }
    }
}

/// Remap a uniform sample onto `[floor, 1]` through `u^exponent`.
#[inline]
pub fn brightness(u: f64, floor: f32, exponent: f32) -> f32 {
    let floor = floor as f64;
    (floor + u.powf(exponent as f64) * (1.0 - floor)) as f32
}

/// Place point `index` of a shell field.
///
/// Elevation uses inverse-cosine sampling (`acos(2u - 1)`) so points are
/// uniform over the sphere surface instead of bunching at the poles.
pub(super) fn place(index: u32, sampler: &Sampler, params: &ShellParams) -> ParticlePlacement {
    let theta = sampler.draw(index, AZIMUTH) * TAU;
    let phi = (2.0 * sampler.draw(index, ELEVATION) - 1.0).acos();
    let radius = params.radius as f64;
    let r = radius + sampler.centered(index, DEPTH) * radius * params.radial_jitter as f64;

    let position = Vec3::new(
        (r * phi.sin() * theta.cos()) as f32,
        (r * phi.sin() * theta.sin()) as f32,
        (r * phi.cos()) as f32,
    );

    ParticlePlacement {
        position,
        scale: Vec3::ONE,
        rotation: Vec3::ZERO,
        brightness: brightness(
            sampler.draw(index, BRIGHTNESS),
            params.brightness_floor,
            params.brightness_exponent,
        ),
    }
}
