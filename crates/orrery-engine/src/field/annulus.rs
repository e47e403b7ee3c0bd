//! Annulus mode: debris scattered around a flat ring.

use std::f64::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::hash::Sampler;
use super::ParticlePlacement;

const RADIAL: u32 = 0;
const VERTICAL: u32 = 1;
const SCALE: u32 = 2;
const PITCH: u32 = 3;
const YAW: u32 = 4;

/// Shape of the debris ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnulusParams {
    /// Ring center-line radius.
    pub radius: f32,
    /// Full radial width of the ring (jitter is ±width/2).
    pub width: f32,
    /// Full vertical thickness (offset is ±thickness/2).
    pub thickness: f32,
    /// Smallest particle scale.
    pub scale_min: f32,
    /// Scale spread added on top of `scale_min`.
    pub scale_range: f32,
    /// Upper bound for each of the two tumble angles, in radians.
    pub max_tumble: f32,
}

impl Default for AnnulusParams {
    fn default() -> Self {
        Self {
            radius: 60.0,
            width: 5.0,
            thickness: 3.0,
            scale_min: 0.2,
            scale_range: 0.4,
            max_tumble: PI as f32,
        }
    }
}

/// Place particle `index` of a `count`-particle ring.
///
/// Angles are spread over evenly spaced slots rather than drawn, so the ring
/// never shows gaps regardless of salt.
pub(super) fn place(
    index: u32,
    count: usize,
    sampler: &Sampler,
    params: &AnnulusParams,
) -> ParticlePlacement {
    let angle = index as f64 / count as f64 * TAU;
    let distance = params.radius as f64 + sampler.centered(index, RADIAL) * params.width as f64;
    let height = sampler.centered(index, VERTICAL) * params.thickness as f64;

    let scale = params.scale_min as f64 + sampler.draw(index, SCALE) * params.scale_range as f64;
    let tumble = params.max_tumble as f64;

    ParticlePlacement {
        position: Vec3::new(
            (angle.cos() * distance) as f32,
            height as f32,
            (angle.sin() * distance) as f32,
        ),
        scale: Vec3::splat(scale as f32),
        rotation: Vec3::new(
            (sampler.draw(index, PITCH) * tumble) as f32,
            (sampler.draw(index, YAW) * tumble) as f32,
            0.0,
        ),
        brightness: 1.0,
    }
}
