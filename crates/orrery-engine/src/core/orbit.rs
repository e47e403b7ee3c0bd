//! Circular orbital kinematics: pure math, no engine state.
//!
//! Positions are a closed-form function of elapsed time, so they cannot drift
//! with frame rate or irregular time steps. Computed in f64 and converted to
//! f32 only at the output.

use std::f64::consts::TAU;

use glam::Vec3;

use super::body::CelestialBody;
use crate::api::types::BodyId;

/// One body's position at one instant. Valid for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSample {
    pub body: BodyId,
    pub position: Vec3,
    pub timestamp: f64,
}

/// Position on the orbital plane (y = 0) at `elapsed` seconds.
///
/// `x = sin(t·ω)·r`, `z = cos(t·ω)·r`, so every body starts on the +z axis.
pub fn position_at(body: &CelestialBody, elapsed: f64) -> Vec3 {
    let angle = elapsed * body.angular_speed;
    let r = body.orbital_radius;
    Vec3::new((angle.sin() * r) as f32, 0.0, (angle.cos() * r) as f32)
}

/// Sample one body.
pub fn sample(body: &CelestialBody, elapsed: f64) -> OrbitalSample {
    OrbitalSample {
        body: body.id,
        position: position_at(body, elapsed),
        timestamp: elapsed,
    }
}

/// Sample every body into `out`, replacing its contents.
pub fn sample_all<'a>(
    bodies: impl IntoIterator<Item = &'a CelestialBody>,
    elapsed: f64,
    out: &mut Vec<OrbitalSample>,
) {
    out.clear();
    out.extend(bodies.into_iter().map(|body| sample(body, elapsed)));
}

/// Seconds per full revolution.
pub fn period(body: &CelestialBody) -> f64 {
    TAU / body.angular_speed
}
