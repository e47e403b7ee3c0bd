//! Deterministic placement fields: the background point shell and the debris ring.
//!
//! `generate` is pure. Each placement depends only on its index, the field salt
//! and the shape parameters, so the same inputs always re-derive bit-identical
//! output. Fields are generated once at startup and cached in a
//! [`PlacementField`].

pub mod annulus;
pub mod hash;
pub mod shell;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use annulus::AnnulusParams;
pub use hash::Sampler;
pub use shell::ShellParams;

/// Generated transform for one particle instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePlacement {
    pub position: Vec3,
    /// Per-axis scale. Uniform fields write the same value three times.
    pub scale: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Point brightness in [0, 1]. Always 1.0 outside shell mode.
    pub brightness: f32,
}

/// Placement strategy plus its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FieldShape {
    /// Points on a sphere with radial jitter and power-curve brightness.
    Shell(ShellParams),
    /// Evenly slotted ring with radial/vertical jitter, scale and tumble.
    Annulus(AnnulusParams),
}

/// Generate `count` placements for `shape` under `salt`.
///
/// Fields that must look unrelated need different salts.
pub fn generate(count: usize, salt: u32, shape: &FieldShape) -> Vec<ParticlePlacement> {
    let sampler = Sampler::new(salt);
    let count = count.min(u32::MAX as usize);
    (0..count as u32)
        .map(|i| match shape {
            FieldShape::Shell(params) => shell::place(i, &sampler, params),
            FieldShape::Annulus(params) => annulus::place(i, count, &sampler, params),
        })
        .collect()
}

/// Which cached field a batch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Stars,
    Debris,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Stars, FieldKind::Debris];

    /// Stable numeric code shared with the web bridge.
    pub fn code(self) -> u32 {
        match self {
            FieldKind::Stars => 0,
            FieldKind::Debris => 1,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(FieldKind::Stars),
            1 => Some(FieldKind::Debris),
            _ => None,
        }
    }
}

/// Configuration of one particle field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub count: usize,
    pub salt: u32,
    pub shape: FieldShape,
    /// Whole-field rotation about the vertical axis, radians per second.
    #[serde(default)]
    pub spin_rate: f64,
}

impl FieldSpec {
    /// Background point field: 2000 points on a radius-600 shell.
    pub fn stars() -> Self {
        Self {
            count: 2000,
            salt: 1,
            shape: FieldShape::Shell(ShellParams::default()),
            spin_rate: 0.0,
        }
    }

    /// Debris ring: 5000 rocks around radius 60, turning slowly.
    pub fn debris() -> Self {
        Self {
            count: 5000,
            salt: 2,
            shape: FieldShape::Annulus(AnnulusParams::default()),
            spin_rate: 0.05,
        }
    }
}

/// A generated field, immutable once built.
///
/// `generation` changes only when the placements are regenerated, which lets
/// the instanced renderer skip redundant uploads.
#[derive(Debug, Clone)]
pub struct PlacementField {
    kind: FieldKind,
    spec: FieldSpec,
    placements: Vec<ParticlePlacement>,
    generation: u32,
}

impl PlacementField {
    pub fn generate(kind: FieldKind, spec: FieldSpec) -> Self {
        Self {
            kind,
            spec,
            placements: generate(spec.count, spec.salt, &spec.shape),
            generation: 1,
        }
    }

    /// Rebuild with new parameters. A no-op when `spec` is unchanged.
    pub fn regenerate(&mut self, spec: FieldSpec) {
        if spec == self.spec {
            return;
        }
        self.placements = generate(spec.count, spec.salt, &spec.shape);
        self.spec = spec;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn placements(&self) -> &[ParticlePlacement] {
        &self.placements
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whole-field yaw at `elapsed` seconds, wrapped to [0, 2π).
    pub fn yaw_at(&self, elapsed: f64) -> f32 {
        (self.spec.spin_rate * elapsed).rem_euclid(std::f64::consts::TAU) as f32
    }
}
