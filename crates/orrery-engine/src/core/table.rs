use crate::api::types::BodyId;

use super::body::{BodyDesc, CelestialBody, SpeedLaw};

/// Orbiting bodies in a flat Vec, indexed by [`BodyId`].
/// Built once at startup; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct BodyTable {
    bodies: Vec<CelestialBody>,
}

impl BodyTable {
    /// Build from descriptors. Ids are assigned in table order.
    pub fn from_descs(descs: &[BodyDesc], law: &SpeedLaw) -> Self {
        let bodies = descs
            .iter()
            .enumerate()
            .map(|(i, desc)| CelestialBody::from_desc(BodyId(i as u32), desc, law))
            .collect();
        Self { bodies }
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    /// Find a body by display name (exact match).
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
