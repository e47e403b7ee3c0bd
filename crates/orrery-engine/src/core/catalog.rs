//! Default scene: the eight planets plus three dwarf planets.
//!
//! Distances and sizes are diagram units, not astronomy. Sizes are relative to
//! Earth = 1 and exaggerated for readability.

use super::body::BodyDesc;

pub const EARTH: usize = 2;
pub const BODY_COUNT: usize = 11;

/// (name, orbital distance, visual size, texture).
const DEFAULT_TABLE: [(&str, f64, f32, &str); BODY_COUNT] = [
    ("Mercury", 20.0, 0.6, "2k_mercury.jpg"),
    ("Venus", 30.0, 0.9, "2k_venus_surface.jpg"),
    ("Earth", 40.0, 1.0, "2k_earth_daymap.jpg"),
    ("Mars", 50.0, 0.7, "2k_mars.jpg"),
    ("Ceres", 70.0, 0.4, "2k_ceres.jpg"),
    ("Jupiter", 90.0, 2.5, "2k_jupiter.jpg"),
    ("Saturn", 116.0, 2.2, "2k_saturn.jpg"),
    ("Uranus", 140.0, 1.8, "2k_uranus.jpg"),
    ("Neptune", 160.0, 1.8, "2k_neptune.jpg"),
    ("Makemake", 184.0, 0.6, "2k_makemake.jpg"),
    ("Haumea", 200.0, 0.5, "2k_haumea.jpg"),
];

/// Body table used when no configuration overrides it.
pub fn default_bodies() -> Vec<BodyDesc> {
    DEFAULT_TABLE
        .iter()
        .map(|&(name, distance, size, material)| BodyDesc::new(name, distance, size, material))
        .collect()
}
