// extensions/mod.rs
//
// Optional math helpers shared by the camera and the renderer.

pub mod easing;

pub use easing::Easing;
