pub mod instance;
pub mod placement;
pub mod traits;

#[cfg(test)]
pub(crate) mod recording;

// Re-export key types for convenient access
pub use instance::{InstanceBatch, PlacementInstance};
pub use placement::PlacementRenderer;
pub use traits::{PointerHint, QualityTier, RenderBackend};
