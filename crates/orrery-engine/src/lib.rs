pub mod api;
pub mod bridge;
pub mod camera;
pub mod config;
pub mod core;
pub mod extensions;
pub mod field;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::orrery::{Orrery, TickReport};
pub use api::types::{BodyId, IgnoreReason, MaterialRef, SelectOutcome};
pub use bridge::protocol::FrameLayout;
pub use camera::{
    CameraMode, CameraPose, CameraState, ControlsState, FocusController, FocusFraming,
    FocusSettings, FocusTarget, OverlayState, Transition,
};
pub use config::{ConfigError, OrreryConfig, QualityThreshold};
pub use crate::core::body::{BodyDesc, CelestialBody, CentralBody, SpeedLaw};
pub use crate::core::orbit::{period, position_at, sample, sample_all, OrbitalSample};
pub use crate::core::table::BodyTable;
pub use crate::core::time::SimClock;
pub use field::{
    generate, AnnulusParams, FieldKind, FieldShape, FieldSpec, ParticlePlacement,
    PlacementField, ShellParams,
};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{InstanceBatch, PlacementInstance};
pub use renderer::placement::PlacementRenderer;
pub use renderer::traits::{PointerHint, QualityTier, RenderBackend};

// Extensions
pub use extensions::Easing;
