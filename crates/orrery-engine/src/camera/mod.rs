//! Camera poses, timed transitions and the focus state machine.

pub mod focus;
pub mod pose;
pub mod transition;

pub use focus::{
    CameraMode, CameraState, ControlsState, FocusController, FocusSettings, FocusTarget,
    OverlayState,
};
pub use pose::{CameraPose, FocusFraming};
pub use transition::Transition;
