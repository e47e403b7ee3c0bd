//! Camera focus state machine.
//!
//! ```text
//! Overview ──select──▶ TransitioningToFocus ──progress=1──▶ Focused
//!    ▲                        │  ▲                             │
//!    │                 deselect  select (interrupt)        deselect
//!    │                        ▼  │                             ▼
//!    └──progress=1── TransitioningToOverview ◀─────────────────┘
//! ```
//!
//! Selecting a body freezes its position at the instant of selection. The
//! controller keeps that snapshot until deselection, and the scene renders the
//! focused body there instead of at its live orbital position.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::pose::{CameraPose, FocusFraming};
use super::transition::Transition;
use crate::api::types::{BodyId, IgnoreReason, SelectOutcome};
use crate::core::body::CelestialBody;
use crate::extensions::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Overview,
    TransitioningToFocus,
    Focused,
    TransitioningToOverview,
}

impl CameraMode {
    pub fn is_transitioning(self) -> bool {
        matches!(
            self,
            CameraMode::TransitioningToFocus | CameraMode::TransitioningToOverview
        )
    }

    /// Stable numeric code shared with the web bridge.
    pub fn code(self) -> u32 {
        match self {
            CameraMode::Overview => 0,
            CameraMode::TransitioningToFocus => 1,
            CameraMode::Focused => 2,
            CameraMode::TransitioningToOverview => 3,
        }
    }
}

/// Everything the camera is doing right now. At most one transition exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub mode: CameraMode,
    pub pose: CameraPose,
    pub transition: Option<Transition>,
}

/// The body the camera is heading to or resting on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub body: BodyId,
    /// Position captured when the selection arrived.
    pub frozen: Vec3,
    pub visual_radius: f32,
}

/// Orbit-controls state for the host's camera controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsState {
    pub enabled: bool,
    /// Point the controls orbit around.
    pub anchor: Vec3,
}

/// Informational overlay next to the focused body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub body: Option<BodyId>,
    pub frozen: Option<Vec3>,
    /// Where the overlay attaches: beside the body, clear of its surface.
    pub anchor: Option<Vec3>,
}

/// Tunables for focus transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusSettings {
    pub overview: CameraPose,
    pub framing: FocusFraming,
    /// Seconds per transition.
    pub duration: f64,
    pub easing: Easing,
    /// Seconds after reaching `Focused` before the overlay appears.
    pub annotation_delay: f64,
    /// Gap between the body surface and the overlay anchor.
    pub annotation_gap: f32,
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self {
            overview: CameraPose::overview(),
            framing: FocusFraming::default(),
            duration: 1.5,
            easing: Easing::QuadInOut,
            annotation_delay: 0.5,
            annotation_gap: 4.0,
        }
    }
}

/// Owns the camera state and the focus freeze.
#[derive(Debug, Clone)]
pub struct FocusController {
    settings: FocusSettings,
    state: CameraState,
    target: Option<FocusTarget>,
    controls: ControlsState,
    annotation_due: Option<f64>,
    annotation_visible: bool,
}

impl FocusController {
    pub fn new(settings: FocusSettings) -> Self {
        Self {
            state: CameraState {
                mode: CameraMode::Overview,
                pose: settings.overview,
                transition: None,
            },
            target: None,
            controls: ControlsState {
                enabled: true,
                anchor: settings.overview.look_at,
            },
            annotation_due: None,
            annotation_visible: false,
            settings,
        }
    }

    /// Focus on `body`, whose live position this tick is `live`.
    pub fn select(&mut self, body: &CelestialBody, live: Vec3, now: f64) -> SelectOutcome {
        let already = self.target.is_some_and(|t| t.body == body.id);
        if already
            && matches!(
                self.state.mode,
                CameraMode::TransitioningToFocus | CameraMode::Focused
            )
        {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyFocused);
        }

        let target = FocusTarget {
            body: body.id,
            frozen: live,
            visual_radius: body.visual_radius,
        };
        let to = self.settings.framing.pose_for(live, body.visual_radius);
        self.target = Some(target);
        self.begin(CameraMode::TransitioningToFocus, to, now)
    }

    /// Return to the overview.
    pub fn deselect(&mut self, now: f64) -> SelectOutcome {
        if matches!(
            self.state.mode,
            CameraMode::Overview | CameraMode::TransitioningToOverview
        ) {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyOverview);
        }
        self.target = None;
        self.begin(CameraMode::TransitioningToOverview, self.settings.overview, now)
    }

    /// Start a transition from wherever the camera is at `now`, discarding any
    /// in-flight one along with its pending overlay.
    fn begin(&mut self, mode: CameraMode, to: CameraPose, now: f64) -> SelectOutcome {
        let interrupted = self.state.mode.is_transitioning();
        let from = self.pose_at(now);

        self.state = CameraState {
            mode,
            pose: from,
            transition: Some(Transition::new(
                from,
                to,
                now,
                self.settings.duration,
                self.settings.easing,
            )),
        };
        self.controls.enabled = false;
        self.annotation_due = None;
        self.annotation_visible = false;

        if interrupted {
            SelectOutcome::Interrupted
        } else {
            SelectOutcome::Started
        }
    }

    /// Advance the active transition to `now`. Returns the new mode when one
    /// was entered this tick.
    pub fn tick(&mut self, now: f64) -> Option<CameraMode> {
        let mut entered = None;

        if let Some(transition) = self.state.transition {
            self.state.pose = transition.pose_at(now);
            if transition.is_complete(now) {
                self.state.transition = None;
                let mode = match self.state.mode {
                    CameraMode::TransitioningToFocus => CameraMode::Focused,
                    _ => CameraMode::Overview,
                };
                self.state.mode = mode;
                self.controls.enabled = true;
                match (mode, self.target) {
                    (CameraMode::Focused, Some(target)) => {
                        self.controls.anchor = target.frozen;
                        self.annotation_due =
                            Some(transition.end_time() + self.settings.annotation_delay);
                    }
                    _ => {
                        self.controls.anchor = self.settings.overview.look_at;
                    }
                }
                log::debug!("camera: {:?} at t={:.3}", mode, now);
                entered = Some(mode);
            }
        }

        if self.state.mode == CameraMode::Focused {
            if let Some(target) = self.target {
                self.state.pose.look_at = target.frozen;
            }
            if self.annotation_due.is_some_and(|due| now >= due) {
                self.annotation_due = None;
                self.annotation_visible = true;
            }
        }

        entered
    }

    /// Camera pose at `now` without advancing state.
    pub fn pose_at(&self, now: f64) -> CameraPose {
        match &self.state.transition {
            Some(transition) => transition.pose_at(now),
            None => self.state.pose,
        }
    }

    /// Position to render `body` at: the snapshot while it holds focus,
    /// otherwise its live position.
    pub fn render_position(&self, body: BodyId, live: Vec3) -> Vec3 {
        match self.target {
            Some(target) if target.body == body => target.frozen,
            _ => live,
        }
    }

    pub fn overlay(&self) -> OverlayState {
        match self.target {
            Some(target) => OverlayState {
                visible: self.annotation_visible,
                body: Some(target.body),
                frozen: Some(target.frozen),
                anchor: Some(
                    target.frozen
                        + Vec3::X * (target.visual_radius / 2.0 + self.settings.annotation_gap),
                ),
            },
            None => OverlayState::default(),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.state.mode
    }

    pub fn pose(&self) -> CameraPose {
        self.state.pose
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn target(&self) -> Option<&FocusTarget> {
        self.target.as_ref()
    }

    pub fn controls(&self) -> ControlsState {
        self.controls
    }

    pub fn settings(&self) -> &FocusSettings {
        &self.settings
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(FocusSettings::default())
    }
}
