use crate::api::types::{IgnoreReason, SelectOutcome};
use crate::camera::{CameraMode, FocusController};
use crate::config::{validate_field, ConfigError, OrreryConfig};
use crate::core::body::CentralBody;
use crate::core::orbit::{self, OrbitalSample};
use crate::core::table::BodyTable;
use crate::core::time::SimClock;
use crate::field::{FieldKind, FieldSpec, PlacementField};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::placement::PlacementRenderer;
use crate::renderer::traits::{PointerHint, QualityTier, RenderBackend};

/// What happened during one frame tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Clock time the tick ran at, after clamping.
    pub elapsed: f64,
    /// One entry per select/deselect event, in arrival order.
    pub outcomes: Vec<SelectOutcome>,
    /// Camera mode entered this tick, if any.
    pub mode_change: Option<CameraMode>,
}

/// The scene driver. Owns every piece of runtime state and runs the per-frame
/// tick in a fixed order:
///
/// 1. the clock observes the host time,
/// 2. kinematics samples every body,
/// 3. queued input is applied against those samples,
/// 4. the focus controller advances,
/// 5. outputs go to the backend.
pub struct Orrery {
    config: OrreryConfig,
    bodies: BodyTable,
    central: CentralBody,
    stars: PlacementField,
    debris: PlacementField,
    focus: FocusController,
    clock: SimClock,
    input: InputQueue,
    samples: Vec<OrbitalSample>,
    placement: PlacementRenderer,
    quality: QualityTier,
    pointer: PointerHint,
}

impl Orrery {
    pub fn new(config: OrreryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// The stock scene.
    pub fn with_defaults() -> Self {
        Self::build(OrreryConfig::default())
    }

    fn build(config: OrreryConfig) -> Self {
        let bodies = BodyTable::from_descs(&config.bodies, &config.speed_law);
        let stars = PlacementField::generate(FieldKind::Stars, config.stars);
        let debris = PlacementField::generate(FieldKind::Debris, config.debris);
        log::info!(
            "orrery: {} bodies, {} stars, {} debris",
            bodies.len(),
            stars.len(),
            debris.len()
        );

        Self {
            central: config.central_body.clone(),
            focus: FocusController::new(config.camera),
            samples: Vec::with_capacity(bodies.len()),
            bodies,
            stars,
            debris,
            clock: SimClock::new(),
            input: InputQueue::new(),
            placement: PlacementRenderer::new(),
            quality: QualityTier::Standard,
            pointer: PointerHint::Default,
            config,
        }
    }

    /// One-time backend setup: field instances, orbit guides, and a first
    /// frame of outputs at the current clock time.
    pub fn init(&mut self, backend: &mut dyn RenderBackend) {
        self.placement.sync(&self.stars, backend);
        self.placement.sync(&self.debris, backend);

        let guides: Vec<f32> = self.bodies.iter().map(|b| b.orbital_radius as f32).collect();
        backend.set_orbit_guides(&guides);
        backend.set_quality(self.quality);
        backend.set_pointer_hint(self.pointer);

        let now = self.clock.elapsed();
        orbit::sample_all(self.bodies.iter(), now, &mut self.samples);
        self.write_outputs(now, backend);
    }

    /// Queue an event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at host time `elapsed` (seconds since start).
    pub fn tick(&mut self, elapsed: f64, backend: &mut dyn RenderBackend) -> TickReport {
        let now = self.clock.observe(elapsed);
        orbit::sample_all(self.bodies.iter(), now, &mut self.samples);

        let mut outcomes = Vec::new();
        for event in self.input.drain() {
            if let Some(outcome) = self.apply(event, now, backend) {
                outcomes.push(outcome);
            }
        }

        let mode_change = self.focus.tick(now);
        self.write_outputs(now, backend);

        TickReport {
            elapsed: now,
            outcomes,
            mode_change,
        }
    }

    fn apply(
        &mut self,
        event: InputEvent,
        now: f64,
        backend: &mut dyn RenderBackend,
    ) -> Option<SelectOutcome> {
        match event {
            InputEvent::Select { body } => {
                let outcome = match self.bodies.find_by_name(&body) {
                    Some(target) => {
                        let live = self.samples[target.id.index()].position;
                        self.focus.select(target, live, now)
                    }
                    None => SelectOutcome::Ignored(IgnoreReason::UnknownBody),
                };
                Some(outcome)
            }
            InputEvent::Deselect => Some(self.focus.deselect(now)),
            InputEvent::Hover { body } => {
                let over = body
                    .as_deref()
                    .is_some_and(|name| self.bodies.find_by_name(name).is_some());
                let hint = if over { PointerHint::Pointer } else { PointerHint::Default };
                if hint != self.pointer {
                    self.pointer = hint;
                    backend.set_pointer_hint(hint);
                }
                None
            }
            InputEvent::Resize { width, height } => {
                let threshold = self.config.quality;
                let tier = QualityTier::from_viewport(
                    width,
                    height,
                    threshold.max_width,
                    threshold.max_height,
                );
                if tier != self.quality {
                    log::info!("orrery: {}x{} viewport, quality {:?}", width, height, tier);
                    self.quality = tier;
                    backend.set_quality(tier);
                }
                None
            }
        }
    }

    fn write_outputs(&self, now: f64, backend: &mut dyn RenderBackend) {
        for sample in &self.samples {
            let position = self.focus.render_position(sample.body, sample.position);
            backend.set_body_position(sample.body, position);
        }
        backend.set_camera(&self.focus.pose());
        backend.set_controls(&self.focus.controls());
        backend.set_overlay(&self.focus.overlay());
        backend.set_spin(self.central.spin_at(now), self.debris.yaw_at(now));
    }

    /// Replace one field's parameters and re-upload it if they changed.
    pub fn regenerate_field(
        &mut self,
        kind: FieldKind,
        spec: FieldSpec,
        backend: &mut dyn RenderBackend,
    ) -> Result<bool, ConfigError> {
        let (name, field) = match kind {
            FieldKind::Stars => ("stars", &mut self.stars),
            FieldKind::Debris => ("debris", &mut self.debris),
        };
        validate_field(name, &spec)?;
        field.regenerate(spec);
        match kind {
            FieldKind::Stars => self.config.stars = spec,
            FieldKind::Debris => self.config.debris = spec,
        }
        Ok(self.placement.sync(field, backend))
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn bodies(&self) -> &BodyTable {
        &self.bodies
    }

    pub fn central_body(&self) -> &CentralBody {
        &self.central
    }

    pub fn field(&self, kind: FieldKind) -> &PlacementField {
        match kind {
            FieldKind::Stars => &self.stars,
            FieldKind::Debris => &self.debris,
        }
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Kinematic samples from the latest tick (live positions, unfrozen).
    pub fn samples(&self) -> &[OrbitalSample] {
        &self.samples
    }

    pub fn quality(&self) -> QualityTier {
        self.quality
    }

    pub fn pointer_hint(&self) -> PointerHint {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use crate::core::orbit::position_at;
    use crate::renderer::recording::{Call, RecordingBackend};
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn select(name: &str) -> InputEvent {
        InputEvent::Select { body: name.to_string() }
    }

    #[test]
    fn init_uploads_fields_once() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);
        assert_eq!(
            backend.calls,
            vec![
                Call::WriteInstances(FieldKind::Stars, 2000),
                Call::MarkDirty(FieldKind::Stars),
                Call::WriteInstances(FieldKind::Debris, 5000),
                Call::MarkDirty(FieldKind::Debris),
            ]
        );
        assert_eq!(backend.guides.len(), 11);
        assert_eq!(backend.guides[2], 40.0);
        assert_eq!(backend.camera, Some(CameraPose::overview()));

        orrery.tick(1.0, &mut backend);
        orrery.tick(2.0, &mut backend);
        assert_eq!(backend.calls.len(), 4);
    }

    #[test]
    fn earth_focus_end_to_end() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);

        let earth = orrery.bodies().find_by_name("Earth").unwrap().clone();
        assert_eq!(earth.orbital_radius, 40.0);
        assert_eq!(earth.visual_radius, 1.0);

        orrery.tick(9.5, &mut backend);
        orrery.push_input(select("Earth"));
        let report = orrery.tick(10.0, &mut backend);
        assert_eq!(report.outcomes, vec![SelectOutcome::Started]);
        assert_eq!(orrery.focus().mode(), CameraMode::TransitioningToFocus);

        let frozen = position_at(&earth, 10.0);
        let mut t = 10.0;
        while t < 11.5 {
            orrery.tick(t, &mut backend);
            t += 1.0 / 60.0;
        }
        let report = orrery.tick(11.5, &mut backend);
        assert_eq!(report.mode_change, Some(CameraMode::Focused));

        let camera = backend.camera.unwrap();
        let expected = frozen + Vec3::new(0.0, 2.0, 10.0);
        assert_relative_eq!(camera.position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(camera.position.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(camera.position.z, expected.z, epsilon = 1e-4);
        assert_eq!(camera.look_at, frozen);
        assert_eq!(backend.bodies[&earth.id], frozen);

        // Earth keeps rendering at the snapshot while the clock runs on.
        orrery.tick(20.0, &mut backend);
        assert_eq!(backend.bodies[&earth.id], frozen);
        assert_ne!(orrery.samples()[earth.id.index()].position, frozen);
        assert!(backend.overlay.visible);
        assert_eq!(backend.overlay.body, Some(earth.id));
        let controls = backend.controls.unwrap();
        assert!(controls.enabled);
        assert_eq!(controls.anchor, frozen);
    }

    #[test]
    fn other_bodies_keep_moving_while_focused() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);
        orrery.push_input(select("Jupiter"));
        orrery.tick(1.0, &mut backend);
        orrery.tick(5.0, &mut backend);

        let mars = orrery.bodies().find_by_name("Mars").unwrap().clone();
        assert_eq!(backend.bodies[&mars.id], position_at(&mars, 5.0));
    }

    #[test]
    fn unknown_body_is_ignored() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);
        orrery.push_input(select("Vulcan"));
        let report = orrery.tick(1.0, &mut backend);
        assert_eq!(
            report.outcomes,
            vec![SelectOutcome::Ignored(IgnoreReason::UnknownBody)]
        );
        assert_eq!(orrery.focus().mode(), CameraMode::Overview);
    }

    #[test]
    fn deselect_in_overview_is_ignored() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);
        orrery.push_input(InputEvent::Deselect);
        let report = orrery.tick(1.0, &mut backend);
        assert_eq!(
            report.outcomes,
            vec![SelectOutcome::Ignored(IgnoreReason::AlreadyOverview)]
        );
        assert_eq!(backend.camera, Some(CameraPose::overview()));
    }

    #[test]
    fn events_in_one_tick_apply_in_order() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);
        orrery.push_input(select("Mars"));
        orrery.push_input(select("Venus"));
        let report = orrery.tick(3.0, &mut backend);
        assert_eq!(
            report.outcomes,
            vec![SelectOutcome::Started, SelectOutcome::Interrupted]
        );
        let venus = orrery.bodies().find_by_name("Venus").unwrap().id;
        assert_eq!(orrery.focus().target().map(|t| t.body), Some(venus));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.tick(5.0, &mut backend);
        let report = orrery.tick(4.0, &mut backend);
        assert_eq!(report.elapsed, 5.0);
    }

    #[test]
    fn hover_sets_pointer_hint() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.push_input(InputEvent::Hover { body: Some("Saturn".into()) });
        orrery.tick(0.1, &mut backend);
        assert_eq!(backend.pointer, PointerHint::Pointer);

        orrery.push_input(InputEvent::Hover { body: None });
        orrery.tick(0.2, &mut backend);
        assert_eq!(backend.pointer, PointerHint::Default);
        assert_eq!(orrery.pointer_hint(), PointerHint::Default);
    }

    #[test]
    fn resize_picks_quality_tier() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.push_input(InputEvent::Resize { width: 2560, height: 1440 });
        orrery.tick(0.1, &mut backend);
        assert_eq!(backend.quality, QualityTier::Large);
        assert!(!orrery.quality().post_processing());

        orrery.push_input(InputEvent::Resize { width: 1920, height: 1080 });
        orrery.tick(0.2, &mut backend);
        assert_eq!(backend.quality, QualityTier::Standard);
    }

    #[test]
    fn spin_outputs_follow_clock() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.tick(10.0, &mut backend);
        let (sun, ring) = backend.spin;
        assert_relative_eq!(sun, 1.0, epsilon = 1e-5);
        assert_relative_eq!(ring, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = OrreryConfig {
            bodies: Vec::new(),
            ..OrreryConfig::default()
        };
        assert!(matches!(Orrery::new(config), Err(ConfigError::NoBodies)));
    }

    #[test]
    fn regenerate_field_reuploads_on_change() {
        let mut orrery = Orrery::with_defaults();
        let mut backend = RecordingBackend::default();
        orrery.init(&mut backend);

        assert!(!orrery
            .regenerate_field(FieldKind::Stars, FieldSpec::stars(), &mut backend)
            .unwrap());

        let spec = FieldSpec { count: 64, ..FieldSpec::stars() };
        assert!(orrery.regenerate_field(FieldKind::Stars, spec, &mut backend).unwrap());
        assert_eq!(backend.instances[&FieldKind::Stars].len(), 64);
        assert_eq!(orrery.config().stars.count, 64);
        assert_eq!(orrery.field(FieldKind::Stars).generation(), 2);
    }
}
