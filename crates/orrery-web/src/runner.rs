use orrery_engine::{
    ConfigError, FieldKind, InputEvent, Orrery, OrreryConfig, SelectOutcome,
};

use crate::backend::SharedBufferBackend;

/// Wires the scene driver to the shared buffers.
///
/// `lib.rs` keeps one runner in a `thread_local!` and exports free functions
/// via `#[wasm_bindgen]`, because wasm-bindgen cannot export it directly.
pub struct OrreryRunner {
    orrery: Orrery,
    backend: SharedBufferBackend,
    initialized: bool,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig) -> Result<Self, ConfigError> {
        let orrery = Orrery::new(config)?;
        let backend = SharedBufferBackend::new(orrery.bodies().len());
        Ok(Self {
            orrery,
            backend,
            initialized: false,
        })
    }

    /// Build from an optional JSON document. A bad document is logged and the
    /// stock scene is used instead.
    pub fn from_json(json: Option<&str>) -> Self {
        let config = match json.map(OrreryConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::error!("orrery: {err}; using default scene");
                OrreryConfig::default()
            }
            None => OrreryConfig::default(),
        };
        Self::new(config).unwrap_or_else(|err| {
            log::error!("orrery: {err}; using default scene");
            Self::with_defaults()
        })
    }

    pub fn with_defaults() -> Self {
        let orrery = Orrery::with_defaults();
        let backend = SharedBufferBackend::new(orrery.bodies().len());
        Self {
            orrery,
            backend,
            initialized: false,
        }
    }

    /// Upload fields and write the first frame. Call once after construction.
    pub fn init(&mut self) {
        self.orrery.init(&mut self.backend);
        self.backend
            .finish_frame(self.orrery.clock().elapsed(), self.orrery.focus().mode());
        self.initialized = true;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.orrery.push_input(event);
    }

    /// Run one frame at host time `elapsed`.
    pub fn tick(&mut self, elapsed: f64) {
        if !self.initialized {
            return;
        }

        let report = self.orrery.tick(elapsed, &mut self.backend);
        for outcome in &report.outcomes {
            if let SelectOutcome::Ignored(reason) = outcome {
                log::debug!("orrery: selection ignored ({reason:?})");
            }
        }
        if let Some(mode) = report.mode_change {
            log::debug!("orrery: camera entered {mode:?}");
        }
        self.backend.finish_frame(report.elapsed, self.orrery.focus().mode());
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn body_names(&self) -> Vec<String> {
        self.orrery.bodies().iter().map(|b| b.name.clone()).collect()
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.backend.frame_ptr()
    }

    pub fn frame_total_floats(&self) -> u32 {
        self.backend.layout().buffer_total_floats as u32
    }

    pub fn instances_ptr(&self, kind: FieldKind) -> *const f32 {
        self.backend.instances_ptr(kind)
    }

    pub fn instance_count(&self, kind: FieldKind) -> u32 {
        self.backend.instance_count(kind)
    }

    pub fn clear_dirty(&mut self, kind: FieldKind) {
        self.backend.clear_dirty(kind);
    }

    pub fn frame(&self) -> &[f32] {
        self.backend.frame()
    }
}
