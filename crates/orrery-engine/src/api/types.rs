/// Unique identifier for an orbiting body in the scene.
/// Assigned in table order at scene initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Position of the body in its table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle to a render-backend material (texture file, shader preset...).
/// The core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MaterialRef(pub String);

impl MaterialRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of feeding a selection or deselection event to the focus controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A transition started from a resting mode (`Overview` or `Focused`).
    Started,
    /// An in-flight transition was overwritten by a new one.
    Interrupted,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Why a selection event left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The named body does not exist in the table.
    UnknownBody,
    /// The body is already the focus target.
    AlreadyFocused,
    /// Deselect while already at (or heading to) the overview.
    AlreadyOverview,
}

impl SelectOutcome {
    pub fn is_ignored(self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}
