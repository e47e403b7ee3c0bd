//! Frame buffer layout shared with the JS renderer.
//! Exposed to JS through `get_frame_ptr` in `orrery-web`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 32 floats]
//! [Bodies: body_count × 3 floats]       (x, y, z per body, table order)
//! [Orbit guides: body_count × 1 float]  (ring radius per body)
//! ```
//!
//! Placement instances do not live here: each field has its own flat buffer
//! of `PlacementInstance::FLOATS` per instance, written once at init.
//! Booleans are 0.0 / 1.0. Absent ids are -1.0.

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 32;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_ELAPSED: usize = 2;
pub const HEADER_CAMERA_MODE: usize = 3;
pub const HEADER_CAMERA_POS_X: usize = 4;
pub const HEADER_CAMERA_POS_Y: usize = 5;
pub const HEADER_CAMERA_POS_Z: usize = 6;
pub const HEADER_CAMERA_LOOK_X: usize = 7;
pub const HEADER_CAMERA_LOOK_Y: usize = 8;
pub const HEADER_CAMERA_LOOK_Z: usize = 9;
pub const HEADER_CONTROLS_ENABLED: usize = 10;
pub const HEADER_CONTROLS_ANCHOR_X: usize = 11;
pub const HEADER_CONTROLS_ANCHOR_Y: usize = 12;
pub const HEADER_CONTROLS_ANCHOR_Z: usize = 13;
pub const HEADER_OVERLAY_VISIBLE: usize = 14;
pub const HEADER_FOCUSED_BODY: usize = 15;
pub const HEADER_FROZEN_X: usize = 16;
pub const HEADER_FROZEN_Y: usize = 17;
pub const HEADER_FROZEN_Z: usize = 18;
pub const HEADER_OVERLAY_ANCHOR_X: usize = 19;
pub const HEADER_OVERLAY_ANCHOR_Y: usize = 20;
pub const HEADER_OVERLAY_ANCHOR_Z: usize = 21;
pub const HEADER_POINTER_HINT: usize = 22;
pub const HEADER_QUALITY: usize = 23;
pub const HEADER_CENTRAL_SPIN: usize = 24;
pub const HEADER_DEBRIS_YAW: usize = 25;
pub const HEADER_BODY_COUNT: usize = 26;
pub const HEADER_STAR_COUNT: usize = 27;
pub const HEADER_DEBRIS_COUNT: usize = 28;
/// Bit per field (`1 << FieldKind::code()`); JS clears it after re-uploading.
pub const HEADER_INSTANCES_DIRTY: usize = 29;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body position (wire format, fixed).
pub const BODY_FLOATS: usize = 3;

/// Runtime-computed frame buffer layout for a given body count.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub body_count: usize,

    /// Size of the body position section in floats.
    pub body_data_floats: usize,
    /// Size of the orbit guide section in floats.
    pub guide_data_floats: usize,

    /// Offset (in floats) where body positions begin.
    pub body_data_offset: usize,
    /// Offset (in floats) where orbit guide radii begin.
    pub guide_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    pub fn new(body_count: usize) -> Self {
        let body_data_floats = body_count * BODY_FLOATS;
        let guide_data_floats = body_count;

        let body_data_offset = HEADER_FLOATS;
        let guide_data_offset = body_data_offset + body_data_floats;
        let buffer_total_floats = guide_data_offset + guide_data_floats;

        Self {
            body_count,
            body_data_floats,
            guide_data_floats,
            body_data_offset,
            guide_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Offset of body `index`'s x component.
    pub fn body_offset(&self, index: usize) -> usize {
        self.body_data_offset + index * BODY_FLOATS
    }
}
