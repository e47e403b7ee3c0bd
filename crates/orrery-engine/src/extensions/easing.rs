// extensions/easing.rs
//
// Easing curves for camera transitions.
// Pure math: no knowledge of the camera or the scene.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity.
    Linear,
    QuadIn,
    QuadOut,
    /// Slow start and end. Default for camera moves.
    #[default]
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineInOut,
    ExpoInOut,
}

impl Easing {
    /// Map `t` in [0, 1] onto the curve. Input outside the range is clamped,
    /// and every curve maps 0 to 0 and 1 to 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::ExpoInOut => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineInOut,
        Easing::ExpoInOut,
    ];

    #[test]
    fn every_curve_hits_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::QuadInOut.apply(-1.0), 0.0);
        assert_eq!(Easing::QuadInOut.apply(2.0), 1.0);
    }

    #[test]
    fn quad_in_out_is_symmetric() {
        assert!((Easing::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::QuadInOut.apply(0.25) - 0.125).abs() < 1e-6);
        assert!((Easing::QuadInOut.apply(0.75) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn quad_out_faster_start() {
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn parses_snake_case() {
        let e: Easing = serde_json::from_str("\"cubic_in_out\"").unwrap();
        assert_eq!(e, Easing::CubicInOut);
    }
}
