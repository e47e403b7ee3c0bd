//! Scene configuration, loaded from JSON.
//!
//! Every field has a default, so a partial document only overrides what it
//! names. The defaults reproduce the stock scene.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::camera::FocusSettings;
use crate::core::body::{BodyDesc, CentralBody, SpeedLaw};
use crate::core::catalog::default_bodies;
use crate::field::{FieldShape, FieldSpec};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config has no orbiting bodies")]
    NoBodies,

    #[error("duplicate body name {0:?}")]
    DuplicateBody(String),

    #[error("{field} must be finite and > 0 (got {value})")]
    NonPositive { field: String, value: f64 },

    #[error("{field} must be finite and >= 0 (got {value})")]
    Negative { field: String, value: f64 },

    #[error("{field} must be finite (got {value})")]
    NonFinite { field: String, value: f64 },

    #[error("{field} must lie in [0, 1] (got {value})")]
    OutOfUnitRange { field: String, value: f64 },

    #[error("{field} must lie in (0, 1) (got {value})")]
    OutOfOpenUnitRange { field: String, value: f64 },
}

/// Viewport size above which the scene drops post-processing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThreshold {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for QualityThreshold {
    fn default() -> Self {
        Self {
            max_width: 1920,
            max_height: 1080,
        }
    }
}

/// Complete scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub speed_law: SpeedLaw,
    pub central_body: CentralBody,
    pub bodies: Vec<BodyDesc>,
    pub stars: FieldSpec,
    pub debris: FieldSpec,
    pub camera: FocusSettings,
    pub quality: QualityThreshold,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            speed_law: SpeedLaw::default(),
            central_body: CentralBody::default(),
            bodies: default_bodies(),
            stars: FieldSpec::stars(),
            debris: FieldSpec::debris(),
            camera: FocusSettings::default(),
            quality: QualityThreshold::default(),
        }
    }
}

impl OrreryConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scene cannot render meaningfully.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        let mut names = HashSet::with_capacity(self.bodies.len());
        for body in &self.bodies {
            if !names.insert(body.name.as_str()) {
                return Err(ConfigError::DuplicateBody(body.name.clone()));
            }
            positive(&format!("bodies.{}.distance", body.name), body.distance)?;
            positive(&format!("bodies.{}.size", body.name), body.size as f64)?;
        }

        positive("speed_law.reference_distance", self.speed_law.reference_distance)?;
        positive("speed_law.reference_speed", self.speed_law.reference_speed)?;
        positive("speed_law.scale", self.speed_law.scale)?;
        positive("central_body.visual_radius", self.central_body.visual_radius as f64)?;
        finite("central_body.spin_rate", self.central_body.spin_rate)?;

        validate_field("stars", &self.stars)?;
        validate_field("debris", &self.debris)?;

        non_negative("camera.duration", self.camera.duration)?;
        non_negative("camera.annotation_delay", self.camera.annotation_delay)?;
        non_negative("camera.annotation_gap", self.camera.annotation_gap as f64)?;
        positive(
            "camera.framing.distance_factor",
            self.camera.framing.distance_factor as f64,
        )?;
        non_negative(
            "camera.framing.height_factor",
            self.camera.framing.height_factor as f64,
        )?;

        Ok(())
    }
}

pub(crate) fn validate_field(name: &str, spec: &FieldSpec) -> Result<(), ConfigError> {
    finite(&format!("{name}.spin_rate"), spec.spin_rate)?;
    match &spec.shape {
        FieldShape::Shell(p) => {
            positive(&format!("{name}.radius"), p.radius as f64)?;
            non_negative(&format!("{name}.radial_jitter"), p.radial_jitter as f64)?;
            unit(&format!("{name}.brightness_floor"), p.brightness_floor as f64)?;
            open_unit(&format!("{name}.brightness_exponent"), p.brightness_exponent as f64)?;
        }
        FieldShape::Annulus(p) => {
            positive(&format!("{name}.radius"), p.radius as f64)?;
            non_negative(&format!("{name}.width"), p.width as f64)?;
            non_negative(&format!("{name}.thickness"), p.thickness as f64)?;
            positive(&format!("{name}.scale_min"), p.scale_min as f64)?;
            non_negative(&format!("{name}.scale_range"), p.scale_range as f64)?;
            non_negative(&format!("{name}.max_tumble"), p.max_tumble as f64)?;
        }
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative {
            field: field.to_string(),
            value,
        })
    }
}

fn finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange {
            field: field.to_string(),
            value,
        })
    }
}

fn open_unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfOpenUnitRange {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = OrreryConfig::default();
        config.validate().unwrap();
        assert_eq!(config.bodies.len(), 11);
        assert_eq!(config.stars.count, 2000);
        assert_eq!(config.debris.count, 5000);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = OrreryConfig::from_json("{}").unwrap();
        assert_eq!(config, OrreryConfig::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "speed_law": { "scale": 2.0 },
            "camera": { "duration": 0.75, "easing": "cubic_in_out" },
            "quality": { "max_width": 2560 }
        }"#;
        let config = OrreryConfig::from_json(json).unwrap();
        assert_eq!(config.speed_law.scale, 2.0);
        assert_eq!(config.speed_law.reference_distance, 40.0);
        assert_eq!(config.camera.duration, 0.75);
        assert_eq!(config.camera.annotation_delay, 0.5);
        assert_eq!(config.quality.max_width, 2560);
        assert_eq!(config.quality.max_height, 1080);
        assert_eq!(config.bodies.len(), 11);
    }

    #[test]
    fn custom_bodies() {
        let json = r#"{
            "bodies": [
                { "name": "Inner", "distance": 10.0, "size": 0.5 },
                { "name": "Outer", "distance": 80.0, "size": 3.0, "material": "outer.jpg" }
            ],
            "stars": { "count": 10, "salt": 9, "shape": { "mode": "shell", "radius": 300.0 } }
        }"#;
        let config = OrreryConfig::from_json(json).unwrap();
        assert_eq!(config.bodies.len(), 2);
        assert_eq!(config.bodies[0].material.as_str(), "");
        assert_eq!(config.bodies[1].material.as_str(), "outer.jpg");
        assert_eq!(config.stars.count, 10);
        assert_eq!(config.stars.spin_rate, 0.0);
    }

    #[test]
    fn bad_json_is_reported() {
        let err = OrreryConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn empty_body_table_is_rejected() {
        let err = OrreryConfig::from_json(r#"{ "bodies": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoBodies));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = r#"{ "bodies": [
            { "name": "A", "distance": 10.0, "size": 1.0 },
            { "name": "A", "distance": 20.0, "size": 1.0 }
        ] }"#;
        let err = OrreryConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateBody(ref n) if n == "A"));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let json = r#"{ "bodies": [ { "name": "A", "distance": 0.0, "size": 1.0 } ] }"#;
        let err = OrreryConfig::from_json(json).unwrap_err();
        match err {
            ConfigError::NonPositive { field, value } => {
                assert_eq!(field, "bodies.A.distance");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn negative_shape_params_are_rejected() {
        let mut config = OrreryConfig::default();
        if let FieldShape::Annulus(ref mut p) = config.debris.shape {
            p.width = -1.0;
        }
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));

        let mut config = OrreryConfig::default();
        config.camera.duration = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn brightness_exponent_must_stay_below_one() {
        for bad in [0.0, 1.0, 2.5] {
            let json = format!(
                r#"{{ "stars": {{ "count": 10, "salt": 1,
                    "shape": {{ "mode": "shell", "brightness_exponent": {bad} }} }} }}"#
            );
            match OrreryConfig::from_json(&json).unwrap_err() {
                ConfigError::OutOfOpenUnitRange { field, .. } => {
                    assert_eq!(field, "stars.brightness_exponent");
                }
                other => panic!("unexpected error {other}"),
            }
        }

        let json = r#"{ "stars": { "count": 10, "salt": 1,
            "shape": { "mode": "shell", "brightness_exponent": 0.5 } } }"#;
        assert!(OrreryConfig::from_json(json).is_ok());
    }

    #[test]
    fn error_messages_name_the_field() {
        let mut config = OrreryConfig::default();
        config.speed_law.reference_speed = -0.4;
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("speed_law.reference_speed"), "{msg}");
    }
}
