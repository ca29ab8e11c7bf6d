//! Rendering parameters supplied by the host application.
//!
//! The decoder never reads these; they travel alongside a decoded model into
//! scene construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PreviewError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Facet opacity, 0 (invisible) to 1 (opaque).
    pub opacity: f32,
    /// Linear RGB base color, each channel 0 to 1.
    pub color: [f32; 3],
    /// Environment reflection strength, 0 to 1.
    pub reflectivity: f32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            opacity: 0.85,
            color: [0.9, 0.95, 1.0],
            reflectivity: 0.6,
        }
    }
}

impl PreviewSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PreviewError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| PreviewError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), PreviewError> {
        let unit = |name: &'static str, value: f32| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(PreviewError::InvalidSetting { name, value })
            }
        };
        unit("opacity", self.opacity)?;
        unit("reflectivity", self.reflectivity)?;
        for c in self.color {
            unit("color", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let s = PreviewSettings::from_json(r#"{ "opacity": 0.5 }"#).unwrap();
        assert_eq!(s.opacity, 0.5);
        assert_eq!(s.reflectivity, PreviewSettings::default().reflectivity);
    }

    #[test]
    fn out_of_range_values_rejected() {
        let err = PreviewSettings::from_json(r#"{ "reflectivity": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            PreviewError::InvalidSetting {
                name: "reflectivity",
                ..
            }
        ));
        let err = PreviewSettings::from_json(r#"{ "color": [0.1, -0.2, 0.3] }"#).unwrap_err();
        assert!(matches!(err, PreviewError::InvalidSetting { name: "color", .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = PreviewSettings::from_json("{ opacity: }").unwrap_err();
        assert!(matches!(err, PreviewError::SettingsParse(_)));
    }
}
