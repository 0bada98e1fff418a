//! Viewer configuration.
//!
//! Defaults cover everything. A host page may tune them with an inline JSON
//! block, e.g.
//!
//! ```html
//! <script type="application/json" id="zoom-viewer-config">
//!   { "scale": { "max": 8.0 }, "keys": { "reset": ["0", "r"] } }
//! </script>
//! ```
//!
//! Anything unparsable or out of range is logged and replaced by defaults.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{BASELINE_SCALE, ScaleBounds, ViewerControl};
use crate::state::KeyBindings;

/// Smallest accepted zoom step. Anything finer is lost in rounding near the
/// baseline and would leave zoom stuck.
pub const MIN_STEP: f64 = 1e-3;

/// Upper limit on the number of zoom levels between `min` and `max`.
pub const MAX_LEVELS: f64 = 1e6;

/// Id of the optional inline config block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "zoom-viewer-config";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid viewer config JSON: {0}")]
    Parse(String),

    #[error("scale step must be a number of at least 0.001, got {0}")]
    InvalidStep(f64),

    #[error("scale bounds [{min}, {max}] must be positive and contain the baseline 1.0")]
    InvalidBounds { min: f64, max: f64 },

    #[error("scale range [{min}, {max}] holds more than a million steps of {step}")]
    TooManyLevels { min: f64, max: f64, step: f64 },
}

/// Replacement key lists, one per control. `None` keeps the default keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyOverrides {
    pub close: Option<Vec<String>>,
    pub zoom_in: Option<Vec<String>>,
    pub zoom_out: Option<Vec<String>>,
    pub reset: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub scale: ScaleBounds,
    pub keys: KeyOverrides,
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScaleBounds { min, max, step } = self.scale;
        if !(step.is_finite() && step >= MIN_STEP) {
            return Err(ConfigError::InvalidStep(step));
        }
        if !(min.is_finite() && max.is_finite() && min > 0.0)
            || !(min <= BASELINE_SCALE && BASELINE_SCALE <= max)
        {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        if (max - min) / step > MAX_LEVELS {
            return Err(ConfigError::TooManyLevels { min, max, step });
        }
        Ok(())
    }

    pub fn key_bindings(&self) -> KeyBindings {
        let mut keys = KeyBindings::default();
        let overrides = [
            (ViewerControl::Close, &self.keys.close),
            (ViewerControl::ZoomIn, &self.keys.zoom_in),
            (ViewerControl::ZoomOut, &self.keys.zoom_out),
            (ViewerControl::Reset, &self.keys.reset),
        ];
        for (control, list) in overrides {
            if let Some(list) = list {
                keys.rebind(control, list);
            }
        }
        keys
    }

    /// Reads the inline config block, falling back to defaults when it is
    /// absent or invalid.
    pub fn load_from_page() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::info!("viewer config loaded from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
