//! Theme token resolution.
//!
//! The look-and-feel resolves gradients and solid colors by string key. A
//! missing key is not an error: the caller falls back to a solid fill.

use std::collections::BTreeMap;

use crate::color::Rgba8Premul;
use crate::error::{GlazeError, GlazeResult};
use crate::gradient::GradientSpec;

/// Read-only view of theme tokens.
///
/// Implemented by the embedding toolkit's theme system; [`Stylesheet`] is a
/// standalone implementation for tests and simple embedders.
pub trait StyleProvider {
    fn gradient(&self, key: &str) -> Option<GradientSpec>;

    fn color(&self, key: &str) -> Option<Rgba8Premul>;
}

/// Flat token table, typically deserialized from JSON.
///
/// ```json
/// {
///   "gradients": {
///     "Button.gradient": {
///       "ratio1": 0.3, "ratio2": 0.0,
///       "start": { "r": 221, "g": 232, "b": 243, "a": 255 },
///       "mid":   { "r": 255, "g": 255, "b": 255, "a": 255 },
///       "end":   { "r": 184, "g": 207, "b": 229, "a": 255 }
///     }
///   },
///   "colors": { "control": { "r": 238, "g": 238, "b": 238, "a": 255 } }
/// }
/// ```
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Stylesheet {
    #[serde(default)]
    gradients: BTreeMap<String, GradientSpec>,
    #[serde(default)]
    colors: BTreeMap<String, Rgba8Premul>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> GlazeResult<Self> {
        serde_json::from_str(json).map_err(|e| GlazeError::serde(e.to_string()))
    }

    pub fn to_json_string(&self) -> GlazeResult<String> {
        serde_json::to_string(self).map_err(|e| GlazeError::serde(e.to_string()))
    }

    pub fn with_gradient(mut self, key: impl Into<String>, spec: GradientSpec) -> Self {
        self.gradients.insert(key.into(), spec);
        self
    }

    pub fn with_color(mut self, key: impl Into<String>, color: Rgba8Premul) -> Self {
        self.colors.insert(key.into(), color);
        self
    }
}

impl StyleProvider for Stylesheet {
    fn gradient(&self, key: &str) -> Option<GradientSpec> {
        self.gradients.get(key).copied()
    }

    fn color(&self, key: &str) -> Option<Rgba8Premul> {
        self.colors.get(key).copied()
    }
}
