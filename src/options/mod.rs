//! Centralized mesh/camera options with TOML preset support.
//!
//! All tweakable settings (representation, primitive resolution, bond and
//! tube dimensions, camera framing, colormap) are consolidated here. Options
//! serialize to/from TOML so a front end can keep view presets on disk.

mod camera;
mod colors;
mod display;
mod geometry;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::{ColorOptions, ColormapKind};
pub use display::{DisplayOptions, Representation};
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RibbonError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Representation and filtering choices.
    pub display: DisplayOptions,
    /// Primitive resolution, bond and tube dimensions.
    pub geometry: GeometryOptions,
    /// Camera framing parameters.
    pub camera: CameraOptions,
    /// Colormap selection.
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, RibbonError> {
        toml::from_str(content)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RibbonError> {
        let content = std::fs::read_to_string(path).map_err(RibbonError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RibbonError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RibbonError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RibbonError::Io)?;
        }
        std::fs::write(path, content).map_err(RibbonError::Io)
    }
}
