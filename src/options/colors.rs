use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::ColorRamp;

/// Built-in colormaps for the ribbon sequence gradient.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColormapKind {
    /// Purple → green → yellow.
    #[default]
    Viridis,
    /// Blue → magenta → yellow.
    Plasma,
}

impl ColormapKind {
    /// Build the ramp for this colormap.
    #[must_use]
    pub fn ramp(self) -> ColorRamp {
        match self {
            Self::Viridis => ColorRamp::viridis(),
            Self::Plasma => ColorRamp::plasma(),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Colors", inline)]
#[serde(default)]
/// Color options for ribbon rendering.
pub struct ColorOptions {
    /// Colormap applied along each chain.
    pub colormap: ColormapKind,
}
