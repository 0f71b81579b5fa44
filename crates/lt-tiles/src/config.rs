use imageproc::geometric_transformations::Interpolation;
use lt_core::error::{ConfigError, check_non_negative};
use serde::{Deserialize, Serialize};

/// Resampling used when de-rotating the crop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileInterpolation {
    Nearest,
    #[default]
    Bilinear,
    Bicubic,
}

impl From<TileInterpolation> for Interpolation {
    fn from(value: TileInterpolation) -> Self {
        match value {
            TileInterpolation::Nearest => Interpolation::Nearest,
            TileInterpolation::Bilinear => Interpolation::Bilinear,
            TileInterpolation::Bicubic => Interpolation::Bicubic,
        }
    }
}

/// Tile extraction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Pixels added around the rectangles' bounding box before cropping
    /// the source image.
    pub margin: f64,
    /// Pixels added around each tile when cutting it from the de-rotated canvas.
    pub tile_padding: f64,
    pub interpolation: TileInterpolation,
    /// RGBA fill for canvas pixels that map outside the crop.
    pub background: [u8; 4],
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            margin: 4.0,
            tile_padding: 0.0,
            interpolation: TileInterpolation::Bilinear,
            background: [0, 0, 0, 0],
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("margin", self.margin)?;
        check_non_negative("tile_padding", self.tile_padding)?;
        Ok(())
    }
}
