use lt_core::ConfigError;
use thiserror::Error;

/// Errors that can occur during tile extraction.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ExtractError {
    #[error("crop region collapses to nothing inside the image: x {x0}..{x1}, y {y0}..{y1}")]
    EmptyRegion { x0: i64, y0: i64, x1: i64, y1: i64 },

    #[error("tile {index} collapses to nothing after de-rotation")]
    EmptyTile { index: usize },

    #[error("invalid extraction config: {0}")]
    Config(#[from] ConfigError),
}
