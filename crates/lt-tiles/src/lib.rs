//! lt-tiles: cut the sample rectangles of a line annotation out of an image
//! as upright tiles.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extract;

pub use config::{ExtractConfig, TileInterpolation};
pub use error::ExtractError;
pub use extract::{PixelRect, TileExtractor, extract_tiles, extract_tiles_dynamic};
