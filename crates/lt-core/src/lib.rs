//! lt-core: the line annotation model.
//!
//! A line with two draggable endpoints carries a row of evenly spaced,
//! oriented sample rectangles. This crate holds the pure geometry; hit
//! testing lives in `lt-render`, interaction in `lt-editor`, and tile
//! extraction in `lt-tiles`.

#![forbid(unsafe_code)]

pub mod annotation;
pub mod config;
pub mod error;
pub mod handle;
pub mod layout;
pub mod line;

pub use annotation::{Annotation, BOUNDS_MARGIN};
pub use config::AnnotationConfig;
pub use error::ConfigError;
pub use handle::{HandleKind, Hit};
pub use layout::{MIN_RECT_SIDE, OrientedRect, PlacementPolicy, placements, rectangles};
pub use line::{Endpoint, LineModel};

// Re-export kurbo so downstream crates share the geometry types.
pub use kurbo;
