//! lt-render: what the pointer is over, which cursor to show, and what to draw.

#![forbid(unsafe_code)]

pub mod cursor;
pub mod hit;
pub mod paint;

pub use cursor::{CursorClass, angle_to_cursor, classify_cursor};
pub use hit::{HitTolerance, hit_test};
pub use paint::{DrawSnapshot, snapshot};
