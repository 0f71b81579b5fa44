//! lt-editor: interactive editing of line annotations.
//!
//! Pointer events drive a per-annotation [`DragController`]; each drag frame
//! becomes one [`AnnotationMutation`] applied immediately.

#![forbid(unsafe_code)]

pub mod drag;
pub mod editor;
pub mod error;
pub mod input;
pub mod mutation;

pub use drag::{DragController, DragState, resize_from_local};
pub use editor::{AnnotationSet, EventResponse, LineEditor};
pub use error::EditorError;
pub use input::InputEvent;
pub use mutation::{AnnotationMutation, apply_mutation};
