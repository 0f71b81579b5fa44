//! Shape mutations produced by drags and applied to an [`Annotation`].
//!
//! Every drag frame turns into exactly one mutation that is applied right
//! away. There is no history.

use lt_core::kurbo::{Point, Vec2};
use lt_core::{Annotation, Endpoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnotationMutation {
    /// Place one endpoint at `pos`.
    SetEndpoint { which: Endpoint, pos: Point },
    /// Move the whole line.
    Translate { delta: Vec2 },
    /// Change the shared rectangle size. `None` leaves that side alone.
    /// Values are clamped to the 10-unit floor on apply.
    Resize {
        width: Option<f64>,
        height: Option<f64>,
    },
}

pub fn apply_mutation(annotation: &mut Annotation, mutation: AnnotationMutation) {
    log::trace!("apply {mutation:?}");
    match mutation {
        AnnotationMutation::SetEndpoint { which, pos } => {
            annotation.line_mut().set_endpoint(which, pos);
        }
        AnnotationMutation::Translate { delta } => {
            annotation.line_mut().translate(delta);
        }
        AnnotationMutation::Resize { width, height } => {
            if let Some(w) = width {
                annotation.set_width(w);
            }
            if let Some(h) = height {
                annotation.set_height(h);
            }
        }
    }
}
