//! Drag state machine.
//!
//! `press` picks a handle and enters a drag state, `drag_to` turns each
//! pointer move into one [`AnnotationMutation`], and `release` returns to
//! idle. Nothing survives a press/release cycle.

use crate::mutation::{AnnotationMutation, apply_mutation};
use lt_core::kurbo::{Point, Vec2};
use lt_core::{Annotation, Endpoint, HandleKind};
use lt_render::{CursorClass, HitTolerance, classify_cursor, hit_test};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingEndpoint(Endpoint),
    /// Whole-line move. `offset` is press position minus `start`.
    DraggingLine { offset: Vec2 },
    DraggingRectHandle { rect_index: usize, handle: HandleKind },
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// True while dragging the line body. A host may pre-empt this and
    /// move the annotation by its own means.
    pub fn is_line_move(&self) -> bool {
        matches!(self.state, DragState::DraggingLine { .. })
    }

    /// The handle being dragged, `HandleKind::None` when idle.
    pub fn active_handle(&self) -> HandleKind {
        match self.state {
            DragState::Idle => HandleKind::None,
            DragState::DraggingEndpoint(Endpoint::Start) => HandleKind::StartPoint,
            DragState::DraggingEndpoint(Endpoint::End) => HandleKind::EndPoint,
            DragState::DraggingLine { .. } => HandleKind::Body,
            DragState::DraggingRectHandle { handle, .. } => handle,
        }
    }

    /// Cursor class for the active drag.
    pub fn cursor(&self, annotation: &Annotation) -> CursorClass {
        classify_cursor(self.active_handle(), annotation.line().angle())
    }

    /// Start a drag at `pos`. Returns whether the annotation captured the press.
    pub fn press(&mut self, annotation: &Annotation, pos: Point, tolerance: &HitTolerance) -> bool {
        self.state = DragState::Idle;

        let hit = hit_test(annotation, pos, tolerance);
        self.state = match (hit.handle, hit.rect_index) {
            (HandleKind::None, _) => return false,
            (HandleKind::Body, _) => DragState::DraggingLine {
                offset: pos - annotation.line().start,
            },
            (HandleKind::StartPoint, _) => DragState::DraggingEndpoint(Endpoint::Start),
            (HandleKind::EndPoint, _) => DragState::DraggingEndpoint(Endpoint::End),
            (handle, Some(rect_index)) => DragState::DraggingRectHandle { rect_index, handle },
            (handle, None) => {
                log::warn!("rectangle handle {handle:?} without a rectangle index");
                return false;
            }
        };
        log::debug!("press at {pos:?} captured {:?}", self.state);
        true
    }

    /// Apply the active drag for a pointer at `pos`. Idle is a no-op.
    pub fn drag_to(&mut self, annotation: &mut Annotation, pos: Point) {
        if let Some(mutation) = self.mutation_for(annotation, pos) {
            apply_mutation(annotation, mutation);
        }
    }

    /// The mutation the active drag produces for a pointer at `pos`.
    pub fn mutation_for(&self, annotation: &Annotation, pos: Point) -> Option<AnnotationMutation> {
        match self.state {
            DragState::Idle => None,
            DragState::DraggingEndpoint(which) => Some(AnnotationMutation::SetEndpoint { which, pos }),
            DragState::DraggingLine { offset } => {
                let new_start = pos - offset;
                Some(AnnotationMutation::Translate {
                    delta: new_start - annotation.line().start,
                })
            }
            DragState::DraggingRectHandle { rect_index, handle } => {
                let rects = annotation.rectangles();
                let Some(rect) = rects.get(rect_index) else {
                    log::warn!("rectangle {rect_index} no longer exists");
                    return None;
                };
                let local = rect.to_local(pos);
                Some(resize_from_local(handle, local))
            }
        }
    }

    pub fn release(&mut self) {
        if !self.is_idle() {
            log::debug!("release {:?}", self.state);
        }
        self.state = DragState::Idle;
    }
}

/// New shared size from a pointer in the dragged rectangle's local frame.
///
/// Rectangles stay centered, so the dragged edge sits at half the size:
/// width = 2·x for right-side handles, −2·x for left-side ones, and the
/// same for height with bottom and top. Corners set both.
pub fn resize_from_local(handle: HandleKind, local: Point) -> AnnotationMutation {
    AnnotationMutation::Resize {
        width: handle.width_sign().map(|s| s * 2.0 * local.x),
        height: handle.height_sign().map(|s| s * 2.0 * local.y),
    }
}
