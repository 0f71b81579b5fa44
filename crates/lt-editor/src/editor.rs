//! Pointer routing for one annotation and for a keyed set of them.
//!
//! The host forwards raw pointer events and gets back whether the event was
//! captured plus the cursor class to show. Events an annotation does not
//! capture are left for the host (e.g. panning the view).

use crate::drag::DragController;
use crate::error::EditorError;
use crate::input::InputEvent;
use lt_core::Annotation;
use lt_core::kurbo::Point;
use lt_render::{CursorClass, HitTolerance, classify_cursor, hit_test};

/// What the host should do with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The event was consumed by an annotation.
    pub captured: bool,
    pub cursor: CursorClass,
}

impl EventResponse {
    pub const IGNORED: EventResponse = EventResponse {
        captured: false,
        cursor: CursorClass::None,
    };
}

// ─── Single annotation ──────────────────────────────────────────────────

/// An annotation together with its drag state.
#[derive(Debug, Clone)]
pub struct LineEditor {
    pub annotation: Annotation,
    pub tolerance: HitTolerance,
    drag: DragController,
}

impl LineEditor {
    pub fn new(annotation: Annotation) -> Self {
        Self::with_tolerance(annotation, HitTolerance::default())
    }

    pub fn with_tolerance(annotation: Annotation, tolerance: HitTolerance) -> Self {
        Self {
            annotation,
            tolerance,
            drag: DragController::new(),
        }
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        !self.drag.is_idle()
    }

    pub fn press(&mut self, pos: Point) -> bool {
        self.drag.press(&self.annotation, pos, &self.tolerance)
    }

    pub fn drag_to(&mut self, pos: Point) {
        self.drag.drag_to(&mut self.annotation, pos);
    }

    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Cursor for a pointer hovering at `pos` with no drag in progress.
    pub fn hover_cursor(&self, pos: Point) -> CursorClass {
        let hit = hit_test(&self.annotation, pos, &self.tolerance);
        classify_cursor(hit.handle, self.annotation.line().angle())
    }

    /// Cursor for the current drag, or the hover cursor at `pos` when idle.
    pub fn cursor_at(&self, pos: Point) -> CursorClass {
        if self.is_dragging() {
            self.drag.cursor(&self.annotation)
        } else {
            self.hover_cursor(pos)
        }
    }

    pub fn handle(&mut self, event: &InputEvent) -> EventResponse {
        let pos = event.position();
        let captured = match event {
            InputEvent::PointerDown { .. } => self.press(pos),
            InputEvent::PointerMove { .. } => {
                let dragging = self.is_dragging();
                self.drag_to(pos);
                dragging
            }
            InputEvent::PointerUp { .. } => {
                let dragging = self.is_dragging();
                self.release();
                dragging
            }
        };
        EventResponse {
            captured,
            cursor: self.cursor_at(pos),
        }
    }
}

// ─── Keyed collection ───────────────────────────────────────────────────

/// Annotations keyed by name, in insertion order. Later entries sit on top
/// and receive presses first.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSet {
    items: Vec<(String, LineEditor)>,
    /// Index of the editor that captured the current press.
    active: Option<usize>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, editor: LineEditor) -> Result<(), EditorError> {
        let key = key.into();
        if self.position(&key).is_some() {
            return Err(EditorError::DuplicateKey(key));
        }
        log::debug!("insert annotation {key:?}");
        self.items.push((key, editor));
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<LineEditor> {
        let idx = self.position(key)?;
        match self.active {
            Some(a) if a == idx => self.active = None,
            Some(a) if a > idx => self.active = Some(a - 1),
            _ => {}
        }
        Some(self.items.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&LineEditor> {
        match self.position(key) {
            Some(idx) => Some(&self.items[idx].1),
            None => {
                log::error!("no annotation with key {key:?}");
                None
            }
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut LineEditor> {
        match self.position(key) {
            Some(idx) => Some(&mut self.items[idx].1),
            None => {
                log::error!("no annotation with key {key:?}");
                None
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineEditor)> {
        self.items.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Key of the annotation currently being dragged.
    pub fn active_key(&self) -> Option<&str> {
        self.active.map(|idx| self.items[idx].0.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|(k, _)| k == key)
    }

    pub fn handle(&mut self, event: &InputEvent) -> EventResponse {
        let pos = event.position();
        match event {
            InputEvent::PointerDown { .. } => {
                self.release_active();
                for idx in (0..self.items.len()).rev() {
                    if self.items[idx].1.press(pos) {
                        self.active = Some(idx);
                        return EventResponse {
                            captured: true,
                            cursor: self.items[idx].1.cursor_at(pos),
                        };
                    }
                }
                EventResponse::IGNORED
            }
            InputEvent::PointerMove { .. } => match self.active {
                Some(idx) => self.items[idx].1.handle(event),
                None => EventResponse {
                    captured: false,
                    cursor: self.hover_cursor(pos),
                },
            },
            InputEvent::PointerUp { .. } => {
                let captured = self.release_active();
                EventResponse {
                    captured,
                    cursor: self.hover_cursor(pos),
                }
            }
        }
    }

    /// Cursor of the topmost annotation with a handle under `pos`.
    pub fn hover_cursor(&self, pos: Point) -> CursorClass {
        self.items
            .iter()
            .rev()
            .map(|(_, editor)| editor.hover_cursor(pos))
            .find(|cursor| *cursor != CursorClass::None)
            .unwrap_or_default()
    }

    fn release_active(&mut self) -> bool {
        match self.active.take() {
            Some(idx) => {
                self.items[idx].1.release();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hover_reports_cursor_without_capturing() {
        let mut editor = LineEditor::new(Annotation::new((0.0, 100.0), (400.0, 100.0)));
        let response = editor.handle(&InputEvent::moved(100.0, 78.0));
        assert_eq!(
            response,
            EventResponse {
                captured: false,
                cursor: CursorClass::Vertical
            }
        );
        assert_eq!(editor.annotation.size().height, 40.0);
    }

    #[test]
    fn press_move_release_cycle() {
        let mut editor = LineEditor::new(Annotation::new((0.0, 100.0), (400.0, 100.0)));
        let down = editor.handle(&InputEvent::down(0.0, 100.0));
        assert!(down.captured);
        assert_eq!(down.cursor, CursorClass::Crosshair);

        let moved = editor.handle(&InputEvent::moved(0.0, 0.0));
        assert!(moved.captured);
        assert_eq!(editor.annotation.line().start, Point::new(0.0, 0.0));

        let up = editor.handle(&InputEvent::up(0.0, 0.0));
        assert!(up.captured);
        assert!(!editor.is_dragging());
        assert!(!editor.handle(&InputEvent::up(0.0, 0.0)).captured);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut set = AnnotationSet::new();
        set.insert("line1", LineEditor::new(Annotation::new((0.0, 0.0), (10.0, 0.0))))
            .unwrap();
        let err = set
            .insert("line1", LineEditor::new(Annotation::new((0.0, 0.0), (10.0, 0.0))))
            .unwrap_err();
        assert_eq!(err, EditorError::DuplicateKey("line1".into()));
        assert!(set.get("missing").is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_keeps_active_index_consistent() {
        let mut set = AnnotationSet::new();
        set.insert("a", LineEditor::new(Annotation::new((0.0, 0.0), (100.0, 0.0))))
            .unwrap();
        set.insert("b", LineEditor::new(Annotation::new((0.0, 300.0), (100.0, 300.0))))
            .unwrap();
        assert!(set.handle(&InputEvent::down(100.0, 300.0)).captured);
        assert_eq!(set.active_key(), Some("b"));
        set.remove("a");
        assert_eq!(set.active_key(), Some("b"));
        assert!(set.remove("b").is_some());
        assert_eq!(set.active_key(), None);
        assert!(set.is_empty());
    }
}
