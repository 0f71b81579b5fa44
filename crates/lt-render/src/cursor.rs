//! Handle → cursor orientation class.
//!
//! Resize cursors follow the rotated rectangle: the handle's nominal
//! direction is offset by the line angle and snapped to the nearest of four
//! orientations. Translating a class into a platform cursor is up to the
//! caller.

use lt_core::HandleKind;

/// Cursor shape family for a handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CursorClass {
    /// Nothing under the pointer; the caller's default arrow.
    #[default]
    None,
    /// Whole-line drag.
    Move,
    /// Endpoint placement.
    Crosshair,
    Horizontal,
    Vertical,
    /// Diagonal running top-left to bottom-right on screen (`\`).
    DiagBackslash,
    /// Diagonal running bottom-left to top-right on screen (`/`).
    DiagForwardslash,
}

/// Nominal resize direction of a handle on an unrotated rectangle, in degrees,
/// measured with y pointing down: the top-left corner moves along 45° (`\`).
fn base_angle(handle: HandleKind) -> Option<f64> {
    match handle {
        HandleKind::EdgeLeft | HandleKind::EdgeRight => Some(0.0),
        HandleKind::EdgeTop | HandleKind::EdgeBottom => Some(90.0),
        HandleKind::CornerTopLeft | HandleKind::CornerBottomRight => Some(45.0),
        HandleKind::CornerTopRight | HandleKind::CornerBottomLeft => Some(135.0),
        _ => None,
    }
}

/// Cursor class for `handle` on a line at `line_angle` degrees.
pub fn classify_cursor(handle: HandleKind, line_angle: f64) -> CursorClass {
    match handle {
        HandleKind::None => CursorClass::None,
        HandleKind::Body => CursorClass::Move,
        HandleKind::StartPoint | HandleKind::EndPoint => CursorClass::Crosshair,
        _ => base_angle(handle)
            .map(|base| angle_to_cursor(line_angle + base))
            .unwrap_or_default(),
    }
}

/// Snap a direction in degrees to one of four 45°-wide buckets centered on
/// 0, 45, 90, and 135 (directions are taken modulo 180).
pub fn angle_to_cursor(angle: f64) -> CursorClass {
    if !angle.is_finite() {
        return CursorClass::None;
    }
    let a = angle.rem_euclid(180.0);
    if !(22.5..157.5).contains(&a) {
        CursorClass::Horizontal
    } else if a < 67.5 {
        CursorClass::DiagBackslash
    } else if a < 112.5 {
        CursorClass::Vertical
    } else {
        CursorClass::DiagForwardslash
    }
}
