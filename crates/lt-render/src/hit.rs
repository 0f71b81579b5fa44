//! Hit testing: pointer position → annotation handle.
//!
//! Tests run in a fixed priority order and the first match wins:
//! endpoints, then each rectangle in index order (corners before edges),
//! then the line body. All zone tests happen in the line-rotated frame so
//! handles stay attached to the rectangle outline at any angle.

use kurbo::{Point, Size};
use lt_core::error::{ConfigError, check_non_negative};
use lt_core::{Annotation, HandleKind, Hit, OrientedRect};
use serde::{Deserialize, Serialize};

/// Pick tolerances, in the same units as the annotation coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerance {
    /// Half the side of the square grab zone around each endpoint.
    pub endpoint_half_size: f64,
    /// Reach of corner and edge zones on either side of the outline.
    pub border: f64,
    /// Maximum distance from the segment that still grabs the line body.
    pub body_distance: f64,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            endpoint_half_size: 5.0,
            border: 8.0,
            body_distance: 5.0,
        }
    }
}

impl HitTolerance {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("endpoint_half_size", self.endpoint_half_size)?;
        check_non_negative("border", self.border)?;
        check_non_negative("body_distance", self.body_distance)?;
        Ok(())
    }
}

/// Find the handle of `annotation` under `pos`.
pub fn hit_test(annotation: &Annotation, pos: Point, tolerance: &HitTolerance) -> Hit {
    let line = annotation.line();
    hit_test_parts(annotation, &annotation.rectangles(), pos, tolerance).unwrap_or_else(|| {
        if line.distance_to_segment(pos) < tolerance.body_distance {
            Hit::line(HandleKind::Body)
        } else {
            Hit::NONE
        }
    })
}

/// Endpoint and rectangle tests, without the line body fallback.
fn hit_test_parts(
    annotation: &Annotation,
    rects: &[OrientedRect],
    pos: Point,
    tolerance: &HitTolerance,
) -> Option<Hit> {
    let line = annotation.line();
    let angle = line.angle();

    // Endpoints first (highest priority)
    let grab = Size::new(2.0 * tolerance.endpoint_half_size, 2.0 * tolerance.endpoint_half_size);
    for (point, handle) in [(line.start, HandleKind::StartPoint), (line.end, HandleKind::EndPoint)] {
        let zone = OrientedRect::new(point, grab, angle);
        if within_box(zone.to_local(pos), tolerance.endpoint_half_size, tolerance.endpoint_half_size) {
            return Some(Hit::line(handle));
        }
    }

    // Rectangles: lower index wins where zones overlap
    rects.iter().enumerate().find_map(|(i, rect)| {
        rect_handle_at(rect, rect.to_local(pos), tolerance.border).map(|handle| Hit::rect(handle, i))
    })
}

/// Classify a point already expressed in the rectangle's local frame.
///
/// Returns `None` both outside the inflated box and in its interior away
/// from the outline.
pub fn rect_handle_at(rect: &OrientedRect, local: Point, border: f64) -> Option<HandleKind> {
    let half = rect.half_extents();
    if !within_box(local, half.x + border, half.y + border) {
        return None;
    }

    // Corners take precedence over the edges they join
    let corners = [
        (half.x, -half.y, HandleKind::CornerTopRight),
        (-half.x, -half.y, HandleKind::CornerTopLeft),
        (half.x, half.y, HandleKind::CornerBottomRight),
        (-half.x, half.y, HandleKind::CornerBottomLeft),
    ];
    for (cx, cy, handle) in corners {
        if within_box(Point::new(local.x - cx, local.y - cy), border, border) {
            return Some(handle);
        }
    }

    if local.y <= -half.y + border {
        Some(HandleKind::EdgeTop)
    } else if local.y >= half.y - border {
        Some(HandleKind::EdgeBottom)
    } else if local.x <= -half.x + border {
        Some(HandleKind::EdgeLeft)
    } else if local.x >= half.x - border {
        Some(HandleKind::EdgeRight)
    } else {
        None
    }
}

fn within_box(p: Point, half_w: f64, half_h: f64) -> bool {
    p.x.abs() <= half_w && p.y.abs() <= half_h
}
