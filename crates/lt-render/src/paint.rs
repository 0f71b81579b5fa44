//! Annotation → read-only draw snapshot.
//!
//! The host renderer draws the line, the endpoint markers, and translucent
//! rectangle outlines from this data. Nothing here touches a canvas.

use kurbo::{BezPath, Circle, Line, Rect};
use lt_core::{Annotation, BOUNDS_MARGIN, OrientedRect};

/// Radius of the endpoint markers.
pub const ENDPOINT_RADIUS: f64 = 5.0;

/// Everything a renderer needs for one annotation, in world coordinates.
#[derive(Debug, Clone)]
pub struct DrawSnapshot {
    pub line: Line,
    /// Start marker, then end marker.
    pub endpoints: [Circle; 2],
    pub rects: Vec<OrientedRect>,
    /// Closed outline per rectangle, same order as `rects`.
    pub outlines: Vec<BezPath>,
    /// Region to invalidate when the annotation changes.
    pub bounds: Rect,
}

pub fn snapshot(annotation: &Annotation) -> DrawSnapshot {
    let line = annotation.line();
    let rects = annotation.rectangles();
    let outlines = rects.iter().map(outline).collect();
    log::trace!(
        "snapshot: line {:?} -> {:?}, {} rects",
        line.start,
        line.end,
        rects.len()
    );

    DrawSnapshot {
        line: line.to_kurbo(),
        endpoints: [
            Circle::new(line.start, ENDPOINT_RADIUS),
            Circle::new(line.end, ENDPOINT_RADIUS),
        ],
        rects,
        outlines,
        bounds: annotation.bounds(BOUNDS_MARGIN),
    }
}

/// Closed polygon through the rectangle's four world-space corners.
pub fn outline(rect: &OrientedRect) -> BezPath {
    let [tl, tr, br, bl] = rect.corners();
    let mut path = BezPath::new();
    path.move_to(tl);
    path.line_to(tr);
    path.line_to(br);
    path.line_to(bl);
    path.close_path();
    path
}
