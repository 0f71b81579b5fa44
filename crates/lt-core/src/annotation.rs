//! One line annotation: the line, its rectangle count, and the size shared
//! by every rectangle.
//!
//! Rectangles are recomputed from this state on every call to
//! [`Annotation::rectangles`], so any change to the line, count, or size is
//! reflected immediately.

use crate::config::AnnotationConfig;
use crate::layout::{self, OrientedRect, PlacementPolicy, clamp_side, clamp_size};
use crate::line::LineModel;
use kurbo::{Point, Rect, Size};

/// Margin used by the renderer around [`Annotation::bounds`] to cover
/// endpoint markers and stroke width.
pub const BOUNDS_MARGIN: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    line: LineModel,
    count: usize,
    size: Size,
    policy: PlacementPolicy,
}

impl Annotation {
    /// A new annotation with the default count, size, and policy.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self::from_config(start, end, &AnnotationConfig::default())
    }

    pub fn from_config(
        start: impl Into<Point>,
        end: impl Into<Point>,
        config: &AnnotationConfig,
    ) -> Self {
        Self {
            line: LineModel::new(start, end),
            count: config.count,
            size: config.size(),
            policy: config.policy,
        }
    }

    pub fn line(&self) -> &LineModel {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut LineModel {
        &mut self.line
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Change the number of rectangles. Zero leaves a bare line.
    pub fn set_count(&mut self, count: usize) {
        log::debug!("rectangle count {} -> {}", self.count, count);
        self.count = count;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = clamp_size(size);
    }

    pub fn set_width(&mut self, width: f64) {
        self.size.width = clamp_side(width);
    }

    pub fn set_height(&mut self, height: f64) {
        self.size.height = clamp_side(height);
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: PlacementPolicy) {
        self.policy = policy;
    }

    /// Line parameters of each rectangle center.
    pub fn positions(&self) -> Vec<f64> {
        layout::placements(self.count, self.policy)
    }

    pub fn rectangles(&self) -> Vec<OrientedRect> {
        layout::rectangles(&self.line, self.count, self.size, self.policy)
    }

    /// Axis-aligned box around the line and every rotated rectangle,
    /// inflated by `margin` on each side.
    pub fn bounds(&self, margin: f64) -> Rect {
        let mut rect = Rect::from_points(self.line.start, self.line.end);
        for r in self.rectangles() {
            for corner in r.corners() {
                rect = rect.union_pt(corner);
            }
        }
        rect.inflate(margin, margin)
    }
}
