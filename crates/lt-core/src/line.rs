//! The annotated line: two endpoints and the geometry derived from them.
//!
//! Angles follow the `atan2` convention over `end - start`, in degrees:
//! 0 points along +x and positive angles turn toward +y. In image space
//! (y down) that reads as clockwise on screen.

use kurbo::{Point, Vec2};

/// Which end of the line a handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// A line segment between two mutable endpoints.
///
/// The endpoints may coincide while the operator drags one onto the other.
/// Every query stays finite in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    pub start: Point,
    pub end: Point,
}

impl LineModel {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The vector `end - start`.
    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }

    /// Line angle in degrees. A degenerate line reports 0.
    pub fn angle(&self) -> f64 {
        let v = self.vector();
        v.y.atan2(v.x).to_degrees()
    }

    pub fn length(&self) -> f64 {
        self.vector().hypot()
    }

    pub fn is_degenerate(&self) -> bool {
        self.vector().hypot2() == 0.0
    }

    /// Unit direction from start to end, `None` for a zero-length line.
    pub fn direction(&self) -> Option<Vec2> {
        let v = self.vector();
        let len = v.hypot();
        (len > 0.0).then(|| v / len)
    }

    /// Linear interpolation: `start + t * (end - start)`.
    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.vector() * t
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    ///
    /// The projection parameter is clamped to `[0, 1]` so points beyond an
    /// endpoint measure to that endpoint.
    pub fn distance_to_segment(&self, p: Point) -> f64 {
        let v = self.vector();
        let len_sq = v.hypot2();
        if len_sq == 0.0 {
            return p.distance(self.start);
        }
        let t = ((p - self.start).dot(v) / len_sq).clamp(0.0, 1.0);
        p.distance(self.point_at(t))
    }

    pub fn endpoint(&self, which: Endpoint) -> Point {
        match which {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    pub fn set_endpoint(&mut self, which: Endpoint, pos: Point) {
        match which {
            Endpoint::Start => self.start = pos,
            Endpoint::End => self.end = pos,
        }
    }

    /// Move both endpoints by `delta`. Length and angle are preserved.
    pub fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.start, self.end)
    }
}
