//! Placement of oriented sample rectangles along a line.
//!
//! Rectangles are derived, never stored: a center from `line.point_at(t)`,
//! one size shared by the whole annotation, and the line's current angle.

use crate::line::LineModel;
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest width or height a rectangle may be resized to.
pub const MIN_RECT_SIDE: f64 = 10.0;

/// Clamp a rectangle side to [`MIN_RECT_SIDE`]. Non-finite input maps to the floor.
pub fn clamp_side(v: f64) -> f64 {
    if v.is_finite() {
        v.max(MIN_RECT_SIDE)
    } else {
        MIN_RECT_SIDE
    }
}

/// Clamp both sides of a size to the floor.
pub fn clamp_size(size: Size) -> Size {
    Size::new(clamp_side(size.width), clamp_side(size.height))
}

/// Rule for distributing rectangle centers over `[0, 1]` of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPolicy {
    /// `n` points strictly between the endpoints: `(i + 1) / (n + 1)`.
    #[default]
    Interior,
    /// `n` points including both endpoints: `i / (n - 1)`; a single point sits at `start`.
    Inclusive,
}

/// Line parameters for `n` rectangles under `policy`.
///
/// Always strictly increasing and within `[0, 1]`.
pub fn placements(n: usize, policy: PlacementPolicy) -> Vec<f64> {
    match policy {
        PlacementPolicy::Interior => {
            let step = 1.0 / (n as f64 + 1.0);
            (0..n).map(|i| (i as f64 + 1.0) * step).collect()
        }
        PlacementPolicy::Inclusive => match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                let last = (n - 1) as f64;
                // Divide per point so the last value is exactly 1.0.
                (0..n).map(|i| i as f64 / last).collect()
            }
        },
    }
}

/// A rectangle centered on the line and rotated with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    pub center: Point,
    pub size: Size,
    /// Rotation in degrees, same convention as [`LineModel::angle`].
    pub angle: f64,
}

impl OrientedRect {
    pub fn new(center: Point, size: Size, angle: f64) -> Self {
        Self { center, size, angle }
    }

    /// Local → world transform: rotate by `angle`, then move to `center`.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::rotate(self.angle.to_radians())
    }

    /// Map a world point into the rectangle's unrotated local frame,
    /// centered on the rectangle.
    pub fn to_local(&self, p: Point) -> Point {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let d = p - self.center;
        Point::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos)
    }

    pub fn to_world(&self, local: Point) -> Point {
        self.transform() * local
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// World-space corners: top-left, top-right, bottom-right, bottom-left
    /// of the local frame (local -y is "top").
    pub fn corners(&self) -> [Point; 4] {
        let h = self.half_extents();
        [
            Point::new(-h.x, -h.y),
            Point::new(h.x, -h.y),
            Point::new(h.x, h.y),
            Point::new(-h.x, h.y),
        ]
        .map(|local| self.to_world(local))
    }
}

/// Rectangles for `n` placements along `line`, in line order.
pub fn rectangles(
    line: &LineModel,
    n: usize,
    size: Size,
    policy: PlacementPolicy,
) -> Vec<OrientedRect> {
    let angle = line.angle();
    placements(n, policy)
        .into_iter()
        .map(|t| OrientedRect::new(line.point_at(t), size, angle))
        .collect()
}
