//! Oriented rectangles → axis-aligned image tiles.
//!
//! Pipeline:
//! 1. bound the extreme rectangles and crop the source to that box (plus margin),
//! 2. rotate the crop by −angle onto a canvas large enough to hold all of it,
//! 3. map each rectangle through the same transform and cut its now
//!    axis-aligned box out of the canvas.
//!
//! All rectangles are expected to share one angle, as they do when they come
//! from a single annotation. Mixed angles produce tiles cut with the first
//! rectangle's angle.

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use image::{ColorType, DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::geometric_transformations::{Projection, warp_into};
use lt_core::kurbo::{Point, Rect};
use lt_core::{Annotation, OrientedRect};
use smallvec::SmallVec;

type CornerSet = SmallVec<[Point; 8]>;

/// Integer pixel box inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Clamp the integral box `[x0, x1) × [y0, y1)` to `bounds`.
    /// `None` when nothing is left.
    fn clamped(x0: f64, y0: f64, x1: f64, y1: f64, bounds: (u32, u32)) -> Option<Self> {
        let (w, h) = (bounds.0 as f64, bounds.1 as f64);
        let cx0 = x0.max(0.0).min(w);
        let cy0 = y0.max(0.0).min(h);
        let cx1 = x1.max(0.0).min(w);
        let cy1 = y1.max(0.0).min(h);
        if !(cx1 > cx0 && cy1 > cy0) {
            return None;
        }
        Some(Self {
            x: cx0 as u32,
            y: cy0 as u32,
            width: (cx1 - cx0) as u32,
            height: (cy1 - cy0) as u32,
        })
    }

    fn crop(&self, image: &RgbaImage) -> RgbaImage {
        imageops::crop_imm(image, self.x, self.y, self.width, self.height).to_image()
    }
}

/// Reusable extractor holding a validated config.
#[derive(Debug, Clone)]
pub struct TileExtractor {
    config: ExtractConfig,
}

impl TileExtractor {
    pub fn new(config: ExtractConfig) -> Result<Self, ExtractError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn extract(&self, image: &RgbaImage, rects: &[OrientedRect]) -> Result<Vec<RgbaImage>, ExtractError> {
        extract_tiles(image, rects, &self.config)
    }

    /// Tiles for the finished annotation, one per rectangle in line order.
    pub fn extract_annotation(
        &self,
        image: &RgbaImage,
        annotation: &Annotation,
    ) -> Result<Vec<RgbaImage>, ExtractError> {
        self.extract(image, &annotation.rectangles())
    }
}

/// Cut one axis-aligned tile per rectangle out of `image`, in input order.
///
/// Tiles may differ from the rectangle size by a pixel due to rounding.
pub fn extract_tiles(
    image: &RgbaImage,
    rects: &[OrientedRect],
    config: &ExtractConfig,
) -> Result<Vec<RgbaImage>, ExtractError> {
    config.validate()?;
    let Some(first) = rects.first() else {
        return Ok(Vec::new());
    };
    let angle = first.angle;

    let bbox = bounding_box(&region_corners(rects));
    let x0 = (bbox.x0 - config.margin).floor();
    let y0 = (bbox.y0 - config.margin).floor();
    let x1 = (bbox.x1 + config.margin).ceil();
    let y1 = (bbox.y1 + config.margin).ceil();
    let region = PixelRect::clamped(x0, y0, x1, y1, image.dimensions()).ok_or(
        ExtractError::EmptyRegion {
            x0: x0 as i64,
            y0: y0 as i64,
            x1: x1 as i64,
            y1: y1 as i64,
        },
    )?;
    log::debug!("crop {region:?} from {}x{} at {angle:.2}°", image.width(), image.height());

    let crop = region.crop(image);
    let (canvas, derotate) = derotate(&crop, angle, config);
    // Source pixel coordinates → canvas coordinates
    let to_canvas = derotate * Projection::translate(-(region.x as f32), -(region.y as f32));

    rects
        .iter()
        .enumerate()
        .map(|(index, rect)| {
            cut_tile(&canvas, to_canvas, rect, config.tile_padding).ok_or(ExtractError::EmptyTile { index })
        })
        .collect()
}

/// [`extract_tiles`] for any decoded image. Tiles come back in the source's
/// 8-bit color layout (gray, gray+alpha, RGB, or RGBA).
pub fn extract_tiles_dynamic(
    image: &DynamicImage,
    rects: &[OrientedRect],
    config: &ExtractConfig,
) -> Result<Vec<DynamicImage>, ExtractError> {
    let color = image.color();
    let tiles = extract_tiles(&image.to_rgba8(), rects, config)?;
    Ok(tiles.into_iter().map(|tile| restore_color(tile, color)).collect())
}

fn restore_color(tile: RgbaImage, color: ColorType) -> DynamicImage {
    let tile = DynamicImage::ImageRgba8(tile);
    match color {
        ColorType::L8 | ColorType::L16 => DynamicImage::ImageLuma8(tile.to_luma8()),
        ColorType::La8 | ColorType::La16 => DynamicImage::ImageLumaA8(tile.to_luma_alpha8()),
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => DynamicImage::ImageRgb8(tile.to_rgb8()),
        _ => tile,
    }
}

/// Corners that bound every rectangle.
///
/// Rectangles ordered along the line are bounded by the first and last one,
/// so only those two are used. Otherwise every rectangle contributes.
fn region_corners(rects: &[OrientedRect]) -> CornerSet {
    let mut corners = CornerSet::new();
    if ordered_along_line(rects) {
        if let (Some(first), Some(last)) = (rects.first(), rects.last()) {
            corners.extend(first.corners());
            corners.extend(last.corners());
        }
    } else {
        log::warn!("rectangles are not ordered along the line; bounding all {}", rects.len());
        for rect in rects {
            corners.extend(rect.corners());
        }
    }
    corners
}

/// Whether rectangle centers advance monotonically along the first
/// rectangle's direction.
fn ordered_along_line(rects: &[OrientedRect]) -> bool {
    const EPS: f64 = 1e-9;
    let Some(first) = rects.first() else {
        return true;
    };
    let (sin, cos) = first.angle.to_radians().sin_cos();
    let along: Vec<f64> = rects.iter().map(|r| r.center.x * cos + r.center.y * sin).collect();
    along.windows(2).all(|w| w[0] <= w[1] + EPS) || along.windows(2).all(|w| w[0] + EPS >= w[1])
}

fn bounding_box(points: &[Point]) -> Rect {
    match points.split_first() {
        Some((first, rest)) => rest
            .iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
        None => Rect::ZERO,
    }
}

/// Rotate `crop` by −`angle` about its center onto a canvas sized to hold
/// the whole rotated crop. Returns the canvas and the crop → canvas projection.
fn derotate(crop: &RgbaImage, angle: f64, config: &ExtractConfig) -> (RgbaImage, Projection) {
    if angle.rem_euclid(360.0) == 0.0 {
        return (crop.clone(), Projection::translate(0.0, 0.0));
    }

    let (w, h) = (crop.width() as f64, crop.height() as f64);
    let (sin, cos) = angle.to_radians().sin_cos();
    let canvas_w = canvas_side(w * cos.abs() + h * sin.abs());
    let canvas_h = canvas_side(w * sin.abs() + h * cos.abs());

    let projection = Projection::translate(canvas_w as f32 / 2.0, canvas_h as f32 / 2.0)
        * Projection::rotate(-angle.to_radians() as f32)
        * Projection::translate(-(w as f32) / 2.0, -(h as f32) / 2.0);

    let mut canvas = RgbaImage::new(canvas_w, canvas_h);
    warp_into(
        crop,
        &projection,
        config.interpolation.into(),
        Rgba(config.background),
        &mut canvas,
    );
    log::debug!("derotated {}x{} crop onto {canvas_w}x{canvas_h} canvas", crop.width(), crop.height());
    (canvas, projection)
}

/// Canvas side for a rotated extent; trims float noise such as cos(90°) ≠ 0.
fn canvas_side(extent: f64) -> u32 {
    (extent - 1e-6).ceil().max(1.0) as u32
}

fn map_point(projection: Projection, p: Point) -> Point {
    let (x, y) = projection * (p.x as f32, p.y as f32);
    Point::new(x as f64, y as f64)
}

fn cut_tile(canvas: &RgbaImage, to_canvas: Projection, rect: &OrientedRect, padding: f64) -> Option<RgbaImage> {
    // Axis-aligned once de-rotated, up to float noise
    let mapped: CornerSet = rect.corners().into_iter().map(|p| map_point(to_canvas, p)).collect();
    let bbox = bounding_box(&mapped);

    let x0 = (bbox.x0 - padding).round();
    let y0 = (bbox.y0 - padding).round();
    let x1 = (bbox.x1 + padding).round();
    let y1 = (bbox.y1 + padding).round();
    PixelRect::clamped(x0, y0, x1, y1, canvas.dimensions()).map(|tile| tile.crop(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lt_core::kurbo::Size;
    use pretty_assertions::assert_eq;

    fn rect(x: f64, y: f64, angle: f64) -> OrientedRect {
        OrientedRect::new(Point::new(x, y), Size::new(20.0, 10.0), angle)
    }

    #[test]
    fn clamped_rejects_collapsed_boxes() {
        assert_eq!(PixelRect::clamped(-10.0, -10.0, -1.0, 5.0, (50, 50)), None);
        assert_eq!(PixelRect::clamped(10.0, 10.0, 10.0, 20.0, (50, 50)), None);
        assert_eq!(
            PixelRect::clamped(-5.0, 40.0, 20.0, 70.0, (50, 50)),
            Some(PixelRect {
                x: 0,
                y: 40,
                width: 20,
                height: 10
            })
        );
    }

    #[test]
    fn ordered_rectangles_use_extremes_only() {
        let rects = [rect(10.0, 0.0, 0.0), rect(20.0, 0.0, 0.0), rect(30.0, 0.0, 0.0)];
        assert!(ordered_along_line(&rects));
        assert_eq!(region_corners(&rects).len(), 8);

        let reversed = [rect(30.0, 0.0, 0.0), rect(20.0, 0.0, 0.0), rect(10.0, 0.0, 0.0)];
        assert!(ordered_along_line(&reversed));
    }

    #[test]
    fn shuffled_rectangles_bound_everything() {
        let rects = [rect(10.0, 0.0, 0.0), rect(90.0, 0.0, 0.0), rect(40.0, 0.0, 0.0)];
        assert!(!ordered_along_line(&rects));
        let corners = region_corners(&rects);
        assert_eq!(corners.len(), 12);
        let bbox = bounding_box(&corners);
        assert_eq!((bbox.x0, bbox.x1), (0.0, 100.0));
    }

    #[test]
    fn canvas_fits_rotated_crop() {
        assert_eq!(canvas_side(40.0 + 1e-14), 40);
        assert_eq!(canvas_side(40.2), 41);
        assert_eq!(canvas_side(0.0), 1);
    }

    #[test]
    fn quarter_turn_swaps_canvas_sides() {
        let crop = RgbaImage::new(30, 12);
        let (canvas, _) = derotate(&crop, 90.0, &ExtractConfig::default());
        assert_eq!(canvas.dimensions(), (12, 30));
        let (same, _) = derotate(&crop, 0.0, &ExtractConfig::default());
        assert_eq!(same.dimensions(), (30, 12));
    }

    #[test]
    fn empty_input_gives_no_tiles() {
        let image = RgbaImage::new(10, 10);
        assert!(extract_tiles(&image, &[], &ExtractConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn region_outside_image_is_rejected() {
        let image = RgbaImage::new(100, 100);
        let far = [rect(500.0, 500.0, 0.0)];
        let err = extract_tiles(&image, &far, &ExtractConfig::default()).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyRegion { .. }), "{err:?}");
    }

    #[test]
    fn invalid_config_is_reported() {
        let image = RgbaImage::new(100, 100);
        let config = ExtractConfig {
            tile_padding: f64::NAN,
            ..Default::default()
        };
        let err = extract_tiles(&image, &[rect(50.0, 50.0, 0.0)], &config).unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
        assert!(TileExtractor::new(config).is_err());
    }
}
