use image::{ColorType, DynamicImage, GrayImage, Luma, Rgba, RgbaImage, imageops};
use lt_core::kurbo::{Point, Size};
use lt_core::{Annotation, AnnotationConfig, OrientedRect};
use lt_tiles::{ExtractConfig, ExtractError, TileExtractor, TileInterpolation, extract_tiles, extract_tiles_dynamic};
use pretty_assertions::assert_eq;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]))
}

/// Blue image with `rect` painted red.
fn painted(width: u32, height: u32, rect: &OrientedRect) -> RgbaImage {
    let (hw, hh) = (rect.size.width / 2.0, rect.size.height / 2.0);
    RgbaImage::from_fn(width, height, |x, y| {
        let local = rect.to_local(Point::new(x as f64, y as f64));
        if local.x.abs() <= hw && local.y.abs() <= hh { RED } else { BLUE }
    })
}

fn size_close(tile: &RgbaImage, expected: (u32, u32)) -> bool {
    tile.width().abs_diff(expected.0) <= 1 && tile.height().abs_diff(expected.1) <= 1
}

#[test]
fn unrotated_tile_is_a_plain_crop() {
    init();
    let image = gradient(100, 100);
    let rect = OrientedRect::new(Point::new(50.0, 40.0), Size::new(20.0, 10.0), 0.0);
    let tiles = extract_tiles(&image, &[rect], &ExtractConfig::default()).unwrap();
    assert_eq!(tiles.len(), 1);
    let expected = imageops::crop_imm(&image, 40, 35, 20, 10).to_image();
    assert_eq!(tiles[0], expected);
}

#[test]
fn padding_grows_each_tile() {
    let image = gradient(100, 100);
    let rect = OrientedRect::new(Point::new(50.0, 40.0), Size::new(20.0, 10.0), 0.0);
    let config = ExtractConfig {
        tile_padding: 2.0,
        ..Default::default()
    };
    let tiles = extract_tiles(&image, &[rect], &config).unwrap();
    assert_eq!(tiles[0].dimensions(), (24, 14));
    assert_eq!(tiles[0], imageops::crop_imm(&image, 38, 33, 24, 14).to_image());
}

#[test]
fn rectangle_past_the_edge_is_clipped() {
    let image = gradient(100, 100);
    let rect = OrientedRect::new(Point::new(5.0, 50.0), Size::new(20.0, 10.0), 0.0);
    let tiles = extract_tiles(&image, &[rect], &ExtractConfig::default()).unwrap();
    assert_eq!(tiles[0].dimensions(), (15, 10));
}

#[test]
fn reference_annotation_yields_three_tiles() {
    init();
    let image = gradient(500, 500);
    let annotation = Annotation::from_config((50.0, 50.0), (250.0, 100.0), &AnnotationConfig::default());
    let extractor = TileExtractor::new(ExtractConfig::default()).unwrap();
    let tiles = extractor.extract_annotation(&image, &annotation).unwrap();
    assert_eq!(tiles.len(), 3);
    for tile in &tiles {
        assert!(size_close(tile, (60, 40)), "{:?}", tile.dimensions());
    }
}

#[test]
fn rotated_content_comes_out_upright() {
    init();
    let rect = OrientedRect::new(Point::new(100.0, 100.0), Size::new(60.0, 40.0), 30.0);
    let image = painted(200, 200, &rect);
    let tiles = extract_tiles(&image, &[rect], &ExtractConfig::default()).unwrap();
    let tile = &tiles[0];
    assert!(size_close(tile, (60, 40)), "{:?}", tile.dimensions());

    // Away from the rounded border every pixel is inside the painted rectangle
    const INSET: u32 = 3;
    for y in INSET..tile.height() - INSET {
        for x in INSET..tile.width() - INSET {
            let Rgba([r, _, b, _]) = *tile.get_pixel(x, y);
            assert!(r > 200 && b < 55, "pixel ({x}, {y}) = {:?}", tile.get_pixel(x, y));
        }
    }
}

#[test]
fn steep_line_with_nearest_sampling() {
    let annotation = Annotation::from_config((120.0, 20.0), (80.0, 280.0), &AnnotationConfig::default());
    let rects = annotation.rectangles();
    let image = painted(200, 300, &rects[1]);
    let config = ExtractConfig {
        interpolation: TileInterpolation::Nearest,
        ..Default::default()
    };
    let tiles = extract_tiles(&image, &rects, &config).unwrap();
    let tile = &tiles[1];
    assert!(size_close(tile, (60, 40)), "{:?}", tile.dimensions());
    let center = *tile.get_pixel(tile.width() / 2, tile.height() / 2);
    assert_eq!(center, RED);
}

#[test]
fn unordered_rectangles_still_extract() {
    let image = gradient(500, 500);
    let annotation = Annotation::from_config((50.0, 50.0), (250.0, 100.0), &AnnotationConfig::default());
    let rects = annotation.rectangles();
    let shuffled = [rects[0], rects[2], rects[1]];
    let tiles = extract_tiles(&image, &shuffled, &ExtractConfig::default()).unwrap();
    assert_eq!(tiles.len(), 3);
    for tile in &tiles {
        assert!(size_close(tile, (60, 40)), "{:?}", tile.dimensions());
    }
}

#[test]
fn region_off_the_image_fails() {
    let image = gradient(50, 50);
    let rect = OrientedRect::new(Point::new(-200.0, -200.0), Size::new(20.0, 10.0), 45.0);
    let err = extract_tiles(&image, &[rect], &ExtractConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::EmptyRegion { .. }), "{err}");
}

#[test]
fn grayscale_input_keeps_its_layout() {
    let gray = GrayImage::from_fn(80, 80, |x, _| Luma([(x * 3) as u8]));
    let image = DynamicImage::ImageLuma8(gray);
    let rect = OrientedRect::new(Point::new(40.0, 40.0), Size::new(20.0, 20.0), 0.0);
    let tiles = extract_tiles_dynamic(&image, &[rect], &ExtractConfig::default()).unwrap();
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].color(), ColorType::L8);
    assert_eq!((tiles[0].width(), tiles[0].height()), (20, 20));
    assert_eq!(tiles[0].to_luma8().get_pixel(0, 0), &Luma([90]));
}
