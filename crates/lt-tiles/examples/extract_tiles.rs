//! Cut the sample tiles of one line annotation out of an image.
//!
//! ```text
//! cargo run -p lt-tiles --example extract_tiles -- -i photo.png --x0 50 --y0 50 --x1 250 --y1 100
//! ```
//!
//! Tiles are written as `tile_0.png`, `tile_1.png`, ... into `--out`.
//! Set `RUST_LOG=debug` to see the crop and canvas sizes.

use clap::Parser;
use lt_core::{Annotation, AnnotationConfig};
use lt_tiles::{ExtractConfig, TileExtractor};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract_tiles", about = "Extract upright tiles along a line annotation")]
struct Cli {
    /// Input image path (PNG, JPEG)
    #[arg(short, long)]
    input: PathBuf,

    /// Line start x
    #[arg(long, allow_hyphen_values = true)]
    x0: f64,

    /// Line start y
    #[arg(long, allow_hyphen_values = true)]
    y0: f64,

    /// Line end x
    #[arg(long, allow_hyphen_values = true)]
    x1: f64,

    /// Line end y
    #[arg(long, allow_hyphen_values = true)]
    y1: f64,

    /// Number of rectangles along the line
    #[arg(short, long, default_value = "3")]
    count: usize,

    /// Rectangle width
    #[arg(long, default_value = "60")]
    width: f64,

    /// Rectangle height
    #[arg(long, default_value = "40")]
    height: f64,

    /// Pixels of context kept around the rectangles before de-rotating
    #[arg(long, default_value = "4")]
    margin: f64,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AnnotationConfig {
        count: cli.count,
        width: cli.width,
        height: cli.height,
        ..Default::default()
    };
    config.validate()?;
    let annotation = Annotation::from_config((cli.x0, cli.y0), (cli.x1, cli.y1), &config);

    let image = image::open(&cli.input)?.to_rgba8();
    let extractor = TileExtractor::new(ExtractConfig {
        margin: cli.margin,
        ..Default::default()
    })?;
    let tiles = extractor.extract_annotation(&image, &annotation)?;

    std::fs::create_dir_all(&cli.out)?;
    for (i, tile) in tiles.iter().enumerate() {
        let path = cli.out.join(format!("tile_{i}.png"));
        tile.save(&path)?;
        log::info!("wrote {} ({}x{})", path.display(), tile.width(), tile.height());
    }
    println!(
        "{} tiles at {:.1}° written to {}",
        tiles.len(),
        annotation.line().angle(),
        cli.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_and_defaults() {
        let cli = Cli::try_parse_from([
            "extract_tiles", "-i", "in.png", "--x0", "-12.5", "--y0", "50", "--x1", "250", "--y1", "100",
        ])
        .unwrap();
        assert_eq!(cli.x0, -12.5);
        assert_eq!(cli.count, 3);
        assert_eq!((cli.width, cli.height), (60.0, 40.0));
        assert_eq!(cli.out, PathBuf::from("."));
    }

    #[test]
    fn malformed_coordinate_is_rejected() {
        let err = Cli::try_parse_from([
            "extract_tiles", "-i", "in.png", "--x0", "abc", "--y0", "50", "--x1", "250", "--y1", "100",
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
