// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `mosais`: apply a mosaic effect to an image file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::{DynamicImage, ImageFormat, Rgba};
use mosaic_render::{DEFAULT_DENSITY, MosaicSettings, render};
use mosaic_scatter::{CancelToken, DistributionMode};
use tracing_subscriber::EnvFilter;

/// Recolor an image into flat cells around scattered sample points
#[derive(Debug, Parser)]
#[command(name = "mosais", version, about, long_about = None)]
struct Cli {
    /// Input image path
    #[arg(short, long)]
    input: PathBuf,

    /// Output image path; the format follows the extension
    #[arg(short, long)]
    output: PathBuf,

    /// Density level, 1 (sparse) to 5 (dense)
    #[arg(short, long, default_value_t = DEFAULT_DENSITY)]
    density: u32,

    /// Point distribution: `random` or `uniform` (blue noise)
    #[arg(short, long, default_value_t = DistributionMode::Uniform)]
    mode: DistributionMode,

    /// Draw only the sample points instead of the mosaic
    #[arg(long)]
    points_only: bool,

    /// Color for --points-only, as #rrggbb or #rrggbbaa
    #[arg(long, default_value = "#ffffff", value_parser = parse_color)]
    point_color: Rgba<u8>,

    /// Quadtree leaf capacity
    #[arg(long, default_value_t = 10)]
    bucket_size: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> MosaicSettings {
        MosaicSettings {
            density: self.density,
            mode: self.mode,
            points_only: self.points_only,
            point_color: self.point_color,
            bucket_size: self.bucket_size,
            seed: self.seed,
        }
    }
}

fn parse_color(hex: &str) -> Result<Rgba<u8>, String> {
    let digits = hex.trim_start_matches('#');
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return Err(format!("expected #rrggbb or #rrggbbaa, got `{hex}`"));
    }
    let mut rgba = [u8::MAX; 4];
    for (slot, i) in rgba.iter_mut().zip((0..digits.len()).step_by(2)) {
        *slot = u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| format!("invalid hex color `{hex}`"))?;
    }
    Ok(Rgba(rgba))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.input.exists() {
        anyhow::bail!("Input file does not exist: {}", cli.input.display());
    }
    let format = ImageFormat::from_path(&cli.output)
        .with_context(|| format!("Unsupported output format: {}", cli.output.display()))?;

    let mut image = image::open(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?
        .to_rgba8();

    let report = render(&mut image, &cli.settings(), &CancelToken::new())
        .context("Failed to render mosaic")?;
    tracing::info!(
        mode = %report.mode(),
        points = report.points,
        "rendered {}x{} image",
        image.width(),
        image.height(),
    );

    let out = DynamicImage::ImageRgba8(image);
    let out = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(out.to_rgb8())
    } else {
        out
    };
    out.save_with_format(&cli.output, format)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;
    Ok(())
}
