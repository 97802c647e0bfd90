// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-call rendering: settings in, mosaic out.

use image::RgbaImage;
use mosaic_scatter::{CancelToken, Distribution, DistributionMode, Plot, Scatter};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::RenderError;
use crate::mosaic::{MosaicStats, apply_mosaic, draw_points};
use crate::settings::MosaicSettings;

/// What a [`render`] run did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderReport {
    /// Strategy that generated the points.
    pub distribution: Distribution,
    /// Points placed.
    pub points: usize,
    /// Sweep counters, absent for points-only runs.
    pub stats: Option<MosaicStats>,
}

impl RenderReport {
    /// The distribution mode used.
    pub fn mode(&self) -> DistributionMode {
        self.distribution.mode()
    }
}

/// Generate a distribution sized to `image` and render it in place.
///
/// Derives the strategy from the density level and mode, fills a fresh [`Plot`],
/// then paints either the points or the full mosaic. A generation error or a
/// cancellation leaves `image` untouched.
pub fn render(
    image: &mut RgbaImage,
    settings: &MosaicSettings,
    cancel: &CancelToken,
) -> Result<RenderReport, RenderError> {
    if settings.bucket_size == 0 {
        return Err(RenderError::ZeroBucketSize);
    }
    let (width, height) = image.dimensions();
    let _span = tracing::info_span!(
        "render",
        width,
        height,
        density = settings.density,
        mode = %settings.mode,
    )
    .entered();

    let distribution = Distribution::for_density(settings.mode, settings.density, width, height);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut plot = Plot::with_bucket_size(width, height, settings.bucket_size);
    let points = distribution.scatter(&mut plot, &mut rng, cancel)?;
    tracing::info!(points, "distribution generated");

    let stats = if settings.points_only {
        draw_points(image, &plot, settings.point_color)?;
        None
    } else {
        Some(apply_mosaic(image, &plot, cancel)?)
    };

    Ok(RenderReport {
        distribution,
        points,
        stats,
    })
}
