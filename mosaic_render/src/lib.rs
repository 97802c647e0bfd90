// Copyright 2025 the Mosais Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Render: stained-glass rendering over image buffers.
//!
//! Every pixel takes the color of its nearest sample point, so the image breaks up
//! into flat Voronoi cells. The sample points come from a [`mosaic_scatter::Plot`];
//! the pixels live behind the [`Surface`] trait, which every [`image::ImageBuffer`]
//! implements.
//!
//! - [`apply_mosaic`] runs the raster sweep.
//! - [`draw_points`] paints only the sample points.
//! - [`render`] does a whole run from [`MosaicSettings`]: pick the distribution, fill a
//!   plot sized to the image, then paint.
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use mosaic_render::{MosaicSettings, render};
//! use mosaic_scatter::CancelToken;
//!
//! let mut img = RgbaImage::from_fn(120, 80, |x, y| Rgba([(x * 2) as u8, (y * 3) as u8, 90, 255]));
//! let settings = MosaicSettings::default().with_density(4).with_seed(7);
//! let report = render(&mut img, &settings, &CancelToken::new()).unwrap();
//! assert!(report.points > 0);
//! ```

mod error;
mod mosaic;
mod pipeline;
mod settings;
mod surface;

pub use error::RenderError;
pub use mosaic::{MosaicStats, apply_mosaic, draw_points};
pub use pipeline::{RenderReport, render};
pub use settings::{DEFAULT_DENSITY, DEFAULT_POINT_COLOR, MosaicSettings};
pub use surface::{PixelRect, Surface};
