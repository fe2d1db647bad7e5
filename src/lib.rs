//! # binview
//!
//! Observable integer histograms with pluggable bar-chart rendering.
//!
//! A [`Histogram`](histogram::Histogram) owns a private copy of a set of
//! non-negative integer observations and a configurable bucket count, derives
//! equal-width buckets from them, and notifies registered observers
//! synchronously whenever the data or bucket count changes. The
//! [`HistogramRenderer`](render::HistogramRenderer) draws the current buckets
//! (axis, scaled bars, and per-bar labels) through a minimal
//! [`Surface`](surface::Surface) capability set, so it never depends on a
//! concrete graphics toolkit.
//!
//! ## Quick Start
//!
//! ```
//! use binview::prelude::*;
//!
//! // Bin four observations into three equal-width buckets.
//! let mut histogram = Histogram::new(&[0, 1, 2, 10], 3)?;
//!
//! // Render to a raster surface and inspect the buckets.
//! let mut surface = Framebuffer::new(250, 150)?;
//! let renderer = HistogramRenderer::new();
//! renderer.render(&histogram, &mut surface, Rect::new(0, 0, 250, 150));
//!
//! // Feeding new data recomputes the buckets and notifies observers.
//! histogram.set_data(&[5, 5, 5]);
//! assert_eq!(histogram.max_count(), 3);
//! # Ok::<(), binview::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for buckets, colors, and styles

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Observable integer histogram with equal-width binning.
pub mod histogram;

/// Histogram bar-chart renderer.
pub mod render;

// ============================================================================
// Drawing Modules
// ============================================================================

/// Drawing-surface abstraction and its raster/vector implementations.
pub mod surface;

/// Color types for histogram rendering.
pub mod color;

/// Geometric primitives for histogram rendering.
pub mod geometry;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for binview operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use binview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::Rect;
    pub use crate::histogram::{Bucket, ChangeObserver, Histogram};
    pub use crate::output::PngEncoder;
    pub use crate::render::{HistogramRenderer, Style};
    pub use crate::surface::{Framebuffer, Surface, SvgSurface};
}
