//! Vital-sign waveform projection
//!
//! Maps an ordered sequence of samples (one scalar measurement per time step)
//! onto a drawing surface so it can be stroked as a connected polyline.
//!
//! The projection itself knows nothing about displays: it works in abstract
//! surface units with the origin at the top-left corner. Higher clinical
//! values map to smaller `y` so they render visually "up". Only
//! [`to_screen_points`] touches embedded-graphics types, and only to offset
//! already projected points into a pixel rectangle.
//!
//! # Examples
//!
//! ```
//! use vitalwatch_core::waveform::project;
//!
//! let points = project(&[50, 120, 190], 200.0, 100.0, 50.0, 190.0).unwrap();
//! assert_eq!(points.len(), 3);
//! assert_eq!(points[1].x, 100.0);
//! assert_eq!(points[1].y, 50.0);
//! ```

use thiserror_no_std::Error;

mod projector;
mod range;

pub use projector::{PlotPoint, Sample, WaveformProjector, project, to_screen_points};
pub use range::{SurfaceExtent, ValueRange};

/// Error types for waveform projection
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WaveformError {
    /// The value bounds are not strictly increasing (or not finite)
    #[error("Invalid value range (min {min} must be below max {max})")]
    InvalidRange {
        /// Supplied lower bound
        min: f32,
        /// Supplied upper bound
        max: f32,
    },
}

/// Result type for waveform operations
pub type WaveformResult<T> = Result<T, WaveformError>;
