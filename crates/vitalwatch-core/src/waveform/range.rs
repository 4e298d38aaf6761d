//! Value range and drawing surface types

use embedded_graphics::prelude::Size;

use super::{WaveformError, WaveformResult};

/// Fixed clinical display bounds used to normalize samples vertically.
///
/// The bounds are configuration, never derived from the data being drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl ValueRange {
    /// Create a validated range.
    ///
    /// Fails with [`WaveformError::InvalidRange`] unless both bounds are
    /// finite and `min < max`.
    pub fn new(min: f32, max: f32) -> WaveformResult<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Self { min, max })
        } else {
            Err(WaveformError::InvalidRange { min, max })
        }
    }

    /// Create a range without validation, for compile-time constants.
    ///
    /// The caller guarantees `min < max` with both bounds finite.
    pub const fn new_unchecked(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Lower bound
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Distance between the bounds
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Fraction of the range covered by `value`.
    ///
    /// `0.0` at `min`, `1.0` at `max`; values outside the range are not
    /// clamped.
    pub fn fraction(&self, value: f32) -> f32 {
        (value - self.min) / self.span()
    }
}

/// Width and height of the surface a waveform is projected into
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceExtent {
    /// Width in display units
    pub width: f32,
    /// Height in display units
    pub height: f32,
}

impl SurfaceExtent {
    /// Create a surface extent.
    ///
    /// Negative or NaN dimensions collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl From<Size> for SurfaceExtent {
    fn from(size: Size) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_equal_bounds() {
        assert_eq!(
            ValueRange::new(100.0, 100.0),
            Err(WaveformError::InvalidRange {
                min: 100.0,
                max: 100.0
            })
        );
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(ValueRange::new(190.0, 50.0).is_err());
    }

    #[test]
    fn test_range_rejects_non_finite_bounds() {
        assert!(ValueRange::new(f32::NAN, 190.0).is_err());
        assert!(ValueRange::new(50.0, f32::INFINITY).is_err());
        assert!(ValueRange::new(f32::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_fraction_is_unclamped() {
        let range = ValueRange::new(50.0, 190.0).unwrap();
        assert_eq!(range.fraction(50.0), 0.0);
        assert_eq!(range.fraction(190.0), 1.0);
        assert_eq!(range.fraction(120.0), 0.5);
        assert!(range.fraction(20.0) < 0.0);
        assert!(range.fraction(260.0) > 1.0);
    }

    #[test]
    fn test_surface_extent_from_size() {
        let extent = SurfaceExtent::from(Size::new(50, 30));
        assert_eq!(extent.width, 50.0);
        assert_eq!(extent.height, 30.0);
    }

    #[test]
    fn test_surface_extent_collapses_negative_dimensions() {
        let extent = SurfaceExtent::new(-5.0, f32::NAN);
        assert_eq!(extent, SurfaceExtent::new(0.0, 0.0));
    }
}
