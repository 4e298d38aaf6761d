//! Sample-to-surface projection

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

extern crate alloc;
use alloc::vec::Vec;

use super::WaveformResult;
use super::range::{SurfaceExtent, ValueRange};

/// A projected point in surface units (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl PlotPoint {
    /// Create a new plot point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A scalar measurement that can be projected
pub trait Sample: Copy {
    /// Value as `f32` for normalization
    fn to_f32(self) -> f32;
}

macro_rules! impl_sample {
    ($($ty:ty),*) => {
        $(
            impl Sample for $ty {
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_sample!(i8, i16, i32, u8, u16, u32, f32);

/// Projects sample sequences into a surface using a fixed [`ValueRange`].
///
/// Stateless apart from its range, so one projector can serve any number of
/// rendering passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformProjector {
    range: ValueRange,
}

impl WaveformProjector {
    /// Create a projector for the given value range
    pub const fn new(range: ValueRange) -> Self {
        Self { range }
    }

    /// The value range used for vertical normalization
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Project `samples` into `extent`.
    ///
    /// Points are index-aligned with `samples`. The horizontal step is
    /// `width / (n - 1)`; a single sample sits at `x = 0`. Vertical
    /// positions are `(1 - f) * height` where `f` is the sample's fraction of
    /// the range, so out-of-range samples land outside `[0, height]`.
    pub fn project<S: Sample>(&self, samples: &[S], extent: SurfaceExtent) -> Vec<PlotPoint> {
        let step_x = if samples.len() > 1 {
            extent.width / (samples.len() - 1) as f32
        } else {
            0.0
        };

        samples
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                let x = index as f32 * step_x;
                let y = (1.0 - self.range.fraction(sample.to_f32())) * extent.height;
                PlotPoint::new(x, y)
            })
            .collect()
    }
}

/// Project `samples` onto a `width` x `height` surface normalized against
/// `[min_value, max_value]`.
///
/// Returns an empty vector for empty input. Fails with
/// [`InvalidRange`](super::WaveformError::InvalidRange) when
/// `min_value >= max_value` or either bound is NaN or infinite, regardless of
/// the sample count.
pub fn project<S: Sample>(
    samples: &[S],
    width: f32,
    height: f32,
    min_value: f32,
    max_value: f32,
) -> WaveformResult<Vec<PlotPoint>> {
    let range = ValueRange::new(min_value, max_value)?;
    Ok(WaveformProjector::new(range).project(samples, SurfaceExtent::new(width, height)))
}

/// Offset projected points into `area` and round them to pixel positions.
///
/// Points outside the surface stay outside `area`; no clamping happens here.
pub fn to_screen_points(points: &[PlotPoint], area: Rectangle) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                area.top_left.x + round_to_i32(p.x),
                area.top_left.y + round_to_i32(p.y),
            )
        })
        .collect()
}

fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
