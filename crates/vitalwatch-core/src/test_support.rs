//! Recording draw target for rendering tests

use std::collections::BTreeMap;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// In-memory display that remembers the last colour written to each pixel.
///
/// Pixels outside the display area are counted but not stored, the same way
/// a real panel silently drops them.
pub(crate) struct RecordingDisplay {
    size: Size,
    pixels: BTreeMap<(i32, i32), Rgb565>,
    pub(crate) dropped: usize,
}

impl RecordingDisplay {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: BTreeMap::new(),
            dropped: 0,
        }
    }

    pub(crate) fn watch() -> Self {
        Self::new(
            crate::config::DISPLAY_WIDTH_PX as u32,
            crate::config::DISPLAY_HEIGHT_PX as u32,
        )
    }

    pub(crate) fn color_at(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.pixels.get(&(x, y)).copied()
    }

    /// Number of pixels currently holding `color`
    pub(crate) fn count(&self, color: Rgb565) -> usize {
        self.pixels.values().filter(|c| **c == color).count()
    }

    /// Number of pixels inside `area` currently holding `color`
    pub(crate) fn count_in(&self, area: Rectangle, color: Rgb565) -> usize {
        self.pixels
            .iter()
            .filter(|((x, y), c)| **c == color && area.contains(Point::new(*x, *y)))
            .count()
    }

    /// Number of pixels outside `area` holding `color`
    pub(crate) fn count_outside(&self, area: Rectangle, color: Rgb565) -> usize {
        self.count(color) - self.count_in(area, color)
    }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let area = self.bounding_box();
        for Pixel(point, color) in pixels {
            if area.contains(point) {
                self.pixels.insert((point.x, point.y), color);
            } else {
                self.dropped += 1;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size {
        self.size
    }
}
