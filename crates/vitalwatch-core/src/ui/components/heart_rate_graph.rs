//! Heart-rate polyline graph
//!
//! Projects a sample slice with [`WaveformProjector`] and strokes consecutive
//! points with `Line` primitives.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

extern crate alloc;
use alloc::vec::Vec;

use crate::config::{HEART_RATE_RANGE, HEART_RATE_STROKE_WIDTH_PX};
use crate::ui::colors::COLOR_ALERT;
use crate::ui::core::Drawable;
use crate::waveform::{SurfaceExtent, ValueRange, WaveformProjector, to_screen_points};

/// Stroked polyline of heart-rate samples inside a rectangle.
///
/// Samples outside the value range are drawn outside the rectangle; the graph
/// never clamps them.
pub struct HeartRateGraph {
    bounds: Rectangle,
    samples: Vec<i32>,
    projector: WaveformProjector,
    color: Rgb565,
    stroke_width: u32,
    dirty: bool,
}

impl HeartRateGraph {
    /// Create a graph over [`HEART_RATE_RANGE`]
    pub fn new(bounds: Rectangle, samples: &[i32]) -> Self {
        Self {
            bounds,
            samples: samples.to_vec(),
            projector: WaveformProjector::new(HEART_RATE_RANGE),
            color: COLOR_ALERT,
            stroke_width: HEART_RATE_STROKE_WIDTH_PX,
            dirty: true,
        }
    }

    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.projector = WaveformProjector::new(range);
        self
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Replace the samples shown by the graph
    pub fn set_samples(&mut self, samples: &[i32]) {
        if self.samples != samples {
            self.samples.clear();
            self.samples.extend_from_slice(samples);
            self.dirty = true;
        }
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Area the sample points are projected into.
    ///
    /// Inset by half the stroke so thick lines stay inside [`Self::bounds`],
    /// and one pixel short on the right and bottom so the range bounds land on
    /// the last pixel column and row rather than just past them.
    fn plot_area(&self) -> (Point, Size) {
        let inset = self.stroke_width / 2;
        let top_left = self.bounds.top_left + Point::new(inset as i32, inset as i32);
        let span = self
            .bounds
            .size
            .saturating_sub(Size::new(2 * inset + 1, 2 * inset + 1));
        (top_left, span)
    }

    /// Pixel positions of the samples, index-aligned with [`Self::samples`]
    pub fn screen_points(&self) -> Vec<Point> {
        let (top_left, span) = self.plot_area();
        let projected = self
            .projector
            .project(&self.samples, SurfaceExtent::from(span));
        to_screen_points(&projected, Rectangle::new(top_left, span))
    }
}

impl Drawable for HeartRateGraph {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let points = self.screen_points();

        match points.as_slice() {
            [] => {}
            [single] => {
                Circle::with_center(*single, self.stroke_width.max(1))
                    .into_styled(PrimitiveStyle::with_fill(self.color))
                    .draw(display)?;
            }
            _ => {
                let line_style = PrimitiveStyle::with_stroke(self.color, self.stroke_width);
                for pair in points.windows(2) {
                    Line::new(pair[0], pair[1])
                        .into_styled(line_style)
                        .draw(display)?;
                }
            }
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingDisplay;

    fn graph_bounds() -> Rectangle {
        Rectangle::new(Point::new(20, 50), Size::new(140, 70))
    }

    fn thin_graph(samples: &[i32]) -> HeartRateGraph {
        HeartRateGraph::new(graph_bounds(), samples).with_stroke_width(1)
    }

    #[test]
    fn test_empty_samples_draw_nothing() {
        let mut display = RecordingDisplay::watch();
        HeartRateGraph::new(graph_bounds(), &[])
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.count(COLOR_ALERT), 0);
    }

    #[test]
    fn test_single_sample_draws_dot_at_left_edge() {
        let graph = thin_graph(&[120]);
        assert_eq!(graph.screen_points(), [Point::new(20, 85)]);

        let mut display = RecordingDisplay::watch();
        graph.draw(&mut display).unwrap();
        assert_eq!(display.color_at(20, 85), Some(COLOR_ALERT));
    }

    #[test]
    fn test_range_bounds_land_on_edge_pixels() {
        let graph = thin_graph(&[50, 120, 190]);
        assert_eq!(
            graph.screen_points(),
            [Point::new(20, 119), Point::new(90, 85), Point::new(159, 50)]
        );
        assert!(graph.screen_points().iter().all(|p| graph_bounds().contains(*p)));
    }

    #[test]
    fn test_line_stays_inside_graph_for_in_range_samples() {
        let mut display = RecordingDisplay::watch();
        let graph = thin_graph(&[70, 72, 110, 130, 90, 85, 180, 160, 110]);
        graph.draw(&mut display).unwrap();

        assert!(display.count(COLOR_ALERT) > 0);
        assert_eq!(display.count_outside(graph_bounds(), COLOR_ALERT), 0);
    }

    #[test]
    fn test_extreme_samples_stay_inside_small_graph() {
        let bounds = Rectangle::new(Point::new(20, 50), Size::new(50, 30));
        let graph = HeartRateGraph::new(bounds, &[50, 190]).with_stroke_width(1);
        assert_eq!(graph.screen_points(), [Point::new(20, 79), Point::new(69, 50)]);

        let mut display = RecordingDisplay::watch();
        graph.draw(&mut display).unwrap();
        assert!(display.count(COLOR_ALERT) > 0);
        assert_eq!(display.count_outside(bounds, COLOR_ALERT), 0);
    }

    #[test]
    fn test_thick_stroke_stays_inside_bounds() {
        let bounds = Rectangle::new(Point::new(20, 50), Size::new(50, 30));
        let graph = HeartRateGraph::new(bounds, &[50, 190, 50, 190]);

        let mut display = RecordingDisplay::watch();
        graph.draw(&mut display).unwrap();
        assert!(display.count(COLOR_ALERT) > 0);
        assert_eq!(display.count_outside(bounds, COLOR_ALERT), 0);
    }

    #[test]
    fn test_out_of_range_sample_leaves_graph_area() {
        let graph = thin_graph(&[40, 200]);
        let points = graph.screen_points();
        assert!(points[0].y > 120);
        assert!(points[1].y < 50);
    }

    #[test]
    fn test_custom_range_and_color() {
        let range = ValueRange::new(0.0, 100.0).unwrap();
        let mut display = RecordingDisplay::watch();
        let graph = thin_graph(&[0, 100])
            .with_range(range)
            .with_color(Rgb565::GREEN);
        assert_eq!(graph.screen_points(), [Point::new(20, 119), Point::new(159, 50)]);

        graph.draw(&mut display).unwrap();
        assert!(display.count(Rgb565::GREEN) > 0);
        assert_eq!(display.count(COLOR_ALERT), 0);
    }

    #[test]
    fn test_set_samples_marks_dirty_only_on_change() {
        let mut graph = HeartRateGraph::new(graph_bounds(), &[70, 72]);
        graph.mark_clean();
        graph.set_samples(&[70, 72]);
        assert!(!graph.is_dirty());
        graph.set_samples(&[70, 72, 110]);
        assert!(graph.is_dirty());
        assert_eq!(graph.samples(), [70, 72, 110]);
    }
}
