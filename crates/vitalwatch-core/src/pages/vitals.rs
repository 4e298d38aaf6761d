//! Heart-rate detail page
//!
//! Large framed graph of the full heart-rate history with the range bounds as
//! axis labels, followed by the current and the highest reading.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment;

extern crate alloc;
use alloc::format;
use alloc::string::String;

use super::constants::{
    VITALS_AXIS_LABEL_WIDTH_PX, VITALS_CURRENT_VALUE_GAP_PX, VITALS_FRAME_PADDING_PX,
    VITALS_FRAME_TOP_Y, VITALS_FRAME_WIDTH_PERCENT, VITALS_HIGHEST_VALUE_GAP_PX, VITALS_TITLE_Y,
};
use super::layout::{centered_row, from_center, percent_of_width};
use crate::config::{DETAIL_GRAPH_HEIGHT_PX, HEART_RATE_RANGE};
use crate::pages::page::Page;
use crate::patient::Patient;
use crate::ui::colors::{COLOR_GRAPH_FRAME, LIGHT_GRAY};
use crate::ui::{
    Action, ColorPalette, Drawable, HeartRateGraph, Label, PageId, TextSize, TouchEvent,
};

/// Text shown for readings that are not available
const MISSING_READING: &str = "--";

/// Detail view of the heart rate; dismissed by swiping
pub struct VitalsPage {
    bounds: Rectangle,
    palette: ColorPalette,
    frame: Rectangle,
    labels: [Label; 5],
    graph: HeartRateGraph,
    dirty: bool,
}

impl VitalsPage {
    pub fn new(bounds: Rectangle, patient: &Patient) -> Self {
        let palette = ColorPalette::default();

        let frame = centered_row(
            bounds,
            VITALS_FRAME_TOP_Y,
            Size::new(
                percent_of_width(bounds, VITALS_FRAME_WIDTH_PERCENT),
                DETAIL_GRAPH_HEIGHT_PX,
            ),
        );
        let padding = VITALS_FRAME_PADDING_PX;
        let inner = Rectangle::new(
            frame.top_left + Point::new(padding as i32, padding as i32),
            frame.size.saturating_sub(Size::new(2 * padding, 2 * padding)),
        );
        let graph_area = Rectangle::new(
            inner.top_left + Point::new(VITALS_AXIS_LABEL_WIDTH_PX as i32, 0),
            inner
                .size
                .saturating_sub(Size::new(VITALS_AXIS_LABEL_WIDTH_PX, 0)),
        );

        // Axis labels hug the top and bottom edge of the inner area
        let small_half_height = TextSize::Small.font().character_size.height as i32 / 2;
        let axis_top = inner.top_left + Point::new(0, small_half_height);
        let axis_bottom =
            inner.top_left + Point::new(0, inner.size.height as i32 - small_half_height);

        let frame_bottom = frame.top_left.y - bounds.top_left.y + frame.size.height as i32;
        let current_y = frame_bottom + VITALS_CURRENT_VALUE_GAP_PX;
        let highest_y = current_y + VITALS_HIGHEST_VALUE_GAP_PX;

        let labels = [
            Label::centered(
                "Herzfrequenz",
                from_center(bounds, 0, VITALS_TITLE_Y),
                TextSize::Medium,
                palette.text_secondary,
            ),
            Label::centered(
                format!("{:.0}", HEART_RATE_RANGE.max()),
                axis_top,
                TextSize::Small,
                palette.text_primary,
            )
            .with_alignment(Alignment::Left),
            Label::centered(
                format!("{:.0}", HEART_RATE_RANGE.min()),
                axis_bottom,
                TextSize::Small,
                palette.text_primary,
            )
            .with_alignment(Alignment::Left),
            Label::centered(
                format!("Hzf: {} bpm", reading(patient.latest_heart_rate())),
                from_center(bounds, 0, current_y),
                TextSize::Medium,
                palette.text_primary,
            ),
            Label::centered(
                format!("Highest: {} bpm", reading(patient.highest_heart_rate())),
                from_center(bounds, 0, highest_y),
                TextSize::Small,
                LIGHT_GRAY,
            ),
        ];

        Self {
            bounds,
            palette,
            frame,
            labels,
            graph: HeartRateGraph::new(graph_area, &patient.heart_rate_history),
            dirty: true,
        }
    }

    pub fn graph(&self) -> &HeartRateGraph {
        &self.graph
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Texts currently shown, top to bottom
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(Label::text)
    }
}

fn reading(value: Option<i32>) -> String {
    match value {
        Some(bpm) => format!("{bpm}"),
        None => String::from(MISSING_READING),
    }
}

impl Page for VitalsPage {
    fn id(&self) -> PageId {
        PageId::Vitals
    }

    fn title(&self) -> &str {
        "Vitals"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, _event: TouchEvent) -> Option<Action> {
        // Static screen, leaving it is handled by the swipe gesture
        None
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        self.frame
            .into_styled(PrimitiveStyle::with_fill(COLOR_GRAPH_FRAME))
            .draw(display)?;

        for label in &self.labels {
            label.draw(display)?;
        }
        self.graph.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.graph.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.graph.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::PatientRepository;
    use crate::test_support::RecordingDisplay;
    use crate::ui::TouchPoint;
    use crate::ui::colors::COLOR_ALERT;
    use alloc::vec::Vec;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(240, 240))
    }

    #[test]
    fn test_layout_geometry() {
        let page = VitalsPage::new(screen(), &PatientRepository::mock_patient());
        assert_eq!(
            page.frame(),
            Rectangle::new(Point::new(12, 48), Size::new(216, 100))
        );
        assert_eq!(
            page.graph().bounds(),
            Rectangle::new(Point::new(36, 52), Size::new(188, 92))
        );
    }

    #[test]
    fn test_graph_shows_full_history() {
        let patient = PatientRepository::mock_patient();
        let page = VitalsPage::new(screen(), &patient);
        assert_eq!(page.graph().samples(), patient.heart_rate_history.as_slice());
    }

    #[test]
    fn test_current_and_highest_readings() {
        let page = VitalsPage::new(screen(), &PatientRepository::mock_patient());
        let texts: Vec<&str> = page.texts().collect();
        assert_eq!(
            texts,
            ["Herzfrequenz", "190", "50", "Hzf: 110 bpm", "Highest: 180 bpm"]
        );
    }

    #[test]
    fn test_empty_history_shows_placeholders() {
        let mut patient = PatientRepository::mock_patient();
        patient.heart_rate_history.clear();
        let mut page = VitalsPage::new(screen(), &patient);

        let texts: Vec<&str> = page.texts().collect();
        assert!(texts.contains(&"Hzf: -- bpm"));
        assert!(texts.contains(&"Highest: -- bpm"));

        let mut display = RecordingDisplay::watch();
        page.draw_page(&mut display).unwrap();
        assert_eq!(display.count(COLOR_ALERT), 0);
    }

    #[test]
    fn test_graph_is_drawn_inside_frame() {
        let mut page = VitalsPage::new(screen(), &PatientRepository::mock_patient());
        let mut display = RecordingDisplay::watch();
        page.draw_page(&mut display).unwrap();

        assert!(display.count(COLOR_ALERT) > 0);
        assert_eq!(display.count_outside(page.frame(), COLOR_ALERT), 0);
        assert!(display.count(COLOR_GRAPH_FRAME) > 0);
    }

    #[test]
    fn test_ignores_touches() {
        let mut page = VitalsPage::new(screen(), &PatientRepository::mock_patient());
        assert_eq!(page.handle_touch(TouchEvent::Press(TouchPoint::new(120, 100))), None);
    }
}
