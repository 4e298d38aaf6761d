//! Patient dashboard page
//!
//! One-screen summary of the patient: name, known diseases, the suspected
//! emergency, blood type and age next to a mini heart-rate graph of the most
//! recent readings.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment;

extern crate alloc;
use alloc::format;

use super::constants::{
    DASHBOARD_AGE_Y, DASHBOARD_BLOOD_TYPE_Y, DASHBOARD_CHIP_HEIGHT_PX, DASHBOARD_CHIP_TOP_Y,
    DASHBOARD_CHIP_WIDTH_PX, DASHBOARD_COLUMN_GAP_PX, DASHBOARD_DISEASES_CAPTION_Y,
    DASHBOARD_DISEASES_Y, DASHBOARD_EMERGENCY_CAPTION_Y, DASHBOARD_EMERGENCY_Y,
    DASHBOARD_GRAPH_TOP_Y, DASHBOARD_HEADER_Y, DASHBOARD_NAME_Y,
};
use super::layout::{centered_row, from_center};
use crate::config::{PREVIEW_GRAPH_HEIGHT_PX, PREVIEW_GRAPH_WIDTH_PX, PREVIEW_SAMPLE_COUNT};
use crate::pages::page::Page;
use crate::patient::Patient;
use crate::ui::{
    Action, Chip, ColorPalette, Drawable, HeartRateGraph, Label, PageId, TextSize, TouchEvent,
    TouchResult, Touchable,
};

/// Patient summary with a chip leading to the menu
pub struct DashboardPage {
    bounds: Rectangle,
    palette: ColorPalette,
    labels: [Label; 8],
    preview_graph: HeartRateGraph,
    details_chip: Chip,
    dirty: bool,
}

impl DashboardPage {
    pub fn new(bounds: Rectangle, patient: &Patient) -> Self {
        let palette = ColorPalette::default();
        let row = |y| from_center(bounds, 0, y);
        // Blood type and age sit left of the center line, the graph right of it
        let left_column = |y| from_center(bounds, -DASHBOARD_COLUMN_GAP_PX / 2, y);

        let labels = [
            Label::centered(
                "Dr. Connected",
                row(DASHBOARD_HEADER_Y),
                TextSize::Small,
                palette.accent,
            ),
            Label::centered(
                patient.name.as_str(),
                row(DASHBOARD_NAME_Y),
                TextSize::MediumBold,
                palette.text_primary,
            ),
            Label::centered(
                "Known Diseases:",
                row(DASHBOARD_DISEASES_CAPTION_Y),
                TextSize::Small,
                palette.text_secondary,
            ),
            Label::centered(
                patient.known_diseases_joined(),
                row(DASHBOARD_DISEASES_Y),
                TextSize::Medium,
                palette.text_primary,
            ),
            Label::centered(
                "Suspected Emergency:",
                row(DASHBOARD_EMERGENCY_CAPTION_Y),
                TextSize::Small,
                palette.text_secondary,
            ),
            Label::centered(
                patient.suspected_emergency.as_str(),
                row(DASHBOARD_EMERGENCY_Y),
                TextSize::MediumBold,
                palette.alert,
            ),
            Label::centered(
                format!("Blut: {}", patient.blood_type),
                left_column(DASHBOARD_BLOOD_TYPE_Y),
                TextSize::Small,
                palette.text_primary,
            )
            .with_alignment(Alignment::Right),
            Label::centered(
                format!("Alter: {}", patient.age),
                left_column(DASHBOARD_AGE_Y),
                TextSize::Small,
                palette.text_primary,
            )
            .with_alignment(Alignment::Right),
        ];

        let graph_top_left =
            from_center(bounds, DASHBOARD_COLUMN_GAP_PX / 2, DASHBOARD_GRAPH_TOP_Y);
        let preview_graph = HeartRateGraph::new(
            Rectangle::new(
                graph_top_left,
                Size::new(PREVIEW_GRAPH_WIDTH_PX, PREVIEW_GRAPH_HEIGHT_PX),
            ),
            patient.recent_heart_rate(PREVIEW_SAMPLE_COUNT),
        );

        let details_chip = Chip::new(
            centered_row(
                bounds,
                DASHBOARD_CHIP_TOP_Y,
                Size::new(DASHBOARD_CHIP_WIDTH_PX, DASHBOARD_CHIP_HEIGHT_PX),
            ),
            "Details & Aktionen",
        )
        .with_action(Action::NavigateToPage(PageId::Menu));

        Self {
            bounds,
            palette,
            labels,
            preview_graph,
            details_chip,
            dirty: true,
        }
    }

    /// The mini graph showing the most recent heart-rate readings
    pub fn preview_graph(&self) -> &HeartRateGraph {
        &self.preview_graph
    }

    /// Texts currently shown, top to bottom
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(Label::text)
    }
}

impl Page for DashboardPage {
    fn id(&self) -> PageId {
        PageId::Dashboard
    }

    fn title(&self) -> &str {
        "Dashboard"
    }

    fn on_activate(&mut self) {
        self.details_chip.reset();
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self.details_chip.handle_touch(event) {
            TouchResult::Action(action) => Some(action),
            TouchResult::Handled | TouchResult::NotHandled => None,
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        for label in &self.labels {
            label.draw(display)?;
        }
        self.preview_graph.draw(display)?;
        self.details_chip.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.preview_graph.is_dirty() || self.details_chip.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.preview_graph.mark_clean();
        self.details_chip.mark_clean();
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
    fn test_shows_patient_summary() {
        let page = DashboardPage::new(screen(), &PatientRepository::mock_patient());
        let texts: Vec<&str> = page.texts().collect();
        assert!(texts.contains(&"Max Mustermann"));
        assert!(texts.contains(&"Hypertonie, Diabetes Typ 2"));
        assert!(texts.contains(&"Herzrhythmusstörung"));
        assert!(texts.contains(&"Blut: AB-"));
        assert!(texts.contains(&"Alter: 65"));
    }

    #[test]
    fn test_preview_uses_last_five_samples() {
        let page = DashboardPage::new(screen(), &PatientRepository::mock_patient());
        assert_eq!(page.preview_graph().samples(), [90, 85, 180, 160, 110]);
        assert_eq!(
            page.preview_graph().bounds().size,
            Size::new(PREVIEW_GRAPH_WIDTH_PX, PREVIEW_GRAPH_HEIGHT_PX)
        );
    }

    #[test]
    fn test_details_chip_opens_menu() {
        let mut page = DashboardPage::new(screen(), &PatientRepository::mock_patient());
        let action = page.handle_touch(TouchEvent::Press(TouchPoint::new(120, 184)));
        assert_eq!(action, Some(Action::NavigateToPage(PageId::Menu)));
    }

    #[test]
    fn test_draw_includes_preview_graph() {
        let mut page = DashboardPage::new(screen(), &PatientRepository::mock_patient());
        let mut display = RecordingDisplay::watch();
        page.draw_page(&mut display).unwrap();

        let graph_area = page.preview_graph().bounds();
        assert!(display.count_in(graph_area, COLOR_ALERT) > 0);
    }

    #[test]
    fn test_empty_history_still_draws() {
        let mut patient = PatientRepository::mock_patient();
        patient.heart_rate_history.clear();
        let mut page = DashboardPage::new(screen(), &patient);
        let mut display = RecordingDisplay::watch();

        page.draw_page(&mut display).unwrap();
        assert!(page.preview_graph().samples().is_empty());
        assert_eq!(display.count_in(page.preview_graph().bounds(), COLOR_ALERT), 0);
    }
}
