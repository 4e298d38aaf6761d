//! Incoming emergency page
//!
//! First screen after an alert reaches the watch: a warning, a short
//! description and a single button to open the patient's data.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};

use super::constants::{
    ALERT_BUTTON_HEIGHT_PX, ALERT_BUTTON_TOP_Y, ALERT_BUTTON_WIDTH_PERCENT, ALERT_ICON_CENTER_Y,
    ALERT_ICON_SIZE_PX, ALERT_SUBTITLE_Y, ALERT_TITLE_Y,
};
use super::layout::{centered_row, from_center, percent_of_width};
use crate::pages::page::Page;
use crate::ui::{
    Action, Chip, ChipVariant, ColorPalette, Drawable, Label, PageId, TextSize, TouchEvent,
    TouchResult, Touchable,
};

/// Alert screen with an "Anzeigen" button leading to the dashboard
pub struct IncomingEmergencyPage {
    bounds: Rectangle,
    palette: ColorPalette,
    title: Label,
    subtitle: Label,
    accept_button: Chip,
    dirty: bool,
}

impl IncomingEmergencyPage {
    pub fn new(bounds: Rectangle) -> Self {
        let palette = ColorPalette::default();

        let title = Label::centered(
            "NOTFALL",
            from_center(bounds, 0, ALERT_TITLE_Y),
            TextSize::Large,
            palette.alert,
        );
        let subtitle = Label::centered(
            "Patient in Nähe",
            from_center(bounds, 0, ALERT_SUBTITLE_Y),
            TextSize::Medium,
            palette.text_primary,
        );

        let button_size = Size::new(
            percent_of_width(bounds, ALERT_BUTTON_WIDTH_PERCENT),
            ALERT_BUTTON_HEIGHT_PX,
        );
        let accept_button = Chip::new(
            centered_row(bounds, ALERT_BUTTON_TOP_Y, button_size),
            "Anzeigen",
        )
        .with_variant(ChipVariant::Primary)
        .with_action(Action::NavigateToPage(PageId::Dashboard));

        Self {
            bounds,
            palette,
            title,
            subtitle,
            accept_button,
            dirty: true,
        }
    }

    /// Warning sign drawn above the title
    fn draw_warning_icon<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let center = from_center(self.bounds, 0, ALERT_ICON_CENTER_Y);
        let half = ALERT_ICON_SIZE_PX / 2;

        Triangle::new(
            center + Point::new(0, -half),
            center + Point::new(-half, half),
            center + Point::new(half, half),
        )
        .into_styled(PrimitiveStyle::with_fill(self.palette.alert))
        .draw(display)?;

        Label::centered(
            "!",
            center + Point::new(0, half / 3),
            TextSize::MediumBold,
            self.palette.background,
        )
        .draw(display)
    }
}

impl Page for IncomingEmergencyPage {
    fn id(&self) -> PageId {
        PageId::IncomingEmergency
    }

    fn title(&self) -> &str {
        "Incoming Emergency"
    }

    fn on_activate(&mut self) {
        self.accept_button.reset();
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self.accept_button.handle_touch(event) {
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

        self.draw_warning_icon(display)?;
        self.title.draw(display)?;
        self.subtitle.draw(display)?;
        self.accept_button.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.accept_button.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.accept_button.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingDisplay;
    use crate::ui::TouchPoint;
    use crate::ui::colors::COLOR_ALERT;

    fn page() -> IncomingEmergencyPage {
        IncomingEmergencyPage::new(Rectangle::new(Point::zero(), Size::new(240, 240)))
    }

    #[test]
    fn test_accept_button_opens_dashboard() {
        let mut page = page();
        let action = page.handle_touch(TouchEvent::Press(TouchPoint::new(120, 160)));
        assert_eq!(action, Some(Action::NavigateToPage(PageId::Dashboard)));
    }

    #[test]
    fn test_touch_outside_button_does_nothing() {
        let mut page = page();
        assert_eq!(page.handle_touch(TouchEvent::Press(TouchPoint::new(120, 20))), None);
        assert_eq!(page.handle_touch(TouchEvent::SwipeDismiss), None);
    }

    #[test]
    fn test_draw_shows_alert_and_marks_clean() {
        let mut page = page();
        let mut display = RecordingDisplay::watch();
        assert!(page.is_dirty());

        page.draw_page(&mut display).unwrap();
        page.mark_clean();

        assert!(!page.is_dirty());
        // Icon, title and button are all alert red
        assert!(display.count(COLOR_ALERT) > 1000);
    }

    #[test]
    fn test_activation_requests_redraw() {
        let mut page = page();
        page.mark_clean();
        page.on_activate();
        assert!(page.is_dirty());
    }
}
