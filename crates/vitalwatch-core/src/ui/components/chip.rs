//! Chip component: a pill-shaped, touchable row with one or two labels

use crate::ui::colors::{COLOR_ALERT_PRESSED, COLOR_SURFACE_PRESSED, ColorPalette};
use crate::ui::components::text::{Label, TextSize};
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

extern crate alloc;
use alloc::string::String;

/// Vertical distance between the centers of the primary and secondary label
const LABEL_LINE_SPACING_PX: i32 = 14;

/// Color scheme of a chip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChipVariant {
    /// Alert colored, for the action the screen is about
    Primary,
    /// Neutral surface
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ChipState {
    Normal,
    Pressed,
}

/// Touchable chip with a label, an optional secondary label and an optional
/// action.
///
/// Chips without an action still acknowledge presses (`TouchResult::Handled`)
/// so touches do not fall through to whatever is behind them, but never show
/// a pressed state.
///
/// # Examples
/// ```ignore
/// let chip = Chip::new(
///     Rectangle::new(Point::new(30, 172), Size::new(180, 36)),
///     "Details & Aktionen",
/// )
/// .with_action(Action::NavigateToPage(PageId::Menu));
/// ```
pub struct Chip {
    bounds: Rectangle,
    label: String,
    secondary_label: Option<String>,
    action: Option<Action>,
    variant: ChipVariant,
    palette: ColorPalette,
    state: ChipState,
    dirty: bool,
}

impl Chip {
    /// Create a secondary chip without an action
    pub fn new(bounds: Rectangle, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
            secondary_label: None,
            action: None,
            variant: ChipVariant::Secondary,
            palette: ColorPalette::default(),
            state: ChipState::Normal,
            dirty: true,
        }
    }

    /// Action triggered when the chip is pressed
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Smaller caption shown below the label
    pub fn with_secondary_label(mut self, label: impl Into<String>) -> Self {
        self.secondary_label = Some(label.into());
        self
    }

    pub fn with_variant(mut self, variant: ChipVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Return to the unpressed look, e.g. when the owning page is shown again
    pub fn reset(&mut self) {
        if self.state != ChipState::Normal {
            self.state = ChipState::Normal;
            self.dirty = true;
        }
    }

    fn colors(&self) -> (Rgb565, Rgb565) {
        let background = match (self.variant, self.state) {
            (ChipVariant::Primary, ChipState::Normal) => self.palette.alert,
            (ChipVariant::Primary, ChipState::Pressed) => COLOR_ALERT_PRESSED,
            (ChipVariant::Secondary, ChipState::Normal) => self.palette.surface,
            (ChipVariant::Secondary, ChipState::Pressed) => COLOR_SURFACE_PRESSED,
        };
        (background, self.palette.text_primary)
    }
}

impl Drawable for Chip {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let (background, foreground) = self.colors();

        // Fully rounded ends
        let radius = self.bounds.size.height / 2;
        RoundedRectangle::with_equal_corners(self.bounds, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(background))
            .draw(display)?;

        let center = self.bounds.center();
        match &self.secondary_label {
            Some(secondary) => {
                let half = LABEL_LINE_SPACING_PX / 2;
                Label::centered(
                    self.label.as_str(),
                    center - Point::new(0, half),
                    TextSize::Medium,
                    foreground,
                )
                .draw(display)?;
                Label::centered(
                    secondary.as_str(),
                    center + Point::new(0, half),
                    TextSize::Small,
                    self.palette.text_secondary,
                )
                .draw(display)?;
            }
            None => {
                Label::centered(self.label.as_str(), center, TextSize::Medium, foreground)
                    .draw(display)?;
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

impl Touchable for Chip {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => match self.action {
                Some(action) => {
                    self.state = ChipState::Pressed;
                    self.dirty = true;
                    TouchResult::Action(action)
                }
                // Informational chips keep their look
                None => TouchResult::Handled,
            },
            TouchEvent::Drag(point) if self.action.is_some() => {
                let inside = self.contains_point(point);
                if !inside && self.state == ChipState::Normal {
                    return TouchResult::NotHandled;
                }

                let new_state = if inside {
                    ChipState::Pressed
                } else {
                    ChipState::Normal
                };
                if self.state != new_state {
                    self.state = new_state;
                    self.dirty = true;
                }
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingDisplay;
    use crate::ui::colors::{COLOR_ALERT, COLOR_SURFACE};
    use crate::ui::core::PageId;

    fn chip_bounds() -> Rectangle {
        Rectangle::new(Point::new(20, 100), Size::new(200, 40))
    }

    #[test]
    fn test_press_inside_triggers_action() {
        let mut chip = Chip::new(chip_bounds(), "Aktive Messungen")
            .with_action(Action::NavigateToPage(PageId::Vitals));
        let result = chip.handle_touch(TouchEvent::Press(TouchPoint::new(120, 120)));
        assert_eq!(result, TouchResult::Action(Action::NavigateToPage(PageId::Vitals)));
        assert!(chip.is_dirty());
    }

    #[test]
    fn test_press_outside_is_not_handled() {
        let mut chip = Chip::new(chip_bounds(), "Medikamente")
            .with_action(Action::NavigateToPage(PageId::Vitals));
        let result = chip.handle_touch(TouchEvent::Press(TouchPoint::new(10, 10)));
        assert_eq!(result, TouchResult::NotHandled);
    }

    #[test]
    fn test_chip_without_action_swallows_press() {
        let mut chip = Chip::new(chip_bounds(), "Medikamente");
        let result = chip.handle_touch(TouchEvent::Press(TouchPoint::new(120, 120)));
        assert_eq!(result, TouchResult::Handled);
    }

    #[test]
    fn test_reset_clears_pressed_state() {
        let mut chip = Chip::new(chip_bounds(), "Anzeigen").with_variant(ChipVariant::Primary);
        chip.handle_touch(TouchEvent::Press(TouchPoint::new(120, 120)));
        chip.mark_clean();

        chip.reset();
        assert!(chip.is_dirty());

        let mut display = RecordingDisplay::watch();
        chip.draw(&mut display).unwrap();
        assert_eq!(display.count(COLOR_ALERT_PRESSED), 0);
    }

    #[test]
    fn test_drag_tracks_pressed_state() {
        let mut chip = Chip::new(chip_bounds(), "Anzeigen")
            .with_action(Action::NavigateToPage(PageId::Dashboard));
        assert_eq!(
            chip.handle_touch(TouchEvent::Drag(TouchPoint::new(5, 5))),
            TouchResult::NotHandled
        );

        chip.handle_touch(TouchEvent::Press(TouchPoint::new(120, 120)));
        chip.mark_clean();
        assert_eq!(
            chip.handle_touch(TouchEvent::Drag(TouchPoint::new(5, 5))),
            TouchResult::Handled
        );
        assert!(chip.is_dirty());
    }

    #[test]
    fn test_info_chip_ignores_drag() {
        let mut chip = Chip::new(chip_bounds(), "Medikamente");
        chip.mark_clean();
        assert_eq!(
            chip.handle_touch(TouchEvent::Drag(TouchPoint::new(120, 120))),
            TouchResult::NotHandled
        );
        assert!(!chip.is_dirty());
    }

    #[test]
    fn test_swipe_is_ignored() {
        let mut chip = Chip::new(chip_bounds(), "Medikamente");
        assert_eq!(chip.handle_touch(TouchEvent::SwipeDismiss), TouchResult::NotHandled);
    }

    #[test]
    fn test_variant_controls_fill() {
        let mut display = RecordingDisplay::watch();
        Chip::new(chip_bounds(), "Anzeigen")
            .with_variant(ChipVariant::Primary)
            .draw(&mut display)
            .unwrap();
        assert!(display.count(COLOR_ALERT) > 0);
        assert_eq!(display.count_outside(chip_bounds(), COLOR_ALERT), 0);

        let mut display = RecordingDisplay::watch();
        Chip::new(chip_bounds(), "Medikamente")
            .draw(&mut display)
            .unwrap();
        assert!(display.count(COLOR_SURFACE) > 0);
        assert_eq!(display.count(COLOR_ALERT), 0);
    }
}
