//! Patient data menu page

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use super::constants::{
    MENU_CHIP_GAP_PX, MENU_CHIP_HEIGHT_PX, MENU_CHIP_WIDTH_PX, MENU_FIRST_CHIP_TOP_Y,
    MENU_HEADER_Y, MENU_TWO_LINE_CHIP_HEIGHT_PX,
};
use super::layout::{centered_row, from_center};
use crate::pages::page::Page;
use crate::patient::Patient;
use crate::ui::{
    Action, Chip, ChipVariant, ColorPalette, Drawable, Label, PageId, TextSize, TouchEvent,
    TouchResult, Touchable,
};

/// List of patient data entries.
///
/// Only "Aktive Messungen" leads anywhere (the vitals page); the personal
/// data and medication chips show their summary inline.
pub struct MenuPage {
    bounds: Rectangle,
    palette: ColorPalette,
    header: Label,
    chips: [Chip; 3],
    dirty: bool,
}

impl MenuPage {
    pub fn new(bounds: Rectangle, patient: &Patient) -> Self {
        let palette = ColorPalette::default();

        let header = Label::centered(
            "Patienten Daten",
            from_center(bounds, 0, MENU_HEADER_Y),
            TextSize::Medium,
            palette.text_primary,
        );

        let mut top = MENU_FIRST_CHIP_TOP_Y;
        let mut next_row = |height: u32| {
            let row = centered_row(bounds, top, Size::new(MENU_CHIP_WIDTH_PX, height));
            top += height as i32 + MENU_CHIP_GAP_PX;
            row
        };

        let personal = Chip::new(next_row(MENU_TWO_LINE_CHIP_HEIGHT_PX), "Persönliche Daten")
            .with_secondary_label(patient.name.as_str());
        let medications = Chip::new(next_row(MENU_TWO_LINE_CHIP_HEIGHT_PX), "Medikamente")
            .with_secondary_label(patient.medications_joined());
        let measurements = Chip::new(next_row(MENU_CHIP_HEIGHT_PX), "Aktive Messungen")
            .with_variant(ChipVariant::Primary)
            .with_action(Action::NavigateToPage(PageId::Vitals));

        Self {
            bounds,
            palette,
            header,
            chips: [personal, medications, measurements],
            dirty: true,
        }
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }
}

impl Page for MenuPage {
    fn id(&self) -> PageId {
        PageId::Menu
    }

    fn title(&self) -> &str {
        "Menu"
    }

    fn on_activate(&mut self) {
        self.chips.iter_mut().for_each(Chip::reset);
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        for chip in self.chips.iter_mut() {
            match chip.handle_touch(event) {
                TouchResult::Action(action) => return Some(action),
                TouchResult::Handled => return None,
                TouchResult::NotHandled => {}
            }
        }
        None
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        self.header.draw(display)?;
        for chip in &self.chips {
            chip.draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.chips.iter().any(|chip| chip.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.chips.iter_mut().for_each(|chip| chip.mark_clean());
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
