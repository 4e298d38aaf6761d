//! Placement helpers shared by the screens

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_layout::prelude::{Align, horizontal, vertical};

/// A `size` rectangle centered horizontally in `page`, `top` pixels below its
/// top edge.
pub(super) fn centered_row(page: Rectangle, top: i32, size: Size) -> Rectangle {
    Rectangle::new(Point::new(0, page.top_left.y + top), size).align_to(
        &page,
        horizontal::Center,
        vertical::NoAlignment,
    )
}

/// Width that covers `percent` of the page width
pub(super) fn percent_of_width(page: Rectangle, percent: u32) -> u32 {
    page.size.width * percent / 100
}

/// Absolute point `y` pixels below the top of `page`, at horizontal offset `x`
/// from the page center.
pub(super) fn from_center(page: Rectangle, x: i32, y: i32) -> Point {
    Point::new(page.center().x + x, page.top_left.y + y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(240, 240))
    }

    #[test]
    fn test_centered_row() {
        let row = centered_row(page(), 140, Size::new(168, 40));
        assert_eq!(row, Rectangle::new(Point::new(36, 140), Size::new(168, 40)));
    }

    #[test]
    fn test_centered_row_respects_page_offset() {
        let offset = Rectangle::new(Point::new(10, 20), Size::new(100, 100));
        let row = centered_row(offset, 5, Size::new(50, 10));
        assert_eq!(row, Rectangle::new(Point::new(35, 25), Size::new(50, 10)));
    }

    #[test]
    fn test_percent_of_width() {
        assert_eq!(percent_of_width(page(), 70), 168);
        assert_eq!(percent_of_width(page(), 90), 216);
    }

    #[test]
    fn test_from_center() {
        // Even widths have their center on the left of the two middle pixels
        assert_eq!(from_center(page(), -6, 134), Point::new(113, 134));
    }
}
