//! Core page abstraction and type-erased wrapper for the screen system.
//!
//! [`Page`] defines the lifecycle, rendering, and interaction contract for
//! every screen on the watch. [`PageWrapper`] is a concrete enum that
//! delegates every [`Page`] method to the inner page type, so the
//! [`PageManager`](super::page_manager::PageManager) can keep all screens in a
//! `heapless::Vec` without trait objects.

use crate::ui::core::{Action, PageId, TouchEvent};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

extern crate alloc;
use alloc::boxed::Box;

use super::{DashboardPage, IncomingEmergencyPage, MenuPage, VitalsPage};

// ---------------------------------------------------------------------------
// Page trait
// ---------------------------------------------------------------------------

/// Trait that all navigable screens must implement.
///
/// The [`PageManager`](super::page_manager::PageManager) calls these methods
/// in a well-defined order:
///
/// 1. **`on_activate`**: once, when the page becomes the active page.
/// 2. **`update`**: once per frame to advance internal state.
/// 3. **`handle_touch`**: when a touch event targets this page.
/// 4. **`draw_page`**: when `is_dirty()` is true.
/// 5. **`on_deactivate`**: once, when navigating away from the page.
pub trait Page {
    /// Unique identifier used for navigation and lookup.
    fn id(&self) -> PageId;

    /// Human-readable title (used in debug logs).
    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Called once when this page is no longer the active page.
    fn on_deactivate(&mut self) {}

    /// Process a touch event and optionally return a navigation [`Action`].
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    /// Advance per-frame state.
    fn update(&mut self) {}

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Bounding rectangle of this page (typically the full screen).
    fn bounds(&self) -> Rectangle;

    /// Whether the page needs redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}

/// Allows a `Box<T>` to be used anywhere a `Page` is expected.
impl<T: Page> Page for Box<T> {
    fn id(&self) -> PageId {
        (**self).id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn on_activate(&mut self) {
        (**self).on_activate()
    }

    fn on_deactivate(&mut self) {
        (**self).on_deactivate()
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        (**self).handle_touch(event)
    }

    fn update(&mut self) {
        (**self).update()
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        (**self).draw_page(display)
    }

    fn bounds(&self) -> Rectangle {
        Page::bounds(&**self)
    }

    fn is_dirty(&self) -> bool {
        Page::is_dirty(&**self)
    }

    fn mark_clean(&mut self) {
        Page::mark_clean(&mut **self)
    }

    fn mark_dirty(&mut self) {
        Page::mark_dirty(&mut **self)
    }
}

// ---------------------------------------------------------------------------
// PageWrapper
// ---------------------------------------------------------------------------

/// Enum-based wrapper that stores one of the concrete screens.
///
/// Each variant boxes its page to keep the enum size uniform regardless of
/// the page's footprint. Adding a screen means adding a variant here and an
/// arm to `with_page!`.
pub enum PageWrapper {
    IncomingEmergency(Box<IncomingEmergencyPage>),
    Dashboard(Box<DashboardPage>),
    Menu(Box<MenuPage>),
    Vitals(Box<VitalsPage>),
}

/// Run `$body` with `$page` bound to the wrapped page.
macro_rules! with_page {
    ($wrapper:expr, $page:ident => $body:expr) => {
        match $wrapper {
            PageWrapper::IncomingEmergency($page) => $body,
            PageWrapper::Dashboard($page) => $body,
            PageWrapper::Menu($page) => $body,
            PageWrapper::Vitals($page) => $body,
        }
    };
}

impl Page for PageWrapper {
    fn id(&self) -> PageId {
        with_page!(self, page => page.id())
    }

    fn title(&self) -> &str {
        with_page!(self, page => page.title())
    }

    fn on_activate(&mut self) {
        with_page!(self, page => page.on_activate())
    }

    fn on_deactivate(&mut self) {
        with_page!(self, page => page.on_deactivate())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        with_page!(self, page => page.handle_touch(event))
    }

    fn update(&mut self) {
        with_page!(self, page => page.update())
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        with_page!(self, page => page.draw_page(display))
    }

    fn bounds(&self) -> Rectangle {
        with_page!(self, page => Page::bounds(page))
    }

    fn is_dirty(&self) -> bool {
        with_page!(self, page => Page::is_dirty(page))
    }

    fn mark_clean(&mut self) {
        with_page!(self, page => Page::mark_clean(page))
    }

    fn mark_dirty(&mut self) {
        with_page!(self, page => Page::mark_dirty(page))
    }
}

impl From<IncomingEmergencyPage> for PageWrapper {
    fn from(page: IncomingEmergencyPage) -> Self {
        PageWrapper::IncomingEmergency(Box::new(page))
    }
}

impl From<DashboardPage> for PageWrapper {
    fn from(page: DashboardPage) -> Self {
        PageWrapper::Dashboard(Box::new(page))
    }
}

impl From<MenuPage> for PageWrapper {
    fn from(page: MenuPage) -> Self {
        PageWrapper::Menu(Box::new(page))
    }
}

impl From<VitalsPage> for PageWrapper {
    fn from(page: VitalsPage) -> Self {
        PageWrapper::Vitals(Box::new(page))
    }
}
