//! Page manager with navigation and touch dispatching.
//!
//! Screens form a forward chain (alert -> dashboard -> menu -> vitals).
//! Every forward navigation pushes the previous screen onto a history stack;
//! the swipe-to-dismiss gesture pops it again.

use crate::pages::page::{Page, PageWrapper};
use crate::pages::{DashboardPage, IncomingEmergencyPage, MenuPage, VitalsPage};
use crate::patient::Patient;
use crate::ui::core::{Action, PageId, TouchEvent};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{debug, warn};

/// Maximum number of registered pages
const MAX_PAGES: usize = 4;

/// Maximum depth of the back-navigation history
const MAX_HISTORY: usize = 8;

/// Manages page navigation, rendering, and touch dispatching.
pub struct PageManager {
    pages: Vec<PageWrapper, MAX_PAGES>,
    current_page: PageId,
    navigation_stack: Vec<PageId, MAX_HISTORY>,
    display_bounds: Rectangle,
}

impl PageManager {
    pub fn new(initial_page: PageId, display_bounds: Rectangle) -> Self {
        Self {
            pages: Vec::new(),
            current_page: initial_page,
            navigation_stack: Vec::new(),
            display_bounds,
        }
    }

    /// All four screens for `patient`, starting at the incoming alert
    pub fn for_patient(patient: &Patient, display_bounds: Rectangle) -> Self {
        let mut manager = Self::new(PageId::IncomingEmergency, display_bounds);
        manager.register_page(IncomingEmergencyPage::new(display_bounds).into());
        manager.register_page(DashboardPage::new(display_bounds, patient).into());
        manager.register_page(MenuPage::new(display_bounds, patient).into());
        manager.register_page(VitalsPage::new(display_bounds, patient).into());
        manager.activate_current();
        manager
    }

    /// Register a new page, replacing any page with the same id
    pub fn register_page(&mut self, page: PageWrapper) {
        if let Some(existing) = self.pages.iter_mut().find(|p| p.id() == page.id()) {
            *existing = page;
        } else if let Err(page) = self.pages.push(page) {
            warn!("Page capacity exceeded, dropping {:?}", page.id());
        }
    }

    /// Mark the current page active, e.g. after registering it
    pub fn activate_current(&mut self) {
        if let Some(page) = self.get_current_page_mut() {
            page.on_activate();
        }
    }

    /// Navigate to a specific page.
    ///
    /// Returns `false` (and stays put) if the page is not registered or is
    /// already showing.
    pub fn navigate_to(&mut self, page_id: PageId) -> bool {
        if page_id == self.current_page {
            debug!("Already on {:?}", page_id);
            return false;
        }
        if !self.pages.iter().any(|p| p.id() == page_id) {
            warn!("Cannot navigate to unregistered page {:?}", page_id);
            return false;
        }

        if let Some(current) = self.get_current_page_mut() {
            current.on_deactivate();
        }

        // Forget the oldest entry rather than refusing to navigate
        if self.navigation_stack.is_full() {
            self.navigation_stack.remove(0);
        }
        self.navigation_stack.push(self.current_page).ok();
        self.current_page = page_id;

        if let Some(new_page) = self.get_current_page_mut() {
            debug!("Navigated to {}", new_page.title());
            new_page.on_activate();
        }
        true
    }

    /// Go back to previous page
    pub fn go_back(&mut self) -> bool {
        if let Some(prev_page) = self.navigation_stack.pop() {
            if let Some(current) = self.get_current_page_mut() {
                current.on_deactivate();
            }
            self.current_page = prev_page;
            if let Some(page) = self.get_current_page_mut() {
                debug!("Back to {}", page.title());
                page.on_activate();
            }
            true
        } else {
            debug!("Nothing to go back to");
            false
        }
    }

    /// Whether there is a page to return to
    pub fn can_go_back(&self) -> bool {
        !self.navigation_stack.is_empty()
    }

    /// Apply a navigation action. Returns `true` if the current page changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::NavigateToPage(page_id) => self.navigate_to(page_id),
            Action::GoBack => self.go_back(),
        }
    }

    /// Get mutable reference to current page
    fn get_current_page_mut(&mut self) -> Option<&mut PageWrapper> {
        self.pages.iter_mut().find(|p| p.id() == self.current_page)
    }

    /// Get reference to current page
    fn get_current_page(&self) -> Option<&PageWrapper> {
        self.pages.iter().find(|p| p.id() == self.current_page)
    }

    /// Handle a touch event and apply whatever action it triggers.
    ///
    /// Swipe-to-dismiss is handled here and never reaches the page. Returns
    /// the action that was applied, if any.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        debug!("Processing touch event: {:?}", event);

        let action = if event == TouchEvent::SwipeDismiss {
            Some(Action::GoBack)
        } else if let Some(page) = self.get_current_page_mut() {
            page.handle_touch(event)
        } else {
            debug!("No current page to handle touch");
            None
        };

        match action {
            Some(action) if self.apply(action) => Some(action),
            Some(action) => {
                debug!("Action {:?} had no effect", action);
                None
            }
            None => None,
        }
    }

    /// Update current page state
    pub fn update(&mut self) {
        if let Some(page) = self.get_current_page_mut() {
            page.update();
        }
    }

    /// Draw the current page (full redraw)
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        if let Some(page) = self.get_current_page_mut() {
            page.draw_page(display)?;
            page.mark_clean();
        }
        Ok(())
    }

    /// Draw the current page only if it changed. Returns whether it drew.
    pub fn draw_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        if self.is_dirty() {
            self.draw(display)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check if current page is dirty
    pub fn is_dirty(&self) -> bool {
        self.get_current_page().is_some_and(|page| page.is_dirty())
    }

    /// Get current page ID
    pub fn current_page_id(&self) -> PageId {
        self.current_page
    }

    /// Get display bounds
    pub fn display_bounds(&self) -> Rectangle {
        self.display_bounds
    }
}
