//! Desktop simulator for the vitalwatch emergency watch UI.
//!
//! Renders vitalwatch-core pages in an SDL2 window via `embedded-graphics-simulator`,
//! populated with the mocked patient record.
//!
//! # Key bindings
//!
//! | Key         | Action                       |
//! |-------------|------------------------------|
//! | 1           | Incoming emergency           |
//! | 2           | Dashboard                    |
//! | 3           | Patient data menu            |
//! | 4           | Heart-rate details           |
//! | Backspace/← | Dismiss (go back)            |
//! | Q/Esc       | Quit                         |
//!
//! Mouse clicks are forwarded as touch presses. Dragging the mouse to the
//! right dismisses the current screen, like the swipe gesture on the watch;
//! other drags are ignored.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{debug, error, info};

use vitalwatch_core::pages::PageManager;
use vitalwatch_core::patient::PatientRepository;
use vitalwatch_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, PageId, TouchEvent, TouchPoint};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Minimum horizontal travel (display pixels) for a drag to count as a swipe.
const SWIPE_MIN_DX: i32 = 60;

/// Maximum vertical drift allowed during a swipe.
const SWIPE_MAX_DY: i32 = 40;

/// Maximum travel on either axis for a press-and-release to count as a tap.
const TAP_MAX_TRAVEL: i32 = 10;

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
    )
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

/// Turn a completed mouse gesture into a touch event.
///
/// A mostly horizontal drag to the right dismisses the screen and a short
/// press is a tap at the release position. Any other drag is ignored.
fn gesture_to_touch(start: Point, end: Point) -> Option<TouchEvent> {
    let delta = end - start;
    if delta.x > SWIPE_MIN_DX && delta.y.abs() < SWIPE_MAX_DY {
        Some(TouchEvent::SwipeDismiss)
    } else if delta.x.abs() <= TAP_MAX_TRAVEL && delta.y.abs() <= TAP_MAX_TRAVEL {
        Some(TouchEvent::Press(touch_point(end)))
    } else {
        None
    }
}

/// Map an SDL keycode to a page navigation request.
fn keycode_to_page(keycode: Keycode) -> Option<PageId> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(PageId::IncomingEmergency),
        Keycode::Num2 | Keycode::Kp2 => Some(PageId::Dashboard),
        Keycode::Num3 | Keycode::Kp3 => Some(PageId::Menu),
        Keycode::Num4 | Keycode::Kp4 => Some(PageId::Vitals),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting vitalwatch simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: 1=Alert  2=Dashboard  3=Menu  4=Vitals  Backspace=Back  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("vitalwatch", &output_settings);

    let patient = PatientRepository::mock_patient();
    info!("Mock patient: {}", patient.name);
    let mut pages = PageManager::for_patient(&patient, screen_bounds());

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = pages.draw(&mut display) {
        error!("Draw error: {:?}", e);
    }
    window.update(&display);

    let mut drag_start: Option<Point> = None;

    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::Backspace | Keycode::Left => {
                        if pages.handle_touch(TouchEvent::SwipeDismiss).is_some() {
                            info!("Dismissed, now on {:?}", pages.current_page_id());
                        }
                    }
                    other => {
                        if let Some(target) = keycode_to_page(other) {
                            info!("Jumping to {:?}", target);
                            pages.navigate_to(target);
                        }
                    }
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    drag_start = Some(point);
                }

                SimulatorEvent::MouseMove { point } => {
                    if drag_start.is_some() {
                        pages.handle_touch(TouchEvent::Drag(touch_point(point)));
                    }
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    let start = drag_start.take().unwrap_or(point);
                    match gesture_to_touch(start, point) {
                        Some(touch) => {
                            if let Some(action) = pages.handle_touch(touch) {
                                let page = pages.current_page_id();
                                info!("Touch → {:?}, now on {:?}", action, page);
                            }
                        }
                        None => debug!("Ignoring drag from {:?} to {:?}", start, point),
                    }
                }

                _ => {}
            }
        }

        // --- Page update tick ---------------------------------------------
        pages.update();

        // --- Render -------------------------------------------------------
        if let Err(e) = pages.draw_dirty(&mut display) {
            error!("Draw error: {:?}", e);
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
