//! Color definitions and palette for the watch face
//!
//! All colors are RGB565 (16-bit). To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Watch face background - pure black to save power on OLED panels
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(0, 0, 0);

/// Chip surface - neutral dark gray
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(48 >> 3, 48 >> 2, 48 >> 3);

/// Pressed chip surface
pub const COLOR_SURFACE_PRESSED: Rgb565 = Rgb565::new(80 >> 3, 80 >> 2, 80 >> 3);

/// Background of the framed detail graph (dark gray at ~20% over black)
pub const COLOR_GRAPH_FRAME: Rgb565 = Rgb565::new(17 >> 3, 17 >> 2, 17 >> 3);

// ============================================================================
// Accent Colors
// ============================================================================

/// Emergency red, used for alerts, the primary action and heart-rate lines
pub const COLOR_ALERT: Rgb565 = Rgb565::new(31, 0, 0);

/// Pressed state of alert-colored elements
pub const COLOR_ALERT_PRESSED: Rgb565 = Rgb565::new(160 >> 3, 0, 0);

/// Cyan brand header
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(0, 63, 31);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary values
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(24, 48, 24);

/// Gray - for captions
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

// ============================================================================
// Color Palette
// ============================================================================

/// Colors shared by every screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Screen background
    pub background: Rgb565,
    /// Chip and panel surface
    pub surface: Rgb565,
    /// Alerts, primary actions and vital-sign lines
    pub alert: Rgb565,
    /// Brand header accent
    pub accent: Rgb565,
    /// Primary text
    pub text_primary: Rgb565,
    /// Captions
    pub text_secondary: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            alert: COLOR_ALERT,
            accent: COLOR_ACCENT,
            text_primary: WHITE,
            text_secondary: GRAY,
        }
    }
}
