//! vitalwatch UI system
//!
//! Small UI toolkit for the round watch face:
//! - Core traits for drawable and touchable elements
//! - Color palette
//! - Components (labels, chips, heart-rate graph)

pub mod colors;
pub mod components;
pub mod core;

pub use crate::config::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
pub use self::colors::ColorPalette;
pub use self::components::{Chip, ChipVariant, HeartRateGraph, Label, TextSize};
pub use self::core::{Action, Drawable, PageId, TouchEvent, TouchPoint, TouchResult, Touchable};
