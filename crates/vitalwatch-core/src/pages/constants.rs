//! Shared layout constants for the watch screens
//!
//! Vertical positions are offsets from the top of the page and name the
//! vertical middle of a text line unless they say otherwise. The face is
//! round, so rows near the top and bottom are kept narrow.

// ============================================================================
// Incoming emergency
// ============================================================================

/// Center of the warning triangle
pub(super) const ALERT_ICON_CENTER_Y: i32 = 52;

/// Side length of the warning triangle in pixels
pub(super) const ALERT_ICON_SIZE_PX: i32 = 28;

pub(super) const ALERT_TITLE_Y: i32 = 88;

pub(super) const ALERT_SUBTITLE_Y: i32 = 114;

/// Top edge of the "Anzeigen" button
pub(super) const ALERT_BUTTON_TOP_Y: i32 = 140;

/// The accept button spans 70% of the face width
pub(super) const ALERT_BUTTON_WIDTH_PERCENT: u32 = 70;

pub(super) const ALERT_BUTTON_HEIGHT_PX: u32 = 40;

// ============================================================================
// Dashboard
// ============================================================================

pub(super) const DASHBOARD_HEADER_Y: i32 = 24;
pub(super) const DASHBOARD_NAME_Y: i32 = 42;
pub(super) const DASHBOARD_DISEASES_CAPTION_Y: i32 = 62;
pub(super) const DASHBOARD_DISEASES_Y: i32 = 77;
pub(super) const DASHBOARD_EMERGENCY_CAPTION_Y: i32 = 96;
pub(super) const DASHBOARD_EMERGENCY_Y: i32 = 112;
pub(super) const DASHBOARD_BLOOD_TYPE_Y: i32 = 134;
pub(super) const DASHBOARD_AGE_Y: i32 = 148;

/// Top edge of the mini heart-rate graph
pub(super) const DASHBOARD_GRAPH_TOP_Y: i32 = 126;

/// Horizontal gap between the blood/age column and the mini graph
pub(super) const DASHBOARD_COLUMN_GAP_PX: i32 = 12;

/// Top edge of the "Details & Aktionen" chip
pub(super) const DASHBOARD_CHIP_TOP_Y: i32 = 168;

pub(super) const DASHBOARD_CHIP_WIDTH_PX: u32 = 160;

pub(super) const DASHBOARD_CHIP_HEIGHT_PX: u32 = 32;

// ============================================================================
// Menu
// ============================================================================

pub(super) const MENU_HEADER_Y: i32 = 36;

/// Top edge of the first chip
pub(super) const MENU_FIRST_CHIP_TOP_Y: i32 = 54;

pub(super) const MENU_CHIP_WIDTH_PX: u32 = 190;

/// Height of chips carrying a secondary label
pub(super) const MENU_TWO_LINE_CHIP_HEIGHT_PX: u32 = 46;

pub(super) const MENU_CHIP_HEIGHT_PX: u32 = 40;

pub(super) const MENU_CHIP_GAP_PX: i32 = 6;

// ============================================================================
// Vitals
// ============================================================================

pub(super) const VITALS_TITLE_Y: i32 = 34;

/// Top edge of the framed graph
pub(super) const VITALS_FRAME_TOP_Y: i32 = 48;

/// The graph frame spans 90% of the face width
pub(super) const VITALS_FRAME_WIDTH_PERCENT: u32 = 90;

/// Inner padding of the graph frame
pub(super) const VITALS_FRAME_PADDING_PX: u32 = 4;

/// Space reserved left of the graph for the axis labels
pub(super) const VITALS_AXIS_LABEL_WIDTH_PX: u32 = 20;

/// Gap between the frame and the current value line
pub(super) const VITALS_CURRENT_VALUE_GAP_PX: i32 = 20;

/// Gap between the current and the highest value line
pub(super) const VITALS_HIGHEST_VALUE_GAP_PX: i32 = 18;
