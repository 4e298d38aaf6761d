//! Compile-time configuration for the watch face and vital-sign displays

use crate::waveform::ValueRange;

/// Width of the (round) watch display in pixels
pub const DISPLAY_WIDTH_PX: u16 = 240;

/// Height of the (round) watch display in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;

/// Clinical display range for heart rate in beats per minute.
///
/// Samples outside this range are drawn off the graph surface.
pub const HEART_RATE_RANGE: ValueRange = ValueRange::new_unchecked(50.0, 190.0);

/// Number of most recent heart-rate samples shown on the dashboard preview
pub const PREVIEW_SAMPLE_COUNT: usize = 5;

/// Width of the dashboard mini graph in pixels
pub const PREVIEW_GRAPH_WIDTH_PX: u32 = 50;

/// Height of the dashboard mini graph in pixels
pub const PREVIEW_GRAPH_HEIGHT_PX: u32 = 30;

/// Height of the framed detail graph on the vitals page in pixels
pub const DETAIL_GRAPH_HEIGHT_PX: u32 = 100;

/// Stroke width of heart-rate polylines in pixels
pub const HEART_RATE_STROKE_WIDTH_PX: u32 = 3;
