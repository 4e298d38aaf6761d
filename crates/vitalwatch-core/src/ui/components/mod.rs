//! UI components library

pub mod chip;
pub mod heart_rate_graph;
pub mod text;

pub use chip::{Chip, ChipVariant};
pub use heart_rate_graph::HeartRateGraph;
pub use text::{Label, TextSize};
