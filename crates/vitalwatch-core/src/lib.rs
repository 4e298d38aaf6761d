//! Hardware-independent core library for vitalwatch
//!
//! This crate contains all platform-agnostic logic for the vitalwatch
//! emergency wearable mock-up: the waveform projection used by the heart-rate
//! graphs, the mocked patient record, UI primitives, the four screens and the
//! page manager that navigates between them.
//!
//! It is `no_std` with `extern crate alloc` so it compiles on embedded
//! targets as well as desktop hosts (for the simulator and tests).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod pages;
pub mod patient;
pub mod ui;
pub mod waveform;

#[cfg(test)]
pub(crate) mod test_support;
