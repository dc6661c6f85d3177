//! Board-agnostic core logic for the Gnomon desk clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Clock hand and tick-ring geometry
//! - Static clock face layout
//! - Time-setting field editor state machine
//! - Debounced button sampling
//! - Date/time types and formatting
//! - Render routines, generic over the display surface trait
//! - Collaborator traits (display surface, real-time clock)
//! - Unit conversion for display strings

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod editor;
pub mod face;
pub mod geometry;
pub mod input;
pub mod render;
pub mod sensor;
pub mod time;
pub mod traits;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;
