//! Configuration type definitions
//!
//! The clock has no user-tunable machine options, so configuration is
//! compiled in: plain `Copy` structs with defaults matching the
//! reference 320x240 device. Render and input routines take these by
//! reference, which also lets tests vary the geometry.

use crate::face;
use crate::geometry::{Point, TAPER_RATIO};

/// Clock face geometry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Pivot shared by all hands
    pub center: Point,
    /// Outer ring radius in pixels
    pub radius: u32,
    /// Annulus thickness left after the inner overpaint
    pub ring_thickness: u32,
    /// Radius of the disk cleared before numerals and hands each tick
    pub inner_clear_radius: u32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            center: face::FACE_CENTER,
            radius: face::FACE_RADIUS,
            ring_thickness: face::RING_THICKNESS,
            inner_clear_radius: face::INNER_CLEAR_RADIUS,
        }
    }
}

/// Hand lengths and taper
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandConfig {
    pub minute_len: f32,
    pub hour_len: f32,
    pub second_len: f32,
    /// Length-to-base-half-width ratio for the triangle hands
    pub taper: f32,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            minute_len: 90.0,
            hour_len: 65.0,
            second_len: 93.0,
            taper: TAPER_RATIO,
        }
    }
}

/// Button sampling timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputConfig {
    /// Quiescent window after an accepted edge, per button
    pub debounce_ms: u32,
    /// Editor poll interval when no key is pressed
    pub poll_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            poll_ms: 100,
        }
    }
}

/// Render loop cadence and display settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    /// Refresh interval, ~10 Hz
    pub tick_ms: u32,
    /// Backlight level in [0.0, 1.0], restored on every display rebuild
    pub backlight: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            backlight: 1.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    pub face: FaceConfig,
    pub hands: HandConfig,
    pub input: InputConfig,
    pub render: RenderConfig,
}
