//! Static clock face layout
//!
//! Numeral anchors and ring parameters for the reference 320x240
//! device. The face geometry never changes at runtime, so anchors are
//! precomputed constants rather than per-frame derivations. This module
//! holds data only; drawing lives in [`crate::render`].

use crate::geometry::Point;

/// Pivot shared by all hands
pub const FACE_CENTER: Point = Point::new(212, 132);

/// Outer ring radius in pixels
pub const FACE_RADIUS: u32 = 105;

/// Annulus thickness left after the inner overpaint
pub const RING_THICKNESS: u32 = 8;

/// Radius of the disk cleared before numerals and hands each tick
pub const INNER_CLEAR_RADIUS: u32 = 93;

/// Fine ticks: minute markers, 60 segments
pub const FINE_TICK_STEP_DEG: u16 = 6;

/// Coarse ticks: hour markers, 12 segments
pub const COARSE_TICK_STEP_DEG: u16 = 30;

/// A face numeral and its pixel anchor near the ring
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Numeral {
    pub label: &'static str,
    pub anchor: Point,
}

const fn numeral(label: &'static str, x: i32, y: i32) -> Numeral {
    Numeral {
        label,
        anchor: Point::new(x, y),
    }
}

/// The 12 numerals, anchored at their 30-degree-multiple positions
pub static NUMERALS: [Numeral; 12] = [
    numeral("1", 242, 57),
    numeral("2", 270, 82),
    numeral("3", 280, 120),
    numeral("4", 270, 162),
    numeral("5", 242, 188),
    numeral("6", 205, 198),
    numeral("7", 168, 188),
    numeral("8", 142, 162),
    numeral("9", 130, 120),
    numeral("10", 140, 82),
    numeral("11", 172, 57),
    numeral("12", 205, 49),
];
