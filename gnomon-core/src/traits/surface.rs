//! Display surface trait
//!
//! Abstracts the layered frame buffer of the reference device: two
//! colour planes, a fixed pen palette, filled primitives, text and a
//! backlight. Coordinates are in a fixed 320x240 pixel space.

use crate::geometry::Point;

/// The two colour planes of the layered frame buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// Static face artwork
    Face,
    /// Per-tick overlay (hands, text)
    Overlay,
}

/// The fixed pen palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pen {
    /// Background
    Black,
    /// Warm off-white (253, 240, 213)
    White,
    /// Hour hand red (193, 18, 31)
    Red,
    /// Minute hand / text blue (37, 87, 115)
    Blue,
    /// Editor cursor highlight
    Yellow,
}

/// Trait for the drawing surface
///
/// All primitives are filled. Drawing happens into the composed layers;
/// nothing is visible until [`Surface::flush`] presents the frame, and a
/// flush must complete before the next read of user input.
pub trait Surface {
    type Error;

    /// Select the active layer for subsequent operations
    fn set_layer(&mut self, layer: Layer) -> Result<(), Self::Error>;

    /// Select the pen for subsequent operations
    fn set_pen(&mut self, pen: Pen) -> Result<(), Self::Error>;

    /// Clear the active layer to the current pen
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn line(&mut self, from: Point, to: Point) -> Result<(), Self::Error>;

    fn circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error>;

    fn triangle(&mut self, a: Point, b: Point, c: Point) -> Result<(), Self::Error>;

    fn rect(&mut self, origin: Point, width: u32, height: u32) -> Result<(), Self::Error>;

    /// Draw text wrapped at `wrap` pixels, at an integer `scale`
    fn text(&mut self, text: &str, origin: Point, wrap: u32, scale: u8)
        -> Result<(), Self::Error>;

    /// [`Surface::text`] rotated by `angle_deg` clockwise
    fn text_rotated(
        &mut self,
        text: &str,
        origin: Point,
        wrap: u32,
        scale: u8,
        angle_deg: i16,
    ) -> Result<(), Self::Error>;

    /// Backlight intensity in [0.0, 1.0]
    fn set_backlight(&mut self, level: f32) -> Result<(), Self::Error>;

    /// Present the composed layers
    fn flush(&mut self) -> Result<(), Self::Error>;
}
