//! LCD setup and the drawing surface implementation
//!
//! The panel is a 240x320 ST7789 behind SPI, mounted landscape, so the
//! firmware rotates it into the 320x240 space the core draws in.

pub mod surface;

pub use surface::LcdSurface;

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};

/// Scratch buffer for the SPI display interface
pub const DISPLAY_BUF_LEN: usize = 1024;

pub type Lcd<'a> = mipidsi::Display<
    SpiInterface<'a, ExclusiveDevice<Spi<'a, SPI0, Blocking>, Output<'a>, NoDelay>, Output<'a>>,
    ST7789,
    NoResetPin,
>;

/// Bring up the panel
///
/// The reset line is tied to RUN on this board, so init relies on the
/// software reset command.
pub fn setup_lcd<'a>(
    spi: Spi<'a, SPI0, Blocking>,
    cs: Output<'a>,
    dc: Output<'a>,
    buf: &'a mut [u8],
) -> Lcd<'a> {
    let spi_dev = ExclusiveDevice::new(spi, cs, NoDelay).unwrap();
    let di = SpiInterface::new(spi_dev, dc, buf);
    let mut delay = embassy_time::Delay;

    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut delay)
        .unwrap()
}
