//! Gnomon - Analog/Digital Desk Clock Firmware
//!
//! Main firmware binary for RP2040-based boards with a 320x240 SPI
//! LCD, five front-panel buttons and an I2C environmental sensor
//! stick. All clock logic lives in `gnomon-core`; this binary wires it
//! to the hardware.
//!
//! Named after the gnomon, the shadow-casting arm of a sundial -
//! the oldest clock hand there is.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::rtc::Rtc as HwRtc;
use embassy_rp::spi::{self, Spi};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use gnomon_core::config::ClockConfig;
use gnomon_core::render::draw_sensor_missing;
use gnomon_core::traits::Surface;

use crate::bus::SharedI2c;
use crate::buttons::Buttons;
use crate::rtc::BoardRtc;
use crate::sensors::Sensors;

mod bus;
mod buttons;
mod display;
mod rtc;
mod sensors;
mod ui;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// Scratch buffer for the SPI display interface (must live forever)
static DISPLAY_BUF: StaticCell<[u8; display::DISPLAY_BUF_LEN]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Gnomon firmware starting...");

    let p = embassy_rp::init(Default::default());
    let cfg = ClockConfig::default();

    // LCD on SPI0: DC=GPIO16, CS=GPIO17, SCK=GPIO18, MOSI=GPIO19
    let mut spi_cfg = spi::Config::default();
    spi_cfg.frequency = 62_500_000;
    let lcd_spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_cfg);
    let lcd_cs = Output::new(p.PIN_17, Level::High);
    let lcd_dc = Output::new(p.PIN_16, Level::Low);
    let lcd = display::setup_lcd(lcd_spi, lcd_cs, lcd_dc, DISPLAY_BUF.init([0; display::DISPLAY_BUF_LEN]));

    // Backlight on GPIO20, PWM slice 2 channel A
    let mut bl_cfg = PwmConfig::default();
    bl_cfg.top = 0xFFFF;
    bl_cfg.compare_a = 0;
    let backlight = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, bl_cfg.clone());

    let mut surface = display::LcdSurface::new(lcd, backlight, bl_cfg);
    info!("Display initialized");

    // Front-panel buttons, active-low
    let buttons = Buttons {
        up: Input::new(p.PIN_15, Pull::Up),
        down: Input::new(p.PIN_14, Pull::Up),
        next: Input::new(p.PIN_13, Pull::Up),
        prev: Input::new(p.PIN_12, Pull::Up),
        set: Input::new(p.PIN_11, Pull::Up),
    };

    let mut board_rtc = BoardRtc::new(HwRtc::new(p.RTC));

    // Sensor stick on I2C0: SDA=GPIO4, SCL=GPIO5
    let sensor_i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    let sensor_bus = RefCell::new(sensor_i2c);

    let mut sensors = match Sensors::probe(
        SharedI2c::new(&sensor_bus),
        SharedI2c::new(&sensor_bus),
    )
    .await
    {
        Some(s) => s,
        None => {
            error!("Multi-sensor stick missing, halting");
            surface.set_backlight(cfg.render.backlight).unwrap();
            draw_sensor_missing(&mut surface).unwrap();
            loop {
                Timer::after_secs(60).await;
            }
        }
    };
    info!("Sensors online");

    ui::run(&mut surface, &mut board_rtc, &buttons, &mut sensors, &cfg).await
}
