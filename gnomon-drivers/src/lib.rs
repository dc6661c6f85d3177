//! Environmental sensor drivers
//!
//! Register-level I2C drivers for the two sensors on the multi-sensor
//! stick:
//!
//! - BME280 atmospheric sensor (temperature, pressure, humidity)
//! - LTR-559 light/proximity sensor
//!
//! Both probe their chip ID during construction, so a missing stick is
//! detected once at startup.

#![no_std]
#![deny(unsafe_code)]

pub mod bme280;
pub mod ltr559;
