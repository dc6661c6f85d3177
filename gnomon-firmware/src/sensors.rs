//! Sensor stick polling
//!
//! Both drivers are probed once at startup; a failed probe means the
//! stick is unplugged and the firmware shows the error screen instead
//! of a clock. Transient read failures during operation keep the last
//! good snapshot on screen.

use defmt::warn;
use embedded_hal_async::i2c::I2c;

use gnomon_core::sensor::SensorSnapshot;
use gnomon_drivers::bme280::{self, Bme280};
use gnomon_drivers::ltr559::Ltr559;

pub struct Sensors<I2C> {
    atmo: Bme280<I2C>,
    light: Ltr559<I2C>,
    last: SensorSnapshot,
}

impl<I2C: I2c> Sensors<I2C> {
    /// Probe both sensors; `None` means the stick is missing
    pub async fn probe(atmo_i2c: I2C, light_i2c: I2C) -> Option<Self> {
        let atmo = match Bme280::new(atmo_i2c, bme280::PRIMARY_ADDR).await {
            Ok(s) => s,
            Err(_) => {
                warn!("BME280 probe failed");
                return None;
            }
        };
        let light = match Ltr559::new(light_i2c).await {
            Ok(s) => s,
            Err(_) => {
                warn!("LTR-559 probe failed");
                return None;
            }
        };
        Some(Self {
            atmo,
            light,
            last: SensorSnapshot::default(),
        })
    }

    /// Read both sensors, keeping stale values on a failed read
    pub async fn snapshot(&mut self) -> SensorSnapshot {
        match self.atmo.read().await {
            Ok(r) => self.last.atmo = r,
            Err(_) => warn!("BME280 read failed"),
        }
        match self.light.read().await {
            Ok(r) => self.last.light = r,
            Err(_) => warn!("LTR-559 read failed"),
        }
        self.last
    }
}
