//! LTR-559 light and proximity sensor
//!
//! Lux conversion follows the vendor's segmented channel-ratio
//! coefficients; proximity is the raw 11-bit count.

use gnomon_core::sensor::LightReading;

/// Fixed I2C address
pub const ADDR: u8 = 0x23;

/// PART_ID: part number 0x09, revision 0x02
const PART_ID: u8 = 0x92;
/// MANUFACTURER_ID
const MANUFACTURER_ID: u8 = 0x05;

/// LTR-559 registers
#[allow(dead_code)]
mod reg {
    pub const ALS_CONTROL: u8 = 0x80;
    pub const PS_CONTROL: u8 = 0x81;
    pub const PS_LED: u8 = 0x82;
    pub const PS_N_PULSES: u8 = 0x83;
    pub const PS_MEAS_RATE: u8 = 0x84;
    pub const ALS_MEAS_RATE: u8 = 0x85;
    pub const PART_ID: u8 = 0x86;
    pub const MANUFACTURER_ID: u8 = 0x87;
    pub const ALS_DATA: u8 = 0x88; // CH1 lo/hi, CH0 lo/hi
    pub const ALS_PS_STATUS: u8 = 0x8C;
    pub const PS_DATA: u8 = 0x8D;
}

/// ALS active, 4x gain
const ALS_CONTROL_ACTIVE_4X: u8 = 0b0_010_0_1;
/// PS active
const PS_CONTROL_ACTIVE: u8 = 0x03;
/// 50 ms integration, 50 ms repeat rate
const ALS_RATE_50MS: u8 = 0b001_000;
/// 100 ms proximity repeat rate
const PS_RATE_100MS: u8 = 0x02;

/// Gain and integration the lux conversion must match
const ALS_GAIN: f32 = 4.0;
const ALS_INTEGRATION_MS: f32 = 50.0;

/// Segmented lux coefficients, indexed by channel ratio band
const CH0_COEFF: [f32; 4] = [17743.0, 42785.0, 5926.0, 0.0];
const CH1_COEFF: [f32; 4] = [-11059.0, 19548.0, -1185.0, 0.0];

/// Errors that can occur with the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error
    Bus(E),
    /// Device responded with an unexpected part ID (likely absent)
    BadPartId(u8),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

/// Convert the two ALS channels to lux
///
/// The coefficient band comes from the CH1 share of the total count;
/// band 3 (heavily infrared) has zero coefficients and reads as zero.
pub fn lux_from_channels(ch0: u16, ch1: u16) -> f32 {
    let sum = ch0 as f32 + ch1 as f32;
    if sum == 0.0 {
        return 0.0;
    }
    let ratio = ch1 as f32 * 100.0 / sum;
    let band = if ratio < 45.0 {
        0
    } else if ratio < 64.0 {
        1
    } else if ratio < 85.0 {
        2
    } else {
        3
    };
    let lux = (ch0 as f32 * CH0_COEFF[band] - ch1 as f32 * CH1_COEFF[band])
        / (ALS_INTEGRATION_MS / 100.0)
        / ALS_GAIN
        / 10_000.0;
    if lux < 0.0 {
        0.0
    } else {
        lux
    }
}

/// LTR-559 driver
pub struct Ltr559<I2C> {
    i2c: I2C,
}

impl<I2C> Ltr559<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Probe the chip and start ALS and PS sampling
    pub async fn new(i2c: I2C) -> Result<Self, Error<I2C::Error>> {
        let mut dev = Self { i2c };

        let part = dev.read_reg(reg::PART_ID).await?;
        if part != PART_ID {
            return Err(Error::BadPartId(part));
        }
        let manufacturer = dev.read_reg(reg::MANUFACTURER_ID).await?;
        if manufacturer != MANUFACTURER_ID {
            return Err(Error::BadPartId(manufacturer));
        }

        dev.write_reg(reg::ALS_MEAS_RATE, ALS_RATE_50MS).await?;
        dev.write_reg(reg::PS_MEAS_RATE, PS_RATE_100MS).await?;
        dev.write_reg(reg::ALS_CONTROL, ALS_CONTROL_ACTIVE_4X).await?;
        dev.write_reg(reg::PS_CONTROL, PS_CONTROL_ACTIVE).await?;
        Ok(dev)
    }

    /// Read one lux/proximity sample
    pub async fn read(&mut self) -> Result<LightReading, Error<I2C::Error>> {
        let mut als = [0u8; 4];
        self.i2c.write_read(ADDR, &[reg::ALS_DATA], &mut als).await?;
        let ch1 = u16::from_le_bytes([als[0], als[1]]);
        let ch0 = u16::from_le_bytes([als[2], als[3]]);

        let mut ps = [0u8; 2];
        self.i2c.write_read(ADDR, &[reg::PS_DATA], &mut ps).await?;
        let proximity = u16::from_le_bytes([ps[0], ps[1]]) & 0x07FF;

        Ok(LightReading {
            proximity,
            lux: lux_from_channels(ch0, ch1),
        })
    }

    async fn read_reg(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(ADDR, &[register], &mut buf).await?;
        Ok(buf[0])
    }

    async fn write_reg(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(ADDR, &[register, value]).await?;
        Ok(())
    }
}
