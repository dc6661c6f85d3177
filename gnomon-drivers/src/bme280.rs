//! BME280 atmospheric sensor
//!
//! I2C driver using the Bosch integer compensation formulas, so no
//! float math happens until the final reading conversion.

use gnomon_core::sensor::AtmoReading;

/// Default I2C address (SDO low); 0x77 with SDO high
pub const PRIMARY_ADDR: u8 = 0x76;

/// Expected chip ID
const CHIP_ID: u8 = 0x60;

/// BME280 registers
#[allow(dead_code)]
mod reg {
    pub const CHIP_ID: u8 = 0xD0;
    pub const RESET: u8 = 0xE0;
    pub const CTRL_HUM: u8 = 0xF2;
    pub const STATUS: u8 = 0xF3;
    pub const CTRL_MEAS: u8 = 0xF4;
    pub const CONFIG: u8 = 0xF5;
    pub const DATA_START: u8 = 0xF7;
    pub const CALIB_TP_START: u8 = 0x88;
    pub const CALIB_H1: u8 = 0xA1;
    pub const CALIB_H2_START: u8 = 0xE1;
}

/// ctrl_meas: 1x temperature and pressure oversampling, normal mode
const CTRL_MEAS_NORMAL_X1: u8 = 0b001_001_11;
/// ctrl_hum: 1x humidity oversampling
const CTRL_HUM_X1: u8 = 0x01;
/// config: 250 ms standby, filter off
const CONFIG_STANDBY_250MS: u8 = 0b011_000_00;

/// Errors that can occur with the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error
    Bus(E),
    /// Device responded with an unexpected chip ID (likely absent)
    BadChipId(u8),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Bus(e)
    }
}

/// Factory calibration, read once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Calibration {
    dig_t1: u16,
    dig_t2: i16,
    dig_t3: i16,
    dig_p1: u16,
    dig_p2: i16,
    dig_p3: i16,
    dig_p4: i16,
    dig_p5: i16,
    dig_p6: i16,
    dig_p7: i16,
    dig_p8: i16,
    dig_p9: i16,
    dig_h1: u8,
    dig_h2: i16,
    dig_h3: u8,
    dig_h4: i16,
    dig_h5: i16,
    dig_h6: i8,
}

impl Calibration {
    /// Parse the two calibration blocks: 26 bytes from 0x88 (with H1 at
    /// the tail position 0xA1) and 7 bytes from 0xE1.
    fn parse(tp: &[u8; 26], h: &[u8; 7]) -> Self {
        let u16_le = |lo: u8, hi: u8| u16::from_le_bytes([lo, hi]);
        let i16_le = |lo: u8, hi: u8| i16::from_le_bytes([lo, hi]);
        Self {
            dig_t1: u16_le(tp[0], tp[1]),
            dig_t2: i16_le(tp[2], tp[3]),
            dig_t3: i16_le(tp[4], tp[5]),
            dig_p1: u16_le(tp[6], tp[7]),
            dig_p2: i16_le(tp[8], tp[9]),
            dig_p3: i16_le(tp[10], tp[11]),
            dig_p4: i16_le(tp[12], tp[13]),
            dig_p5: i16_le(tp[14], tp[15]),
            dig_p6: i16_le(tp[16], tp[17]),
            dig_p7: i16_le(tp[18], tp[19]),
            dig_p8: i16_le(tp[20], tp[21]),
            dig_p9: i16_le(tp[22], tp[23]),
            dig_h1: tp[25],
            dig_h2: i16_le(h[0], h[1]),
            dig_h3: h[2],
            // H4 and H5 share the nibbles of 0xE5; the whole-byte halves
            // are signed
            dig_h4: ((h[3] as i8 as i16) << 4) | (h[4] & 0x0F) as i16,
            dig_h5: ((h[5] as i8 as i16) << 4) | (h[4] >> 4) as i16,
            dig_h6: h[6] as i8,
        }
    }

    /// Returns t_fine and temperature in 0.01 degC
    fn compensate_temperature(&self, adc_t: i32) -> (i32, i32) {
        let var1 = (((adc_t >> 3) - ((self.dig_t1 as i32) << 1)) * (self.dig_t2 as i32)) >> 11;
        let var2 = (((((adc_t >> 4) - (self.dig_t1 as i32))
            * ((adc_t >> 4) - (self.dig_t1 as i32)))
            >> 12)
            * (self.dig_t3 as i32))
            >> 14;
        let t_fine = var1 + var2;
        (t_fine, (t_fine * 5 + 128) >> 8)
    }

    /// Returns pressure in Pa as Q24.8
    fn compensate_pressure(&self, adc_p: i32, t_fine: i32) -> u32 {
        let mut var1 = (t_fine as i64) - 128_000;
        let mut var2 = var1 * var1 * (self.dig_p6 as i64);
        var2 += (var1 * (self.dig_p5 as i64)) << 17;
        var2 += (self.dig_p4 as i64) << 35;
        var1 = ((var1 * var1 * (self.dig_p3 as i64)) >> 8) + ((var1 * (self.dig_p2 as i64)) << 12);
        var1 = (((1i64 << 47) + var1) * (self.dig_p1 as i64)) >> 33;
        if var1 == 0 {
            // Avoid dividing by zero with a blank calibration
            return 0;
        }
        let mut p = 1_048_576 - adc_p as i64;
        p = (((p << 31) - var2) * 3125) / var1;
        let var1 = ((self.dig_p9 as i64) * (p >> 13) * (p >> 13)) >> 25;
        let var2 = ((self.dig_p8 as i64) * p) >> 19;
        p = ((p + var1 + var2) >> 8) + ((self.dig_p7 as i64) << 4);
        p as u32
    }

    /// Returns relative humidity in %RH as Q22.10
    ///
    /// Intermediates run in 64 bits; the 32-bit formulation overflows
    /// at full-scale ADC readings.
    fn compensate_humidity(&self, adc_h: i32, t_fine: i32) -> u32 {
        let v = (t_fine - 76_800) as i64;
        let a = ((adc_h as i64) << 14) - ((self.dig_h4 as i64) << 20)
            - (self.dig_h5 as i64) * v
            + 16_384;
        let b = ((((v * (self.dig_h6 as i64)) >> 10)
            * (((v * (self.dig_h3 as i64)) >> 11) + 32_768))
            >> 10)
            + 2_097_152;
        let v = (a >> 15) * ((b * (self.dig_h2 as i64) + 8_192) >> 14);
        let v = v - (((((v >> 15) * (v >> 15)) >> 7) * (self.dig_h1 as i64)) >> 4);
        (v.clamp(0, 419_430_400) >> 12) as u32
    }
}

/// BME280 driver
pub struct Bme280<I2C> {
    i2c: I2C,
    address: u8,
    calib: Calibration,
}

impl<I2C> Bme280<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Probe the chip, load calibration and start normal-mode sampling
    pub async fn new(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        let mut dev = Self {
            i2c,
            address,
            calib: Calibration::default(),
        };

        let id = dev.read_reg(reg::CHIP_ID).await?;
        if id != CHIP_ID {
            return Err(Error::BadChipId(id));
        }

        let mut tp = [0u8; 26];
        dev.i2c
            .write_read(dev.address, &[reg::CALIB_TP_START], &mut tp)
            .await?;
        let mut h = [0u8; 7];
        dev.i2c
            .write_read(dev.address, &[reg::CALIB_H2_START], &mut h)
            .await?;
        dev.calib = Calibration::parse(&tp, &h);

        // ctrl_hum must be written before ctrl_meas to take effect
        dev.write_reg(reg::CTRL_HUM, CTRL_HUM_X1).await?;
        dev.write_reg(reg::CONFIG, CONFIG_STANDBY_250MS).await?;
        dev.write_reg(reg::CTRL_MEAS, CTRL_MEAS_NORMAL_X1).await?;
        Ok(dev)
    }

    /// Read one compensated sample
    pub async fn read(&mut self) -> Result<AtmoReading, Error<I2C::Error>> {
        // Burst read keeps pressure/temperature/humidity from one
        // measurement cycle together.
        let mut data = [0u8; 8];
        self.i2c
            .write_read(self.address, &[reg::DATA_START], &mut data)
            .await?;

        let adc_p = ((data[0] as i32) << 12) | ((data[1] as i32) << 4) | ((data[2] as i32) >> 4);
        let adc_t = ((data[3] as i32) << 12) | ((data[4] as i32) << 4) | ((data[5] as i32) >> 4);
        let adc_h = ((data[6] as i32) << 8) | (data[7] as i32);

        let (t_fine, temp_x100) = self.calib.compensate_temperature(adc_t);
        let pressure_q8 = self.calib.compensate_pressure(adc_p, t_fine);
        let humidity_q10 = self.calib.compensate_humidity(adc_h, t_fine);

        Ok(AtmoReading {
            temperature_c: temp_x100 as f32 / 100.0,
            pressure_hpa: pressure_q8 as f32 / 256.0 / 100.0,
            humidity_pct: humidity_q10 as f32 / 1024.0,
        })
    }

    async fn read_reg(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .await?;
        Ok(buf[0])
    }

    async fn write_reg(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(self.address, &[register, value]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Calibration values from the Bosch datasheet worked example
    fn datasheet_calib() -> Calibration {
        Calibration {
            dig_t1: 27504,
            dig_t2: 26435,
            dig_t3: -1000,
            dig_p1: 36477,
            dig_p2: -10685,
            dig_p3: 3024,
            dig_p4: 2855,
            dig_p5: 140,
            dig_p6: -7,
            dig_p7: 15500,
            dig_p8: -14600,
            dig_p9: 6000,
            ..Calibration::default()
        }
    }

    #[test]
    fn test_temperature_compensation_datasheet_example() {
        let calib = datasheet_calib();
        let (t_fine, t) = calib.compensate_temperature(519888);
        assert_eq!(t_fine, 128422);
        assert_eq!(t, 2508); // 25.08 degC
    }

    #[test]
    fn test_pressure_compensation_datasheet_example() {
        let calib = datasheet_calib();
        let (t_fine, _) = calib.compensate_temperature(519888);
        let p = calib.compensate_pressure(415148, t_fine);
        // ~100653 Pa at q24.8
        let pa = p / 256;
        assert!((100_640..=100_670).contains(&pa), "pa = {}", pa);
    }

    #[test]
    fn test_pressure_zero_calibration_does_not_divide_by_zero() {
        let calib = Calibration::default();
        assert_eq!(calib.compensate_pressure(415148, 128422), 0);
    }

    #[test]
    fn test_humidity_stays_in_percent_range() {
        let calib = Calibration {
            dig_h1: 75,
            dig_h2: 362,
            dig_h3: 0,
            dig_h4: 315,
            dig_h5: 50,
            dig_h6: 30,
            ..datasheet_calib()
        };
        for adc_h in [0, 20000, 40000, 65535] {
            let h = calib.compensate_humidity(adc_h, 128422);
            assert!(h <= 100 * 1024 + 1024, "adc_h {} -> {}", adc_h, h);
        }
    }

    #[test]
    fn test_humidity_full_scale_saturates_at_100_percent() {
        // adc_h = 65535 pushes the raw value past the upper clamp
        let calib = Calibration {
            dig_h1: 75,
            dig_h2: 362,
            dig_h3: 0,
            dig_h4: 315,
            dig_h5: 50,
            dig_h6: 30,
            ..datasheet_calib()
        };
        assert_eq!(calib.compensate_humidity(65535, 128422), 100 * 1024);
    }

    #[test]
    fn test_calibration_h4_h5_nibble_weave() {
        // E4=0x12, E5=0x3A, E6=0x45:
        //   H4 = 0x12 << 4 | 0xA = 298, H5 = 0x45 << 4 | 0x3 = 1107
        let tp = [0u8; 26];
        let h = [0, 0, 0, 0x12, 0x3A, 0x45, 0];
        let calib = Calibration::parse(&tp, &h);
        assert_eq!(calib.dig_h4, 0x12A);
        assert_eq!(calib.dig_h5, 0x453);
    }

    #[test]
    fn test_calibration_little_endian_words() {
        let mut tp = [0u8; 26];
        tp[0] = 0x70; // dig_t1 lo
        tp[1] = 0x6B; // dig_t1 hi -> 0x6B70 = 27504
        tp[2] = 0x43;
        tp[3] = 0x67; // dig_t2 = 0x6743 = 26435
        tp[25] = 75; // dig_h1 sits at 0xA1, after a gap byte
        let calib = Calibration::parse(&tp, &[0u8; 7]);
        assert_eq!(calib.dig_t1, 27504);
        assert_eq!(calib.dig_t2, 26435);
        assert_eq!(calib.dig_h1, 75);
    }

    #[test]
    fn test_normal_mode_control_bytes() {
        // osrs_t = x1, osrs_p = x1, mode = normal
        assert_eq!(CTRL_MEAS_NORMAL_X1, 0x27);
        assert_eq!(CTRL_HUM_X1 & 0b111, 0b001);
    }
}
