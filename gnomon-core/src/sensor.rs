//! Environmental sensor reading types
//!
//! Concrete drivers live in `gnomon-drivers`; the render loop only sees
//! these snapshots.

/// One reading from the atmospheric sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AtmoReading {
    pub temperature_c: f32,
    pub pressure_hpa: f32,
    pub humidity_pct: f32,
}

/// One reading from the light/proximity sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightReading {
    pub proximity: u16,
    pub lux: f32,
}

/// Combined snapshot taken once per render tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    pub atmo: AtmoReading,
    pub light: LightReading,
}
