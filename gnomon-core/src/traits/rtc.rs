//! Real-time clock trait

use crate::time::DateTime;

/// Trait for the battery-backed real-time clock
///
/// No transactional guarantee beyond last-write-wins, but a write must
/// carry all fields in one call so readers never observe a partially
/// updated time.
pub trait Rtc {
    type Error;

    /// Read the current date and time
    fn now(&mut self) -> Result<DateTime, Self::Error>;

    /// Set the date and time, all fields atomically
    fn set(&mut self, dt: &DateTime) -> Result<(), Self::Error>;
}
