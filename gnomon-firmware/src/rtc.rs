//! Battery-backed RTC adapter
//!
//! Bridges the RP2040 hardware RTC to the core clock trait. Weekdays
//! are translated between the hardware's Sunday-first encoding and the
//! core's Monday-first indices.

use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime as HwDateTime, DayOfWeek, Rtc as HwRtc, RtcError};
use gnomon_core::time::DateTime;
use gnomon_core::traits::Rtc;

pub struct BoardRtc<'d> {
    inner: HwRtc<'d, RTC>,
}

impl<'d> BoardRtc<'d> {
    pub fn new(inner: HwRtc<'d, RTC>) -> Self {
        Self { inner }
    }
}

impl Rtc for BoardRtc<'_> {
    type Error = RtcError;

    fn now(&mut self) -> Result<DateTime, Self::Error> {
        let t = self.inner.now()?;
        Ok(DateTime {
            year: t.year,
            month: t.month,
            day: t.day,
            weekday: weekday_from_hw(t.day_of_week),
            hour: t.hour,
            minute: t.minute,
            second: t.second,
        })
    }

    fn set(&mut self, dt: &DateTime) -> Result<(), Self::Error> {
        self.inner.set_datetime(HwDateTime {
            year: dt.year,
            month: dt.month,
            day: dt.day,
            day_of_week: weekday_to_hw(dt.weekday),
            hour: dt.hour,
            minute: dt.minute,
            second: dt.second,
        })
    }
}

fn weekday_from_hw(dow: DayOfWeek) -> u8 {
    match dow {
        DayOfWeek::Monday => 0,
        DayOfWeek::Tuesday => 1,
        DayOfWeek::Wednesday => 2,
        DayOfWeek::Thursday => 3,
        DayOfWeek::Friday => 4,
        DayOfWeek::Saturday => 5,
        DayOfWeek::Sunday => 6,
    }
}

fn weekday_to_hw(weekday: u8) -> DayOfWeek {
    match weekday {
        0 => DayOfWeek::Monday,
        1 => DayOfWeek::Tuesday,
        2 => DayOfWeek::Wednesday,
        3 => DayOfWeek::Thursday,
        4 => DayOfWeek::Friday,
        5 => DayOfWeek::Saturday,
        _ => DayOfWeek::Sunday,
    }
}
