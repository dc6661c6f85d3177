//! Date/time value type, weekday math and display formatting

use core::fmt::Write;

use heapless::String;

/// Years below this are treated as an unset clock at startup
pub const MIN_PLAUSIBLE_YEAR: u16 = 2025;

/// Weekday names, index 0 = Monday
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month abbreviations, index 0 = January
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// AM/PM tag for the digital readout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A wall-clock date and time
///
/// `weekday` is 0 = Monday through 6 = Sunday, matching [`DAY_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Sanity check for the startup path: an implausible year means the
    /// clock was never set and the editor runs before normal rendering.
    pub fn is_plausible(&self) -> bool {
        self.year >= MIN_PLAUSIBLE_YEAR
    }

    /// Digital readout, "HH:MM:SS" in 12-hour form
    pub fn hms_string(&self) -> String<12> {
        let (hour, _) = to_12h(self.hour);
        let mut s = String::new();
        let _ = write!(s, "{:02}:{:02}:{:02}", hour, self.minute, self.second);
        s
    }

    /// AM/PM tag for the digital readout
    pub fn meridiem(&self) -> Meridiem {
        to_12h(self.hour).1
    }

    /// Date line, "15 Jun"
    pub fn date_string(&self) -> String<8> {
        let mut s = String::new();
        let month = MONTH_ABBR
            .get(self.month.saturating_sub(1) as usize)
            .unwrap_or(&"???");
        let _ = write!(s, "{} {}", self.day, month);
        s
    }

    pub fn weekday_name(&self) -> &'static str {
        DAY_NAMES.get(self.weekday as usize).unwrap_or(&"???")
    }
}

/// Convert a 24-hour value to 12-hour with AM/PM
pub fn to_12h(hour: u8) -> (u8, Meridiem) {
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let h = hour % 12;
    (if h == 0 { 12 } else { h }, meridiem)
}

/// Day of week for a calendar date, 0 = Monday
///
/// Sakamoto's method, valid for Gregorian dates.
pub fn day_of_week(year: u16, month: u8, day: u8) -> u8 {
    const OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let m = month.clamp(1, 12) as usize;
    let mut y = year;
    if m < 3 {
        y -= 1;
    }
    let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[m - 1] + day as u16) % 7;
    // Sakamoto yields 0 = Sunday; shift to 0 = Monday.
    ((dow + 6) % 7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausibility_threshold() {
        let mut dt = DateTime {
            year: 1970,
            month: 1,
            day: 1,
            weekday: 3,
            hour: 0,
            minute: 0,
            second: 0,
        };
        assert!(!dt.is_plausible());
        dt.year = 2024;
        assert!(!dt.is_plausible());
        dt.year = 2025;
        assert!(dt.is_plausible());
    }

    #[test]
    fn test_12h_conversion() {
        assert_eq!(to_12h(0), (12, Meridiem::Am));
        assert_eq!(to_12h(1), (1, Meridiem::Am));
        assert_eq!(to_12h(11), (11, Meridiem::Am));
        assert_eq!(to_12h(12), (12, Meridiem::Pm));
        assert_eq!(to_12h(13), (1, Meridiem::Pm));
        assert_eq!(to_12h(23), (11, Meridiem::Pm));
    }

    #[test]
    fn test_day_of_week_known_dates() {
        // 2025-01-01 was a Wednesday
        assert_eq!(day_of_week(2025, 1, 1), 2);
        // 2030-06-15 is a Saturday
        assert_eq!(day_of_week(2030, 6, 15), 5);
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(2000, 1, 1), 5);
        // 2028-02-29 (leap day) is a Tuesday
        assert_eq!(day_of_week(2028, 2, 29), 1);
    }

    #[test]
    fn test_formatting() {
        let dt = DateTime {
            year: 2025,
            month: 6,
            day: 15,
            weekday: day_of_week(2025, 6, 15),
            hour: 14,
            minute: 5,
            second: 9,
        };
        assert_eq!(dt.hms_string().as_str(), "02:05:09");
        assert_eq!(dt.meridiem(), Meridiem::Pm);
        assert_eq!(dt.date_string().as_str(), "15 Jun");
        assert_eq!(dt.weekday_name(), "Sunday");
    }
}
