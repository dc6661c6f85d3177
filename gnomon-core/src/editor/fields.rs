//! Editor field table and cursor
//!
//! Six ordered slots. Slot 3 is a spacer: it carries no value and is
//! skipped on commit, but stays visitable so the remaining slots keep
//! their positions against the six-slot RTC write shape. Value
//! adjustments clamp, never wrap and never reject, so
//! `min <= value <= max` holds for every editable field at every
//! observable instant.

use crate::time::{day_of_week, DateTime};

/// Number of editor slots, spacer included
pub const FIELD_COUNT: usize = 6;

/// What a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    Month,
    Day,
    Year,
    /// Inert placeholder, never settable, never committed
    Spacer,
    Hour,
    Minute,
}

/// One bounded numeric slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub kind: FieldKind,
    pub value: u16,
    pub min: u16,
    pub max: u16,
}

impl Field {
    const fn new(kind: FieldKind, value: u16, min: u16, max: u16) -> Self {
        Self {
            kind,
            value,
            min,
            max,
        }
    }

    const fn spacer() -> Self {
        Self::new(FieldKind::Spacer, 0, 0, 0)
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self.kind, FieldKind::Spacer)
    }

    /// Saturating increment; no-op on the spacer
    pub fn increase(&mut self) {
        if self.is_spacer() {
            return;
        }
        self.value = (self.value + 1).min(self.max);
    }

    /// Saturating decrement; no-op on the spacer
    pub fn decrease(&mut self) {
        if self.is_spacer() {
            return;
        }
        self.value = self.value.saturating_sub(1).max(self.min);
    }

    /// Display label for the editor screen
    pub fn label(&self) -> &'static str {
        match self.kind {
            FieldKind::Month => "Month",
            FieldKind::Day => "Day",
            FieldKind::Year => "Year",
            FieldKind::Spacer => "",
            FieldKind::Hour => "Hour 1 - 24",
            FieldKind::Minute => "Minute",
        }
    }
}

/// The six slots and the cyclic cursor
///
/// Constructed fresh on every editor entry; the defaults are a known
/// valid date, not the possibly out-of-range clock value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldSet {
    fields: [Field; FIELD_COUNT],
    cursor: usize,
}

impl FieldSet {
    pub fn new() -> Self {
        Self {
            fields: [
                Field::new(FieldKind::Month, 1, 1, 12),
                Field::new(FieldKind::Day, 1, 1, 31),
                Field::new(FieldKind::Year, 2025, 2025, 2100),
                Field::spacer(),
                Field::new(FieldKind::Hour, 12, 1, 24),
                Field::new(FieldKind::Minute, 30, 0, 59),
            ],
            cursor: 0,
        }
    }

    pub fn fields(&self) -> &[Field; FIELD_COUNT] {
        &self.fields
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &Field {
        &self.fields[self.cursor]
    }

    pub fn increase(&mut self) {
        self.fields[self.cursor].increase();
    }

    pub fn decrease(&mut self) {
        self.fields[self.cursor].decrease();
    }

    /// Cyclic, spacer slot included
    pub fn next_field(&mut self) {
        self.cursor = (self.cursor + 1) % FIELD_COUNT;
    }

    /// Cyclic, spacer slot included
    pub fn prev_field(&mut self) {
        self.cursor = (self.cursor + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    fn value_of(&self, kind: FieldKind) -> u16 {
        // The table is fixed, so the lookup cannot miss.
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map(|f| f.value)
            .unwrap_or(0)
    }

    /// Package everything except the spacer for the RTC write
    ///
    /// Seconds are fixed at zero (the editor cannot set them), the
    /// weekday is recomputed from the committed date, and the 1-24 hour
    /// range maps 24 to 0 so the committed value is a valid RTC hour.
    /// Month/day/year are deliberately not cross-validated; the clamps
    /// are the only bounds, matching the device's observed behavior.
    pub fn commit(&self) -> DateTime {
        let year = self.value_of(FieldKind::Year);
        let month = self.value_of(FieldKind::Month) as u8;
        let day = self.value_of(FieldKind::Day) as u8;
        let hour = match self.value_of(FieldKind::Hour) as u8 {
            24 => 0,
            h => h,
        };
        DateTime {
            year,
            month,
            day,
            weekday: day_of_week(year, month, day),
            hour,
            minute: self.value_of(FieldKind::Minute) as u8,
            second: 0,
        }
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new()
    }
}
