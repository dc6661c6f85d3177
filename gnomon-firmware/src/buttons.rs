//! Front-panel button sampling
//!
//! Five momentary buttons wired active-low with internal pull-ups.
//! Raw levels only; debouncing lives in the core crate.

use embassy_rp::gpio::Input;
use gnomon_core::input::ButtonSample;

pub struct Buttons<'d> {
    pub up: Input<'d>,
    pub down: Input<'d>,
    pub next: Input<'d>,
    pub prev: Input<'d>,
    pub set: Input<'d>,
}

impl Buttons<'_> {
    /// Read all five buttons at once
    pub fn sample(&self) -> ButtonSample {
        ButtonSample {
            up: self.up.is_low(),
            down: self.down.is_low(),
            next: self.next.is_low(),
            prev: self.prev.is_low(),
            set: self.set.is_low(),
        }
    }
}
