//! Debounced button sampling
//!
//! Buttons are polled, not interrupt-driven; the collaborator exposes
//! only "currently pressed" booleans. Debounce is edge-detected and
//! time-gated: an accepted press opens a quiescent window for that
//! button during which further samples are ignored, so a held button
//! repeats once per window instead of once per poll. No sleeping, no
//! busy-waiting.

/// The five momentary inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Increase the selected field
    Up,
    /// Decrease the selected field
    Down,
    /// Move the cursor to the next field
    Next,
    /// Move the cursor to the previous field
    Prev,
    /// Confirm / enter the editor
    Set,
}

pub const BUTTON_COUNT: usize = 5;

impl Button {
    /// Sampling order; mirrors the priority of the original cascading
    /// button checks (adjustments before navigation before confirm).
    pub const ALL: [Button; BUTTON_COUNT] =
        [Button::Up, Button::Down, Button::Next, Button::Prev, Button::Set];

    fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Next => 2,
            Button::Prev => 3,
            Button::Set => 4,
        }
    }
}

/// One poll's worth of raw button samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub up: bool,
    pub down: bool,
    pub next: bool,
    pub prev: bool,
    pub set: bool,
}

impl ButtonSample {
    pub fn pressed(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::Next => self.next,
            Button::Prev => self.prev,
            Button::Set => self.set,
        }
    }
}

/// Edge-detected, monotonic-clock-gated input sampler
///
/// Timestamps are milliseconds from any monotonic source; wrapping
/// arithmetic keeps the windows correct across counter rollover.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    last_accept_ms: [Option<u32>; BUTTON_COUNT],
    needs_release: [bool; BUTTON_COUNT],
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accept_ms: [None; BUTTON_COUNT],
            needs_release: [false; BUTTON_COUNT],
        }
    }

    /// Ignore a button until a released sample is seen
    ///
    /// The held-button repeat is what makes a single press serve as
    /// both "enter the editor" and, one window later, "confirm". A
    /// mode change that reuses the same button must demand a release
    /// in between or the press that entered the mode also exits it.
    pub fn require_release(&mut self, button: Button) {
        self.needs_release[button.index()] = true;
    }

    /// Feed one sample for one button; true if the edge is accepted
    pub fn filter(&mut self, button: Button, pressed: bool, now_ms: u32) -> bool {
        if !pressed {
            self.needs_release[button.index()] = false;
            return false;
        }
        if self.needs_release[button.index()] {
            return false;
        }
        let slot = &mut self.last_accept_ms[button.index()];
        if let Some(last) = *slot {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        *slot = Some(now_ms);
        true
    }

    /// Feed a full sample; returns the first accepted button in
    /// [`Button::ALL`] order, at most one per poll.
    pub fn poll(&mut self, sample: ButtonSample, now_ms: u32) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|&b| self.filter(b, sample.pressed(b), now_ms))
    }
}
