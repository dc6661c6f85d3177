//! Collaborator traits
//!
//! These traits define the interface between the application logic and
//! hardware-specific implementations, and allow substitution with
//! in-memory fakes for testing.

pub mod rtc;
pub mod surface;

pub use rtc::Rtc;
pub use surface::{Layer, Pen, Surface};
