//! Time-setting field editor
//!
//! A bounded multi-field input state machine driven by discrete button
//! events. Owns an ordered set of clamped numeric fields and a cyclic
//! cursor; produces a committed date-time on confirmation.

pub mod fields;
pub mod machine;

pub use fields::{Field, FieldKind, FieldSet, FIELD_COUNT};
pub use machine::{Editor, EditorAction, EditorState};
