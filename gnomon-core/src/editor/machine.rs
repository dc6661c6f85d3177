//! Editor state machine
//!
//! All editor behavior is a function of the current state and an
//! action, so the whole flow is testable without hardware.

use super::fields::FieldSet;
use crate::input::Button;
use crate::time::DateTime;

/// Editor states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditorState {
    /// Not entered; the render loop owns the display
    Idle,
    /// Cursor active, awaiting button input
    Editing,
    /// Terminal; the committed date-time is ready for write-back
    Committed,
}

impl EditorState {
    /// Process an action and return the next state
    pub fn transition(self, action: EditorAction) -> Self {
        use EditorAction::*;
        use EditorState::*;

        match (self, action) {
            (Editing, Confirm) => Committed,
            // Adjustments and navigation stay in Editing
            (Editing, _) => Editing,
            // Idle and Committed ignore everything
            _ => self,
        }
    }
}

/// Button-driven transitions, all originating from `Editing`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditorAction {
    /// Saturating increment of the selected field
    Increase,
    /// Saturating decrement of the selected field
    Decrease,
    /// Cyclic cursor advance
    NextField,
    /// Cyclic cursor retreat
    PrevField,
    /// Commit and exit
    Confirm,
}

impl EditorAction {
    pub fn from_button(button: Button) -> Self {
        match button {
            Button::Up => EditorAction::Increase,
            Button::Down => EditorAction::Decrease,
            Button::Next => EditorAction::NextField,
            Button::Prev => EditorAction::PrevField,
            Button::Set => EditorAction::Confirm,
        }
    }
}

/// The editor session: state plus field table
///
/// Constructed on entry (fields fresh from the default table), dropped
/// on exit. `apply` returns the committed date-time exactly once, on
/// the Confirm transition; the caller writes it to the RTC in a single
/// call and rebuilds the face afterwards.
#[derive(Debug, Clone)]
pub struct Editor {
    state: EditorState,
    fields: FieldSet,
}

impl Editor {
    /// Enter the editor with default field values
    pub fn new() -> Self {
        Self {
            state: EditorState::Editing,
            fields: FieldSet::new(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn is_committed(&self) -> bool {
        self.state == EditorState::Committed
    }

    /// Apply one action; `Some` carries the committed date-time
    pub fn apply(&mut self, action: EditorAction) -> Option<DateTime> {
        if self.state != EditorState::Editing {
            return None;
        }
        self.state = self.state.transition(action);
        match action {
            EditorAction::Increase => self.fields.increase(),
            EditorAction::Decrease => self.fields.decrease(),
            EditorAction::NextField => self.fields.next_field(),
            EditorAction::PrevField => self.fields.prev_field(),
            EditorAction::Confirm => return Some(self.fields.commit()),
        }
        None
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::fields::{FieldKind, FIELD_COUNT};
    use crate::testing::FakeRtc;
    use crate::traits::Rtc;
    use proptest::prelude::*;

    fn cursor_to(editor: &mut Editor, kind: FieldKind) {
        while editor.fields().selected().kind != kind {
            editor.apply(EditorAction::NextField);
        }
    }

    #[test]
    fn test_entry_state_is_editing() {
        let editor = Editor::new();
        assert_eq!(editor.state(), EditorState::Editing);
        assert_eq!(editor.fields().cursor(), 0);
    }

    #[test]
    fn test_confirm_commits_once() {
        let mut editor = Editor::new();
        let dt = editor.apply(EditorAction::Confirm);
        assert!(dt.is_some());
        assert!(editor.is_committed());
        // Terminal: further actions are ignored
        assert_eq!(editor.apply(EditorAction::Confirm), None);
        assert_eq!(editor.apply(EditorAction::Increase), None);
    }

    #[test]
    fn test_idle_ignores_actions() {
        assert_eq!(
            EditorState::Idle.transition(EditorAction::Confirm),
            EditorState::Idle
        );
        assert_eq!(
            EditorState::Idle.transition(EditorAction::Increase),
            EditorState::Idle
        );
    }

    #[test]
    fn test_adjustments_stay_editing() {
        let mut editor = Editor::new();
        for action in [
            EditorAction::Increase,
            EditorAction::Decrease,
            EditorAction::NextField,
            EditorAction::PrevField,
        ] {
            assert_eq!(editor.apply(action), None);
            assert_eq!(editor.state(), EditorState::Editing);
        }
    }

    #[test]
    fn test_button_mapping() {
        use crate::input::Button;
        assert_eq!(EditorAction::from_button(Button::Up), EditorAction::Increase);
        assert_eq!(EditorAction::from_button(Button::Set), EditorAction::Confirm);
    }

    #[test]
    fn test_commit_round_trip_through_rtc() {
        // {mo=6, day=15, yr=2030, h=14, min=45} reads back exactly,
        // second = 0, weekday recomputed (2030-06-15 is a Saturday).
        let mut editor = Editor::new();
        for _ in 0..5 {
            editor.apply(EditorAction::Increase); // month = 6
        }
        cursor_to(&mut editor, FieldKind::Day);
        for _ in 0..14 {
            editor.apply(EditorAction::Increase); // day = 15
        }
        cursor_to(&mut editor, FieldKind::Year);
        for _ in 0..5 {
            editor.apply(EditorAction::Increase); // year = 2030
        }
        cursor_to(&mut editor, FieldKind::Hour);
        for _ in 0..2 {
            editor.apply(EditorAction::Increase); // hour = 14
        }
        cursor_to(&mut editor, FieldKind::Minute);
        for _ in 0..15 {
            editor.apply(EditorAction::Increase); // minute = 45
        }
        let dt = editor.apply(EditorAction::Confirm).unwrap();

        let mut rtc = FakeRtc::default();
        rtc.set(&dt).unwrap();
        let back = rtc.now().unwrap();
        assert_eq!(
            (back.year, back.month, back.day, back.hour, back.minute),
            (2030, 6, 15, 14, 45)
        );
        assert_eq!(back.second, 0);
        assert_eq!(back.weekday, 5);
    }

    #[test]
    fn test_held_set_does_not_commit_entry_defaults() {
        use crate::input::{Button, ButtonSample, Debouncer};

        let mut debouncer = Debouncer::new(200);
        let held = ButtonSample {
            set: true,
            ..Default::default()
        };

        // The press that enters the editor also demands a release
        assert_eq!(debouncer.poll(held, 0), Some(Button::Set));
        debouncer.require_release(Button::Set);
        let mut editor = Editor::new();

        // Still held at the poll cadence for a full second: the repeat
        // must not surface as a Confirm over the untouched defaults.
        for t in (100u32..=1000).step_by(100) {
            assert_eq!(debouncer.poll(held, t), None);
        }
        assert_eq!(editor.state(), EditorState::Editing);

        // Release, then a deliberate second press confirms
        assert_eq!(debouncer.poll(ButtonSample::default(), 1100), None);
        assert_eq!(debouncer.poll(held, 1200), Some(Button::Set));
        assert!(editor.apply(EditorAction::Confirm).is_some());
    }

    #[test]
    fn test_editor_entered_fresh_each_time() {
        let mut editor = Editor::new();
        editor.apply(EditorAction::Increase);
        editor.apply(EditorAction::Confirm);
        drop(editor);
        // A new session starts from the default table again
        let editor = Editor::new();
        assert_eq!(editor.fields().selected().value, 1);
    }

    proptest! {
        #[test]
        fn prop_values_always_within_bounds(actions in proptest::collection::vec(0u8..4, 0..200)) {
            let mut editor = Editor::new();
            for a in actions {
                let action = match a {
                    0 => EditorAction::Increase,
                    1 => EditorAction::Decrease,
                    2 => EditorAction::NextField,
                    _ => EditorAction::PrevField,
                };
                editor.apply(action);
                for field in editor.fields().fields() {
                    prop_assert!(field.min <= field.value);
                    prop_assert!(field.value <= field.max);
                }
            }
        }

        #[test]
        fn prop_cursor_cyclic(start in 0usize..FIELD_COUNT, forward in proptest::bool::ANY) {
            let mut editor = Editor::new();
            for _ in 0..start {
                editor.apply(EditorAction::NextField);
            }
            let origin = editor.fields().cursor();
            let step = if forward {
                EditorAction::NextField
            } else {
                EditorAction::PrevField
            };
            for _ in 0..FIELD_COUNT {
                editor.apply(step);
            }
            prop_assert_eq!(editor.fields().cursor(), origin);
        }
    }
}
