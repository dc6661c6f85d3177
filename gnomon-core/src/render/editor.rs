//! Time-setting screen
//!
//! Redrawn in full on every editor poll iteration: static labels, the
//! six field values with the cursor's field highlighted, and the fixed
//! button icons.

use core::fmt::Write;

use heapless::String;

use super::clear_layers;
use crate::editor::fields::{FieldSet, FIELD_COUNT};
use crate::geometry::Point;
use crate::traits::{Pen, Surface};

/// Per-slot label anchors (rotated 90 degrees); the spacer has none
const LABEL_X: [Option<i32>; FIELD_COUNT] =
    [Some(30), Some(75), Some(138), None, Some(213), Some(262)];
const LABEL_Y: i32 = 106;

/// Value row
const VALUE_X0: i32 = 21;
const VALUE_STEP: i32 = 45;
const VALUE_Y: i32 = 76;

/// Draw the editor screen and present it
pub fn draw_editor<S: Surface>(s: &mut S, fields: &FieldSet) -> Result<(), S::Error> {
    clear_layers(s)?;

    s.set_pen(Pen::White)?;
    // Confirm affordance and the four adjustment arrows
    s.circle(Point::new(18, 44), 5)?;
    s.text("Set", Point::new(35, 38), 100, 2)?;
    s.triangle(
        Point::new(303, 38),
        Point::new(293, 51),
        Point::new(313, 51),
    )?; // up
    s.triangle(
        Point::new(303, 127),
        Point::new(293, 114),
        Point::new(313, 114),
    )?; // down
    s.triangle(
        Point::new(12, 195),
        Point::new(28, 205),
        Point::new(28, 185),
    )?; // previous
    s.triangle(
        Point::new(311, 195),
        Point::new(295, 205),
        Point::new(295, 185),
    )?; // next

    for (i, field) in fields.fields().iter().enumerate() {
        if let Some(x) = LABEL_X[i] {
            s.text_rotated(field.label(), Point::new(x, LABEL_Y), 140, 2, 90)?;
        }
    }

    for (i, field) in fields.fields().iter().enumerate() {
        if field.is_spacer() {
            continue;
        }
        let pen = if fields.cursor() == i {
            Pen::Yellow
        } else {
            Pen::Red
        };
        s.set_pen(pen)?;
        let mut buf: String<8> = String::new();
        let _ = write!(buf, "{}", field.value);
        s.text(&buf, Point::new(VALUE_X0 + i as i32 * VALUE_STEP, VALUE_Y), 200, 2)?;
    }

    s.flush()
}
