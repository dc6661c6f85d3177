//! In-memory fakes for the collaborator traits, test builds only

use core::convert::Infallible;

use heapless::{String, Vec};

use crate::geometry::Point;
use crate::time::DateTime;
use crate::traits::{Layer, Pen, Rtc, Surface};

/// One recorded drawing operation, stamped with the pen in effect
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetLayer(Layer),
    Clear(Pen),
    Line {
        pen: Pen,
        from: Point,
        to: Point,
    },
    Circle {
        pen: Pen,
        center: Point,
        radius: u32,
    },
    Triangle {
        pen: Pen,
        a: Point,
        b: Point,
        c: Point,
    },
    Rect {
        pen: Pen,
        origin: Point,
        width: u32,
        height: u32,
    },
    Text {
        pen: Pen,
        text: String<24>,
        origin: Point,
        scale: u8,
        angle_deg: i16,
    },
    Backlight(f32),
    Flush,
}

/// Surface fake that records every operation for assertions
#[derive(Debug)]
pub struct RecordingSurface {
    pub ops: Vec<Op, 512>,
    pen: Pen,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            pen: Pen::Black,
        }
    }
}

impl RecordingSurface {
    fn record(&mut self, op: Op) {
        self.ops.push(op).expect("recording buffer full");
    }

    pub fn texts(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Text { .. }))
    }

    pub fn count_lines_with(&self, pen: Pen) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { pen: p, .. } if *p == pen))
            .count()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn set_layer(&mut self, layer: Layer) -> Result<(), Self::Error> {
        self.record(Op::SetLayer(layer));
        Ok(())
    }

    fn set_pen(&mut self, pen: Pen) -> Result<(), Self::Error> {
        self.pen = pen;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        let pen = self.pen;
        self.record(Op::Clear(pen));
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point) -> Result<(), Self::Error> {
        let pen = self.pen;
        self.record(Op::Line { pen, from, to });
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: u32) -> Result<(), Self::Error> {
        let pen = self.pen;
        self.record(Op::Circle {
            pen,
            center,
            radius,
        });
        Ok(())
    }

    fn triangle(&mut self, a: Point, b: Point, c: Point) -> Result<(), Self::Error> {
        let pen = self.pen;
        self.record(Op::Triangle { pen, a, b, c });
        Ok(())
    }

    fn rect(&mut self, origin: Point, width: u32, height: u32) -> Result<(), Self::Error> {
        let pen = self.pen;
        self.record(Op::Rect {
            pen,
            origin,
            width,
            height,
        });
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        origin: Point,
        _wrap: u32,
        scale: u8,
    ) -> Result<(), Self::Error> {
        self.record_text(text, origin, scale, 0);
        Ok(())
    }

    fn text_rotated(
        &mut self,
        text: &str,
        origin: Point,
        _wrap: u32,
        scale: u8,
        angle_deg: i16,
    ) -> Result<(), Self::Error> {
        self.record_text(text, origin, scale, angle_deg);
        Ok(())
    }

    fn set_backlight(&mut self, level: f32) -> Result<(), Self::Error> {
        self.record(Op::Backlight(level));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.record(Op::Flush);
        Ok(())
    }
}

impl RecordingSurface {
    fn record_text(&mut self, text: &str, origin: Point, scale: u8, angle_deg: i16) {
        let pen = self.pen;
        let mut s = String::new();
        for ch in text.chars() {
            if s.push(ch).is_err() {
                break;
            }
        }
        self.record(Op::Text {
            pen,
            text: s,
            origin,
            scale,
            angle_deg,
        });
    }
}

/// RTC read error for the fake: the clock was never set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeverSet;

/// RTC fake backed by a stored value
#[derive(Debug, Default)]
pub struct FakeRtc {
    stored: Option<DateTime>,
}

impl Rtc for FakeRtc {
    type Error = NeverSet;

    fn now(&mut self) -> Result<DateTime, Self::Error> {
        self.stored.ok_or(NeverSet)
    }

    fn set(&mut self, dt: &DateTime) -> Result<(), Self::Error> {
        self.stored = Some(*dt);
        Ok(())
    }
}
