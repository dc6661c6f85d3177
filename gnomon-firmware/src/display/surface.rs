//! Core drawing surface over an embedded-graphics target
//!
//! Maps the fixed pen palette to RGB565 and the filled primitives to
//! embedded-graphics styled shapes. The panel has no layer planes, so
//! layer selection and flush are draw-through no-ops; pixels appear as
//! they are written.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_9X15, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Baseline, Text};

use gnomon_core::geometry::Point as CorePoint;
use gnomon_core::traits::{Layer, Pen, Surface};

/// The warm palette of the reference face, quantized to RGB565
mod palette {
    use embedded_graphics::pixelcolor::Rgb565;

    pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
    pub const WHITE: Rgb565 = Rgb565::new(253 >> 3, 240 >> 2, 213 >> 3);
    pub const RED: Rgb565 = Rgb565::new(193 >> 3, 18 >> 2, 31 >> 3);
    pub const BLUE: Rgb565 = Rgb565::new(37 >> 3, 87 >> 2, 115 >> 3);
    pub const YELLOW: Rgb565 = Rgb565::new(255 >> 3, 215 >> 2, 0);
}

fn pt(p: CorePoint) -> Point {
    Point::new(p.x, p.y)
}

fn font_for_scale(scale: u8) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        2 => &FONT_9X15,
        _ => &FONT_10X20,
    }
}

/// Greedy word wrap over a character budget, no allocation
struct WrapLines<'a> {
    rest: &'a str,
    max_chars: usize,
}

impl<'a> Iterator for WrapLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let mut end = self.rest.len();
        let mut last_space = None;
        for (count, (idx, ch)) in self.rest.char_indices().enumerate() {
            if count == self.max_chars {
                end = last_space.unwrap_or(idx);
                break;
            }
            if ch == ' ' {
                last_space = Some(idx);
            }
        }
        let line = self.rest[..end].trim_end();
        self.rest = self.rest[end..].trim_start();
        Some(line)
    }
}

pub struct LcdSurface<D> {
    target: D,
    backlight: Pwm<'static>,
    bl_cfg: PwmConfig,
    pen: Rgb565,
}

impl<D> LcdSurface<D> {
    pub fn new(target: D, backlight: Pwm<'static>, bl_cfg: PwmConfig) -> Self {
        Self {
            target,
            backlight,
            bl_cfg,
            pen: palette::BLACK,
        }
    }
}

impl<D: DrawTarget<Color = Rgb565>> Surface for LcdSurface<D> {
    type Error = D::Error;

    fn set_layer(&mut self, _layer: Layer) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_pen(&mut self, pen: Pen) -> Result<(), Self::Error> {
        self.pen = match pen {
            Pen::Black => palette::BLACK,
            Pen::White => palette::WHITE,
            Pen::Red => palette::RED,
            Pen::Blue => palette::BLUE,
            Pen::Yellow => palette::YELLOW,
        };
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.target.clear(self.pen)
    }

    fn line(&mut self, from: CorePoint, to: CorePoint) -> Result<(), Self::Error> {
        Line::new(pt(from), pt(to))
            .into_styled(PrimitiveStyle::with_stroke(self.pen, 1))
            .draw(&mut self.target)
    }

    fn circle(&mut self, center: CorePoint, radius: u32) -> Result<(), Self::Error> {
        Circle::with_center(pt(center), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(self.pen))
            .draw(&mut self.target)
    }

    fn triangle(&mut self, a: CorePoint, b: CorePoint, c: CorePoint) -> Result<(), Self::Error> {
        Triangle::new(pt(a), pt(b), pt(c))
            .into_styled(PrimitiveStyle::with_fill(self.pen))
            .draw(&mut self.target)
    }

    fn rect(&mut self, origin: CorePoint, width: u32, height: u32) -> Result<(), Self::Error> {
        Rectangle::new(pt(origin), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(self.pen))
            .draw(&mut self.target)
    }

    fn text(
        &mut self,
        text: &str,
        origin: CorePoint,
        wrap: u32,
        scale: u8,
    ) -> Result<(), Self::Error> {
        let font = font_for_scale(scale);
        let style = MonoTextStyle::new(font, self.pen);
        let max_chars = (wrap / font.character_size.width.max(1)).max(1) as usize;
        let line_h = font.character_size.height as i32;
        let lines = WrapLines { rest: text, max_chars };
        for (i, line) in lines.enumerate() {
            let anchor = Point::new(origin.x, origin.y + i as i32 * line_h);
            Text::with_baseline(line, anchor, style, Baseline::Top).draw(&mut self.target)?;
        }
        Ok(())
    }

    fn text_rotated(
        &mut self,
        text: &str,
        origin: CorePoint,
        wrap: u32,
        scale: u8,
        angle_deg: i16,
    ) -> Result<(), Self::Error> {
        if angle_deg == 0 {
            return self.text(text, origin, wrap, scale);
        }
        // Mono glyphs cannot rotate; rotated labels stack characters
        // top to bottom instead.
        let font = font_for_scale(scale);
        let style = MonoTextStyle::new(font, self.pen);
        let step = font.character_size.height as i32;
        let mut buf = [0u8; 4];
        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let glyph: &str = ch.encode_utf8(&mut buf);
            let anchor = Point::new(origin.x, origin.y + i as i32 * step);
            Text::with_baseline(glyph, anchor, style, Baseline::Top).draw(&mut self.target)?;
        }
        Ok(())
    }

    fn set_backlight(&mut self, level: f32) -> Result<(), Self::Error> {
        let level = level.clamp(0.0, 1.0);
        self.bl_cfg.compare_a = (level * self.bl_cfg.top as f32) as u16;
        self.backlight.set_config(&self.bl_cfg);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
