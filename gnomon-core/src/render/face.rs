//! Clock face artwork, numerals and hands

use crate::config::{FaceConfig, HandConfig};
use crate::face::{COARSE_TICK_STEP_DEG, FINE_TICK_STEP_DEG, NUMERALS};
use crate::geometry::{self, tick_endpoints, Point};
use crate::time::DateTime;
use crate::traits::{Pen, Surface};

/// Small dot covering the hand bases at the pivot
const PIVOT_DOT_RADIUS: u32 = 3;

/// Sensor readout titles down the left edge, part of the static face
const SENSOR_TITLES: [(&str, Point); 4] = [
    ("Ambient Light", Point::new(5, 80)),
    ("Rel Humidity", Point::new(5, 120)),
    ("Temperature", Point::new(5, 160)),
    ("Air Pressure", Point::new(5, 200)),
];

/// Draw the static face: ring, ticks and sensor titles
///
/// The ring is a full disk with a smaller background disk overpainted,
/// leaving an annulus of `ring_thickness`. Coarse ticks go on after the
/// overpaint so the hour spokes reach into the middle; the per-tick
/// inner clear trims them back to stubs on the ring.
pub fn draw_face<S: Surface>(s: &mut S, cfg: &FaceConfig) -> Result<(), S::Error> {
    let center = cfg.center;
    let radius = cfg.radius as f32;

    s.set_pen(Pen::Blue)?;
    s.circle(center, cfg.radius)?;

    s.set_pen(Pen::White)?;
    for (from, to) in tick_endpoints(center, radius, FINE_TICK_STEP_DEG) {
        s.line(from, to)?;
    }

    s.set_pen(Pen::Black)?;
    s.circle(center, cfg.radius - cfg.ring_thickness)?;

    s.set_pen(Pen::White)?;
    for (from, to) in tick_endpoints(center, radius, COARSE_TICK_STEP_DEG) {
        s.line(from, to)?;
    }

    for (title, anchor) in SENSOR_TITLES {
        s.text(title, anchor, 320, 1)?;
    }
    Ok(())
}

/// Clear the middle of the face and redraw the 12 numerals
pub fn draw_numerals<S: Surface>(s: &mut S, cfg: &FaceConfig) -> Result<(), S::Error> {
    s.set_pen(Pen::Black)?;
    s.circle(cfg.center, cfg.inner_clear_radius)?;
    s.set_pen(Pen::White)?;
    for numeral in NUMERALS.iter() {
        s.text(numeral.label, numeral.anchor, 320, 3)?;
    }
    Ok(())
}

/// Draw the three hands for the given time
///
/// Minute and hour hands are tapered triangles with pivot caps; the
/// second hand is a plain line with a small pivot dot on top.
pub fn draw_hands<S: Surface>(
    s: &mut S,
    face: &FaceConfig,
    hands: &HandConfig,
    time: &DateTime,
) -> Result<(), S::Error> {
    let center = face.center;

    let minute = geometry::hand_shape_tapered(
        center,
        geometry::minute_angle(time.minute, time.second),
        hands.minute_len,
        hands.taper,
    );
    s.set_pen(Pen::Blue)?;
    s.triangle(minute.tip, minute.base_left, minute.base_right)?;
    s.circle(center, minute.cap_radius)?;

    let hour = geometry::hand_shape_tapered(
        center,
        geometry::hour_angle(time.hour, time.minute),
        hands.hour_len,
        hands.taper,
    );
    s.set_pen(Pen::Red)?;
    s.triangle(hour.tip, hour.base_left, hour.base_right)?;
    s.circle(center, hour.cap_radius)?;

    s.set_pen(Pen::White)?;
    s.line(
        center,
        geometry::second_hand_tip(center, time.second, hands.second_len),
    )?;
    s.circle(center, PIVOT_DOT_RADIUS)?;
    Ok(())
}
