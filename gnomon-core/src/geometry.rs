//! Clock hand and tick-ring geometry
//!
//! Pure functions mapping a time of day to pixel-level vector shapes.
//! Angles follow clock convention: 0 degrees is the 12 o'clock position
//! and angles increase clockwise. The conversion from the mathematical
//! convention (0 = east, counter-clockwise) happens inside these
//! functions, never in callers.

use libm::{cosf, roundf, sinf};

/// A pixel coordinate on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Ratio of hand length to base half-width
///
/// A tuned aesthetic constant, not load-bearing; `hand_shape_tapered`
/// accepts any positive ratio.
pub const TAPER_RATIO: f32 = 13.0;

/// An hour or minute hand rendered as a tapered triangle
///
/// The apex is the tip, the base straddles the pivot perpendicular to
/// the hand direction, and a circular cap at the pivot smooths the
/// overlapping bases of the two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandShape {
    pub tip: Point,
    pub base_left: Point,
    pub base_right: Point,
    pub cap_radius: u32,
}

/// Minute hand angle in clock-convention degrees
///
/// Seconds contribute fractionally so the hand sweeps instead of jumping.
pub fn minute_angle(minute: u8, second: u8) -> f32 {
    (minute as f32 + second as f32 / 60.0) * 6.0
}

/// Hour hand angle in clock-convention degrees
///
/// Minutes contribute fractionally so the hand sweeps instead of jumping.
pub fn hour_angle(hour: u8, minute: u8) -> f32 {
    (hour as f32 + minute as f32 / 60.0) * 30.0
}

/// Compute the triangle and pivot cap for an hour or minute hand
///
/// `angle_deg` is in clock convention and may be any real number; trig
/// periodicity reduces it. `length` must be positive.
pub fn hand_shape(center: Point, angle_deg: f32, length: f32) -> HandShape {
    hand_shape_tapered(center, angle_deg, length, TAPER_RATIO)
}

/// [`hand_shape`] with an explicit taper ratio
pub fn hand_shape_tapered(center: Point, angle_deg: f32, length: f32, taper: f32) -> HandShape {
    debug_assert!(length > 0.0);
    debug_assert!(taper > 0.0);

    // Shift from clock convention to the math convention the trig
    // functions expect.
    let ang = angle_deg - 90.0;
    let half_width = length / taper;

    HandShape {
        tip: polar(center, ang, length),
        base_left: polar(center, ang + 90.0, half_width),
        base_right: polar(center, ang - 90.0, half_width),
        cap_radius: roundf(half_width) as u32,
    }
}

/// Tip of the second hand, rendered as a plain radial line
///
/// A line rather than a triangle, to de-emphasize it against the filled
/// hour and minute hands and avoid obscuring tick marks at sweep rate.
pub fn second_hand_tip(center: Point, second: u8, length: f32) -> Point {
    debug_assert!(length > 0.0);
    // 6 degrees per second, already clock-corrected.
    polar(center, 6.0 * second as f32 - 90.0, length)
}

/// Radial tick segments over a full 360 degree sweep
///
/// Lazy, finite and restartable (`Clone` before iterating to restart).
/// Each item is a (center, rim) pair; the ring effect comes from
/// overpainting an inner disk after the segments are drawn.
#[derive(Debug, Clone)]
pub struct TickRing {
    center: Point,
    radius: f32,
    step_deg: u16,
    next_deg: u16,
}

impl Iterator for TickRing {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_deg >= 360 {
            return None;
        }
        let angle = self.next_deg as f32;
        self.next_deg += self.step_deg;
        // Ticks are rotationally symmetric, so no clock-convention
        // shift is needed here.
        Some((self.center, polar(self.center, angle, self.radius)))
    }
}

/// One tick segment per `step_deg` degrees, from face center to rim
pub fn tick_endpoints(center: Point, radius: f32, step_deg: u16) -> TickRing {
    debug_assert!(step_deg > 0);
    debug_assert!(radius > 0.0);
    TickRing {
        center,
        radius,
        step_deg,
        next_deg: 0,
    }
}

fn polar(center: Point, angle_deg: f32, radius: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point {
        x: center.x + roundf(radius * cosf(rad)) as i32,
        y: center.y + roundf(radius * sinf(rad)) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(160, 120);

    #[test]
    fn test_minute_angle_quarter_past() {
        assert_eq!(minute_angle(15, 0), 90.0);
    }

    #[test]
    fn test_minute_angle_half_second_sweep() {
        assert_eq!(minute_angle(0, 30), 3.0);
    }

    #[test]
    fn test_hour_angle_three_oclock() {
        assert_eq!(hour_angle(3, 0), 90.0);
    }

    #[test]
    fn test_hour_angle_half_hour_sweep() {
        assert_eq!(hour_angle(0, 30), 15.0);
    }

    #[test]
    fn test_second_hand_points_at_twelve() {
        // second = 0 -> angle -90 in math convention -> straight up
        let tip = second_hand_tip(CENTER, 0, 93.0);
        assert_eq!(tip, Point::new(160, 120 - 93));
    }

    #[test]
    fn test_second_hand_points_at_three() {
        let tip = second_hand_tip(CENTER, 15, 93.0);
        assert_eq!(tip, Point::new(160 + 93, 120));
    }

    #[test]
    fn test_hand_tip_at_twelve() {
        let hand = hand_shape(CENTER, 0.0, 65.0);
        assert_eq!(hand.tip, Point::new(160, 120 - 65));
    }

    #[test]
    fn test_hand_tip_at_three() {
        let hand = hand_shape(CENTER, 90.0, 65.0);
        assert_eq!(hand.tip, Point::new(160 + 65, 120));
    }

    #[test]
    fn test_hand_angle_periodicity() {
        // A full extra turn lands on the same pixels
        let a = hand_shape(CENTER, 30.0, 90.0);
        let b = hand_shape(CENTER, 390.0, 90.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hand_base_straddles_pivot() {
        // Hand pointing at 12: base points sit horizontally either side
        // of the pivot at half-width length/13.
        let hand = hand_shape(CENTER, 0.0, 65.0);
        let w = roundf(65.0 / 13.0) as i32;
        assert_eq!(hand.base_left, Point::new(160 + w, 120));
        assert_eq!(hand.base_right, Point::new(160 - w, 120));
        assert_eq!(hand.cap_radius, w as u32);
    }

    #[test]
    fn test_fine_tick_count() {
        assert_eq!(tick_endpoints(CENTER, 105.0, 6).count(), 60);
    }

    #[test]
    fn test_coarse_tick_count() {
        assert_eq!(tick_endpoints(CENTER, 105.0, 30).count(), 12);
    }

    #[test]
    fn test_tick_ring_restartable() {
        let ring = tick_endpoints(CENTER, 105.0, 30);
        let first: Option<(Point, Point)> = ring.clone().next();
        // Draining the original does not affect the clone
        assert_eq!(ring.count(), 12);
        assert_eq!(first, Some((CENTER, Point::new(160 + 105, 120))));
    }

    #[test]
    fn test_ticks_start_east_and_stay_on_radius() {
        for (inner, outer) in tick_endpoints(CENTER, 105.0, 6) {
            assert_eq!(inner, CENTER);
            let dx = (outer.x - CENTER.x) as f32;
            let dy = (outer.y - CENTER.y) as f32;
            let r = libm::sqrtf(dx * dx + dy * dy);
            assert!(libm::fabsf(r - 105.0) < 1.0);
        }
    }
}
