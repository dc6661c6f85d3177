//! Digital time, date and sensor readouts
//!
//! Only the rectangular regions that change are cleared each tick,
//! never the whole frame.

use core::fmt::Write;

use heapless::String;

use crate::geometry::Point;
use crate::sensor::SensorSnapshot;
use crate::time::DateTime;
use crate::traits::{Layer, Pen, Surface};
use crate::units;

/// The six regions repainted every tick
const CLEAR_RECTS: [(Point, u32, u32); 6] = [
    (Point::new(5, 10), 170, 18),  // time
    (Point::new(5, 50), 90, 18),   // date
    (Point::new(5, 90), 101, 18),  // lux
    (Point::new(5, 130), 80, 18),  // humidity
    (Point::new(5, 170), 105, 28), // temperature
    (Point::new(5, 210), 115, 18), // pressure
];

/// Draw digital time, date line and the four sensor readouts
pub fn draw_status<S: Surface>(
    s: &mut S,
    time: &DateTime,
    snapshot: &SensorSnapshot,
) -> Result<(), S::Error> {
    s.set_pen(Pen::Black)?;
    for (origin, width, height) in CLEAR_RECTS {
        s.rect(origin, width, height)?;
    }

    s.set_pen(Pen::Blue)?;
    s.text(&time.hms_string(), Point::new(5, 10), 320, 3)?;
    s.text(time.meridiem().label(), Point::new(125, 10), 320, 3)?;

    s.set_pen(Pen::White)?;
    s.text(time.weekday_name(), Point::new(5, 40), 320, 1)?;
    s.set_pen(Pen::Blue)?;
    s.text(&time.date_string(), Point::new(5, 50), 320, 3)?;

    s.set_pen(Pen::Red)?;
    let mut buf: String<16> = String::new();

    let _ = write!(buf, "{} lx", snapshot.light.lux as i32);
    s.text(&buf, Point::new(5, 90), 320, 3)?;

    buf.clear();
    let _ = write!(buf, "{} %", snapshot.atmo.humidity_pct as i32);
    s.text(&buf, Point::new(5, 130), 320, 3)?;

    buf.clear();
    let temp_f = units::celsius_to_fahrenheit(snapshot.atmo.temperature_c);
    let _ = write!(buf, "{:.1} °F", temp_f);
    s.text(&buf, Point::new(5, 170), 320, 3)?;

    buf.clear();
    let inhg = units::hpa_to_inhg(snapshot.atmo.pressure_hpa);
    let _ = write!(buf, "{:.2} in", inhg);
    s.text(&buf, Point::new(5, 210), 320, 3)?;

    Ok(())
}

/// Small "Set" affordance in the corner of the main screen
pub fn draw_set_hint<S: Surface>(s: &mut S) -> Result<(), S::Error> {
    s.set_pen(Pen::White)?;
    s.circle(Point::new(312, 200), 3)?;
    s.text("Set", Point::new(305, 210), 320, 1)?;
    Ok(())
}

/// Fatal-absence screen: required sensor hardware was not detected
pub fn draw_sensor_missing<S: Surface>(s: &mut S) -> Result<(), S::Error> {
    s.set_layer(Layer::Face)?;
    s.set_pen(Pen::Red)?;
    s.clear()?;
    s.set_pen(Pen::White)?;
    s.text("Multi-Sensor", Point::new(60, 95), 320, 3)?;
    s.text("Stick missing", Point::new(60, 125), 320, 3)?;
    s.flush()
}
