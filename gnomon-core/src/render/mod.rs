//! Render routines, generic over the display surface
//!
//! Each routine draws through the [`Surface`](crate::traits::Surface)
//! trait and nothing else, so the whole pipeline runs against the
//! in-memory fake in tests. The firmware calls [`rebuild_display`] on
//! startup and after the editor returns, and [`render_tick`] at the
//! ~10 Hz cadence.

pub mod editor;
pub mod face;
pub mod status;

pub use editor::draw_editor;
pub use face::{draw_face, draw_hands, draw_numerals};
pub use status::{draw_sensor_missing, draw_set_hint, draw_status};

use crate::config::ClockConfig;
use crate::sensor::SensorSnapshot;
use crate::time::DateTime;
use crate::traits::{Layer, Pen, Surface};

/// Clear both layers to black without presenting
pub fn clear_layers<S: Surface>(s: &mut S) -> Result<(), S::Error> {
    s.set_layer(Layer::Face)?;
    s.set_pen(Pen::Black)?;
    s.clear()?;
    s.set_layer(Layer::Overlay)?;
    s.set_pen(Pen::Black)?;
    s.clear()?;
    Ok(())
}

/// Full display rebuild: clear, backlight, face ring and sensor titles
///
/// Required whenever another screen (editor, error) has overwritten the
/// shared surface.
pub fn rebuild_display<S: Surface>(s: &mut S, cfg: &ClockConfig) -> Result<(), S::Error> {
    s.set_backlight(cfg.render.backlight)?;
    clear_layers(s)?;
    face::draw_face(s, &cfg.face)?;
    s.flush()
}

/// One render loop iteration: hint, numerals, hands, status, present
pub fn render_tick<S: Surface>(
    s: &mut S,
    cfg: &ClockConfig,
    time: &DateTime,
    snapshot: &SensorSnapshot,
) -> Result<(), S::Error> {
    status::draw_set_hint(s)?;
    face::draw_numerals(s, &cfg.face)?;
    face::draw_hands(s, &cfg.face, &cfg.hands, time)?;
    status::draw_status(s, time, snapshot)?;
    s.flush()
}
