//! The single UI task: clock loop and time editor
//!
//! Everything user-visible happens here, sequentially. The clock loop
//! ticks at ~10 Hz; a debounced Set press suspends it, the editor runs
//! at its own poll cadence on the same surface, and the face is
//! rebuilt from scratch when the editor returns.

use core::fmt::Debug;

use defmt::{info, warn, Debug2Format};
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal_async::i2c::I2c;

use gnomon_core::config::ClockConfig;
use gnomon_core::editor::{Editor, EditorAction};
use gnomon_core::input::{Button, Debouncer};
use gnomon_core::render::{draw_editor, rebuild_display, render_tick};
use gnomon_core::time::DateTime;
use gnomon_core::traits::{Rtc, Surface};

use crate::buttons::Buttons;
use crate::sensors::Sensors;

pub async fn run<S, R, I2C>(
    surface: &mut S,
    rtc: &mut R,
    buttons: &Buttons<'_>,
    sensors: &mut Sensors<I2C>,
    cfg: &ClockConfig,
) -> !
where
    S: Surface,
    S::Error: Debug,
    R: Rtc,
    R::Error: Debug,
    I2C: I2c,
{
    let mut debouncer = Debouncer::new(cfg.input.debounce_ms);

    // A fresh battery leaves the RTC stopped or nonsense; force the
    // editor before showing a face.
    let mut last_time = match rtc.now() {
        Ok(t) if t.is_plausible() => t,
        _ => {
            info!("RTC not set, entering editor");
            let dt = run_editor(surface, &mut debouncer, buttons, cfg).await;
            debouncer.require_release(Button::Set);
            write_clock(rtc, &dt);
            dt
        }
    };

    rebuild_display(surface, cfg).unwrap();

    let mut ticker = Ticker::every(Duration::from_millis(cfg.render.tick_ms as u64));
    loop {
        ticker.next().await;

        let now_ms = Instant::now().as_millis() as u32;
        if debouncer.poll(buttons.sample(), now_ms) == Some(Button::Set) {
            let dt = run_editor(surface, &mut debouncer, buttons, cfg).await;
            // The confirming press must not re-enter on the next poll
            debouncer.require_release(Button::Set);
            write_clock(rtc, &dt);
            rebuild_display(surface, cfg).unwrap();
            ticker.reset();
        }

        match rtc.now() {
            Ok(t) => last_time = t,
            Err(e) => warn!("RTC read failed: {}", Debug2Format(&e)),
        }

        let snapshot = sensors.snapshot().await;
        render_tick(surface, cfg, &last_time, &snapshot).unwrap();
    }
}

/// Run the editor to completion and return the committed date-time
async fn run_editor<S>(
    surface: &mut S,
    debouncer: &mut Debouncer,
    buttons: &Buttons<'_>,
    cfg: &ClockConfig,
) -> DateTime
where
    S: Surface,
    S::Error: Debug,
{
    info!("editor entered");
    let mut editor = Editor::new();
    // The press that entered must be released before it can confirm
    debouncer.require_release(Button::Set);
    surface.set_backlight(cfg.render.backlight).unwrap();
    draw_editor(surface, editor.fields()).unwrap();

    let mut ticker = Ticker::every(Duration::from_millis(cfg.input.poll_ms as u64));
    loop {
        ticker.next().await;

        let now_ms = Instant::now().as_millis() as u32;
        if let Some(button) = debouncer.poll(buttons.sample(), now_ms) {
            let action = EditorAction::from_button(button);
            if let Some(dt) = editor.apply(action) {
                info!(
                    "editor committed {}-{}-{} {}:{:02}",
                    dt.year, dt.month, dt.day, dt.hour, dt.minute
                );
                return dt;
            }
        }
        // Full repaint every poll iteration, input or not
        draw_editor(surface, editor.fields()).unwrap();
    }
}

/// Write the committed time to the RTC and verify the read-back
fn write_clock<R>(rtc: &mut R, dt: &DateTime)
where
    R: Rtc,
    R::Error: Debug,
{
    if let Err(e) = rtc.set(dt) {
        warn!("RTC write failed: {}", Debug2Format(&e));
        return;
    }
    match rtc.now() {
        // Seconds advance between write and read; compare to the minute
        Ok(back) => {
            let matches = back.year == dt.year
                && back.month == dt.month
                && back.day == dt.day
                && back.hour == dt.hour
                && back.minute == dt.minute;
            if !matches {
                warn!("RTC read-back does not match committed time");
            }
        }
        Err(e) => warn!("RTC read-back failed: {}", Debug2Format(&e)),
    }
}
