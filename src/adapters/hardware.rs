//! Hardware adapter — bridges GPIO pins to the controller's port traits.
//!
//! Generic over the `embedded-hal` 1.0 digital traits so the same adapter
//! drives ESP-IDF `PinDriver`s on the device and plain mock pins on the
//! host.  This is the only module that touches pin levels.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::{error, warn};

use crate::app::ports::{DelayPort, LightPort, SensorPort};
use crate::error::{Line, PinError};
use crate::fsm::signals::{LightPattern, SensorSample, Signal};

// ── Lamps and detectors ───────────────────────────────────────

/// Eight lamp outputs plus the two car detector inputs.
pub struct GpioIntersection<O, I> {
    /// Indexed by [`Signal::index`].
    lamps: [O; Signal::COUNT],
    west_sensor: I,
    south_sensor: I,
}

impl<O: OutputPin, I: InputPin> GpioIntersection<O, I> {
    /// `lamps` must be ordered as [`Signal::ALL`].
    pub fn new(lamps: [O; Signal::COUNT], west_sensor: I, south_sensor: I) -> Self {
        Self {
            lamps,
            west_sensor,
            south_sensor,
        }
    }

    /// Drive every lamp to its level in `pattern`.
    ///
    /// A failing line does not stop the remaining lines from being driven;
    /// the first failure is returned.
    pub fn try_write(&mut self, pattern: LightPattern) -> Result<(), PinError> {
        let mut first_err = None;
        for (signal, on) in pattern.levels() {
            if let Err(e) = self.lamps[signal.index()].set_state(PinState::from(on)) {
                first_err.get_or_insert(PinError::new(Line::Lamp(signal), &e));
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Read both detectors, failing on the first unreadable line.
    pub fn try_sample(&mut self) -> Result<SensorSample, PinError> {
        let west = read(&mut self.west_sensor, Line::WestSensor)?;
        let south = read(&mut self.south_sensor, Line::SouthSensor)?;
        Ok(SensorSample::new(west, south))
    }

    /// Give the pins back.
    pub fn release(self) -> ([O; Signal::COUNT], I, I) {
        (self.lamps, self.west_sensor, self.south_sensor)
    }
}

fn read<I: InputPin>(pin: &mut I, line: Line) -> Result<bool, PinError> {
    pin.is_high().map_err(|e| PinError::new(line, &e))
}

/// An unreadable detector counts as "no car".
fn read_or_clear<I: InputPin>(pin: &mut I, line: Line) -> bool {
    read(pin, line).unwrap_or_else(|e| {
        warn!("sensor read failed ({}), treating as no car", e);
        false
    })
}

// ── LightPort implementation ──────────────────────────────────

impl<O: OutputPin, I: InputPin> LightPort for GpioIntersection<O, I> {
    fn write(&mut self, pattern: LightPattern) {
        if let Err(e) = self.try_write(pattern) {
            error!("lamp write failed ({}) while showing {}", e, pattern);
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<O: OutputPin, I: InputPin> SensorPort for GpioIntersection<O, I> {
    fn sample(&mut self) -> SensorSample {
        SensorSample::new(
            read_or_clear(&mut self.west_sensor, Line::WestSensor),
            read_or_clear(&mut self.south_sensor, Line::SouthSensor),
        )
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// [`DelayPort`] over any `embedded-hal` delay, one tick at a time.
pub struct TickDelay<D> {
    delay: D,
    tick_period_ms: u32,
}

impl<D: DelayNs> TickDelay<D> {
    pub fn new(delay: D, tick_period_ms: u32) -> Self {
        Self {
            delay,
            tick_period_ms,
        }
    }
}

impl<D: DelayNs> DelayPort for TickDelay<D> {
    fn wait_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.delay.delay_ms(self.tick_period_ms);
        }
    }
}
