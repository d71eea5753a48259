//! Intersection Controller — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  GpioIntersection        TickDelay           LogEventSink      │
//! │  (LightPort+SensorPort)  (DelayPort)         (EventSink)       │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Controller (pure logic)                   │    │
//! │  │  Fsm · state table · write → wait → sample → advance   │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use log::info;

use intersection::adapters::hardware::{GpioIntersection, TickDelay};
use intersection::adapters::log_sink::LogEventSink;
use intersection::app::service::Controller;
use intersection::config::ControllerConfig;
use intersection::fsm::signals::Signal;
use intersection::pins;

fn sensor(gpio: i32) -> Result<PinDriver<'static, AnyIOPin, Input>> {
    // SAFETY: every GPIO number comes from `pins`, is claimed exactly once
    // here at boot, and no other driver is constructed for it.
    let mut pin = PinDriver::input(unsafe { AnyIOPin::new(gpio) })?;
    pin.set_pull(Pull::Down)?;
    Ok(pin)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Intersection controller v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Build-time config (or defaults) ────────────────────
    let config = ControllerConfig::from_build_env()?;

    // ── 3. Claim the lamps and detectors ──────────────────────
    let mut lamps = Vec::with_capacity(Signal::COUNT);
    for signal in Signal::ALL {
        // SAFETY: see `sensor`.
        let pin = unsafe { AnyOutputPin::new(pins::lamp_gpio(signal)) };
        lamps.push(PinDriver::output(pin)?);
    }
    let lamps: [PinDriver<'static, AnyOutputPin, Output>; Signal::COUNT] = lamps
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected {} lamp drivers", Signal::COUNT))?;

    let mut hw = GpioIntersection::new(
        lamps,
        sensor(pins::WEST_SENSOR_GPIO)?,
        sensor(pins::SOUTH_SENSOR_GPIO)?,
    );
    let mut delay = TickDelay::new(FreeRtos, config.tick_period_ms);
    let mut sink = LogEventSink::new();

    // ── 4. Run forever ────────────────────────────────────────
    let mut controller = Controller::new(config)?;
    info!("System ready. Entering control loop.");
    controller.run(&mut hw, &mut delay, &mut sink)
}
