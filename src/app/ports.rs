//! Port traits — the boundary between the controller and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! The platform layer (GPIO, timers) implements these traits.  The
//! [`Controller`](super::service::Controller) consumes them via generics,
//! so the FSM never touches hardware directly.
//!
//! All three capability ports are infallible from the controller's point
//! of view.  Adapters that can fail underneath are expected to log and
//! carry on; the loop has no recovery path to hand an error to.

use crate::fsm::signals::{LightPattern, SensorSample};

// ───────────────────────────────────────────────────────────────
// Light port (domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: commits a full lamp pattern.
pub trait LightPort {
    /// Drive every lamp in `pattern` high and every other owned lamp low.
    fn write(&mut self, pattern: LightPattern);
}

// ───────────────────────────────────────────────────────────────
// Sensor port (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the current level of both car detectors.
pub trait SensorPort {
    fn sample(&mut self) -> SensorSample;
}

// ───────────────────────────────────────────────────────────────
// Delay port
// ───────────────────────────────────────────────────────────────

/// Blocking wait in controller ticks (10 ms by default).
pub trait DelayPort {
    fn wait_ticks(&mut self, ticks: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
