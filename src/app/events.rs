//! Outbound application events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::fsm::StateId;
use crate::fsm::signals::{LightPattern, SensorSample};

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started (carries initial state).
    Started(StateId),

    /// The FSM moved to a different state.  Self-loops are not reported.
    StateChanged {
        from: StateId,
        to: StateId,
        sample: SensorSample,
    },

    /// The pedestrian phase was entered from a vehicle state or repeated.
    PedestrianPhase { count: u64 },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryData {
    pub state: StateId,
    pub output: LightPattern,
    pub last_sample: SensorSample,
    /// Loop iterations since start.
    pub steps: u64,
    /// Times the pedestrian phase has begun.
    pub pedestrian_phases: u64,
    /// Controller uptime derived from the dwell ticks waited so far.
    pub uptime_ms: u64,
}
