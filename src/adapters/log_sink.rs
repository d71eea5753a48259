//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured controller events to
//! the `log` facade (UART / USB-CDC on the device, whatever logger the
//! host installs otherwise).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            AppEvent::StateChanged { from, to, sample } => {
                debug!("STATE | {:?} -> {:?} | sensors={}", from, to, sample);
            }
            AppEvent::PedestrianPhase { count } => {
                info!("WALK  | pedestrian phase #{}", count);
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | state={:?} | lamps={} | sensors={} | steps={} | walks={} | up={}ms",
                    t.state, t.output, t.last_sample, t.steps, t.pedestrian_phases, t.uptime_ms,
                );
            }
        }
    }
}
