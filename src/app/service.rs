//! Application service — the drive loop.
//!
//! [`Controller`] owns the FSM and its configuration.  All I/O flows
//! through port traits injected at call sites, making the whole loop
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       Controller        │
//!   LightPort ◀── │  Fsm · dwell · events   │ ──▶ DelayPort
//!                 └────────────────────────┘
//! ```
//!
//! Each iteration runs in a fixed order: write the current state's
//! pattern, wait its dwell, sample the sensors, advance.  Sampling before
//! the wait completes would shorten the time a state's lamps are shown.

use log::info;

use crate::config::ControllerConfig;
use crate::error::ConfigError;
use crate::fsm::signals::SensorSample;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, TelemetryData};
use super::ports::{DelayPort, EventSink, LightPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// The intersection controller.
pub struct Controller {
    fsm: Fsm,
    config: ControllerConfig,
    last_sample: SensorSample,
    pedestrian_phases: u64,
    /// Delay ticks waited since start.
    elapsed_ticks: u64,
}

impl Controller {
    /// State entered at power-on.
    pub const INITIAL_STATE: StateId = StateId::West;

    /// Construct the controller from a validated configuration.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            fsm: Fsm::new(build_state_table(), Self::INITIAL_STATE),
            config,
            last_sample: SensorSample::default(),
            pedestrian_phases: 0,
            elapsed_ticks: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial state.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!(
            "Controller started in {:?} (standard wait {} ms)",
            self.fsm.current_state(),
            self.config.ticks_to_ms(self.config.standard_wait_ticks)
        );
    }

    /// Run one loop iteration: write → wait → sample → advance.
    ///
    /// The `hw` parameter satisfies **both** [`LightPort`] and
    /// [`SensorPort`], mirroring a single GPIO block that owns the lamps
    /// and the detectors.
    pub fn step(
        &mut self,
        hw: &mut (impl LightPort + SensorPort),
        delay: &mut impl DelayPort,
        sink: &mut impl EventSink,
    ) -> StateId {
        let from = self.fsm.current_state();

        // 1. Commit this state's lamps
        hw.write(self.fsm.output());

        // 2. Hold for the dwell
        let ticks = self.fsm.dwell_ticks(&self.config);
        delay.wait_ticks(ticks);
        self.elapsed_ticks += u64::from(ticks);

        // 3. Sample once, after the hold
        let sample = hw.sample();
        self.last_sample = sample;

        // 4. Advance
        let to = self.fsm.advance(sample);

        // 5. Publish
        if to != from {
            sink.emit(&AppEvent::StateChanged { from, to, sample });
        }
        if to == StateId::Walk {
            self.pedestrian_phases += 1;
            sink.emit(&AppEvent::PedestrianPhase {
                count: self.pedestrian_phases,
            });
        }
        let every = u64::from(self.config.telemetry_interval_steps);
        if every != 0 && self.fsm.steps() % every == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }

        to
    }

    /// Drive the intersection forever.
    pub fn run(
        &mut self,
        hw: &mut (impl LightPort + SensorPort),
        delay: &mut impl DelayPort,
        sink: &mut impl EventSink,
    ) -> ! {
        self.start(sink);
        loop {
            self.step(hw, delay, sink);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn fsm(&self) -> &Fsm {
        &self.fsm
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Build a telemetry snapshot of the loop.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            state: self.fsm.current_state(),
            output: self.fsm.output(),
            last_sample: self.last_sample,
            steps: self.fsm.steps(),
            pedestrian_phases: self.pedestrian_phases,
            uptime_ms: self.elapsed_ticks * u64::from(self.config.tick_period_ms),
        }
    }
}
