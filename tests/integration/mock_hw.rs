//! Mock platform for integration tests.
//!
//! The lamp/sensor mock and the delay mock share one call log so tests
//! can assert on the exact interleaving of write, wait and sample.

use intersection::app::events::AppEvent;
use intersection::app::ports::{DelayPort, EventSink, LightPort, SensorPort};
use intersection::fsm::signals::{LightPattern, SensorSample};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Write(LightPattern),
    Wait(u32),
    Sample(SensorSample),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

// ── MockIntersection ──────────────────────────────────────────

/// Plays back scripted sensor samples; once the script runs out it keeps
/// returning `fallback`.
pub struct MockIntersection {
    log: CallLog,
    script: VecDeque<SensorSample>,
    pub fallback: SensorSample,
}

#[allow(dead_code)]
impl MockIntersection {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            script: VecDeque::new(),
            fallback: SensorSample::default(),
        }
    }

    pub fn script(&mut self, samples: impl IntoIterator<Item = SensorSample>) {
        self.script.extend(samples);
    }

    pub fn writes(&self) -> Vec<LightPattern> {
        self.log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Write(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl LightPort for MockIntersection {
    fn write(&mut self, pattern: LightPattern) {
        self.log.borrow_mut().push(Call::Write(pattern));
    }
}

impl SensorPort for MockIntersection {
    fn sample(&mut self) -> SensorSample {
        let s = self.script.pop_front().unwrap_or(self.fallback);
        self.log.borrow_mut().push(Call::Sample(s));
        s
    }
}

// ── MockDelay ─────────────────────────────────────────────────

pub struct MockDelay {
    log: CallLog,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }

    pub fn waits(&self) -> Vec<u32> {
        self.log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Wait(t) => Some(*t),
                _ => None,
            })
            .collect()
    }
}

impl DelayPort for MockDelay {
    fn wait_ticks(&mut self, ticks: u32) {
        self.log.borrow_mut().push(Call::Wait(ticks));
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

/// Fresh mocks sharing one call log.
pub fn platform() -> (MockIntersection, MockDelay, LogSink, CallLog) {
    let log: CallLog = Rc::default();
    (
        MockIntersection::new(log.clone()),
        MockDelay::new(log.clone()),
        LogSink::new(),
        log,
    )
}
