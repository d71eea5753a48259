//! Table-driven Moore finite state machine for the intersection.
//!
//! Classic embedded FSM pattern: one row per state, indexed by the state
//! identity.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateTable                                                  │
//! │  ┌──────────────┬──────────────┬──────────┬────────────────┐ │
//! │  │ StateId      │ output       │ dwell    │ next           │ │
//! │  ├──────────────┼──────────────┼──────────┼────────────────┤ │
//! │  │ West         │ W:G S:R P:R  │ Standard │ fn(sample)->Id │ │
//! │  │ WestCaution  │ W:Y S:R P:R  │ Caution  │ fn(sample)->Id │ │
//! │  │ ...          │ ...          │ ...      │ ...            │ │
//! │  │ WalkEnd      │ W:R S:R P:-  │ Flash    │ fn(sample)->Id │ │
//! │  └──────────────┴──────────────┴──────────┴────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The output of a state is a constant row entry and never depends on the
//! sample; the sample only selects the next row.  The drive loop that
//! sequences write → wait → sample → advance lives in
//! [`Controller`](crate::app::service::Controller).

pub mod signals;
pub mod states;

use log::debug;

use crate::config::ControllerConfig;
use signals::{LightPattern, SensorSample};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of every controller state.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    West = 0,
    WestCaution = 1,
    South = 2,
    SouthCaution = 3,
    Walk = 4,
    WalkFlash1 = 5,
    WalkFlash2 = 6,
    WalkFlash3 = 7,
    WalkFlash4 = 8,
    WalkFlash5 = 9,
    WalkFlash6 = 10,
    WalkFlash7 = 11,
    WalkFlash8 = 12,
    WalkFlash9 = 13,
    WalkEnd = 14,
}

impl StateId {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 15;

    /// Every state in table order.
    pub const ALL: [StateId; Self::COUNT] = [
        Self::West,
        Self::WestCaution,
        Self::South,
        Self::SouthCaution,
        Self::Walk,
        Self::WalkFlash1,
        Self::WalkFlash2,
        Self::WalkFlash3,
        Self::WalkFlash4,
        Self::WalkFlash5,
        Self::WalkFlash6,
        Self::WalkFlash7,
        Self::WalkFlash8,
        Self::WalkFlash9,
        Self::WalkEnd,
    ];

    /// The pedestrian phase from walk signal to terminal decision, in order.
    pub const PEDESTRIAN_SEQUENCE: [StateId; 11] = [
        Self::Walk,
        Self::WalkFlash1,
        Self::WalkFlash2,
        Self::WalkFlash3,
        Self::WalkFlash4,
        Self::WalkFlash5,
        Self::WalkFlash6,
        Self::WalkFlash7,
        Self::WalkFlash8,
        Self::WalkFlash9,
        Self::WalkEnd,
    ];

    /// Row of this state in the table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `true` for every state of the pedestrian phase.
    pub const fn is_pedestrian(self) -> bool {
        self.index() >= Self::Walk.index()
    }
}

// ---------------------------------------------------------------------------
// Dwell classes
// ---------------------------------------------------------------------------

/// How long a state holds its output before the next sample is taken.
///
/// Resolved against [`ControllerConfig::standard_wait_ticks`] so that the
/// ratios between classes are fixed while the base period is tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dwell {
    /// Full right-of-way hold.
    Standard,
    /// Yellow and walk phases: half the standard hold.
    Caution,
    /// One pedestrian blink step: a fifteenth of the standard hold.
    Flash,
}

impl Dwell {
    pub const CAUTION_DIVISOR: u32 = 2;
    pub const FLASH_DIVISOR: u32 = 15;

    /// Dwell in 10 ms ticks for a given standard hold.
    pub const fn ticks(self, standard_wait_ticks: u32) -> u32 {
        match self {
            Self::Standard => standard_wait_ticks,
            Self::Caution => standard_wait_ticks / Self::CAUTION_DIVISOR,
            Self::Flash => standard_wait_ticks / Self::FLASH_DIVISOR,
        }
    }
}

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Per-state transition rule.  Plain `fn` so the table stays `'static`
/// data with no closures and no heap.
pub type TransitionFn = fn(SensorSample) -> StateId;

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    /// Lamps asserted while the state is current.
    pub output: LightPattern,
    pub dwell: Dwell,
    pub next: TransitionFn,
}

impl StateDescriptor {
    /// Dwell of this state in 10 ms ticks.
    pub fn dwell_ticks(&self, config: &ControllerConfig) -> u32 {
        self.dwell.ticks(config.standard_wait_ticks)
    }
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine: a state table plus the current-state
/// cursor.
pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    current: StateId,
    /// Number of transitions taken since construction (wraps at u64::MAX).
    steps: u64,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    ///
    /// Panics if the rows are not in [`StateId`] order.
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        assert!(
            table.iter().enumerate().all(|(i, row)| row.id.index() == i),
            "state table rows out of order"
        );
        Self {
            table,
            current: initial,
            steps: 0,
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// Table row for `id`.
    pub fn descriptor(&self, id: StateId) -> &StateDescriptor {
        &self.table[id.index()]
    }

    /// Lamps to assert for the current state.
    pub fn output(&self) -> LightPattern {
        self.descriptor(self.current).output
    }

    /// Dwell of the current state in 10 ms ticks.
    pub fn dwell_ticks(&self, config: &ControllerConfig) -> u32 {
        self.descriptor(self.current).dwell_ticks(config)
    }

    /// Compute where `sample` would take the machine, without moving.
    pub fn next_state(&self, sample: SensorSample) -> StateId {
        (self.descriptor(self.current).next)(sample)
    }

    /// Apply the current state's transition rule and move the cursor.
    pub fn advance(&mut self, sample: SensorSample) -> StateId {
        let next = self.next_state(sample);
        if next != self.current {
            debug!(
                "FSM transition: {} -> {} (sample={})",
                self.descriptor(self.current).name,
                self.descriptor(next).name,
                sample
            );
        }
        self.current = next;
        self.steps = self.steps.wrapping_add(1);
        next
    }

    /// How many times [`advance`](Self::advance) has run.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
