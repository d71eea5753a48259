//! Error types for the intersection controller.
//!
//! The control loop itself has no failure path: the state table is total
//! and every port call is infallible from the FSM's point of view.  What
//! can fail is around it: a bad build-time configuration, or a GPIO line
//! the hardware adapter could not drive or read.  Both are small `Copy`
//! enums so they can be logged and passed around without allocation.

use core::fmt;

use embedded_hal::digital::ErrorKind;

use crate::fsm::signals::Signal;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `standard_wait_ticks` is zero.
    ZeroStandardWait,
    /// `tick_period_ms` is zero.
    ZeroTickPeriod,
    /// The standard wait is so short that the flash dwell rounds to zero.
    DwellTooShort { standard_wait_ticks: u32 },
    /// An odd standard wait cannot be halved into the caution dwell.
    OddStandardWait { standard_wait_ticks: u32 },
    /// The JSON override could not be parsed.
    Malformed { line: usize, column: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStandardWait => write!(f, "standard wait must be at least one tick"),
            Self::ZeroTickPeriod => write!(f, "tick period must be at least 1 ms"),
            Self::DwellTooShort {
                standard_wait_ticks,
            } => write!(
                f,
                "standard wait of {standard_wait_ticks} ticks leaves a zero-length flash dwell"
            ),
            Self::OddStandardWait {
                standard_wait_ticks,
            } => write!(
                f,
                "standard wait of {standard_wait_ticks} ticks is odd; caution needs exactly half"
            ),
            Self::Malformed { line, column } => {
                write!(f, "malformed config JSON at {line}:{column}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed {
            line: e.line(),
            column: e.column(),
        }
    }
}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

/// A physical line owned by the hardware adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Lamp(Signal),
    WestSensor,
    SouthSensor,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lamp(signal) => write!(f, "{signal} lamp"),
            Self::WestSensor => write!(f, "west car sensor"),
            Self::SouthSensor => write!(f, "south car sensor"),
        }
    }
}

/// A GPIO write or read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinError {
    pub line: Line,
    pub kind: ErrorKind,
}

impl PinError {
    pub fn new(line: Line, err: &impl embedded_hal::digital::Error) -> Self {
        Self {
            line,
            kind: err.kind(),
        }
    }
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.kind)
    }
}

impl std::error::Error for PinError {}
