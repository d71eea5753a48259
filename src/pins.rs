//! GPIO pin assignments for the intersection controller board.
//!
//! Single source of truth — `main` builds every pin driver from this
//! module rather than hard-coding pin numbers.  Strapping pins (0, 3, 45,
//! 46) are deliberately unused.

use crate::fsm::signals::Signal;

// ---------------------------------------------------------------------------
// West approach signal head
// ---------------------------------------------------------------------------

pub const WEST_RED_GPIO: i32 = 4;
pub const WEST_YELLOW_GPIO: i32 = 5;
pub const WEST_GREEN_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// South approach signal head
// ---------------------------------------------------------------------------

pub const SOUTH_RED_GPIO: i32 = 7;
pub const SOUTH_YELLOW_GPIO: i32 = 15;
pub const SOUTH_GREEN_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Pedestrian head
// ---------------------------------------------------------------------------

pub const PEDESTRIAN_RED_GPIO: i32 = 17;
pub const PEDESTRIAN_GREEN_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Car detectors (inductive loop comparators, HIGH = car present)
// ---------------------------------------------------------------------------

pub const WEST_SENSOR_GPIO: i32 = 1;
pub const SOUTH_SENSOR_GPIO: i32 = 2;

/// GPIO number for a lamp.
pub const fn lamp_gpio(signal: Signal) -> i32 {
    match signal {
        Signal::WestRed => WEST_RED_GPIO,
        Signal::WestYellow => WEST_YELLOW_GPIO,
        Signal::WestGreen => WEST_GREEN_GPIO,
        Signal::SouthRed => SOUTH_RED_GPIO,
        Signal::SouthYellow => SOUTH_YELLOW_GPIO,
        Signal::SouthGreen => SOUTH_GREEN_GPIO,
        Signal::PedestrianRed => PEDESTRIAN_RED_GPIO,
        Signal::PedestrianGreen => PEDESTRIAN_GREEN_GPIO,
    }
}
