//! The intersection state table and its transition handlers.
//!
//! Each row is plain data (output, dwell) plus one `fn` pointer for the
//! transition rule.  Every handler matches exhaustively on the sample, so
//! an unmapped (state, sample) pair is a compile error rather than a
//! runtime fallback.
//!
//! ```text
//!  WEST ──[south]──▶ WEST CAUTION ──[south]──▶ SOUTH ──[west]──▶ SOUTH CAUTION
//!   ▲ ▲                 │    │                   ▲                 │    │  │
//!   │ └──────[west]─────┘    │                   └─────[south]─────┘    │  │
//!   │                        └──[none]──▶ WALK ◀──────────[none]────────┘  │
//!   ├──────────────────────────────────────┼─────────────────[west]────────┘
//!   │                         FLASH 1 … FLASH 9 (unconditional)
//!   │                                      ▼
//!   └───────────[south clear]──────── WALK END ──[south car]──▶ WALK
//! ```

use super::signals::{LightPattern, SensorSample, Signal};
use super::{Dwell, StateDescriptor, StateId};

// ═══════════════════════════════════════════════════════════════════════════
//  Output patterns
// ═══════════════════════════════════════════════════════════════════════════

const WEST_GO: LightPattern =
    LightPattern::lit(&[Signal::WestGreen, Signal::SouthRed, Signal::PedestrianRed]);
const WEST_CAUTION: LightPattern =
    LightPattern::lit(&[Signal::WestYellow, Signal::SouthRed, Signal::PedestrianRed]);
const SOUTH_GO: LightPattern =
    LightPattern::lit(&[Signal::WestRed, Signal::SouthGreen, Signal::PedestrianRed]);
const SOUTH_CAUTION: LightPattern =
    LightPattern::lit(&[Signal::WestRed, Signal::SouthYellow, Signal::PedestrianRed]);
const WALK: LightPattern =
    LightPattern::lit(&[Signal::WestRed, Signal::SouthRed, Signal::PedestrianGreen]);
// Pedestrian "don't walk" blink: both streets held red, pedestrian red toggles.
const FLASH_ON: LightPattern =
    LightPattern::lit(&[Signal::WestRed, Signal::SouthRed, Signal::PedestrianRed]);
const FLASH_OFF: LightPattern = LightPattern::lit(&[Signal::WestRed, Signal::SouthRed]);

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

const fn row(
    id: StateId,
    name: &'static str,
    output: LightPattern,
    dwell: Dwell,
    next: fn(SensorSample) -> StateId,
) -> StateDescriptor {
    StateDescriptor {
        id,
        name,
        output,
        dwell,
        next,
    }
}

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        row(StateId::West, "West", WEST_GO, Dwell::Standard, west_next),
        row(StateId::WestCaution, "WestCaution", WEST_CAUTION, Dwell::Caution, west_caution_next),
        row(StateId::South, "South", SOUTH_GO, Dwell::Standard, south_next),
        row(StateId::SouthCaution, "SouthCaution", SOUTH_CAUTION, Dwell::Caution, south_caution_next),
        row(StateId::Walk, "Walk", WALK, Dwell::Caution, |_| StateId::WalkFlash1),
        row(StateId::WalkFlash1, "WalkFlash1", FLASH_ON, Dwell::Flash, |_| StateId::WalkFlash2),
        row(StateId::WalkFlash2, "WalkFlash2", FLASH_OFF, Dwell::Flash, |_| StateId::WalkFlash3),
        row(StateId::WalkFlash3, "WalkFlash3", FLASH_ON, Dwell::Flash, |_| StateId::WalkFlash4),
        row(StateId::WalkFlash4, "WalkFlash4", FLASH_OFF, Dwell::Flash, |_| StateId::WalkFlash5),
        row(StateId::WalkFlash5, "WalkFlash5", FLASH_ON, Dwell::Flash, |_| StateId::WalkFlash6),
        row(StateId::WalkFlash6, "WalkFlash6", FLASH_OFF, Dwell::Flash, |_| StateId::WalkFlash7),
        row(StateId::WalkFlash7, "WalkFlash7", FLASH_ON, Dwell::Flash, |_| StateId::WalkFlash8),
        row(StateId::WalkFlash8, "WalkFlash8", FLASH_OFF, Dwell::Flash, |_| StateId::WalkFlash9),
        row(StateId::WalkFlash9, "WalkFlash9", FLASH_ON, Dwell::Flash, |_| StateId::WalkEnd),
        row(StateId::WalkEnd, "WalkEnd", FLASH_OFF, Dwell::Flash, walk_end_next),
    ]
}

/// Transition rule for `state`, without building an engine.
pub fn next_state(state: StateId, sample: SensorSample) -> StateId {
    (build_state_table()[state.index()].next)(sample)
}

// ═══════════════════════════════════════════════════════════════════════════
//  Vehicle right-of-way
// ═══════════════════════════════════════════════════════════════════════════

// Tie-break: with both approaches occupied the green street always yields,
// so the two streets alternate instead of one holding indefinitely.

fn west_next(sample: SensorSample) -> StateId {
    match (sample.west, sample.south) {
        (_, false) => StateId::West,
        (_, true) => StateId::WestCaution,
    }
}

fn west_caution_next(sample: SensorSample) -> StateId {
    match (sample.west, sample.south) {
        (false, false) => StateId::Walk,
        (true, false) => StateId::West,
        (_, true) => StateId::South,
    }
}

fn south_next(sample: SensorSample) -> StateId {
    match (sample.west, sample.south) {
        (false, _) => StateId::South,
        (true, _) => StateId::SouthCaution,
    }
}

fn south_caution_next(sample: SensorSample) -> StateId {
    match (sample.west, sample.south) {
        (false, false) => StateId::Walk,
        (false, true) => StateId::South,
        (true, _) => StateId::West,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Pedestrian terminal decision
// ═══════════════════════════════════════════════════════════════════════════

fn walk_end_next(sample: SensorSample) -> StateId {
    if sample.south {
        StateId::Walk
    } else {
        StateId::West
    }
}
