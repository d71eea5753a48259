//! Integration tests for the Controller → FSM → ports pipeline.

use super::mock_hw::{Call, platform};

use intersection::app::events::AppEvent;
use intersection::app::service::Controller;
use intersection::config::ControllerConfig;
use intersection::fsm::StateId;
use intersection::fsm::signals::{SensorSample, Signal};

const NONE: SensorSample = SensorSample::new(false, false);
const SOUTH: SensorSample = SensorSample::new(false, true);
const WEST: SensorSample = SensorSample::new(true, false);
const BOTH: SensorSample = SensorSample::new(true, true);

fn make_controller() -> Controller {
    Controller::new(ControllerConfig {
        telemetry_interval_steps: 0,
        ..ControllerConfig::default()
    })
    .unwrap()
}

// ── Loop ordering ─────────────────────────────────────────────

#[test]
fn every_iteration_writes_then_waits_then_samples() {
    let (mut hw, mut delay, mut sink, log) = platform();
    hw.script([SOUTH, SOUTH, WEST, NONE, BOTH, WEST, SOUTH, NONE].repeat(4));
    let mut c = make_controller();

    for _ in 0..30 {
        c.step(&mut hw, &mut delay, &mut sink);
    }

    let log = log.borrow();
    assert_eq!(log.len(), 30 * 3);
    for (i, chunk) in log.chunks(3).enumerate() {
        assert!(
            matches!(chunk, [Call::Write(_), Call::Wait(_), Call::Sample(_)]),
            "iteration {} out of order: {:?}",
            i,
            chunk
        );
    }
}

#[test]
fn written_pattern_belongs_to_the_state_being_left() {
    let (mut hw, mut delay, mut sink, log) = platform();
    hw.script([SOUTH, NONE, BOTH, SOUTH, WEST, WEST, SOUTH, SOUTH].repeat(3));
    let mut c = make_controller();

    for i in 0..24 {
        let before = c.state();
        let expected = c.fsm().descriptor(before).output;
        c.step(&mut hw, &mut delay, &mut sink);
        assert_eq!(log.borrow()[i * 3], Call::Write(expected), "step {i} in {before:?}");
    }
}

// ── Dwell times ───────────────────────────────────────────────

#[test]
fn caution_wait_is_half_of_green_wait() {
    let (mut hw, mut delay, mut sink, _) = platform();
    hw.script([SOUTH, SOUTH, WEST, WEST]);
    let mut c = make_controller();

    let mut visited = Vec::new();
    for _ in 0..4 {
        visited.push(c.state());
        c.step(&mut hw, &mut delay, &mut sink);
    }

    assert_eq!(
        visited,
        vec![StateId::West, StateId::WestCaution, StateId::South, StateId::SouthCaution]
    );
    let waits = delay.waits();
    assert_eq!(waits, vec![50, 25, 50, 25]);
    assert_eq!(waits[1] * 2, waits[0]);
    assert_eq!(waits[3] * 2, waits[2]);
}

#[test]
fn pedestrian_waits_are_a_fifteenth_of_green() {
    let (mut hw, mut delay, mut sink, _) = platform();
    hw.script([SOUTH, NONE]);
    hw.fallback = BOTH;
    let mut c = make_controller();

    for _ in 0..13 {
        c.step(&mut hw, &mut delay, &mut sink);
    }

    let mut want: Vec<u32> = vec![50, 25, 25];
    want.extend([50 / 15; 10]);
    assert_eq!(delay.waits(), want);
    // WalkEnd saw a south car, so the phase starts over.
    assert_eq!(c.state(), StateId::Walk);
}

// ── Moore output ──────────────────────────────────────────────

#[test]
fn lamps_depend_on_state_not_sensors() {
    let mut firsts = Vec::new();
    for sample in SensorSample::ALL {
        let (mut hw, mut delay, mut sink, _) = platform();
        hw.script([sample]);
        let mut c = make_controller();
        c.step(&mut hw, &mut delay, &mut sink);
        firsts.push(hw.writes()[0]);
    }
    assert!(firsts.windows(2).all(|w| w[0] == w[1]), "{firsts:?}");
    assert!(firsts[0].is_lit(Signal::WestGreen));
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn idle_intersection_holds_west_green() {
    let (mut hw, mut delay, mut sink, _) = platform();
    let mut c = make_controller();
    for _ in 0..20 {
        assert_eq!(c.step(&mut hw, &mut delay, &mut sink), StateId::West);
    }
    assert!(sink.events.is_empty());
    assert!(hw.writes().windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn heavy_traffic_alternates_streets_without_walk() {
    let (mut hw, mut delay, mut sink, _) = platform();
    hw.fallback = BOTH;
    let mut c = make_controller();

    let mut visited = Vec::new();
    for _ in 0..40 {
        visited.push(c.step(&mut hw, &mut delay, &mut sink));
    }

    let cycle = [StateId::WestCaution, StateId::South, StateId::SouthCaution, StateId::West];
    for (i, s) in visited.iter().enumerate() {
        assert_eq!(*s, cycle[i % 4], "step {i}");
    }
    assert!(!sink.events.iter().any(|e| matches!(e, AppEvent::PedestrianPhase { .. })));
}

#[test]
fn pedestrian_phase_repeats_while_south_car_waits_then_releases_west() {
    let (mut hw, mut delay, mut sink, _) = platform();
    let mut script = vec![SOUTH, SOUTH, WEST, NONE];
    script.extend([NONE; 10]);
    script.push(SOUTH); // WalkEnd: south car → walk again
    script.extend([WEST; 10]);
    script.push(NONE); // WalkEnd: clear → west
    hw.script(script);
    let mut c = make_controller();

    for _ in 0..26 {
        c.step(&mut hw, &mut delay, &mut sink);
    }

    assert_eq!(c.state(), StateId::West);
    let walks: Vec<u64> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::PedestrianPhase { count } => Some(*count),
            _ => None,
        })
        .collect();
    assert_eq!(walks, vec![1, 2]);

    let last = sink.events.last().unwrap();
    assert_eq!(
        *last,
        AppEvent::StateChanged {
            from: StateId::WalkEnd,
            to: StateId::West,
            sample: NONE,
        }
    );
}

#[test]
fn pedestrian_blink_toggles_red_hand() {
    let (mut hw, mut delay, mut sink, _) = platform();
    hw.script([SOUTH, NONE]);
    let mut c = make_controller();
    for _ in 0..13 {
        c.step(&mut hw, &mut delay, &mut sink);
    }

    let writes = hw.writes();
    assert!(writes[2].is_lit(Signal::PedestrianGreen));
    let red: Vec<bool> = writes[3..13].iter().map(|p| p.is_lit(Signal::PedestrianRed)).collect();
    assert_eq!(
        red,
        vec![true, false, true, false, true, false, true, false, true, false]
    );
    for p in &writes[2..13] {
        assert!(p.is_lit(Signal::WestRed) && p.is_lit(Signal::SouthRed));
    }
}
