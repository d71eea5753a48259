//! Application core — pure domain logic, zero I/O.
//!
//! This module owns the drive loop around the FSM.  All interaction with
//! lamps, sensors and time happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
