//! Intersection controller library.
//!
//! Exposes the hardware-agnostic modules for integration testing and
//! host simulation.  Everything ESP-IDF-specific lives in `main.rs`
//! behind the `espidf` feature.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod pins;
