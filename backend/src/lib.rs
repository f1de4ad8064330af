//! MechTrack Backend Library
//!
//! This library exposes modules for testing and external use.
//! The server binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod decoder;
pub mod error;
pub mod orchestrator;
pub mod schedule;
/// Application state management
///
/// Holds the upstream clients shared across requests.
pub mod state;
pub mod vin;
