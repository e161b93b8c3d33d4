//! Integration tests for the humanoid pose crates.
//!
//! These tests drive the full stack through public APIs only:
//! - Muscle store contract (clamping, bounds, name bijection, reset)
//! - Macro cascades into a bound store (scale tables, write sets)
//! - Twist-pair relays and re-entry
//! - End-to-end pose scenarios through the applier
//! - Binding against custom rigs

pub mod curl_cascade;
pub mod pose_scenarios;
pub mod store_properties;
pub mod twist_pairs;
