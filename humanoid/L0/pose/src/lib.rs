//! Composite pose parameters for humanoid rigs.
//!
//! This crate sits on top of [`humanoid_muscle`]: instead of 95 raw muscle
//! channels, callers edit a catalog of human-facing controls. Most are 1:1
//! aliases of a muscle; a few are macros ("Standing", "CurlInOut", whole-hand
//! finger controls) that derive other parameters by fixed linear scales.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 PoseApplier                  │
//! │  ┌──────────────┐  writes   ┌─────────────┐  │
//! │  │ PoseComposer │ ────────► │ MuscleStore │  │
//! │  │  + cascade   │  (remap)  │  [-1, 1]^N  │  │
//! │  └──────────────┘           └─────────────┘  │
//! └──────────────────────────────────────────────┘
//!                                     │ muscles()
//!                                     ▼
//!                                PoseSolver
//! ```
//!
//! - [`catalog`] declares every parameter, its range, default and edges
//! - [`PoseComposer`] stores parameter values and runs cascades
//! - [`PoseApplier`] owns a store and a composer and wires them together
//!
//! A cascade is synchronous and completes before the edit returns. Each
//! parameter fires at most once per cascade and each affected muscle
//! receives exactly one write.
//!
//! # Quick Start
//!
//! ```
//! use humanoid_muscle::MuscleStore;
//! use humanoid_pose::{PoseApplier, PoseComposer};
//! use humanoid_types::HumanoidRig;
//!
//! let store = MuscleStore::with_rig(&HumanoidRig::reference())?;
//! let mut applier = PoseApplier::new(store, PoseComposer::new());
//!
//! applier.apply_pose()?;
//! assert_eq!(applier.muscles()[42], 1.0); // LeftForearmStretch
//!
//! applier.set_composite_by_name("Standing", 1.0)?;
//! assert_eq!(applier.muscles()[24], 1.0); // LeftLowerLegStretch
//!
//! applier.reset_pose();
//! assert!(applier.muscles().iter().all(|&v| v == 0.0));
//! # Ok::<(), humanoid_types::PoseError>(())
//! ```
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. Concurrent use
//! must be serialized by the caller; nothing here locks or blocks.

#![doc(html_root_url = "https://docs.rs/humanoid-pose/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::similar_names
)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod applier;
pub mod catalog;
mod cascade;
pub mod composer;
pub mod config;
pub mod settings;

pub use applier::PoseApplier;
pub use cascade::CascadeReport;
pub use catalog::{
    Derivation, PARAM_COUNT, PARAMS, ParamGroup, ParamId, ParamRange, ParamSpec, params,
};
pub use composer::PoseComposer;
pub use config::{PoseConfig, ResetPolicy};
pub use settings::PoseSettings;

pub use humanoid_muscle::{MuscleSink, NullSink};
