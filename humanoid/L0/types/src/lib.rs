//! Core types for humanoid muscle control.
//!
//! This crate provides the shared vocabulary of the humanoid pose crates:
//!
//! - [`MuscleId`] and the reference catalog ([`HUMANOID_MUSCLE_NAMES`], [`muscles`])
//! - [`RigDescriptor`] / [`HumanoidRig`] - the channel layout of a skeleton
//! - [`PoseSolver`] - the consumer of a finished muscle array
//! - [`PoseError`] - every recoverable failure of the store, composer and applier
//!
//! # Muscles
//!
//! A muscle is one normalized degree of freedom of a humanoid skeleton. Its
//! value lives in `[-1, 1]`; the canonical index of a muscle is its position
//! in the rig's channel list.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used in:
//!
//! - Animation tooling and editors
//! - Headless pose generation
//! - Bindings to other engines' humanoid solvers
//!
//! # Example
//!
//! ```
//! use humanoid_types::{muscles, HumanoidRig, MuscleId, RigDescriptor};
//!
//! let rig = HumanoidRig::reference();
//! assert_eq!(rig.muscle_count(), 95);
//! assert_eq!(MuscleId::from_name("LeftForearmStretch"), Some(muscles::LEFT_FOREARM_STRETCH));
//! ```

#![doc(html_root_url = "https://docs.rs/humanoid-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod error;
mod muscle;
mod rig;

pub use error::PoseError;
pub use muscle::{HUMANOID_MUSCLE_COUNT, HUMANOID_MUSCLE_NAMES, MuscleId, muscles};
pub use rig::{HumanoidRig, PoseSolver, RigDescriptor};

/// Result type for pose operations.
pub type Result<T> = std::result::Result<T, PoseError>;

/// Clamp a value into the normalized muscle domain `[-1, 1]`.
///
/// Returns `None` for `NaN`, which has no place in the domain.
#[must_use]
pub fn clamp_muscle(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(-1.0, 1.0))
    }
}
