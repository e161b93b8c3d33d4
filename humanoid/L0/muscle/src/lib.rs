//! Normalized muscle channels for humanoid rigs.
//!
//! This crate owns the lowest layer of the humanoid pose stack: a flat,
//! fixed-size array of muscle values, one per named degree of freedom of the
//! rig. Everything above it (composite parameters, macro cascades, pose
//! application) eventually lands here as `(muscle, value)` writes.
//!
//! ```text
//!   composite edit ──► cascade ──► MuscleSink::write(muscle, value)
//!                                          │
//!                                          ▼
//!                              ┌──────────────────────┐
//!                              │     MuscleStore      │
//!                              │  clamp to [-1, 1]    │
//!                              │  values: DVector     │
//!                              └──────────┬───────────┘
//!                                         │ pulled after apply
//!                                         ▼
//!                                    PoseSolver
//! ```
//!
//! # Quick Start
//!
//! ```
//! use humanoid_muscle::MuscleStore;
//! use humanoid_types::HumanoidRig;
//!
//! let mut store = MuscleStore::with_rig(&HumanoidRig::reference())?;
//!
//! store.set_by_name("LeftForearmStretch", 1.5)?;
//! assert_eq!(store.get(42)?, 1.0); // clamped
//!
//! store.reset_all()?;
//! assert!(store.values().iter().all(|&v| v == 0.0));
//! # Ok::<(), humanoid_types::PoseError>(())
//! ```
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. The store never
//! pushes values anywhere; a pose solver pulls [`MuscleStore::values`] when it
//! is ready.

#![doc(html_root_url = "https://docs.rs/humanoid-muscle/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod store;

pub use store::MuscleStore;

use humanoid_types::MuscleId;

/// Receiver of muscle writes produced by a cascade.
///
/// This is the single seam between the composite-parameter layer and the
/// muscle store: the composer only ever calls [`write`](Self::write) (and
/// [`clear`](Self::clear) on reset), never the store directly.
pub trait MuscleSink {
    /// Receive the value of one muscle.
    fn write(&mut self, muscle: MuscleId, value: f64);

    /// Zero every muscle the sink manages.
    fn clear(&mut self) {}
}

impl<F> MuscleSink for F
where
    F: FnMut(MuscleId, f64),
{
    fn write(&mut self, muscle: MuscleId, value: f64) {
        self(muscle, value);
    }
}

impl MuscleSink for MuscleStore {
    /// Writes by identifier; failures are logged by the store and dropped.
    fn write(&mut self, muscle: MuscleId, value: f64) {
        if let Err(err) = self.set_by_id(muscle, value) {
            tracing::trace!(%muscle, "dropped muscle write: {err}");
        }
    }

    fn clear(&mut self) {
        if let Err(err) = self.reset_all() {
            tracing::trace!("dropped muscle reset: {err}");
        }
    }
}

/// A sink that discards every write.
///
/// Useful to update composite state without touching any muscles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MuscleSink for NullSink {
    fn write(&mut self, _muscle: MuscleId, _value: f64) {}
}
