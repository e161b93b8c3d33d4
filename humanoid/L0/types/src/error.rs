//! Error types for muscle store, composer and applier operations.

use thiserror::Error;

/// Errors that can occur while binding a rig or driving its muscles.
///
/// All of these are recoverable: the failing operation writes nothing and the
/// caller may fix the precondition (e.g. initialize the store) and retry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoseError {
    /// The rig descriptor is missing or does not describe a humanoid.
    #[error("invalid rig: {reason}")]
    InvalidRig {
        /// Description of what's wrong with the rig.
        reason: String,
    },

    /// Muscle index outside `[0, count)`.
    #[error("muscle index {index} out of range (must be 0-{})", count.saturating_sub(1))]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of muscles in the bound rig.
        count: usize,
    },

    /// No muscle with the given name exists in the bound rig.
    #[error("muscle not found: {name}")]
    MuscleNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// No composite parameter with the given name is declared.
    #[error("unknown parameter: {name}")]
    UnknownParameter {
        /// The name that failed to resolve.
        name: String,
    },

    /// The value cannot be clamped into a muscle or parameter domain (`NaN`).
    #[error("invalid value: {value}")]
    InvalidValue {
        /// The rejected value.
        value: f64,
    },

    /// The muscle store has not been bound to a rig.
    #[error("muscle store not initialized")]
    NotInitialized,

    /// The applier has not been bound to its store.
    #[error("pose applier not bound")]
    NotBound,

    /// The applier is already bound.
    #[error("pose applier already bound")]
    AlreadyBound,
}

impl PoseError {
    /// Create an invalid rig error.
    #[must_use]
    pub fn invalid_rig(reason: impl Into<String>) -> Self {
        Self::InvalidRig {
            reason: reason.into(),
        }
    }

    /// Create a muscle-not-found error.
    #[must_use]
    pub fn muscle_not_found(name: impl Into<String>) -> Self {
        Self::MuscleNotFound { name: name.into() }
    }

    /// Create an unknown parameter error.
    #[must_use]
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Check if this is a failed index/name/parameter lookup.
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. }
                | Self::MuscleNotFound { .. }
                | Self::UnknownParameter { .. }
        )
    }

    /// Check if this error means setup is incomplete (rig or binding).
    #[must_use]
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRig { .. } | Self::NotInitialized | Self::NotBound | Self::AlreadyBound
        )
    }
}
