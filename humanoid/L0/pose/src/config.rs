//! Configuration for the pose applier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What [`PoseApplier::reset_pose`](crate::PoseApplier::reset_pose) leaves in the muscle store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResetPolicy {
    /// Every muscle at zero ("no pose").
    #[default]
    Zero,
    /// Zero, then re-apply the restored default composites (relaxed standing pose).
    Defaults,
}

/// Applier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoseConfig {
    /// Attempt to bind lazily when an operation finds the applier unbound.
    pub auto_bind: bool,
    /// Outcome of a pose reset.
    pub reset_policy: ResetPolicy,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            auto_bind: true,
            reset_policy: ResetPolicy::Zero,
        }
    }
}

impl PoseConfig {
    /// Require an explicit [`bind`](crate::PoseApplier::bind) before use.
    #[must_use]
    pub fn manual_bind(mut self) -> Self {
        self.auto_bind = false;
        self
    }

    /// Set the reset policy.
    #[must_use]
    pub fn reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }
}
