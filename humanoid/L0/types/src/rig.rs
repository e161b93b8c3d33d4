//! Rig descriptors and the pose solver seam.
//!
//! A rig descriptor tells the muscle store how many channels a skeleton has
//! and what each one is called. The pose solver is the consumer on the other
//! side: it pulls the finished muscle array and turns it into bone transforms.

use crate::muscle::HUMANOID_MUSCLE_NAMES;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capability describing the muscle channels of a concrete skeleton.
pub trait RigDescriptor {
    /// Total number of muscle channels.
    fn muscle_count(&self) -> usize;

    /// Canonical name of the channel at `index`, or `None` past the end.
    fn muscle_name(&self, index: usize) -> Option<&str>;

    /// Whether the skeleton is a well-formed humanoid.
    fn is_humanoid(&self) -> bool;
}

/// A rig descriptor backed by an owned list of channel names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HumanoidRig {
    names: Vec<String>,
    humanoid: bool,
}

impl HumanoidRig {
    /// Create a rig from explicit channel names.
    #[must_use]
    pub fn new<I, S>(names: I, humanoid: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            humanoid,
        }
    }

    /// The reference 95-muscle humanoid rig.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(HUMANOID_MUSCLE_NAMES, true)
    }

    /// Channel names in index order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for HumanoidRig {
    fn default() -> Self {
        Self::reference()
    }
}

impl RigDescriptor for HumanoidRig {
    fn muscle_count(&self) -> usize {
        self.names.len()
    }

    fn muscle_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    fn is_humanoid(&self) -> bool {
        self.humanoid
    }
}

/// Consumer of a finished muscle array (converts muscles to bone transforms).
///
/// The core never calls a solver on its own; callers hand the array over
/// after applying a pose.
pub trait PoseSolver {
    /// Rebuild the skeleton pose from the full muscle array, in rig order.
    fn solve(&mut self, muscles: &[f64]);
}

impl<F> PoseSolver for F
where
    F: FnMut(&[f64]),
{
    fn solve(&mut self, muscles: &[f64]) {
        self(muscles);
    }
}
