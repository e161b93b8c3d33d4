//! Muscle identifiers and the reference humanoid muscle catalog.
//!
//! The catalog is plain data: a fixed, ordered table of names where the
//! position of each name is its canonical index. [`MuscleId`] is a thin index
//! into that table, and the [`muscles`] module names every entry so callers
//! can address channels without magic numbers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of muscles in the reference humanoid catalog.
pub const HUMANOID_MUSCLE_COUNT: usize = 95;

/// Canonical muscle names of the reference humanoid rig, in index order.
pub const HUMANOID_MUSCLE_NAMES: [&str; HUMANOID_MUSCLE_COUNT] = [
    // Core body
    "SpineFrontBack",
    "SpineLeftRight",
    "SpineTwistLeftRight",
    "ChestFrontBack",
    "ChestLeftRight",
    "ChestTwistLeftRight",
    "UpperChestFrontBack",
    "UpperChestLeftRight",
    "UpperChestTwistLeftRight",

    // Head and face
    "NeckNodDownUp",
    "NeckTiltLeftRight",
    "NeckTurnLeftRight",
    "HeadNodDownUp",
    "HeadTiltLeftRight",
    "HeadTurnLeftRight",
    "LeftEyeDownUp",
    "LeftEyeInOut",
    "RightEyeDownUp",
    "RightEyeInOut",
    "JawClose",
    "JawLeftRight",

    // Left leg
    "LeftUpperLegFrontBack",
    "LeftUpperLegInOut",
    "LeftUpperLegTwistInOut",
    "LeftLowerLegStretch",
    "LeftLowerLegTwistInOut",
    "LeftFootUpDown",
    "LeftFootTwistInOut",
    "LeftToesUpDown",

    // Right leg
    "RightUpperLegFrontBack",
    "RightUpperLegInOut",
    "RightUpperLegTwistInOut",
    "RightLowerLegStretch",
    "RightLowerLegTwistInOut",
    "RightFootUpDown",
    "RightFootTwistInOut",
    "RightToesUpDown",

    // Left arm
    "LeftShoulderDownUp",
    "LeftShoulderFrontBack",
    "LeftArmDownUp",
    "LeftArmFrontBack",
    "LeftArmTwistInOut",
    "LeftForearmStretch",
    "LeftForearmTwistInOut",
    "LeftHandDownUp",
    "LeftHandInOut",

    // Right arm
    "RightShoulderDownUp",
    "RightShoulderFrontBack",
    "RightArmDownUp",
    "RightArmFrontBack",
    "RightArmTwistInOut",
    "RightForearmStretch",
    "RightForearmTwistInOut",
    "RightHandDownUp",
    "RightHandInOut",

    // Left fingers
    "LeftThumb1Stretched",
    "LeftThumbSpread",
    "LeftThumb2Stretched",
    "LeftThumb3Stretched",
    "LeftIndex1Stretched",
    "LeftIndexSpread",
    "LeftIndex2Stretched",
    "LeftIndex3Stretched",
    "LeftMiddle1Stretched",
    "LeftMiddleSpread",
    "LeftMiddle2Stretched",
    "LeftMiddle3Stretched",
    "LeftRing1Stretched",
    "LeftRingSpread",
    "LeftRing2Stretched",
    "LeftRing3Stretched",
    "LeftLittle1Stretched",
    "LeftLittleSpread",
    "LeftLittle2Stretched",
    "LeftLittle3Stretched",

    // Right fingers
    "RightThumb1Stretched",
    "RightThumbSpread",
    "RightThumb2Stretched",
    "RightThumb3Stretched",
    "RightIndex1Stretched",
    "RightIndexSpread",
    "RightIndex2Stretched",
    "RightIndex3Stretched",
    "RightMiddle1Stretched",
    "RightMiddleSpread",
    "RightMiddle2Stretched",
    "RightMiddle3Stretched",
    "RightRing1Stretched",
    "RightRingSpread",
    "RightRing2Stretched",
    "RightRing3Stretched",
    "RightLittle1Stretched",
    "RightLittleSpread",
    "RightLittle2Stretched",
    "RightLittle3Stretched",
];

/// Identifier of a muscle in the reference catalog.
///
/// The wrapped value is the canonical index. Rigs with a different channel
/// layout map these identifiers by name when they are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MuscleId(pub usize);

impl MuscleId {
    /// Create a new muscle ID.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the canonical index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Get the canonical name, or `None` if the index is outside the catalog.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        HUMANOID_MUSCLE_NAMES.get(self.0).copied()
    }

    /// Resolve a canonical name (exact match).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        HUMANOID_MUSCLE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(Self)
    }

    /// Iterate over every muscle of the reference catalog in canonical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..HUMANOID_MUSCLE_COUNT).map(Self)
    }
}

impl From<usize> for MuscleId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for MuscleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "Muscle({})", self.0),
        }
    }
}

/// Named identifiers for every muscle of the reference catalog.
///
/// Each constant is documented by its name; see
/// [`HUMANOID_MUSCLE_NAMES`](super::HUMANOID_MUSCLE_NAMES).
#[allow(missing_docs)]
pub mod muscles {
    use super::MuscleId;

    // Core body
    pub const SPINE_FRONT_BACK: MuscleId = MuscleId(0);
    pub const SPINE_LEFT_RIGHT: MuscleId = MuscleId(1);
    pub const SPINE_TWIST_LEFT_RIGHT: MuscleId = MuscleId(2);
    pub const CHEST_FRONT_BACK: MuscleId = MuscleId(3);
    pub const CHEST_LEFT_RIGHT: MuscleId = MuscleId(4);
    pub const CHEST_TWIST_LEFT_RIGHT: MuscleId = MuscleId(5);
    pub const UPPER_CHEST_FRONT_BACK: MuscleId = MuscleId(6);
    pub const UPPER_CHEST_LEFT_RIGHT: MuscleId = MuscleId(7);
    pub const UPPER_CHEST_TWIST_LEFT_RIGHT: MuscleId = MuscleId(8);

    // Head and face
    pub const NECK_NOD_DOWN_UP: MuscleId = MuscleId(9);
    pub const NECK_TILT_LEFT_RIGHT: MuscleId = MuscleId(10);
    pub const NECK_TURN_LEFT_RIGHT: MuscleId = MuscleId(11);
    pub const HEAD_NOD_DOWN_UP: MuscleId = MuscleId(12);
    pub const HEAD_TILT_LEFT_RIGHT: MuscleId = MuscleId(13);
    pub const HEAD_TURN_LEFT_RIGHT: MuscleId = MuscleId(14);
    pub const LEFT_EYE_DOWN_UP: MuscleId = MuscleId(15);
    pub const LEFT_EYE_IN_OUT: MuscleId = MuscleId(16);
    pub const RIGHT_EYE_DOWN_UP: MuscleId = MuscleId(17);
    pub const RIGHT_EYE_IN_OUT: MuscleId = MuscleId(18);
    pub const JAW_CLOSE: MuscleId = MuscleId(19);
    pub const JAW_LEFT_RIGHT: MuscleId = MuscleId(20);

    // Left leg
    pub const LEFT_UPPER_LEG_FRONT_BACK: MuscleId = MuscleId(21);
    pub const LEFT_UPPER_LEG_IN_OUT: MuscleId = MuscleId(22);
    pub const LEFT_UPPER_LEG_TWIST_IN_OUT: MuscleId = MuscleId(23);
    pub const LEFT_LOWER_LEG_STRETCH: MuscleId = MuscleId(24);
    pub const LEFT_LOWER_LEG_TWIST_IN_OUT: MuscleId = MuscleId(25);
    pub const LEFT_FOOT_UP_DOWN: MuscleId = MuscleId(26);
    pub const LEFT_FOOT_TWIST_IN_OUT: MuscleId = MuscleId(27);
    pub const LEFT_TOES_UP_DOWN: MuscleId = MuscleId(28);

    // Right leg
    pub const RIGHT_UPPER_LEG_FRONT_BACK: MuscleId = MuscleId(29);
    pub const RIGHT_UPPER_LEG_IN_OUT: MuscleId = MuscleId(30);
    pub const RIGHT_UPPER_LEG_TWIST_IN_OUT: MuscleId = MuscleId(31);
    pub const RIGHT_LOWER_LEG_STRETCH: MuscleId = MuscleId(32);
    pub const RIGHT_LOWER_LEG_TWIST_IN_OUT: MuscleId = MuscleId(33);
    pub const RIGHT_FOOT_UP_DOWN: MuscleId = MuscleId(34);
    pub const RIGHT_FOOT_TWIST_IN_OUT: MuscleId = MuscleId(35);
    pub const RIGHT_TOES_UP_DOWN: MuscleId = MuscleId(36);

    // Left arm
    pub const LEFT_SHOULDER_DOWN_UP: MuscleId = MuscleId(37);
    pub const LEFT_SHOULDER_FRONT_BACK: MuscleId = MuscleId(38);
    pub const LEFT_ARM_DOWN_UP: MuscleId = MuscleId(39);
    pub const LEFT_ARM_FRONT_BACK: MuscleId = MuscleId(40);
    pub const LEFT_ARM_TWIST_IN_OUT: MuscleId = MuscleId(41);
    pub const LEFT_FOREARM_STRETCH: MuscleId = MuscleId(42);
    pub const LEFT_FOREARM_TWIST_IN_OUT: MuscleId = MuscleId(43);
    pub const LEFT_HAND_DOWN_UP: MuscleId = MuscleId(44);
    pub const LEFT_HAND_IN_OUT: MuscleId = MuscleId(45);

    // Right arm
    pub const RIGHT_SHOULDER_DOWN_UP: MuscleId = MuscleId(46);
    pub const RIGHT_SHOULDER_FRONT_BACK: MuscleId = MuscleId(47);
    pub const RIGHT_ARM_DOWN_UP: MuscleId = MuscleId(48);
    pub const RIGHT_ARM_FRONT_BACK: MuscleId = MuscleId(49);
    pub const RIGHT_ARM_TWIST_IN_OUT: MuscleId = MuscleId(50);
    pub const RIGHT_FOREARM_STRETCH: MuscleId = MuscleId(51);
    pub const RIGHT_FOREARM_TWIST_IN_OUT: MuscleId = MuscleId(52);
    pub const RIGHT_HAND_DOWN_UP: MuscleId = MuscleId(53);
    pub const RIGHT_HAND_IN_OUT: MuscleId = MuscleId(54);

    // Left fingers
    pub const LEFT_THUMB_1_STRETCHED: MuscleId = MuscleId(55);
    pub const LEFT_THUMB_SPREAD: MuscleId = MuscleId(56);
    pub const LEFT_THUMB_2_STRETCHED: MuscleId = MuscleId(57);
    pub const LEFT_THUMB_3_STRETCHED: MuscleId = MuscleId(58);
    pub const LEFT_INDEX_1_STRETCHED: MuscleId = MuscleId(59);
    pub const LEFT_INDEX_SPREAD: MuscleId = MuscleId(60);
    pub const LEFT_INDEX_2_STRETCHED: MuscleId = MuscleId(61);
    pub const LEFT_INDEX_3_STRETCHED: MuscleId = MuscleId(62);
    pub const LEFT_MIDDLE_1_STRETCHED: MuscleId = MuscleId(63);
    pub const LEFT_MIDDLE_SPREAD: MuscleId = MuscleId(64);
    pub const LEFT_MIDDLE_2_STRETCHED: MuscleId = MuscleId(65);
    pub const LEFT_MIDDLE_3_STRETCHED: MuscleId = MuscleId(66);
    pub const LEFT_RING_1_STRETCHED: MuscleId = MuscleId(67);
    pub const LEFT_RING_SPREAD: MuscleId = MuscleId(68);
    pub const LEFT_RING_2_STRETCHED: MuscleId = MuscleId(69);
    pub const LEFT_RING_3_STRETCHED: MuscleId = MuscleId(70);
    pub const LEFT_LITTLE_1_STRETCHED: MuscleId = MuscleId(71);
    pub const LEFT_LITTLE_SPREAD: MuscleId = MuscleId(72);
    pub const LEFT_LITTLE_2_STRETCHED: MuscleId = MuscleId(73);
    pub const LEFT_LITTLE_3_STRETCHED: MuscleId = MuscleId(74);

    // Right fingers
    pub const RIGHT_THUMB_1_STRETCHED: MuscleId = MuscleId(75);
    pub const RIGHT_THUMB_SPREAD: MuscleId = MuscleId(76);
    pub const RIGHT_THUMB_2_STRETCHED: MuscleId = MuscleId(77);
    pub const RIGHT_THUMB_3_STRETCHED: MuscleId = MuscleId(78);
    pub const RIGHT_INDEX_1_STRETCHED: MuscleId = MuscleId(79);
    pub const RIGHT_INDEX_SPREAD: MuscleId = MuscleId(80);
    pub const RIGHT_INDEX_2_STRETCHED: MuscleId = MuscleId(81);
    pub const RIGHT_INDEX_3_STRETCHED: MuscleId = MuscleId(82);
    pub const RIGHT_MIDDLE_1_STRETCHED: MuscleId = MuscleId(83);
    pub const RIGHT_MIDDLE_SPREAD: MuscleId = MuscleId(84);
    pub const RIGHT_MIDDLE_2_STRETCHED: MuscleId = MuscleId(85);
    pub const RIGHT_MIDDLE_3_STRETCHED: MuscleId = MuscleId(86);
    pub const RIGHT_RING_1_STRETCHED: MuscleId = MuscleId(87);
    pub const RIGHT_RING_SPREAD: MuscleId = MuscleId(88);
    pub const RIGHT_RING_2_STRETCHED: MuscleId = MuscleId(89);
    pub const RIGHT_RING_3_STRETCHED: MuscleId = MuscleId(90);
    pub const RIGHT_LITTLE_1_STRETCHED: MuscleId = MuscleId(91);
    pub const RIGHT_LITTLE_SPREAD: MuscleId = MuscleId(92);
    pub const RIGHT_LITTLE_2_STRETCHED: MuscleId = MuscleId(93);
    pub const RIGHT_LITTLE_3_STRETCHED: MuscleId = MuscleId(94);
}
