//! The composite parameter catalog.
//!
//! Every human-facing control is one [`ParamSpec`] row in [`PARAMS`]. A row
//! names the muscles it writes with its own value (`channels`), the other
//! parameters it derives from its value (`derived`, macros only), the
//! parameters it re-fires unchanged when edited directly (`relays`), and an
//! optional partner fired together with the partner's relays (`pair`).
//!
//! Rows are ordered by [`ParamGroup`]; that order is the canonical apply order.

use humanoid_types::{MuscleId, muscles as m};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of composite parameters.
pub const PARAM_COUNT: usize = 81;

/// Identifier of a composite parameter (its row in [`PARAMS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamId(pub usize);

impl ParamId {
    /// Get the row index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// The catalog row, or `None` if the ID is not declared.
    #[must_use]
    pub fn spec(self) -> Option<&'static ParamSpec> {
        PARAMS.get(self.0)
    }

    /// Parameter name, or `None` if the ID is not declared.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.spec().map(|spec| spec.name)
    }

    /// Resolve a parameter name (exact match).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        PARAMS.iter().position(|spec| spec.name == name).map(Self)
    }

    /// Iterate over every declared parameter in canonical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PARAM_COUNT).map(Self)
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "Param({})", self.0),
        }
    }
}

/// Body region a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamGroup {
    /// Macro controls (standing, curl, whole-hand finger controls).
    Controls,
    /// Spine, chest and upper chest.
    CoreBody,
    /// Neck, head, eyes and jaw.
    HeadFace,
    /// Left shoulder, arm, forearm and hand.
    LeftArm,
    /// Right shoulder, arm, forearm and hand.
    RightArm,
    /// Left upper leg, lower leg, foot and toes.
    LeftLeg,
    /// Right upper leg, lower leg, foot and toes.
    RightLeg,
    /// Left thumb through little finger.
    LeftFingers,
    /// Right thumb through little finger.
    RightFingers,
}

/// Value domain of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamRange {
    /// `[-1, 1]`.
    Symmetric,
    /// `[0, 1]`, for one-sided controls such as jaw close or standing.
    Unipolar,
}

impl ParamRange {
    /// Lower bound.
    #[must_use]
    pub const fn min(self) -> f64 {
        match self {
            Self::Symmetric => -1.0,
            Self::Unipolar => 0.0,
        }
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(self) -> f64 {
        1.0
    }

    /// Clamp `value` into the range. `None` for `NaN`.
    #[must_use]
    pub fn clamp(self, value: f64) -> Option<f64> {
        if value.is_nan() {
            None
        } else {
            Some(value.clamp(self.min(), self.max()))
        }
    }
}

/// One macro edge: `target := clamp(source * scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    /// The derived parameter.
    pub target: ParamId,
    /// Linear factor applied to the macro value (sign included).
    pub scale: f64,
}

impl Derivation {
    /// Create a derivation edge.
    #[must_use]
    pub const fn new(target: ParamId, scale: f64) -> Self {
        Self { target, scale }
    }
}

/// Declaration of a composite parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Unique name.
    pub name: &'static str,
    /// Body region.
    pub group: ParamGroup,
    /// Value domain.
    pub range: ParamRange,
    /// Value of the relaxed standing pose.
    pub default: f64,
    /// Muscles written with this parameter's value.
    pub channels: &'static [MuscleId],
    /// Parameters derived from this one (macros).
    pub derived: &'static [Derivation],
    /// Parameters re-fired unchanged when this one is edited directly.
    pub relays: &'static [ParamId],
    /// Partner fired together with its own relays when this one is edited
    /// directly (the upper-leg twist pair).
    pub pair: Option<ParamId>,
}

impl ParamSpec {
    const fn primitive(
        name: &'static str,
        group: ParamGroup,
        channels: &'static [MuscleId],
    ) -> Self {
        Self {
            name,
            group,
            range: ParamRange::Symmetric,
            default: 0.0,
            channels,
            derived: &[],
            relays: &[],
            pair: None,
        }
    }

    const fn macro_param(name: &'static str, derived: &'static [Derivation]) -> Self {
        Self {
            name,
            group: ParamGroup::Controls,
            range: ParamRange::Symmetric,
            default: 0.0,
            channels: &[],
            derived,
            relays: &[],
            pair: None,
        }
    }

    const fn unipolar(self) -> Self {
        Self {
            range: ParamRange::Unipolar,
            ..self
        }
    }

    const fn with_default(self, default: f64) -> Self {
        Self { default, ..self }
    }

    const fn with_relays(self, relays: &'static [ParamId]) -> Self {
        Self { relays, ..self }
    }

    const fn with_pair(self, pair: ParamId) -> Self {
        Self {
            pair: Some(pair),
            ..self
        }
    }

    /// Whether this parameter derives other parameters.
    #[must_use]
    pub fn is_macro(&self) -> bool {
        !self.derived.is_empty()
    }
}

/// Named identifiers for every composite parameter.
///
/// Each constant is documented by its name; see [`PARAMS`](super::PARAMS).
#[allow(missing_docs)]
pub mod params {
    use super::ParamId;

    // Controls
    pub const STANDING: ParamId = ParamId(0);
    pub const CURL_IN_OUT: ParamId = ParamId(1);
    pub const LEFT_FINGERS_STRETCH: ParamId = ParamId(2);
    pub const LEFT_FINGERS_SPREAD: ParamId = ParamId(3);
    pub const RIGHT_FINGERS_STRETCH: ParamId = ParamId(4);
    pub const RIGHT_FINGERS_SPREAD: ParamId = ParamId(5);

    // Core body
    pub const SPINE_FRONT_BACK: ParamId = ParamId(6);
    pub const SPINE_LEFT_RIGHT: ParamId = ParamId(7);
    pub const SPINE_TWIST_LEFT_RIGHT: ParamId = ParamId(8);
    pub const CHEST_FRONT_BACK: ParamId = ParamId(9);
    pub const CHEST_LEFT_RIGHT: ParamId = ParamId(10);
    pub const CHEST_TWIST_LEFT_RIGHT: ParamId = ParamId(11);
    pub const UPPER_CHEST_FRONT_BACK: ParamId = ParamId(12);
    pub const UPPER_CHEST_LEFT_RIGHT: ParamId = ParamId(13);
    pub const UPPER_CHEST_TWIST_LEFT_RIGHT: ParamId = ParamId(14);

    // Head and face
    pub const NECK_NOD_DOWN_UP: ParamId = ParamId(15);
    pub const NECK_TILT_LEFT_RIGHT: ParamId = ParamId(16);
    pub const NECK_TURN_LEFT_RIGHT: ParamId = ParamId(17);
    pub const HEAD_NOD_DOWN_UP: ParamId = ParamId(18);
    pub const HEAD_TILT_LEFT_RIGHT: ParamId = ParamId(19);
    pub const HEAD_TURN_LEFT_RIGHT: ParamId = ParamId(20);
    pub const LEFT_EYE_DOWN_UP: ParamId = ParamId(21);
    pub const LEFT_EYE_IN_OUT: ParamId = ParamId(22);
    pub const RIGHT_EYE_DOWN_UP: ParamId = ParamId(23);
    pub const RIGHT_EYE_IN_OUT: ParamId = ParamId(24);
    pub const JAW_CLOSE: ParamId = ParamId(25);
    pub const JAW_LEFT_RIGHT: ParamId = ParamId(26);

    // Left arm and hand
    pub const LEFT_SHOULDER_DOWN_UP: ParamId = ParamId(27);
    pub const LEFT_SHOULDER_FRONT_BACK: ParamId = ParamId(28);
    pub const LEFT_ARM_DOWN_UP: ParamId = ParamId(29);
    pub const LEFT_ARM_FRONT_BACK: ParamId = ParamId(30);
    pub const LEFT_ARM_TWIST_IN_OUT: ParamId = ParamId(31);
    pub const LEFT_FOREARM_STRETCH: ParamId = ParamId(32);
    pub const LEFT_FOREARM_TWIST_IN_OUT: ParamId = ParamId(33);
    pub const LEFT_HAND_DOWN_UP: ParamId = ParamId(34);
    pub const LEFT_HAND_IN_OUT: ParamId = ParamId(35);

    // Right arm and hand
    pub const RIGHT_SHOULDER_DOWN_UP: ParamId = ParamId(36);
    pub const RIGHT_SHOULDER_FRONT_BACK: ParamId = ParamId(37);
    pub const RIGHT_ARM_DOWN_UP: ParamId = ParamId(38);
    pub const RIGHT_ARM_FRONT_BACK: ParamId = ParamId(39);
    pub const RIGHT_ARM_TWIST_IN_OUT: ParamId = ParamId(40);
    pub const RIGHT_FOREARM_STRETCH: ParamId = ParamId(41);
    pub const RIGHT_FOREARM_TWIST_IN_OUT: ParamId = ParamId(42);
    pub const RIGHT_HAND_DOWN_UP: ParamId = ParamId(43);
    pub const RIGHT_HAND_IN_OUT: ParamId = ParamId(44);

    // Left leg and foot
    pub const LEFT_UPPER_LEG_FRONT_BACK: ParamId = ParamId(45);
    pub const LEFT_UPPER_LEG_IN_OUT: ParamId = ParamId(46);
    pub const LEFT_UPPER_LEG_TWIST_IN_OUT: ParamId = ParamId(47);
    pub const LEFT_LOWER_LEG_STRETCH: ParamId = ParamId(48);
    pub const LEFT_LOWER_LEG_TWIST_IN_OUT: ParamId = ParamId(49);
    pub const LEFT_FOOT_UP_DOWN: ParamId = ParamId(50);
    pub const LEFT_FOOT_TWIST_IN_OUT: ParamId = ParamId(51);
    pub const LEFT_TOES_UP_DOWN: ParamId = ParamId(52);

    // Right leg and foot
    pub const RIGHT_UPPER_LEG_FRONT_BACK: ParamId = ParamId(53);
    pub const RIGHT_UPPER_LEG_IN_OUT: ParamId = ParamId(54);
    pub const RIGHT_UPPER_LEG_TWIST_IN_OUT: ParamId = ParamId(55);
    pub const RIGHT_LOWER_LEG_STRETCH: ParamId = ParamId(56);
    pub const RIGHT_LOWER_LEG_TWIST_IN_OUT: ParamId = ParamId(57);
    pub const RIGHT_FOOT_UP_DOWN: ParamId = ParamId(58);
    pub const RIGHT_FOOT_TWIST_IN_OUT: ParamId = ParamId(59);
    pub const RIGHT_TOES_UP_DOWN: ParamId = ParamId(60);

    // Left fingers
    pub const LEFT_THUMB_STRETCH: ParamId = ParamId(61);
    pub const LEFT_THUMB_SPREAD: ParamId = ParamId(62);
    pub const LEFT_INDEX_STRETCH: ParamId = ParamId(63);
    pub const LEFT_INDEX_SPREAD: ParamId = ParamId(64);
    pub const LEFT_MIDDLE_STRETCH: ParamId = ParamId(65);
    pub const LEFT_MIDDLE_SPREAD: ParamId = ParamId(66);
    pub const LEFT_RING_STRETCH: ParamId = ParamId(67);
    pub const LEFT_RING_SPREAD: ParamId = ParamId(68);
    pub const LEFT_LITTLE_STRETCH: ParamId = ParamId(69);
    pub const LEFT_LITTLE_SPREAD: ParamId = ParamId(70);

    // Right fingers
    pub const RIGHT_THUMB_STRETCH: ParamId = ParamId(71);
    pub const RIGHT_THUMB_SPREAD: ParamId = ParamId(72);
    pub const RIGHT_INDEX_STRETCH: ParamId = ParamId(73);
    pub const RIGHT_INDEX_SPREAD: ParamId = ParamId(74);
    pub const RIGHT_MIDDLE_STRETCH: ParamId = ParamId(75);
    pub const RIGHT_MIDDLE_SPREAD: ParamId = ParamId(76);
    pub const RIGHT_RING_STRETCH: ParamId = ParamId(77);
    pub const RIGHT_RING_SPREAD: ParamId = ParamId(78);
    pub const RIGHT_LITTLE_STRETCH: ParamId = ParamId(79);
    pub const RIGHT_LITTLE_SPREAD: ParamId = ParamId(80);
}

use params as p;

const STANDING_DERIVED: &[Derivation] = &[
    Derivation::new(p::LEFT_FOREARM_STRETCH, 1.0),
    Derivation::new(p::RIGHT_FOREARM_STRETCH, 1.0),
    Derivation::new(p::LEFT_UPPER_LEG_FRONT_BACK, 0.5),
    Derivation::new(p::LEFT_LOWER_LEG_STRETCH, 1.0),
    Derivation::new(p::RIGHT_UPPER_LEG_FRONT_BACK, 0.5),
    Derivation::new(p::RIGHT_LOWER_LEG_STRETCH, 1.0),
];

const CURL_IN_OUT_DERIVED: &[Derivation] = &[
    Derivation::new(p::SPINE_FRONT_BACK, 0.5),
    Derivation::new(p::CHEST_FRONT_BACK, 0.5),
    Derivation::new(p::UPPER_CHEST_FRONT_BACK, 1.0),
    Derivation::new(p::NECK_NOD_DOWN_UP, 1.0),
    Derivation::new(p::LEFT_SHOULDER_DOWN_UP, 0.5),
    Derivation::new(p::LEFT_ARM_DOWN_UP, 0.5),
    Derivation::new(p::LEFT_FOREARM_STRETCH, 1.0),
    Derivation::new(p::RIGHT_SHOULDER_DOWN_UP, 0.5),
    Derivation::new(p::RIGHT_ARM_DOWN_UP, 0.5),
    Derivation::new(p::RIGHT_FOREARM_STRETCH, 1.0),
    Derivation::new(p::LEFT_UPPER_LEG_FRONT_BACK, 1.0),
    Derivation::new(p::LEFT_UPPER_LEG_TWIST_IN_OUT, -0.5),
    Derivation::new(p::LEFT_LOWER_LEG_STRETCH, 1.0),
    Derivation::new(p::LEFT_LOWER_LEG_TWIST_IN_OUT, -0.25),
    Derivation::new(p::LEFT_FOOT_UP_DOWN, 0.5),
    Derivation::new(p::LEFT_TOES_UP_DOWN, 0.5),
    Derivation::new(p::LEFT_FINGERS_STRETCH, 1.0),
    Derivation::new(p::RIGHT_UPPER_LEG_FRONT_BACK, 1.0),
    Derivation::new(p::RIGHT_UPPER_LEG_TWIST_IN_OUT, -0.5),
    Derivation::new(p::RIGHT_LOWER_LEG_STRETCH, 1.0),
    Derivation::new(p::RIGHT_LOWER_LEG_TWIST_IN_OUT, -0.25),
    Derivation::new(p::RIGHT_FOOT_UP_DOWN, 0.5),
    Derivation::new(p::RIGHT_TOES_UP_DOWN, 0.5),
    Derivation::new(p::RIGHT_FINGERS_STRETCH, 1.0),
];

const LEFT_FINGERS_STRETCH_DERIVED: &[Derivation] = &[
    Derivation::new(p::LEFT_THUMB_STRETCH, 1.0),
    Derivation::new(p::LEFT_INDEX_STRETCH, 1.0),
    Derivation::new(p::LEFT_MIDDLE_STRETCH, 1.0),
    Derivation::new(p::LEFT_RING_STRETCH, 1.0),
    Derivation::new(p::LEFT_LITTLE_STRETCH, 1.0),
];

const LEFT_FINGERS_SPREAD_DERIVED: &[Derivation] = &[
    Derivation::new(p::LEFT_THUMB_SPREAD, 1.0),
    Derivation::new(p::LEFT_INDEX_SPREAD, 1.0),
    Derivation::new(p::LEFT_MIDDLE_SPREAD, 1.0),
    Derivation::new(p::LEFT_RING_SPREAD, 1.0),
    Derivation::new(p::LEFT_LITTLE_SPREAD, 1.0),
];

const RIGHT_FINGERS_STRETCH_DERIVED: &[Derivation] = &[
    Derivation::new(p::RIGHT_THUMB_STRETCH, 1.0),
    Derivation::new(p::RIGHT_INDEX_STRETCH, 1.0),
    Derivation::new(p::RIGHT_MIDDLE_STRETCH, 1.0),
    Derivation::new(p::RIGHT_RING_STRETCH, 1.0),
    Derivation::new(p::RIGHT_LITTLE_STRETCH, 1.0),
];

const RIGHT_FINGERS_SPREAD_DERIVED: &[Derivation] = &[
    Derivation::new(p::RIGHT_THUMB_SPREAD, 1.0),
    Derivation::new(p::RIGHT_INDEX_SPREAD, 1.0),
    Derivation::new(p::RIGHT_MIDDLE_SPREAD, 1.0),
    Derivation::new(p::RIGHT_RING_SPREAD, 1.0),
    Derivation::new(p::RIGHT_LITTLE_SPREAD, 1.0),
];

const LEFT_ARM_TWIST_IN_OUT_RELAYS: &[ParamId] = &[
    p::LEFT_ARM_DOWN_UP,
    p::LEFT_ARM_FRONT_BACK,
    p::LEFT_FOREARM_STRETCH,
    p::LEFT_FOREARM_TWIST_IN_OUT,
];

const RIGHT_ARM_TWIST_IN_OUT_RELAYS: &[ParamId] = &[
    p::RIGHT_ARM_DOWN_UP,
    p::RIGHT_ARM_FRONT_BACK,
    p::RIGHT_FOREARM_STRETCH,
    p::RIGHT_FOREARM_TWIST_IN_OUT,
];

const LEFT_UPPER_LEG_TWIST_IN_OUT_RELAYS: &[ParamId] = &[
    p::LEFT_UPPER_LEG_FRONT_BACK,
    p::LEFT_UPPER_LEG_IN_OUT,
    p::LEFT_LOWER_LEG_STRETCH,
    p::LEFT_LOWER_LEG_TWIST_IN_OUT,
    p::LEFT_FOOT_UP_DOWN,
    p::LEFT_FOOT_TWIST_IN_OUT,
];

const RIGHT_UPPER_LEG_TWIST_IN_OUT_RELAYS: &[ParamId] = &[
    p::RIGHT_UPPER_LEG_FRONT_BACK,
    p::RIGHT_UPPER_LEG_IN_OUT,
    p::RIGHT_LOWER_LEG_STRETCH,
    p::RIGHT_LOWER_LEG_TWIST_IN_OUT,
    p::RIGHT_FOOT_UP_DOWN,
    p::RIGHT_FOOT_TWIST_IN_OUT,
];

/// Every composite parameter, in canonical order.
#[rustfmt::skip]
pub static PARAMS: [ParamSpec; PARAM_COUNT] = [
    // Controls
    ParamSpec::macro_param("Standing", STANDING_DERIVED).unipolar(),
    ParamSpec::macro_param("CurlInOut", CURL_IN_OUT_DERIVED),
    ParamSpec::macro_param("LeftFingersStretch", LEFT_FINGERS_STRETCH_DERIVED),
    ParamSpec::macro_param("LeftFingersSpread", LEFT_FINGERS_SPREAD_DERIVED),
    ParamSpec::macro_param("RightFingersStretch", RIGHT_FINGERS_STRETCH_DERIVED),
    ParamSpec::macro_param("RightFingersSpread", RIGHT_FINGERS_SPREAD_DERIVED),

    // Core body
    ParamSpec::primitive("SpineFrontBack", ParamGroup::CoreBody, &[m::SPINE_FRONT_BACK]),
    ParamSpec::primitive("SpineLeftRight", ParamGroup::CoreBody, &[m::SPINE_LEFT_RIGHT]),
    ParamSpec::primitive("SpineTwistLeftRight", ParamGroup::CoreBody, &[m::SPINE_TWIST_LEFT_RIGHT]),
    ParamSpec::primitive("ChestFrontBack", ParamGroup::CoreBody, &[m::CHEST_FRONT_BACK]),
    ParamSpec::primitive("ChestLeftRight", ParamGroup::CoreBody, &[m::CHEST_LEFT_RIGHT]),
    ParamSpec::primitive("ChestTwistLeftRight", ParamGroup::CoreBody, &[m::CHEST_TWIST_LEFT_RIGHT]),
    ParamSpec::primitive("UpperChestFrontBack", ParamGroup::CoreBody, &[m::UPPER_CHEST_FRONT_BACK]),
    ParamSpec::primitive("UpperChestLeftRight", ParamGroup::CoreBody, &[m::UPPER_CHEST_LEFT_RIGHT]),
    ParamSpec::primitive("UpperChestTwistLeftRight", ParamGroup::CoreBody, &[m::UPPER_CHEST_TWIST_LEFT_RIGHT]),

    // Head and face
    ParamSpec::primitive("NeckNodDownUp", ParamGroup::HeadFace, &[m::NECK_NOD_DOWN_UP]),
    ParamSpec::primitive("NeckTiltLeftRight", ParamGroup::HeadFace, &[m::NECK_TILT_LEFT_RIGHT]),
    ParamSpec::primitive("NeckTurnLeftRight", ParamGroup::HeadFace, &[m::NECK_TURN_LEFT_RIGHT]),
    ParamSpec::primitive("HeadNodDownUp", ParamGroup::HeadFace, &[m::HEAD_NOD_DOWN_UP]),
    ParamSpec::primitive("HeadTiltLeftRight", ParamGroup::HeadFace, &[m::HEAD_TILT_LEFT_RIGHT]),
    ParamSpec::primitive("HeadTurnLeftRight", ParamGroup::HeadFace, &[m::HEAD_TURN_LEFT_RIGHT]),
    ParamSpec::primitive("LeftEyeDownUp", ParamGroup::HeadFace, &[m::LEFT_EYE_DOWN_UP]),
    ParamSpec::primitive("LeftEyeInOut", ParamGroup::HeadFace, &[m::LEFT_EYE_IN_OUT]),
    ParamSpec::primitive("RightEyeDownUp", ParamGroup::HeadFace, &[m::RIGHT_EYE_DOWN_UP]),
    ParamSpec::primitive("RightEyeInOut", ParamGroup::HeadFace, &[m::RIGHT_EYE_IN_OUT]),
    ParamSpec::primitive("JawClose", ParamGroup::HeadFace, &[m::JAW_CLOSE]).unipolar().with_default(1.0),
    ParamSpec::primitive("JawLeftRight", ParamGroup::HeadFace, &[m::JAW_LEFT_RIGHT]),

    // Left arm and hand
    ParamSpec::primitive("LeftShoulderDownUp", ParamGroup::LeftArm, &[m::LEFT_SHOULDER_DOWN_UP]),
    ParamSpec::primitive("LeftShoulderFrontBack", ParamGroup::LeftArm, &[m::LEFT_SHOULDER_FRONT_BACK]).with_default(1.0),
    ParamSpec::primitive("LeftArmDownUp", ParamGroup::LeftArm, &[m::LEFT_ARM_DOWN_UP]),
    ParamSpec::primitive("LeftArmFrontBack", ParamGroup::LeftArm, &[m::LEFT_ARM_FRONT_BACK]),
    ParamSpec::primitive("LeftArmTwistInOut", ParamGroup::LeftArm, &[m::LEFT_ARM_TWIST_IN_OUT]).with_relays(LEFT_ARM_TWIST_IN_OUT_RELAYS),
    ParamSpec::primitive("LeftForearmStretch", ParamGroup::LeftArm, &[m::LEFT_FOREARM_STRETCH]).with_default(1.0),
    ParamSpec::primitive("LeftForearmTwistInOut", ParamGroup::LeftArm, &[m::LEFT_FOREARM_TWIST_IN_OUT]),
    ParamSpec::primitive("LeftHandDownUp", ParamGroup::LeftArm, &[m::LEFT_HAND_DOWN_UP]),
    ParamSpec::primitive("LeftHandInOut", ParamGroup::LeftArm, &[m::LEFT_HAND_IN_OUT]),

    // Right arm and hand
    ParamSpec::primitive("RightShoulderDownUp", ParamGroup::RightArm, &[m::RIGHT_SHOULDER_DOWN_UP]),
    ParamSpec::primitive("RightShoulderFrontBack", ParamGroup::RightArm, &[m::RIGHT_SHOULDER_FRONT_BACK]).with_default(1.0),
    ParamSpec::primitive("RightArmDownUp", ParamGroup::RightArm, &[m::RIGHT_ARM_DOWN_UP]),
    ParamSpec::primitive("RightArmFrontBack", ParamGroup::RightArm, &[m::RIGHT_ARM_FRONT_BACK]),
    ParamSpec::primitive("RightArmTwistInOut", ParamGroup::RightArm, &[m::RIGHT_ARM_TWIST_IN_OUT]).with_relays(RIGHT_ARM_TWIST_IN_OUT_RELAYS),
    ParamSpec::primitive("RightForearmStretch", ParamGroup::RightArm, &[m::RIGHT_FOREARM_STRETCH]).with_default(1.0),
    ParamSpec::primitive("RightForearmTwistInOut", ParamGroup::RightArm, &[m::RIGHT_FOREARM_TWIST_IN_OUT]),
    ParamSpec::primitive("RightHandDownUp", ParamGroup::RightArm, &[m::RIGHT_HAND_DOWN_UP]),
    ParamSpec::primitive("RightHandInOut", ParamGroup::RightArm, &[m::RIGHT_HAND_IN_OUT]),

    // Left leg and foot
    ParamSpec::primitive("LeftUpperLegFrontBack", ParamGroup::LeftLeg, &[m::LEFT_UPPER_LEG_FRONT_BACK]).with_default(0.5),
    ParamSpec::primitive("LeftUpperLegInOut", ParamGroup::LeftLeg, &[m::LEFT_UPPER_LEG_IN_OUT]),
    ParamSpec::primitive("LeftUpperLegTwistInOut", ParamGroup::LeftLeg, &[m::LEFT_UPPER_LEG_TWIST_IN_OUT])
        .with_relays(LEFT_UPPER_LEG_TWIST_IN_OUT_RELAYS)
        .with_pair(p::RIGHT_UPPER_LEG_TWIST_IN_OUT),
    ParamSpec::primitive("LeftLowerLegStretch", ParamGroup::LeftLeg, &[m::LEFT_LOWER_LEG_STRETCH]).with_default(1.0),
    ParamSpec::primitive("LeftLowerLegTwistInOut", ParamGroup::LeftLeg, &[m::LEFT_LOWER_LEG_TWIST_IN_OUT]),
    ParamSpec::primitive("LeftFootUpDown", ParamGroup::LeftLeg, &[m::LEFT_FOOT_UP_DOWN]),
    ParamSpec::primitive("LeftFootTwistInOut", ParamGroup::LeftLeg, &[m::LEFT_FOOT_TWIST_IN_OUT]),
    ParamSpec::primitive("LeftToesUpDown", ParamGroup::LeftLeg, &[m::LEFT_TOES_UP_DOWN]),

    // Right leg and foot
    ParamSpec::primitive("RightUpperLegFrontBack", ParamGroup::RightLeg, &[m::RIGHT_UPPER_LEG_FRONT_BACK]).with_default(0.5),
    ParamSpec::primitive("RightUpperLegInOut", ParamGroup::RightLeg, &[m::RIGHT_UPPER_LEG_IN_OUT]),
    ParamSpec::primitive("RightUpperLegTwistInOut", ParamGroup::RightLeg, &[m::RIGHT_UPPER_LEG_TWIST_IN_OUT])
        .with_relays(RIGHT_UPPER_LEG_TWIST_IN_OUT_RELAYS)
        .with_pair(p::LEFT_UPPER_LEG_TWIST_IN_OUT),
    ParamSpec::primitive("RightLowerLegStretch", ParamGroup::RightLeg, &[m::RIGHT_LOWER_LEG_STRETCH]).with_default(1.0),
    ParamSpec::primitive("RightLowerLegTwistInOut", ParamGroup::RightLeg, &[m::RIGHT_LOWER_LEG_TWIST_IN_OUT]),
    ParamSpec::primitive("RightFootUpDown", ParamGroup::RightLeg, &[m::RIGHT_FOOT_UP_DOWN]),
    ParamSpec::primitive("RightFootTwistInOut", ParamGroup::RightLeg, &[m::RIGHT_FOOT_TWIST_IN_OUT]),
    ParamSpec::primitive("RightToesUpDown", ParamGroup::RightLeg, &[m::RIGHT_TOES_UP_DOWN]),

    // Left fingers
    ParamSpec::primitive("LeftThumbStretch", ParamGroup::LeftFingers, &[m::LEFT_THUMB_1_STRETCHED, m::LEFT_THUMB_2_STRETCHED, m::LEFT_THUMB_3_STRETCHED]),
    ParamSpec::primitive("LeftThumbSpread", ParamGroup::LeftFingers, &[m::LEFT_THUMB_SPREAD]),
    ParamSpec::primitive("LeftIndexStretch", ParamGroup::LeftFingers, &[m::LEFT_INDEX_1_STRETCHED, m::LEFT_INDEX_2_STRETCHED, m::LEFT_INDEX_3_STRETCHED]),
    ParamSpec::primitive("LeftIndexSpread", ParamGroup::LeftFingers, &[m::LEFT_INDEX_SPREAD]),
    ParamSpec::primitive("LeftMiddleStretch", ParamGroup::LeftFingers, &[m::LEFT_MIDDLE_1_STRETCHED, m::LEFT_MIDDLE_2_STRETCHED, m::LEFT_MIDDLE_3_STRETCHED]),
    ParamSpec::primitive("LeftMiddleSpread", ParamGroup::LeftFingers, &[m::LEFT_MIDDLE_SPREAD]),
    ParamSpec::primitive("LeftRingStretch", ParamGroup::LeftFingers, &[m::LEFT_RING_1_STRETCHED, m::LEFT_RING_2_STRETCHED, m::LEFT_RING_3_STRETCHED]),
    ParamSpec::primitive("LeftRingSpread", ParamGroup::LeftFingers, &[m::LEFT_RING_SPREAD]),
    ParamSpec::primitive("LeftLittleStretch", ParamGroup::LeftFingers, &[m::LEFT_LITTLE_1_STRETCHED, m::LEFT_LITTLE_2_STRETCHED, m::LEFT_LITTLE_3_STRETCHED]),
    ParamSpec::primitive("LeftLittleSpread", ParamGroup::LeftFingers, &[m::LEFT_LITTLE_SPREAD]),

    // Right fingers
    ParamSpec::primitive("RightThumbStretch", ParamGroup::RightFingers, &[m::RIGHT_THUMB_1_STRETCHED, m::RIGHT_THUMB_2_STRETCHED, m::RIGHT_THUMB_3_STRETCHED]),
    ParamSpec::primitive("RightThumbSpread", ParamGroup::RightFingers, &[m::RIGHT_THUMB_SPREAD]),
    ParamSpec::primitive("RightIndexStretch", ParamGroup::RightFingers, &[m::RIGHT_INDEX_1_STRETCHED, m::RIGHT_INDEX_2_STRETCHED, m::RIGHT_INDEX_3_STRETCHED]),
    ParamSpec::primitive("RightIndexSpread", ParamGroup::RightFingers, &[m::RIGHT_INDEX_SPREAD]),
    ParamSpec::primitive("RightMiddleStretch", ParamGroup::RightFingers, &[m::RIGHT_MIDDLE_1_STRETCHED, m::RIGHT_MIDDLE_2_STRETCHED, m::RIGHT_MIDDLE_3_STRETCHED]),
    ParamSpec::primitive("RightMiddleSpread", ParamGroup::RightFingers, &[m::RIGHT_MIDDLE_SPREAD]),
    ParamSpec::primitive("RightRingStretch", ParamGroup::RightFingers, &[m::RIGHT_RING_1_STRETCHED, m::RIGHT_RING_2_STRETCHED, m::RIGHT_RING_3_STRETCHED]),
    ParamSpec::primitive("RightRingSpread", ParamGroup::RightFingers, &[m::RIGHT_RING_SPREAD]),
    ParamSpec::primitive("RightLittleStretch", ParamGroup::RightFingers, &[m::RIGHT_LITTLE_1_STRETCHED, m::RIGHT_LITTLE_2_STRETCHED, m::RIGHT_LITTLE_3_STRETCHED]),
    ParamSpec::primitive("RightLittleSpread", ParamGroup::RightFingers, &[m::RIGHT_LITTLE_SPREAD]),
];
