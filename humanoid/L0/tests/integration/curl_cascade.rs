//! The "CurlInOut" macro driven into a bound store.
//!
//! Fixed scale table: upper chest and neck at 1.0, spine and chest at 0.5,
//! shoulders and arms at 0.5, forearms at 1.0, leg front-back at 1.0, leg
//! twist at -0.5, lower-leg stretch at 1.0, lower-leg twist at -0.25, feet
//! and toes at 0.5, and every finger joint at 1.0 through the whole-hand
//! stretch controls.

use std::collections::HashSet;

use approx::assert_relative_eq;
use humanoid_muscle::MuscleStore;
use humanoid_pose::{PoseApplier, PoseComposer, params};
use humanoid_types::{HUMANOID_MUSCLE_NAMES, HumanoidRig, MuscleId};

const SCALES: &[(&str, f64)] = &[
    ("SpineFrontBack", 0.5),
    ("ChestFrontBack", 0.5),
    ("UpperChestFrontBack", 1.0),
    ("NeckNodDownUp", 1.0),
    ("LeftShoulderDownUp", 0.5),
    ("LeftArmDownUp", 0.5),
    ("LeftForearmStretch", 1.0),
    ("RightShoulderDownUp", 0.5),
    ("RightArmDownUp", 0.5),
    ("RightForearmStretch", 1.0),
    ("LeftUpperLegFrontBack", 1.0),
    ("LeftUpperLegTwistInOut", -0.5),
    ("LeftLowerLegStretch", 1.0),
    ("LeftLowerLegTwistInOut", -0.25),
    ("LeftFootUpDown", 0.5),
    ("LeftToesUpDown", 0.5),
    ("RightUpperLegFrontBack", 1.0),
    ("RightUpperLegTwistInOut", -0.5),
    ("RightLowerLegStretch", 1.0),
    ("RightLowerLegTwistInOut", -0.25),
    ("RightFootUpDown", 0.5),
    ("RightToesUpDown", 0.5),
];

const SAMPLES: [f64; 7] = [-1.0, -0.6, -0.2, 0.0, 0.3, 0.75, 1.0];

/// Every finger joint the whole-hand stretch controls reach.
fn finger_stretch_channels() -> Vec<&'static str> {
    HUMANOID_MUSCLE_NAMES
        .iter()
        .copied()
        .filter(|name| name.ends_with("Stretched"))
        .collect()
}

fn bound_applier() -> PoseApplier {
    let store = MuscleStore::with_rig(&HumanoidRig::reference()).expect("reference rig");
    let mut applier = PoseApplier::new(store, PoseComposer::new());
    applier.bind().expect("bind");
    applier
}

/// Each documented dependent channel equals `x * scale`.
#[test]
fn dependents_follow_scale_table() {
    for x in SAMPLES {
        let mut applier = bound_applier();
        applier
            .set_composite(params::CURL_IN_OUT, x)
            .expect("declared parameter");

        let store = applier.store();
        for &(name, scale) in SCALES {
            assert_relative_eq!(
                store.get_by_name(name).expect("canonical name"),
                x * scale,
                epsilon = 1e-12
            );
        }
        for name in finger_stretch_channels() {
            assert_relative_eq!(
                store.get_by_name(name).expect("canonical name"),
                x,
                epsilon = 1e-12
            );
        }
    }
}

/// Nothing outside the dependent set is written.
#[test]
fn no_writes_outside_dependent_set() {
    let mut dependent: HashSet<&str> = SCALES.iter().map(|&(name, _)| name).collect();
    dependent.extend(finger_stretch_channels());
    assert_eq!(dependent.len(), 52);

    for x in SAMPLES {
        let mut composer = PoseComposer::new();
        let mut written = Vec::new();
        composer
            .set_composite(params::CURL_IN_OUT, x, &mut |muscle: MuscleId, _value: f64| {
                written.push(muscle);
            })
            .expect("declared parameter");

        let names: HashSet<&str> = written
            .iter()
            .map(|muscle| muscle.name().expect("reference muscle"))
            .collect();
        assert_eq!(names, dependent, "write set for x = {x}");
        // Exactly one write per affected channel.
        assert_eq!(written.len(), names.len());
    }
}

/// A fresh store stays zero outside the dependent set.
#[test]
fn untouched_channels_stay_zero() {
    let mut applier = bound_applier();
    applier
        .set_composite_by_name("CurlInOut", 0.8)
        .expect("declared parameter");

    let dependent: HashSet<&str> = SCALES
        .iter()
        .map(|&(name, _)| name)
        .chain(finger_stretch_channels())
        .collect();

    for (index, name) in HUMANOID_MUSCLE_NAMES.iter().enumerate() {
        if !dependent.contains(name) {
            assert_eq!(applier.muscles()[index], 0.0, "{name} was written");
        }
    }
}

/// The composite values of the dependents track the macro too.
#[test]
fn dependent_composites_updated() {
    let mut applier = bound_applier();
    applier
        .set_composite(params::CURL_IN_OUT, -0.4)
        .expect("declared parameter");

    assert_relative_eq!(applier.composite(params::CURL_IN_OUT).unwrap(), -0.4);
    assert_relative_eq!(
        applier.composite(params::LEFT_UPPER_LEG_TWIST_IN_OUT).unwrap(),
        0.2,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        applier.composite(params::RIGHT_FINGERS_STRETCH).unwrap(),
        -0.4,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        applier.composite(params::RIGHT_LITTLE_STRETCH).unwrap(),
        -0.4,
        epsilon = 1e-12
    );
}
