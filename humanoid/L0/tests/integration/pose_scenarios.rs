//! End-to-end pose scenarios through the applier.

use approx::assert_relative_eq;
use humanoid_muscle::MuscleStore;
use humanoid_pose::{
    PoseApplier, PoseComposer, PoseConfig, PoseSettings, ResetPolicy, params,
};
use humanoid_types::{HUMANOID_MUSCLE_COUNT, HumanoidRig, muscles};

fn bound_applier() -> PoseApplier {
    let store = MuscleStore::with_rig(&HumanoidRig::reference()).expect("reference rig");
    let mut applier = PoseApplier::new(store, PoseComposer::new());
    applier.bind().expect("bind");
    applier
}

fn all_zero(applier: &PoseApplier) -> bool {
    applier.muscles().iter().all(|&v| v == 0.0)
}

// ============================================================================
// Defaults
// ============================================================================

/// Fresh composer at defaults, applied: the relaxed standing pose.
#[test]
fn defaults_apply_relaxed_pose() {
    let mut applier = bound_applier();
    let report = applier.apply_pose().expect("bound");

    assert_eq!(report.write_count(), HUMANOID_MUSCLE_COUNT);
    assert_eq!(applier.muscles()[42], 1.0); // LeftForearmStretch
    assert_eq!(applier.muscles()[21], 0.5); // LeftUpperLegFrontBack
    assert_eq!(applier.muscles()[0], 0.0); // SpineFrontBack
    assert_eq!(
        applier.store().get_by_id(muscles::JAW_CLOSE).expect("reference muscle"),
        1.0
    );
}

/// Applying twice without edits writes identical values.
#[test]
fn apply_pose_is_idempotent() {
    let mut applier = bound_applier();
    applier
        .set_composite(params::CURL_IN_OUT, 0.45)
        .expect("declared parameter");
    applier
        .set_composite(params::HEAD_TURN_LEFT_RIGHT, -0.3)
        .expect("declared parameter");

    let first_report = applier.apply_pose().expect("bound");
    let first = applier.muscles().clone();
    let second_report = applier.apply_pose().expect("bound");

    assert_eq!(applier.muscles(), &first);
    assert_eq!(first_report, second_report);
}

// ============================================================================
// Standing
// ============================================================================

/// Standing at 1.0 straightens the legs and halves the hip bend.
#[test]
fn standing_macro() {
    let mut applier = bound_applier();
    applier
        .set_composite_by_name("Standing", 1.0)
        .expect("declared parameter");

    assert_eq!(applier.muscles()[24], 1.0); // LeftLowerLegStretch
    assert_relative_eq!(applier.muscles()[21], 0.5, epsilon = 1e-12);
    assert_relative_eq!(
        applier
            .store()
            .get_by_id(muscles::RIGHT_UPPER_LEG_FRONT_BACK)
            .expect("reference muscle"),
        0.5,
        epsilon = 1e-12
    );
}

/// Standing is one-sided: negative input clamps to zero.
#[test]
fn standing_clamps_to_unipolar_range() {
    let mut applier = bound_applier();
    applier
        .set_composite(params::STANDING, -0.8)
        .expect("declared parameter");

    assert_eq!(applier.composite(params::STANDING).expect("declared"), 0.0);
    assert_eq!(applier.muscles()[24], 0.0);
}

// ============================================================================
// Reset
// ============================================================================

/// Reset always lands on all zeros, whatever came before.
#[test]
fn reset_pose_zeroes_every_channel() {
    let mut applier = bound_applier();
    applier.reset_pose();
    assert!(all_zero(&applier));

    applier.apply_pose().expect("bound");
    assert!(!all_zero(&applier));
    applier.reset_pose();
    assert!(all_zero(&applier));

    applier
        .set_composite(params::CURL_IN_OUT, -1.0)
        .expect("declared parameter");
    applier.set_muscle(3, 0.9).expect("valid index");
    applier.reset_pose();
    assert!(all_zero(&applier));
    assert!(applier.composer().is_default());
}

/// With the defaults policy reset lands on the relaxed pose instead.
#[test]
fn reset_pose_to_defaults() {
    let store = MuscleStore::with_rig(&HumanoidRig::reference()).expect("reference rig");
    let config = PoseConfig::default().reset_policy(ResetPolicy::Defaults);
    let mut applier = PoseApplier::with_config(store, PoseComposer::new(), config);
    applier.bind().expect("bind");

    applier
        .set_composite(params::STANDING, 1.0)
        .expect("declared parameter");
    applier.set_muscle(0, 0.7).expect("valid index");
    applier.reset_pose();

    let mut expected = bound_applier();
    expected.apply_pose().expect("bound");
    assert_eq!(applier.muscles(), expected.muscles());
}

// ============================================================================
// Settings
// ============================================================================

/// Settings captured from one applier reproduce the pose on another.
#[test]
fn settings_round_trip_between_appliers() {
    let mut source = bound_applier();
    source
        .set_composite(params::CURL_IN_OUT, 0.6)
        .expect("declared parameter");
    source
        .set_composite(params::JAW_LEFT_RIGHT, 0.2)
        .expect("declared parameter");
    source.apply_pose().expect("bound");

    let mut target = bound_applier();
    target
        .restore_settings(&source.settings())
        .expect("known parameters");

    assert_eq!(target.muscles(), source.muscles());
}

/// Unknown names in a snapshot change nothing.
#[test]
fn restore_rejects_unknown_names() {
    let mut applier = bound_applier();
    let settings = PoseSettings::new()
        .with("CurlInOut", 0.5)
        .with("EarWiggle", 1.0);

    assert!(applier.restore_settings(&settings).is_err());
    assert!(applier.composer().is_default());
    assert!(all_zero(&applier));
}

/// The solver pulls the array after apply.
#[test]
fn solver_pulls_after_apply() {
    let mut applier = bound_applier();
    applier.apply_pose().expect("bound");

    let mut frames = Vec::new();
    applier
        .publish(&mut |muscles: &[f64]| frames.push(muscles.to_vec()))
        .expect("initialized");

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].len(), HUMANOID_MUSCLE_COUNT);
    assert_eq!(frames[0][42], 1.0);
}
