//! Twist controls that relay to their neighbours, and the leg twist pair.

use approx::assert_relative_eq;
use humanoid_muscle::MuscleStore;
use humanoid_pose::{PoseApplier, PoseComposer, params};
use humanoid_types::{HumanoidRig, muscles};

fn bound_applier() -> PoseApplier {
    let store = MuscleStore::with_rig(&HumanoidRig::reference()).expect("reference rig");
    let mut applier = PoseApplier::new(store, PoseComposer::new());
    applier.bind().expect("bind");
    applier
}

// ============================================================================
// Leg twist pair
// ============================================================================

/// Setting the left twist re-writes both legs' listed dependents and fires
/// each twist exactly once.
#[test]
fn left_twist_updates_both_legs_without_reentry() {
    let mut applier = bound_applier();
    applier
        .set_composite(params::LEFT_FOOT_TWIST_IN_OUT, 0.3)
        .expect("declared parameter");
    applier
        .set_composite(params::RIGHT_UPPER_LEG_TWIST_IN_OUT, -0.2)
        .expect("declared parameter");

    let report = applier
        .set_composite(params::LEFT_UPPER_LEG_TWIST_IN_OUT, 0.6)
        .expect("declared parameter");

    let fired = |id| report.fired.iter().filter(|&&f| f == id).count();
    assert_eq!(fired(params::LEFT_UPPER_LEG_TWIST_IN_OUT), 1);
    assert_eq!(fired(params::RIGHT_UPPER_LEG_TWIST_IN_OUT), 1);
    assert_eq!(report.fired[0], params::LEFT_UPPER_LEG_TWIST_IN_OUT);

    // Left-side dependents re-written with their current values.
    assert_relative_eq!(report.value_of(muscles::LEFT_UPPER_LEG_FRONT_BACK).unwrap(), 0.5);
    assert_relative_eq!(report.value_of(muscles::LEFT_LOWER_LEG_STRETCH).unwrap(), 1.0);
    assert_relative_eq!(report.value_of(muscles::LEFT_FOOT_TWIST_IN_OUT).unwrap(), 0.3);

    // The partner re-writes its own channel and its own side.
    assert_relative_eq!(report.value_of(muscles::RIGHT_UPPER_LEG_TWIST_IN_OUT).unwrap(), -0.2);
    assert_relative_eq!(report.value_of(muscles::RIGHT_UPPER_LEG_FRONT_BACK).unwrap(), 0.5);
    assert_relative_eq!(report.value_of(muscles::RIGHT_LOWER_LEG_STRETCH).unwrap(), 1.0);
    assert_relative_eq!(report.value_of(muscles::RIGHT_FOOT_TWIST_IN_OUT).unwrap(), 0.0);

    // The root keeps its edited value; the partner never re-enters it.
    assert_relative_eq!(
        applier
            .store()
            .get_by_id(muscles::LEFT_UPPER_LEG_TWIST_IN_OUT)
            .unwrap(),
        0.6
    );
    assert_eq!(report.write_count(), 14);
}

/// A raw muscle write on the partner's side is replaced by its composite
/// value when the other twist is edited.
#[test]
fn twist_edit_restores_partner_side_from_composites() {
    let mut applier = bound_applier();
    applier
        .set_muscle_by_name("RightFootUpDown", 0.7)
        .expect("canonical name");

    let report = applier
        .set_composite(params::LEFT_UPPER_LEG_TWIST_IN_OUT, 0.3)
        .expect("declared parameter");

    assert!(report.fired(params::RIGHT_FOOT_UP_DOWN));
    assert_eq!(report.value_of(muscles::RIGHT_FOOT_UP_DOWN), Some(0.0));
    assert_eq!(
        applier.store().get_by_name("RightFootUpDown").expect("canonical name"),
        0.0
    );
}

/// The pair is symmetric.
#[test]
fn right_twist_mirrors_left() {
    let mut applier = bound_applier();
    let report = applier
        .set_composite(params::RIGHT_UPPER_LEG_TWIST_IN_OUT, -0.7)
        .expect("declared parameter");

    assert!(report.fired(params::RIGHT_FOOT_UP_DOWN));
    assert!(report.fired(params::LEFT_UPPER_LEG_TWIST_IN_OUT));
    assert!(report.fired(params::LEFT_FOOT_UP_DOWN));
    assert_eq!(report.write_count(), 14);
    assert_relative_eq!(
        applier
            .store()
            .get_by_id(muscles::RIGHT_UPPER_LEG_TWIST_IN_OUT)
            .unwrap(),
        -0.7
    );
}

/// Repeated edits of a twist never accumulate.
#[test]
fn repeated_twist_edits_are_stable() {
    let mut applier = bound_applier();
    for _ in 0..3 {
        applier
            .set_composite(params::LEFT_UPPER_LEG_TWIST_IN_OUT, 0.4)
            .expect("declared parameter");
    }

    assert_relative_eq!(applier.composite(params::LEFT_UPPER_LEG_TWIST_IN_OUT).unwrap(), 0.4);
    assert_relative_eq!(applier.composite(params::RIGHT_UPPER_LEG_TWIST_IN_OUT).unwrap(), 0.0);
    assert_relative_eq!(
        applier.store().get_by_id(muscles::LEFT_UPPER_LEG_FRONT_BACK).unwrap(),
        0.5
    );
}

// ============================================================================
// Arm twists
// ============================================================================

/// An arm twist re-writes the rest of its arm and nothing on the other side.
#[test]
fn arm_twist_relays_within_its_arm() {
    let mut applier = bound_applier();
    let report = applier
        .set_composite(params::RIGHT_ARM_TWIST_IN_OUT, 0.5)
        .expect("declared parameter");

    assert_relative_eq!(report.value_of(muscles::RIGHT_ARM_TWIST_IN_OUT).unwrap(), 0.5);
    assert_relative_eq!(report.value_of(muscles::RIGHT_FOREARM_STRETCH).unwrap(), 1.0);
    assert!(report.writes.iter().all(|(muscle, _)| {
        muscle.name().is_some_and(|name| name.starts_with("Right"))
    }));
}
