//! Muscle store contract over the reference rig.

use approx::assert_relative_eq;
use humanoid_muscle::MuscleStore;
use humanoid_types::{HUMANOID_MUSCLE_COUNT, HUMANOID_MUSCLE_NAMES, HumanoidRig, PoseError};

fn reference_store() -> MuscleStore {
    MuscleStore::with_rig(&HumanoidRig::reference()).expect("reference rig is valid")
}

const PROBES: [f64; 9] = [-7.5, -1.0, -0.999, -0.25, 0.0, 0.4, 1.0, 1.0001, 1e9];

/// `set(i, v)` then `get(i)` returns `clamp(v, -1, 1)` for every index.
#[test]
fn set_then_get_clamps() {
    let mut store = reference_store();

    for index in 0..HUMANOID_MUSCLE_COUNT {
        for value in PROBES {
            let stored = store.set(index, value).expect("valid index");
            assert_relative_eq!(stored, value.clamp(-1.0, 1.0));
            assert_relative_eq!(store.get(index).expect("valid index"), value.clamp(-1.0, 1.0));
        }
    }
}

/// Out-of-range indices are rejected and leave the store untouched.
#[test]
fn invalid_index_rejected_without_change() {
    let mut store = reference_store();
    store.set(10, 0.3).expect("valid index");
    let before = store.values().clone();

    for index in [HUMANOID_MUSCLE_COUNT, HUMANOID_MUSCLE_COUNT + 1, usize::MAX] {
        assert!(matches!(
            store.set(index, 0.5),
            Err(PoseError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            store.get(index),
            Err(PoseError::IndexOutOfRange { .. })
        ));
    }
    assert_eq!(store.values(), &before);
}

/// Reset zeroes every channel.
#[test]
fn reset_all_zeroes_everything() {
    let mut store = reference_store();
    for index in 0..HUMANOID_MUSCLE_COUNT {
        store.set(index, 0.9).expect("valid index");
    }

    store.reset_all().expect("initialized");
    for index in 0..HUMANOID_MUSCLE_COUNT {
        assert_eq!(store.get(index).expect("valid index"), 0.0);
    }
}

/// Every canonical name round-trips through its index.
#[test]
fn name_lookup_is_a_bijection() {
    let mut store = reference_store();

    for (position, name) in HUMANOID_MUSCLE_NAMES.iter().enumerate() {
        let index = store.index_of(name).expect("canonical name");
        assert_eq!(index, position);
        assert_eq!(store.name_of(index).expect("valid index"), *name);

        store.set_by_name(name, -3.0).expect("canonical name");
        assert_eq!(store.get(index).expect("valid index"), -1.0);
    }

    assert_eq!(
        store.set_by_name("LeftWingFlap", 0.1),
        Err(PoseError::muscle_not_found("LeftWingFlap"))
    );
    assert_eq!(store.enumerate().count(), HUMANOID_MUSCLE_COUNT);
}

/// An uninitialized store is inert, and initialize is idempotent.
#[test]
fn lifecycle() {
    let mut store = MuscleStore::new();
    assert_eq!(store.get(0), Err(PoseError::NotInitialized));
    assert_eq!(store.set(0, 1.0), Err(PoseError::NotInitialized));

    let rig = HumanoidRig::reference();
    store.initialize(&rig).expect("valid rig");
    store.set(5, 0.5).expect("valid index");
    store.initialize(&rig).expect("second call is a no-op");
    assert_eq!(store.get(5).expect("valid index"), 0.5);

    store.teardown();
    assert!(!store.is_initialized());
    assert_eq!(store.get(5), Err(PoseError::NotInitialized));
}

/// Non-humanoid or malformed rigs are rejected.
#[test]
fn invalid_rigs_rejected() {
    let mut store = MuscleStore::new();

    let not_humanoid = HumanoidRig::new(HUMANOID_MUSCLE_NAMES, false);
    assert!(matches!(
        store.initialize(&not_humanoid),
        Err(PoseError::InvalidRig { .. })
    ));

    let duplicated = HumanoidRig::new(["JawClose", "JawClose"], true);
    assert!(matches!(
        store.initialize(&duplicated),
        Err(PoseError::InvalidRig { .. })
    ));

    let empty = HumanoidRig::new(Vec::<String>::new(), true);
    assert!(matches!(
        store.initialize(&empty),
        Err(PoseError::InvalidRig { .. })
    ));
    assert!(!store.is_initialized());
}
