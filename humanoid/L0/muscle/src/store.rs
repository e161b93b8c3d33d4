//! The muscle channel store.
//!
//! [`MuscleStore`] owns the canonical array of normalized muscle values for
//! one rig. Every write is clamped to `[-1, 1]` and is visible immediately;
//! there is no buffering between a `set` and the next `get`.
//!
//! The store starts uninitialized. [`MuscleStore::initialize`] binds it to a
//! [`RigDescriptor`], fixing the index/name bijection for the lifetime of the
//! binding. Until then every accessor reports [`PoseError::NotInitialized`]
//! and writes nothing.

use std::collections::HashMap;

use humanoid_types::{MuscleId, PoseError, PoseSolver, Result, RigDescriptor, clamp_muscle};
use nalgebra::DVector;

/// Index/name bijection captured from a rig descriptor.
#[derive(Debug, Clone, PartialEq)]
struct ChannelLayout {
    names: Vec<String>,
    name_to_index: HashMap<String, usize>,
}

impl ChannelLayout {
    /// Validate a rig and capture its channel names.
    fn from_rig(rig: &dyn RigDescriptor) -> Result<Self> {
        if !rig.is_humanoid() {
            return Err(PoseError::invalid_rig("rig is not a humanoid"));
        }

        let count = rig.muscle_count();
        if count == 0 {
            return Err(PoseError::invalid_rig("rig has no muscles"));
        }

        let mut names = Vec::with_capacity(count);
        let mut name_to_index = HashMap::with_capacity(count);

        for index in 0..count {
            let name = match rig.muscle_name(index) {
                Some(name) if !name.is_empty() => name,
                _ => {
                    return Err(PoseError::invalid_rig(format!(
                        "muscle {index} has no name"
                    )));
                }
            };

            if name_to_index.insert(name.to_owned(), index).is_some() {
                return Err(PoseError::invalid_rig(format!(
                    "duplicate muscle name: {name}"
                )));
            }
            names.push(name.to_owned());
        }

        Ok(Self {
            names,
            name_to_index,
        })
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// Normalized muscle values of a single humanoid rig.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleStore {
    layout: Option<ChannelLayout>,
    values: DVector<f64>,
}

impl Default for MuscleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MuscleStore {
    /// Create an uninitialized store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: None,
            values: DVector::zeros(0),
        }
    }

    /// Create a store already bound to `rig`.
    pub fn with_rig(rig: &dyn RigDescriptor) -> Result<Self> {
        let mut store = Self::new();
        store.initialize(rig)?;
        Ok(store)
    }

    /// Bind the store to a rig.
    ///
    /// Idempotent: once a call has succeeded, later calls are no-ops and keep
    /// the existing binding and values. Use [`rebind`](Self::rebind) to switch
    /// rigs.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::InvalidRig`] if the descriptor is not a humanoid,
    /// has no muscles, or has a missing or duplicated muscle name. The store
    /// stays uninitialized.
    ///
    /// Only the structure of the channel set is checked here, so rigs with
    /// their own channel names are accepted. Whether the rig carries every
    /// reference muscle is checked when a pose applier binds to the store,
    /// which reports [`PoseError::InvalidRig`] for a missing one.
    pub fn initialize(&mut self, rig: &dyn RigDescriptor) -> Result<()> {
        if self.layout.is_some() {
            return Ok(());
        }
        self.bind_layout(rig)
    }

    /// Replace the current binding with `rig`, zeroing every muscle.
    ///
    /// On failure the previous binding (if any) is left untouched.
    pub fn rebind(&mut self, rig: &dyn RigDescriptor) -> Result<()> {
        self.bind_layout(rig)
    }

    fn bind_layout(&mut self, rig: &dyn RigDescriptor) -> Result<()> {
        let layout = ChannelLayout::from_rig(rig).inspect_err(|err| {
            tracing::warn!("Missing or invalid humanoid rig: {err}");
        })?;

        self.values = DVector::zeros(layout.len());
        tracing::debug!(muscles = layout.len(), "muscle store initialized");
        self.layout = Some(layout);
        Ok(())
    }

    /// Drop the rig binding. The store returns to its uninitialized state.
    pub fn teardown(&mut self) {
        if self.layout.take().is_some() {
            tracing::debug!("muscle store torn down");
        }
        self.values = DVector::zeros(0);
    }

    /// Whether the store is bound to a rig.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.layout.is_some()
    }

    /// Number of muscles in the bound rig (0 when uninitialized).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store holds no muscles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn layout(&self) -> Result<&ChannelLayout> {
        self.layout.as_ref().ok_or(PoseError::NotInitialized)
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        let count = self.layout()?.len();
        if index < count {
            Ok(index)
        } else {
            Err(PoseError::IndexOutOfRange { index, count })
        }
    }

    /// Resolve a muscle name to its index in the bound rig (exact match).
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.layout()?
            .name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| PoseError::muscle_not_found(name))
    }

    /// Name of the muscle at `index`.
    pub fn name_of(&self, index: usize) -> Result<&str> {
        let index = self.check_index(index)?;
        Ok(self.layout()?.names[index].as_str())
    }

    /// Resolve a reference-catalog identifier to an index in the bound rig.
    ///
    /// Resolution goes through the muscle name, so rigs whose channel order
    /// differs from the reference catalog are addressed correctly.
    pub fn index_of_id(&self, id: MuscleId) -> Result<usize> {
        let name = id.name().ok_or(PoseError::IndexOutOfRange {
            index: id.index(),
            count: humanoid_types::HUMANOID_MUSCLE_COUNT,
        })?;
        self.index_of(name)
    }

    /// Get the value of the muscle at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        let index = self.check_index(index)?;
        Ok(self.values[index])
    }

    /// Get a muscle value by name.
    pub fn get_by_name(&self, name: &str) -> Result<f64> {
        let index = self.index_of(name)?;
        Ok(self.values[index])
    }

    /// Get a muscle value by reference-catalog identifier.
    pub fn get_by_id(&self, id: MuscleId) -> Result<f64> {
        let index = self.index_of_id(id)?;
        Ok(self.values[index])
    }

    /// Set the muscle at `index`, clamping `value` to `[-1, 1]`.
    ///
    /// Returns the value actually stored.
    ///
    /// # Errors
    ///
    /// [`PoseError::NotInitialized`], [`PoseError::IndexOutOfRange`], or
    /// [`PoseError::InvalidValue`] for `NaN`. The store is unchanged on error.
    pub fn set(&mut self, index: usize, value: f64) -> Result<f64> {
        let index = self.check_index(index).inspect_err(|err| {
            if let PoseError::IndexOutOfRange { .. } = err {
                tracing::warn!("Invalid muscle index: {err}");
            }
        })?;
        let clamped = clamp_muscle(value).ok_or(PoseError::InvalidValue { value })?;
        self.values[index] = clamped;
        Ok(clamped)
    }

    /// Set a muscle by name.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<f64> {
        let index = self.index_of(name).inspect_err(|err| {
            if let PoseError::MuscleNotFound { .. } = err {
                tracing::warn!("{err}");
            }
        })?;
        self.set(index, value)
    }

    /// Set a muscle by reference-catalog identifier.
    pub fn set_by_id(&mut self, id: MuscleId, value: f64) -> Result<f64> {
        let index = self.index_of_id(id)?;
        self.set(index, value)
    }

    /// Zero every muscle.
    pub fn reset_all(&mut self) -> Result<()> {
        self.layout()?;
        self.values.fill(0.0);
        Ok(())
    }

    /// Iterate over `(index, name)` pairs in canonical order.
    ///
    /// Empty when the store is uninitialized.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &str)> {
        self.layout
            .iter()
            .flat_map(|layout| layout.names.iter().map(String::as_str).enumerate())
    }

    /// Log every `(index, name)` pair at info level.
    pub fn log_catalog(&self) {
        for (index, name) in self.enumerate() {
            tracing::info!("{index}: {name}");
        }
    }

    /// The full muscle array, in rig order, for a pose solver to pull.
    #[must_use]
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Hand the full muscle array to a pose solver.
    pub fn publish(&self, solver: &mut dyn PoseSolver) -> Result<()> {
        self.layout()?;
        solver.solve(self.values.as_slice());
        Ok(())
    }
}
