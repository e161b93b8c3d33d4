//! The pose applier: single owner of a muscle store and a composer.
//!
//! Binding resolves every reference muscle name against the store's rig once,
//! so composer writes (keyed by [`MuscleId`]) land on the right channel even
//! when the rig orders its channels differently or carries extra ones.
//!
//! ```text
//! PoseComposer ──(MuscleId, value)──► StoreSink ──remap──► MuscleStore::set(index)
//! ```

use humanoid_muscle::{MuscleSink, MuscleStore};
use humanoid_types::{MuscleId, PoseError, PoseSolver, Result};
use nalgebra::DVector;

use crate::cascade::CascadeReport;
use crate::catalog::ParamId;
use crate::composer::PoseComposer;
use crate::config::{PoseConfig, ResetPolicy};
use crate::settings::PoseSettings;

/// Reference muscle index to store index, resolved at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    remap: Vec<usize>,
}

impl Binding {
    fn resolve(store: &MuscleStore) -> Result<Self> {
        let remap = MuscleId::all()
            .map(|id| {
                let name = id.name().unwrap_or_default();
                store.index_of(name).map_err(|err| match err {
                    PoseError::MuscleNotFound { name } => {
                        PoseError::invalid_rig(format!("rig lacks muscle {name}"))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { remap })
    }

    fn index(&self, muscle: MuscleId) -> Result<usize> {
        self.remap
            .get(muscle.index())
            .copied()
            .ok_or(PoseError::IndexOutOfRange {
                index: muscle.index(),
                count: self.remap.len(),
            })
    }
}

/// Routes composer writes into the bound store.
struct StoreSink<'a> {
    store: &'a mut MuscleStore,
    binding: &'a Binding,
}

impl MuscleSink for StoreSink<'_> {
    fn write(&mut self, muscle: MuscleId, value: f64) {
        let written = self
            .binding
            .index(muscle)
            .and_then(|index| self.store.set(index, value));
        if let Err(err) = written {
            tracing::warn!(%muscle, "muscle write failed: {err}");
        }
    }

    fn clear(&mut self) {
        MuscleSink::clear(&mut *self.store);
    }
}

/// Owns a [`MuscleStore`] and a [`PoseComposer`] and wires one into the other.
///
/// Composite edits and pose application require a binding. With
/// [`PoseConfig::auto_bind`] set (the default) the first such operation binds
/// lazily; otherwise call [`bind`](Self::bind) explicitly.
#[derive(Debug, Clone)]
pub struct PoseApplier {
    store: MuscleStore,
    composer: PoseComposer,
    config: PoseConfig,
    binding: Option<Binding>,
}

impl PoseApplier {
    /// Create an unbound applier with the default configuration.
    #[must_use]
    pub fn new(store: MuscleStore, composer: PoseComposer) -> Self {
        Self::with_config(store, composer, PoseConfig::default())
    }

    /// Create an unbound applier with a custom configuration.
    #[must_use]
    pub fn with_config(store: MuscleStore, composer: PoseComposer, config: PoseConfig) -> Self {
        Self {
            store,
            composer,
            config,
            binding: None,
        }
    }

    /// Wire the composer's writes to the store.
    ///
    /// # Errors
    ///
    /// - [`PoseError::AlreadyBound`] if a binding exists
    /// - [`PoseError::NotInitialized`] if the store has no rig
    /// - [`PoseError::InvalidRig`] if the store's rig lacks a reference muscle
    pub fn bind(&mut self) -> Result<()> {
        if self.binding.is_some() {
            return Err(PoseError::AlreadyBound);
        }
        if !self.store.is_initialized() {
            return Err(PoseError::NotInitialized);
        }

        let binding = Binding::resolve(&self.store)?;
        tracing::debug!(muscles = binding.remap.len(), "pose applier bound");
        self.binding = Some(binding);
        Ok(())
    }

    /// Drop the binding. The store and composer keep their values.
    pub fn unbind(&mut self) {
        if self.binding.take().is_some() {
            tracing::debug!("pose applier unbound");
        }
    }

    /// Check if the applier is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    fn ensure_bound(&mut self) -> Result<()> {
        if self.binding.is_some() {
            return Ok(());
        }
        if !self.config.auto_bind {
            tracing::warn!("pose applier used before bind");
            return Err(PoseError::NotBound);
        }
        self.bind().map_err(|err| {
            tracing::warn!("pose applier could not bind: {err}");
            PoseError::NotBound
        })
    }

    /// Write the composer's whole primitive state into the store.
    ///
    /// # Errors
    ///
    /// [`PoseError::NotBound`] if no binding exists or can be made; the store
    /// is untouched.
    pub fn apply_pose(&mut self) -> Result<CascadeReport> {
        self.ensure_bound()?;
        let Some(binding) = &self.binding else {
            return Err(PoseError::NotBound);
        };

        let mut sink = StoreSink {
            store: &mut self.store,
            binding,
        };
        Ok(self.composer.apply_all(&mut sink))
    }

    /// Restore composite defaults and zero every muscle.
    ///
    /// Safe in any state, including before a binding exists. With
    /// [`ResetPolicy::Defaults`] and a binding, the restored defaults are
    /// then applied.
    pub fn reset_pose(&mut self) {
        self.composer.reset_all(&mut self.store);

        if self.config.reset_policy == ResetPolicy::Defaults {
            if let Some(binding) = &self.binding {
                let mut sink = StoreSink {
                    store: &mut self.store,
                    binding,
                };
                self.composer.apply_all(&mut sink);
            }
        }
    }

    /// Set a composite parameter and run its cascade into the store.
    ///
    /// # Errors
    ///
    /// [`PoseError::NotBound`], [`PoseError::UnknownParameter`], or
    /// [`PoseError::InvalidValue`]. Nothing changes on error.
    pub fn set_composite(&mut self, id: ParamId, value: f64) -> Result<CascadeReport> {
        self.ensure_bound()?;
        let Some(binding) = &self.binding else {
            return Err(PoseError::NotBound);
        };

        let mut sink = StoreSink {
            store: &mut self.store,
            binding,
        };
        self.composer.set_composite(id, value, &mut sink)
    }

    /// Set a composite parameter by name and run its cascade into the store.
    pub fn set_composite_by_name(&mut self, name: &str, value: f64) -> Result<CascadeReport> {
        let id = ParamId::from_name(name).ok_or_else(|| PoseError::unknown_parameter(name))?;
        self.set_composite(id, value)
    }

    /// Current value of a composite parameter.
    pub fn composite(&self, id: ParamId) -> Result<f64> {
        self.composer.value(id)
    }

    /// Write one muscle by store index, bypassing the composer.
    ///
    /// Returns the clamped value that was stored.
    pub fn set_muscle(&mut self, index: usize, value: f64) -> Result<f64> {
        self.ensure_bound()?;
        self.store.set(index, value)
    }

    /// Write one muscle by name, bypassing the composer.
    pub fn set_muscle_by_name(&mut self, name: &str, value: f64) -> Result<f64> {
        self.ensure_bound()?;
        self.store.set_by_name(name, value)
    }

    /// Write one reference muscle, bypassing the composer.
    pub fn set_muscle_by_id(&mut self, muscle: MuscleId, value: f64) -> Result<f64> {
        self.ensure_bound()?;
        let Some(binding) = &self.binding else {
            return Err(PoseError::NotBound);
        };
        let index = binding.index(muscle)?;
        self.store.set(index, value)
    }

    /// The full muscle array in rig order, for a pose solver to pull.
    #[must_use]
    pub fn muscles(&self) -> &DVector<f64> {
        self.store.values()
    }

    /// Hand the muscle array to `solver`.
    pub fn publish(&self, solver: &mut dyn PoseSolver) -> Result<()> {
        self.store.publish(solver)
    }

    /// The owned muscle store.
    #[must_use]
    pub fn store(&self) -> &MuscleStore {
        &self.store
    }

    /// The owned composer.
    #[must_use]
    pub fn composer(&self) -> &PoseComposer {
        &self.composer
    }

    /// The applier configuration.
    #[must_use]
    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    /// Capture every composite parameter value.
    #[must_use]
    pub fn settings(&self) -> PoseSettings {
        self.composer.settings()
    }

    /// Load composite values from a snapshot, then apply the pose.
    ///
    /// # Errors
    ///
    /// [`PoseError::NotBound`] if no binding exists or can be made, or any
    /// error from [`PoseComposer::restore`]. Neither the composer nor the store
    /// changes on error.
    pub fn restore_settings(&mut self, settings: &PoseSettings) -> Result<CascadeReport> {
        self.ensure_bound()?;
        self.composer.restore(settings)?;
        self.apply_pose()
    }

    /// Split the applier back into its store and composer.
    #[must_use]
    pub fn into_parts(self) -> (MuscleStore, PoseComposer) {
        (self.store, self.composer)
    }
}
