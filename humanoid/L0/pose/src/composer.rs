//! The pose composer: composite parameter state and its cascades.
//!
//! [`PoseComposer`] holds one value per catalog row. It never touches a muscle
//! store directly; every muscle write goes through the [`MuscleSink`] the
//! caller passes in, which keeps the composer usable on its own (e.g. to
//! preview the writes of an edit) and lets the applier decide where writes land.

use humanoid_muscle::MuscleSink;
use humanoid_types::{PoseError, Result};

use crate::cascade::{Cascade, CascadeReport};
use crate::catalog::{PARAMS, ParamId, ParamSpec};
use crate::settings::PoseSettings;

/// Composite parameter values of one character.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseComposer {
    values: Vec<f64>,
}

impl Default for PoseComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseComposer {
    /// Create a composer at the documented defaults (relaxed standing pose).
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: PARAMS.iter().map(|spec| spec.default).collect(),
        }
    }

    fn spec(id: ParamId) -> Result<&'static ParamSpec> {
        id.spec()
            .ok_or_else(|| PoseError::unknown_parameter(id.to_string()))
    }

    fn resolve(name: &str) -> Result<ParamId> {
        ParamId::from_name(name).ok_or_else(|| PoseError::unknown_parameter(name))
    }

    /// Current value of a parameter.
    pub fn value(&self, id: ParamId) -> Result<f64> {
        Self::spec(id)?;
        Ok(self.values[id.index()])
    }

    /// Current value of a parameter, by name.
    pub fn value_by_name(&self, name: &str) -> Result<f64> {
        self.value(Self::resolve(name)?)
    }

    /// Iterate over `(parameter, value)` pairs in canonical order.
    pub fn values(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (ParamId(index), value))
    }

    /// Whether every parameter holds its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        PARAMS
            .iter()
            .zip(&self.values)
            .all(|(spec, &value)| spec.default == value)
    }

    /// Set a parameter and run its cascade.
    ///
    /// The value is clamped to the parameter's range, stored, and propagated
    /// to every dependent parameter. Each affected muscle receives exactly one
    /// write through `sink`, after the whole cascade has been computed.
    ///
    /// # Errors
    ///
    /// [`PoseError::UnknownParameter`] for an undeclared ID and
    /// [`PoseError::InvalidValue`] for `NaN`. Nothing changes on error.
    pub fn set_composite<S: MuscleSink + ?Sized>(
        &mut self,
        id: ParamId,
        value: f64,
        sink: &mut S,
    ) -> Result<CascadeReport> {
        let spec = Self::spec(id)?;
        let clamped = spec
            .range
            .clamp(value)
            .ok_or(PoseError::InvalidValue { value })?;

        self.values[id.index()] = clamped;
        tracing::trace!(param = spec.name, value = clamped, "composite changed");

        let report = Cascade::new(&mut self.values).propagate(id);
        report.flush(sink);
        Ok(report)
    }

    /// Set a parameter by name and run its cascade.
    pub fn set_composite_by_name<S: MuscleSink + ?Sized>(
        &mut self,
        name: &str,
        value: f64,
        sink: &mut S,
    ) -> Result<CascadeReport> {
        let id = Self::resolve(name)?;
        self.set_composite(id, value, sink)
    }

    /// Write every primitive parameter to its muscles in canonical order.
    ///
    /// Macros are not re-derived: the current primitive values are the pose.
    /// Calling this twice writes the same values twice.
    pub fn apply_all<S: MuscleSink + ?Sized>(&mut self, sink: &mut S) -> CascadeReport {
        let report = Cascade::new(&mut self.values).apply_all();
        report.flush(sink);
        report
    }

    /// Restore every parameter to its default and zero the sink's muscles.
    ///
    /// The muscles are zeroed rather than re-derived from the defaults: a
    /// reset returns the rig to "no pose", not to the standing pose.
    pub fn reset_all<S: MuscleSink + ?Sized>(&mut self, sink: &mut S) {
        for (value, spec) in self.values.iter_mut().zip(&PARAMS) {
            *value = spec.default;
        }
        sink.clear();
        tracing::trace!("composites reset to defaults");
    }

    /// Capture every parameter value.
    #[must_use]
    pub fn settings(&self) -> PoseSettings {
        PARAMS
            .iter()
            .zip(&self.values)
            .map(|(spec, &value)| (spec.name, value))
            .collect()
    }

    /// Load parameter values from a snapshot without running any cascade.
    ///
    /// Every name is validated before anything is assigned; names absent
    /// from the snapshot keep their current value. Values are clamped to
    /// their ranges.
    ///
    /// # Errors
    ///
    /// [`PoseError::UnknownParameter`] or [`PoseError::InvalidValue`]; the
    /// composer is unchanged on error.
    pub fn restore(&mut self, settings: &PoseSettings) -> Result<()> {
        let mut staged = Vec::with_capacity(settings.len());
        for (name, value) in settings.iter() {
            let id = Self::resolve(name)?;
            let clamped = Self::spec(id)?
                .range
                .clamp(value)
                .ok_or(PoseError::InvalidValue { value })?;
            staged.push((id, clamped));
        }

        for (id, value) in staged {
            self.values[id.index()] = value;
        }
        Ok(())
    }
}
