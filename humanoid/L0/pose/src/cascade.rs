//! Cascade propagation over the parameter catalog.
//!
//! A cascade starts at one edited parameter (the root) and walks the catalog
//! edges synchronously:
//!
//! ```text
//! root ──channels──► muscle writes
//!   │
//!   ├──derived──► target := clamp(root * scale) ──► fire target (transitively)
//!   │
//!   ├──relays───► fire target with its current value (root only, one hop)
//!   │
//!   └──pair─────► fire partner and its relays with their current values
//! ```
//!
//! Two rules keep the walk finite and the output clean:
//!
//! 1. Each parameter fires at most once per cascade. Only the root fires its
//!    pair, so a partner never re-enters the root.
//! 2. Writes are collected per muscle and emitted once at the end. A muscle
//!    touched twice keeps its first position and its last value.

use humanoid_muscle::MuscleSink;
use humanoid_types::{HUMANOID_MUSCLE_COUNT, MuscleId};

use crate::catalog::{PARAM_COUNT, PARAMS, ParamId};

/// What a single cascade did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeReport {
    /// Parameters fired, in firing order.
    pub fired: Vec<ParamId>,
    /// Muscle writes emitted to the sink, one per muscle, in first-touch order.
    pub writes: Vec<(MuscleId, f64)>,
}

impl CascadeReport {
    /// Value written to `muscle`, if this cascade touched it.
    #[must_use]
    pub fn value_of(&self, muscle: MuscleId) -> Option<f64> {
        self.writes
            .iter()
            .find(|(written, _)| *written == muscle)
            .map(|&(_, value)| value)
    }

    /// Whether this cascade fired `param`.
    #[must_use]
    pub fn fired(&self, param: ParamId) -> bool {
        self.fired.contains(&param)
    }

    /// Number of muscle writes emitted.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    /// Check if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub(crate) fn flush<S: MuscleSink + ?Sized>(&self, sink: &mut S) {
        for &(muscle, value) in &self.writes {
            tracing::trace!(%muscle, value, "muscle write");
            sink.write(muscle, value);
        }
        tracing::trace!(
            fired = self.fired.len(),
            writes = self.writes.len(),
            "cascade flushed"
        );
    }
}

/// How a parameter was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hop {
    /// The edited parameter itself.
    Root,
    /// Reached through a macro derivation.
    Derived,
    /// Re-fired by the root's relays.
    Relayed,
    /// The root's pair partner; runs its own relays too.
    Paired,
}

/// One in-flight cascade over a composer's parameter values.
pub(crate) struct Cascade<'a> {
    values: &'a mut [f64],
    visited: [bool; PARAM_COUNT],
    slots: [Option<usize>; HUMANOID_MUSCLE_COUNT],
    report: CascadeReport,
}

impl<'a> Cascade<'a> {
    pub(crate) fn new(values: &'a mut [f64]) -> Self {
        Self {
            values,
            visited: [false; PARAM_COUNT],
            slots: [None; HUMANOID_MUSCLE_COUNT],
            report: CascadeReport::default(),
        }
    }

    /// Propagate a change of `root` and collect the resulting writes.
    pub(crate) fn propagate(mut self, root: ParamId) -> CascadeReport {
        self.fire(root, Hop::Root);
        self.report
    }

    /// Collect one write per channel of every primitive, in catalog order.
    pub(crate) fn apply_all(mut self) -> CascadeReport {
        for (index, spec) in PARAMS.iter().enumerate() {
            if spec.is_macro() {
                continue;
            }
            self.fire(ParamId(index), Hop::Relayed);
        }
        self.report
    }

    fn fire(&mut self, id: ParamId, hop: Hop) {
        let Some(spec) = id.spec() else {
            return;
        };
        if std::mem::replace(&mut self.visited[id.index()], true) {
            tracing::trace!(param = spec.name, ?hop, "already fired in this cascade");
            return;
        }

        self.report.fired.push(id);
        let value = self.values[id.index()];

        for &muscle in spec.channels {
            self.emit(muscle, value);
        }

        if hop == Hop::Relayed {
            return;
        }

        // Assign every derived value before firing any of them, so a target
        // fired early never sees a sibling's stale value.
        for edge in spec.derived {
            let Some(target) = edge.target.spec() else {
                continue;
            };
            if self.visited[edge.target.index()] {
                continue;
            }
            if let Some(derived) = target.range.clamp(value * edge.scale) {
                self.values[edge.target.index()] = derived;
            }
        }
        for edge in spec.derived {
            self.fire(edge.target, Hop::Derived);
        }

        if matches!(hop, Hop::Root | Hop::Paired) {
            for &relay in spec.relays {
                self.fire(relay, Hop::Relayed);
            }
        }

        if let (Hop::Root, Some(partner)) = (hop, spec.pair) {
            self.fire(partner, Hop::Paired);
        }
    }

    fn emit(&mut self, muscle: MuscleId, value: f64) {
        match self.slots.get_mut(muscle.index()) {
            Some(Some(position)) => self.report.writes[*position].1 = value,
            Some(slot) => {
                *slot = Some(self.report.writes.len());
                self.report.writes.push((muscle, value));
            }
            None => self.report.writes.push((muscle, value)),
        }
    }
}
