use nlsolve_core::Observer;

use crate::traits::{HasIteration, HasResidual};

/// One evaluated point captured by [`History`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// Observer that records every evaluated point and never intervenes.
///
/// Pass `&mut history` to a solver to keep the recording after the solve.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded points in evaluation order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the recorded residuals in evaluation order.
    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.residual)
    }

    /// Returns the record with the smallest residual magnitude, if any.
    #[must_use]
    pub fn best(&self) -> Option<&Record> {
        self.records
            .iter()
            .min_by(|a, b| a.residual.abs().total_cmp(&b.residual.abs()))
    }

    fn record<E: HasIteration + HasResidual>(&mut self, event: &E) {
        self.records.push(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
