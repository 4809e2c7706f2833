use nlsolve_core::Observer;

use crate::traits::CanStopEarly;

/// Observer that stops a solver once it has seen `limit` events.
///
/// Useful for capping the work of the fallback solver across both phases,
/// since each method otherwise only honors its own iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    limit: usize,
    seen: usize,
}

impl StopAfter {
    /// Creates an observer that stops on the `limit`-th event.
    ///
    /// A `limit` of zero behaves like one: the first event stops the solver.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}
