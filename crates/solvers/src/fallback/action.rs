/// Control actions supported by the fallback solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the estimate of the running method.
    StopEarly,
}
