/// Control actions supported by the Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    StopEarly,
}
