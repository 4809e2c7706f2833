/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached `|f(x)| < residual_tol`.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Newton–Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Residual `f(x)` at the reported estimate.
    pub residual: f64,

    /// Number of Newton steps taken.
    pub iters: usize,
}
