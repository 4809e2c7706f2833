/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A midpoint reached `|f(x)| < residual_tol`.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint reported as the root estimate.
    pub x: f64,

    /// Residual `f(x)` at the reported midpoint.
    pub residual: f64,

    /// Bracket in effect when the midpoint was evaluated.
    pub bracket: [f64; 2],

    /// Number of bisection steps taken.
    pub iters: usize,
}
