/// Event emitted by the Newton–Raphson solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Estimate produced by this step.
    pub x: f64,
    /// Residual `f(x)` at the new estimate.
    pub residual: f64,
    /// Derivative at the previous estimate, used to take this step.
    pub slope: f64,
}
