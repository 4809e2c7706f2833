/// Event emitted by the bisection solver for each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current search bracket `[x0, x1]`, in the order supplied by the caller.
    pub bracket: [f64; 2],
    /// The midpoint that was evaluated.
    pub x: f64,
    /// Residual `f(x)` at the midpoint.
    pub residual: f64,
}
