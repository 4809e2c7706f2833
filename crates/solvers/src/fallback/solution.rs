use crate::{bisection, newton};

/// The method that produced the reported estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    NewtonRaphson,
    Bisection,
}

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached `|f(x)| < residual_tol`.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fallback solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Method that produced `x`.
    pub method: Method,

    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Residual `f(x)` at the reported estimate.
    pub residual: f64,

    /// Steps taken by `method`.
    pub iters: usize,
}

impl From<newton::Solution> for Solution {
    fn from(solution: newton::Solution) -> Self {
        Self {
            method: Method::NewtonRaphson,
            status: match solution.status {
                newton::Status::Converged => Status::Converged,
                newton::Status::StoppedByObserver => Status::StoppedByObserver,
            },
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
        }
    }
}

impl From<bisection::Solution> for Solution {
    fn from(solution: bisection::Solution) -> Self {
        Self {
            method: Method::Bisection,
            status: match solution.status {
                bisection::Status::Converged => Status::Converged,
                bisection::Status::StoppedByObserver => Status::StoppedByObserver,
            },
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
        }
    }
}
