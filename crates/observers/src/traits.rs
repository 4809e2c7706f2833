//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration counter and an x value
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nlsolve_core::Observer;
//! use nlsolve_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use nlsolve_solvers::{bisection, fallback, newton};

/// An event that carries an iteration counter and the evaluated x value.
pub trait HasIteration {
    /// Returns the 1-based iteration counter within the running method.
    fn iter(&self) -> usize;

    /// Returns the x value evaluated in this iteration.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual `f(x)` for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasIteration impls ---

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIteration for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIteration for fallback::Event {
    fn iter(&self) -> usize {
        fallback::Event::iter(self)
    }

    fn x(&self) -> f64 {
        fallback::Event::x(self)
    }
}

// --- HasResidual impls ---

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for fallback::Event {
    fn residual(&self) -> f64 {
        fallback::Event::residual(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fallback::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
