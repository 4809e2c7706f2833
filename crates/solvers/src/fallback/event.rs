use crate::{bisection, newton};

/// Event emitted by the fallback solver, tagged by the running method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A Newton–Raphson step.
    Newton(newton::Event),
    /// A bisection midpoint evaluation.
    Bisection(bisection::Event),
}

impl Event {
    /// Returns the iteration counter within the running method.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Event::Newton(event) => event.iter,
            Event::Bisection(event) => event.iter,
        }
    }

    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Event::Newton(event) => event.x,
            Event::Bisection(event) => event.x,
        }
    }

    /// Returns the residual at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self {
            Event::Newton(event) => event.residual,
            Event::Bisection(event) => event.residual,
        }
    }
}
