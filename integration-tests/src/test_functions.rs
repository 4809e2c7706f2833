//! Scalar functions with known roots, shared by the integration tests.

use std::convert::Infallible;

use nlsolve_core::Function;

/// A polynomial in factored form, `(x - r_0)(x - r_1)...(x - r_n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Factored {
    roots: Vec<f64>,
}

impl Factored {
    pub fn new(roots: impl Into<Vec<f64>>) -> Self {
        Self {
            roots: roots.into(),
        }
    }

    pub fn roots(&self) -> &[f64] {
        &self.roots
    }

    /// Returns the derivative, evaluated by the product rule.
    pub fn derivative(&self) -> Derivative<'_> {
        Derivative { of: self }
    }

    fn value(&self, x: f64) -> f64 {
        self.roots.iter().map(|root| x - root).product()
    }
}

impl Function for Factored {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self.value(x))
    }
}

/// The derivative of a [`Factored`] polynomial.
#[derive(Debug, Clone, Copy)]
pub struct Derivative<'a> {
    of: &'a Factored,
}

impl Function for Derivative<'_> {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        let roots = &self.of.roots;
        let slope = (0..roots.len())
            .map(|skip| {
                roots
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, root)| x - root)
                    .product::<f64>()
            })
            .sum();
        Ok(slope)
    }
}
