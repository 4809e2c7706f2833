use super::Error;

/// Current bracket endpoints and the residual at `x0`.
///
/// Endpoints keep the order the caller supplied them in; `x0` may lie to
/// either side of `x1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    x0: f64,
    x1: f64,
    f0: f64,
}

/// How the bracket moved after a midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shrink {
    /// The midpoint replaced `x0`.
    X0,
    /// The midpoint replaced `x1`.
    X1,
    /// `f(mid) * f(x0)` was zero or NaN, so neither endpoint moved.
    Unchanged,
}

impl Bracket {
    /// Creates a bracket from endpoints and their residuals.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBracket` if `f0 * f1 > 0`.
    pub(super) fn new(x0: f64, x1: f64, f0: f64, f1: f64) -> Result<Self, Error> {
        if f0 * f1 > 0.0 {
            return Err(Error::InvalidBracket { x0, x1 });
        }

        Ok(Self { x0, x1, f0 })
    }

    /// Returns the bracket endpoints as `[x0, x1]`.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.x0, self.x1]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Replaces the endpoint whose residual shares the midpoint's sign.
    ///
    /// The sign test is the product `residual * f(x0)`: positive moves `x0`,
    /// negative moves `x1`, and anything else leaves the bracket as is.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) -> Shrink {
        let product = residual * self.f0;
        if product > 0.0 {
            self.x0 = x;
            self.f0 = residual;
            Shrink::X0
        } else if product < 0.0 {
            self.x1 = x;
            Shrink::X1
        } else {
            Shrink::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_same_sign_residuals() {
        assert!(matches!(
            Bracket::new(2.0, 3.0, 1.0, 2.0),
            Err(Error::InvalidBracket { x0, x1 }) if x0 == 2.0 && x1 == 3.0
        ));
        assert!(matches!(
            Bracket::new(2.0, 3.0, -1.0, -2.0),
            Err(Error::InvalidBracket { .. })
        ));
    }

    #[test]
    fn accepts_zero_residual_endpoint() {
        assert!(Bracket::new(0.0, 1.0, 0.0, 5.0).is_ok());
    }

    #[test]
    fn keeps_caller_order() {
        let bracket = Bracket::new(4.0, -2.0, 1.0, -1.0).expect("valid bracket");
        assert_eq!(bracket.as_array(), [4.0, -2.0]);
        assert_relative_eq!(bracket.midpoint(), 1.0);
    }

    #[test]
    fn shrink_moves_matching_endpoint() {
        let mut bracket = Bracket::new(0.0, 2.0, -1.0, 1.0).expect("valid bracket");

        assert_eq!(bracket.shrink(1.0, -0.5), Shrink::X0);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        assert_eq!(bracket.shrink(1.5, 0.25), Shrink::X1);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
    }

    #[test]
    fn shrink_leaves_bracket_when_product_is_zero() {
        let mut bracket = Bracket::new(0.0, 4.0, 0.0, 4.0).expect("valid bracket");

        assert_eq!(bracket.shrink(2.0, 2.0), Shrink::Unchanged);
        assert_eq!(bracket.as_array(), [0.0, 4.0]);
    }

    #[test]
    fn shrink_leaves_bracket_on_nan() {
        let mut bracket = Bracket::new(0.0, 4.0, -1.0, 1.0).expect("valid bracket");

        assert_eq!(bracket.shrink(2.0, f64::NAN), Shrink::Unchanged);
        assert_eq!(bracket.as_array(), [0.0, 4.0]);
    }
}
