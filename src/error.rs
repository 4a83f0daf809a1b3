//! Failure signals reported by ring construction and quadratic arithmetic.

use num_rational::Ratio;
use thiserror::Error;

/// Reasons a radicand cannot define a quadratic ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("radicand {0} does not define a quadratic extension")]
    Degenerate(i32),
    #[error("radicand {radicand} is divisible by the square {square}")]
    NotSquarefree { radicand: i32, square: i64 },
}

/// Reasons a `(a, b, denominator)` triple cannot be an element of its ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("a quadratic integer requires a ring")]
    MissingRing,
    #[error("denominator must be 1 or 2, got {0}")]
    BadDenominator(i32),
    #[error("(({a})+({b})√{radicand})/2 is not in a ring without half-integers")]
    HalfIntegersUnsupported { a: i32, b: i32, radicand: i32 },
    #[error("parts {a} and {b} must have the same parity over denominator 2")]
    ParityMismatch { a: i32, b: i32 },
    /// `i32::MIN` is not accepted as a part, so that negation and conjugation
    /// never overflow.
    #[error("part {0} is outside the representable range")]
    PartOutOfRange(i32),
}

/// Quotient that exists in the field but is not an algebraic integer.
///
/// The failed quotient is `(regular + surd·√d) / denominator`, kept unreduced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{dividend} is not divisible by {divisor}: quotient would be ({regular}+({surd})√{radicand})/{denominator}")]
pub struct NotDivisible {
    pub(crate) dividend: String,
    pub(crate) divisor: String,
    pub(crate) regular: i128,
    pub(crate) surd: i128,
    pub(crate) denominator: i128,
    pub(crate) radicand: i32,
}

impl NotDivisible {
    /// Get the unreduced numerators and common denominator `(regular, surd, denominator)`
    #[inline]
    pub fn parts(&self) -> (i128, i128, i128) {
        (self.regular, self.surd, self.denominator)
    }

    /// The radicand of the ring the quotient was attempted in
    #[inline]
    pub fn radicand(&self) -> i32 {
        self.radicand
    }

    /// Rational coefficient of `1` in the failed quotient
    pub fn regular_fraction(&self) -> Ratio<i128> {
        Ratio::new(self.regular, self.denominator)
    }

    /// Rational coefficient of `√d` in the failed quotient
    pub fn surd_fraction(&self) -> Ratio<i128> {
        Ratio::new(self.surd, self.denominator)
    }
}

/// Errors reported by construction and arithmetic on quadratic integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadraticError {
    #[error("invalid quadratic integer: {0}")]
    InvalidConstruction(#[from] ConstructionError),

    /// The result is well defined but needs an algebraic degree this crate
    /// does not represent.
    #[error("algebraic degree {degree} is out of range: {detail}")]
    DegreeOverflow { degree: u32, detail: String },

    #[error(transparent)]
    NotDivisible(#[from] NotDivisible),

    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: String },

    #[error("{operation} overflowed the native integer range")]
    Overflow { operation: &'static str },
}

impl QuadraticError {
    /// The algebraic degree carried by a [QuadraticError::DegreeOverflow]
    pub fn required_degree(&self) -> Option<u32> {
        match self {
            QuadraticError::DegreeOverflow { degree, .. } => Some(*degree),
            _ => None,
        }
    }
}
