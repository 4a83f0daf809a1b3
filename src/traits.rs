/// Represents a number conversion with probably exact value.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    /// Get the computed value regardless of whether it's exact
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// Ring operations on quadratic integers that may leave the ring they are
/// asked to stay within.
///
/// Implemented once per accepted right-hand side, so a quadratic integer can
/// be combined with another quadratic integer or with a plain integer.
pub trait QuadraticOps<Rhs> {
    type Output;
    type Error;

    fn try_add(&self, rhs: Rhs) -> Result<Self::Output, Self::Error>;
    fn try_sub(&self, rhs: Rhs) -> Result<Self::Output, Self::Error>;
    fn try_mul(&self, rhs: Rhs) -> Result<Self::Output, Self::Error>;

    /// Exact division. Fails if the quotient is not an integer of the ring.
    fn try_div(&self, rhs: Rhs) -> Result<Self::Output, Self::Error>;
}
