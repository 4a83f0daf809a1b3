//! Rings of integers of the quadratic fields `Q(√d)`.

use crate::error::RingError;
use core::hash::{Hash, Hasher};
use num_integer::Integer;
use std::fmt;
use std::sync::Arc;

/// Whether the generator `√d` is a real or an imaginary number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingKind {
    Real,
    Imaginary,
}

/// The ring of integers of `Q(√d)` for a squarefree radicand `d`.
///
/// The ring is identified by its radicand alone; the cached square root is
/// only an approximation used for numeric conversions. Rings are immutable
/// and shared between values as `Arc<QuadraticRing>`.
#[derive(Debug, Clone)]
pub struct QuadraticRing {
    radicand: i32,
    sqrt_abs: f64, // √|d|
}

impl QuadraticRing {
    #[inline]
    pub(crate) fn new_raw(radicand: i32) -> Self {
        QuadraticRing {
            radicand,
            sqrt_abs: f64::from(radicand).abs().sqrt(),
        }
    }

    /// Create the ring of integers of `Q(√d)`.
    ///
    /// Positive radicands give real rings and negative ones imaginary rings.
    /// The radicand must be squarefree and must not be 0 or 1.
    pub fn new(radicand: i32) -> Result<Arc<Self>, RingError> {
        if radicand == 0 || radicand == 1 {
            return Err(RingError::Degenerate(radicand));
        }
        if let Some(square) = square_factor(radicand) {
            return Err(RingError::NotSquarefree { radicand, square });
        }

        tracing::trace!(radicand, "created quadratic ring");
        Ok(Arc::new(Self::new_raw(radicand)))
    }

    /// The Gaussian integers `Z[i]`
    pub fn gaussian() -> Arc<Self> {
        Arc::new(Self::new_raw(-1))
    }

    /// The ring `Z[φ]` with `φ = (1+√5)/2`
    pub fn golden() -> Arc<Self> {
        Arc::new(Self::new_raw(5))
    }

    #[inline]
    pub fn radicand(&self) -> i32 {
        self.radicand
    }

    #[inline]
    pub fn kind(&self) -> RingKind {
        if self.radicand < 0 {
            RingKind::Imaginary
        } else {
            RingKind::Real
        }
    }

    /// Whether `(a + b√d)/2` with odd `a`, `b` belongs to the ring,
    /// which happens exactly when `d ≡ 1 (mod 4)`
    #[inline]
    pub fn has_half_integers(&self) -> bool {
        self.radicand.rem_euclid(4) == 1
    }

    /// Approximation of `√|d|`
    #[inline]
    pub fn sqrt_approx(&self) -> f64 {
        self.sqrt_abs
    }
}

// Find the smallest square greater than one that divides `d`.
fn square_factor(d: i32) -> Option<i64> {
    let d = i64::from(d).abs();
    let mut p = 2i64;
    while p * p <= d {
        if d.is_multiple_of(&(p * p)) {
            return Some(p * p);
        }
        p += if p == 2 { 1 } else { 2 };
    }
    None
}

impl PartialEq for QuadraticRing {
    fn eq(&self, other: &Self) -> bool {
        self.radicand == other.radicand
    }
}

impl Eq for QuadraticRing {}

impl Hash for QuadraticRing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radicand.hash(state);
    }
}

impl fmt::Display for QuadraticRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.radicand, self.has_half_integers()) {
            (-1, _) => write!(f, "Z[i]"),
            (d, true) => write!(f, "O_Q(√{})", d),
            (d, false) => write!(f, "Z[√{}]", d),
        }
    }
}
