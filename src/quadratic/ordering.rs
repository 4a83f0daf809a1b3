//! Equality, hashing and ordering of quadratic integers.
//!
//! Equality is structural: two values are equal iff they have the same parts,
//! the same denominator and the same ring. The ring is ignored for rational
//! values. Since every value is stored with its smallest denominator, this is
//! the same as denoting the same number.
//!
//! The order is numeric (real part, then imaginary part) with a structural
//! tie-break, so it is total and consistent with equality.

use super::integer::QuadraticInteger;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

impl QuadraticInteger {
    // Radicand of the ring for irrational values, zero (never a radicand) for rationals
    #[inline]
    fn ring_key(&self) -> i32 {
        if self.b == 0 {
            0
        } else {
            self.ring.radicand()
        }
    }
}

impl PartialEq for QuadraticInteger {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
            && self.b == other.b
            && self.c == other.c
            && self.ring_key() == other.ring_key()
    }
}

impl Eq for QuadraticInteger {}

impl Hash for QuadraticInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ring_key().hash(state);
        self.c.hash(state);
        self.a.hash(state);
        self.b.hash(state);
    }
}

/// Compare two quadratic integers by their numeric value only.
///
/// Only the floating point approximations are compared, so values that are
/// very close may compare as [Ordering::Equal] even if they are not equal.
pub fn numeric_cmp(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Ordering {
    lhs.real_part_numeric()
        .total_cmp(&rhs.real_part_numeric())
        .then_with(|| lhs.imag_part_numeric().total_cmp(&rhs.imag_part_numeric()))
}

impl Ord for QuadraticInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        numeric_cmp(self, other)
            .then_with(|| self.ring_key().cmp(&other.ring_key()))
            .then_with(|| self.c.cmp(&other.c))
            .then_with(|| self.a.cmp(&other.a))
            .then_with(|| self.b.cmp(&other.b))
    }
}

impl PartialOrd for QuadraticInteger {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
