//! Integers of quadratic fields represented as `(a + b√d) / c`

use super::ring::QuadraticRing;
use crate::error::{ConstructionError, QuadraticError};
use core::ops::Neg;
use num_integer::Integer;
use std::fmt;
use std::sync::Arc;

/// An integer of a quadratic field, represented as `(a + b√d) / c`.
///
/// The denominator `c` is either 1 or 2, and 2 is only kept for values with
/// odd parts in rings with half-integers. Every value is stored with the
/// smallest exact denominator, so each number has exactly one representation.
///
/// Values are immutable; every operation returns a new value.
#[derive(Clone, Debug)]
pub struct QuadraticInteger {
    pub(crate) a: i32,
    pub(crate) b: i32, // zero if the value is a rational integer
    pub(crate) c: i32, // either 1 or 2
    pub(crate) ring: Arc<QuadraticRing>,
}

impl QuadraticInteger {
    #[inline]
    pub(crate) fn new_raw(a: i32, b: i32, c: i32, ring: Arc<QuadraticRing>) -> Self {
        QuadraticInteger { a, b, c, ring }
    }

    /// Create the quadratic integer `(a + b√d) / denominator` in `ring`.
    ///
    /// Even parts over 2 are stored over 1, e.g. `(2 + 2√5) / 2` becomes
    /// `1 + √5`. Fails if the denominator is not 1 or 2, if odd parts over 2
    /// are used in a ring without half-integers, if the parts over 2 have
    /// different parity, or if a part equals `i32::MIN`.
    pub fn new(
        a: i32,
        b: i32,
        ring: Arc<QuadraticRing>,
        denominator: i32,
    ) -> Result<Self, QuadraticError> {
        check_parts(a, b, &ring, denominator)?;
        if denominator == 2 && a.is_even() && b.is_even() {
            return Ok(Self::new_raw(a / 2, b / 2, 1, ring));
        }
        Ok(Self::new_raw(a, b, denominator, ring))
    }

    /// Same as [QuadraticInteger::new], for callers that may not have a ring
    pub fn from_parts(
        a: i32,
        b: i32,
        ring: Option<Arc<QuadraticRing>>,
        denominator: i32,
    ) -> Result<Self, QuadraticError> {
        match ring {
            Some(ring) => Self::new(a, b, ring, denominator),
            None => Err(ConstructionError::MissingRing.into()),
        }
    }

    /// Create the rational integer `a` in `ring`
    #[inline]
    pub fn from_integer(a: i32, ring: Arc<QuadraticRing>) -> Result<Self, QuadraticError> {
        Self::new(a, 0, ring, 1)
    }

    #[inline]
    pub fn zero(ring: Arc<QuadraticRing>) -> Self {
        Self::new_raw(0, 0, 1, ring)
    }

    #[inline]
    pub fn one(ring: Arc<QuadraticRing>) -> Self {
        Self::new_raw(1, 0, 1, ring)
    }

    /// The generator `√d` of the ring
    #[inline]
    pub fn sqrt_d(ring: Arc<QuadraticRing>) -> Self {
        Self::new_raw(0, 1, 1, ring)
    }

    /// Get the components `(a, b, c)` of `(a + b√d) / c`
    #[inline]
    pub fn parts(&self) -> (i32, i32, i32) {
        (self.a, self.b, self.c)
    }

    #[inline]
    pub fn regular_part(&self) -> i32 {
        self.a
    }

    #[inline]
    pub fn surd_part(&self) -> i32 {
        self.b
    }

    #[inline]
    pub fn denominator(&self) -> i32 {
        self.c
    }

    #[inline]
    pub fn ring(&self) -> &Arc<QuadraticRing> {
        &self.ring
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.a == 0 && self.b == 0
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.b == 0 && self.a == self.c
    }

    /// Determine if the value is a rational integer (i.e. b = 0)
    #[inline]
    pub fn is_rational(&self) -> bool {
        self.b == 0
    }

    /// Determine if the value has no rational part (i.e. a = 0, b != 0)
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.a == 0 && self.b != 0
    }

    /// Degree of the minimal polynomial over the integers:
    /// 0 for zero, 1 for other rational integers and 2 otherwise
    #[inline]
    pub fn algebraic_degree(&self) -> u32 {
        match (self.a == 0, self.b == 0) {
            (true, true) => 0,
            (false, true) => 1,
            _ => 2,
        }
    }

    /// Return the conjugate `(a - b√d) / c`
    #[inline]
    pub fn conj(&self) -> Self {
        Self::new_raw(self.a, -self.b, self.c, self.ring.clone())
    }
}

fn check_parts(
    a: i32,
    b: i32,
    ring: &QuadraticRing,
    denominator: i32,
) -> Result<(), ConstructionError> {
    // excluded so that negation and conjugation never overflow
    for part in [a, b] {
        if part == i32::MIN {
            return Err(ConstructionError::PartOutOfRange(part));
        }
    }

    match denominator {
        1 => Ok(()),
        2 if a.is_even() && b.is_even() => Ok(()),
        2 if !ring.has_half_integers() => Err(ConstructionError::HalfIntegersUnsupported {
            a,
            b,
            radicand: ring.radicand(),
        }),
        2 if a.is_odd() != b.is_odd() => {
            Err(ConstructionError::ParityMismatch { a, b })
        }
        2 => Ok(()),
        _ => Err(ConstructionError::BadDenominator(denominator)),
    }
}

impl Neg for QuadraticInteger {
    type Output = QuadraticInteger;
    #[inline]
    fn neg(self) -> QuadraticInteger {
        QuadraticInteger::new_raw(-self.a, -self.b, self.c, self.ring)
    }
}

impl Neg for &QuadraticInteger {
    type Output = QuadraticInteger;
    #[inline]
    fn neg(self) -> QuadraticInteger {
        QuadraticInteger::new_raw(-self.a, -self.b, self.c, self.ring.clone())
    }
}

impl fmt::Display for QuadraticInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // print √-1 as i if alternate flag is set
        let root = if f.alternate() && self.ring.radicand() == -1 {
            String::from("i")
        } else {
            format!("√{}", self.ring.radicand())
        };

        let (a, b, c) = (self.a, self.b, self.c);
        match (a == 0, b == 0, b == 1, b == -1, c == 1) {
            (true, true, _, _, _) => write!(f, "0"),
            (true, false, true, _, true) => write!(f, "{}", root),
            (true, false, true, _, false) => write!(f, "{}/{}", root, c),
            (true, false, false, true, true) => write!(f, "-{}", root),
            (true, false, false, true, false) => write!(f, "-{}/{}", root, c),
            (true, false, false, false, true) => write!(f, "{}{}", b, root),
            (true, false, false, false, false) => write!(f, "{}{}/{}", b, root, c),
            (false, true, _, _, true) => write!(f, "{}", a),
            (false, true, _, _, false) => write!(f, "{}/{}", a, c),
            (false, false, true, _, true) => write!(f, "{}+{}", a, root),
            (false, false, false, true, true) => write!(f, "{}-{}", a, root),
            (false, false, false, false, true) => write!(f, "{}{:+}{}", a, b, root),
            (false, false, true, _, false) => write!(f, "({}+{})/{}", a, root, c),
            (false, false, false, true, false) => write!(f, "({}-{})/{}", a, root, c),
            (false, false, false, false, false) => write!(f, "({}{:+}{})/{}", a, b, root, c),
        }
    }
}
