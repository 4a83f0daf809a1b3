//! Ring arithmetic on quadratic integers.
//!
//! Operands are widened to `i128` before combining, so intermediate values
//! never wrap. Results are reduced to the smallest exact denominator and
//! narrowed back, reporting [QuadraticError::Overflow] if they don't fit.

use super::integer::QuadraticInteger;
use super::ring::QuadraticRing;
use crate::error::{NotDivisible, QuadraticError};
use crate::traits::QuadraticOps;
use num_integer::Integer;
use std::sync::Arc;

// Select the ring the result of a binary operation lives in. A rational
// operand fits in any ring, but two irrational operands from different
// rings would need a degree-4 field to hold the result.
fn common_ring(
    lhs: &QuadraticInteger,
    rhs: &QuadraticInteger,
    operation: &'static str,
) -> Result<Arc<QuadraticRing>, QuadraticError> {
    if lhs.ring == rhs.ring || rhs.is_rational() {
        Ok(lhs.ring.clone())
    } else if lhs.is_rational() {
        Ok(rhs.ring.clone())
    } else {
        tracing::debug!(%lhs, %rhs, operation, "operands from different quadratic rings");
        Err(QuadraticError::DegreeOverflow {
            degree: 4,
            detail: format!(
                "{} of {} in {} and {} in {}",
                operation, lhs, lhs.ring, rhs, rhs.ring
            ),
        })
    }
}

#[inline]
fn widen(x: &QuadraticInteger) -> (i128, i128, i128) {
    (i128::from(x.a), i128::from(x.b), i128::from(x.c))
}

fn narrow(v: i128, operation: &'static str) -> Result<i32, QuadraticError> {
    match i32::try_from(v) {
        Ok(v) if v != i32::MIN => Ok(v),
        _ => {
            tracing::debug!(value = %v, operation, "quadratic integer part overflowed");
            Err(QuadraticError::Overflow { operation })
        }
    }
}

// Build `(a + b√d) / c` with the smallest denominator that keeps it exact.
fn assemble(
    mut a: i128,
    mut b: i128,
    mut c: i128,
    ring: Arc<QuadraticRing>,
    operation: &'static str,
) -> Result<QuadraticInteger, QuadraticError> {
    while c > 1 && a.is_even() && b.is_even() {
        a /= 2;
        b /= 2;
        c /= 2;
    }
    let c = i32::try_from(c).unwrap_or(0); // an invalid denominator is reported below
    QuadraticInteger::new(narrow(a, operation)?, narrow(b, operation)?, ring, c)
}

fn add_sub(
    lhs: &QuadraticInteger,
    rhs: &QuadraticInteger,
    negate: bool,
    operation: &'static str,
) -> Result<QuadraticInteger, QuadraticError> {
    let ring = common_ring(lhs, rhs, operation)?;
    let (la, lb, lc) = widen(lhs);
    let (ra, rb, rc) = widen(rhs);
    let (ra, rb) = if negate { (-ra, -rb) } else { (ra, rb) };

    if lc == rc {
        return assemble(la + ra, lb + rb, lc, ring, operation);
    }

    // rescale the operand with denominator 1
    let lcm = lc.lcm(&rc);
    let (lr, rr) = (lcm / lc, lcm / rc);
    assemble(la * lr + ra * rr, lb * lr + rb * rr, lcm, ring, operation)
}

fn mul(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
    let ring = common_ring(lhs, rhs, "multiplication")?;
    let d = i128::from(ring.radicand());
    let (la, lb, lc) = widen(lhs);
    let (ra, rb, rc) = widen(rhs);

    assemble(
        la * ra + lb * rb * d,
        la * rb + lb * ra,
        lc * rc,
        ring,
        "multiplication",
    )
}

// Division is done as `lhs * conj(rhs) / norm(rhs)`, which gives the quotient
// as `(p + q√d) / m` over the integers. It is exact iff `2p/m` and `2q/m` are
// integers that form a valid element over denominator 1 or 2.
fn div(lhs: &QuadraticInteger, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
    if rhs.is_zero() {
        tracing::debug!(dividend = %lhs, "division by zero");
        return Err(QuadraticError::DivisionByZero {
            dividend: lhs.to_string(),
        });
    }

    let ring = common_ring(lhs, rhs, "division")?;
    let d = i128::from(ring.radicand());
    let (la, lb, lc) = widen(lhs);
    let (ra, rb, rc) = widen(rhs);

    let p = rc * (la * ra - lb * rb * d);
    let q = rc * (lb * ra - la * rb);
    let m = lc * (ra * ra - d * rb * rb);

    let not_divisible = || {
        tracing::debug!(dividend = %lhs, divisor = %rhs, "quotient is not an algebraic integer");
        QuadraticError::NotDivisible(NotDivisible {
            dividend: lhs.to_string(),
            divisor: rhs.to_string(),
            regular: p,
            surd: q,
            denominator: m,
            radicand: ring.radicand(),
        })
    };

    let (qa, rem_a) = (2 * p).div_rem(&m);
    let (qb, rem_b) = (2 * q).div_rem(&m);
    if rem_a != 0 || rem_b != 0 {
        return Err(not_divisible());
    }

    let halves = qa.is_odd() || qb.is_odd();
    if halves && !(ring.has_half_integers() && qa.is_odd() && qb.is_odd()) {
        return Err(not_divisible());
    }

    assemble(qa, qb, 2, ring.clone(), "division")
}

impl QuadraticOps<&QuadraticInteger> for QuadraticInteger {
    type Output = QuadraticInteger;
    type Error = QuadraticError;

    #[inline]
    fn try_add(&self, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        add_sub(self, rhs, false, "addition")
    }

    #[inline]
    fn try_sub(&self, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        add_sub(self, rhs, true, "subtraction")
    }

    #[inline]
    fn try_mul(&self, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        mul(self, rhs)
    }

    #[inline]
    fn try_div(&self, rhs: &QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        div(self, rhs)
    }
}

impl QuadraticOps<QuadraticInteger> for QuadraticInteger {
    type Output = QuadraticInteger;
    type Error = QuadraticError;

    #[inline]
    fn try_add(&self, rhs: QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        self.try_add(&rhs)
    }

    #[inline]
    fn try_sub(&self, rhs: QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        self.try_sub(&rhs)
    }

    #[inline]
    fn try_mul(&self, rhs: QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        self.try_mul(&rhs)
    }

    #[inline]
    fn try_div(&self, rhs: QuadraticInteger) -> Result<QuadraticInteger, QuadraticError> {
        self.try_div(&rhs)
    }
}

// A plain integer operand is the rational integer of the same ring
impl QuadraticOps<i32> for QuadraticInteger {
    type Output = QuadraticInteger;
    type Error = QuadraticError;

    #[inline]
    fn try_add(&self, rhs: i32) -> Result<QuadraticInteger, QuadraticError> {
        self.try_add(&QuadraticInteger::from_integer(rhs, self.ring.clone())?)
    }

    #[inline]
    fn try_sub(&self, rhs: i32) -> Result<QuadraticInteger, QuadraticError> {
        self.try_sub(&QuadraticInteger::from_integer(rhs, self.ring.clone())?)
    }

    #[inline]
    fn try_mul(&self, rhs: i32) -> Result<QuadraticInteger, QuadraticError> {
        self.try_mul(&QuadraticInteger::from_integer(rhs, self.ring.clone())?)
    }

    #[inline]
    fn try_div(&self, rhs: i32) -> Result<QuadraticInteger, QuadraticError> {
        self.try_div(&QuadraticInteger::from_integer(rhs, self.ring.clone())?)
    }
}

impl QuadraticInteger {
    /// Raise the value to a non-negative power by repeated squaring
    pub fn try_pow(&self, exp: u32) -> Result<QuadraticInteger, QuadraticError> {
        let mut result = QuadraticInteger::one(self.ring.clone());
        let mut base = self.clone();
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }
}
