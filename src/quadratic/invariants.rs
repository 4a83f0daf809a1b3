//! Norm, trace, minimal polynomial and numeric views of quadratic integers.

use super::integer::QuadraticInteger;
use super::ring::RingKind;
use crate::error::QuadraticError;
use crate::traits::Approximation;
use core::f64::consts::PI;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

impl QuadraticInteger {
    /// Get the trace `2a / c`, i.e. the sum of the value and its conjugate.
    ///
    /// The regular part is widened before doubling so the result never overflows.
    #[inline]
    pub fn trace(&self) -> i64 {
        2 * i64::from(self.a) / i64::from(self.c)
    }

    /// Arbitrary precision version of [QuadraticInteger::trace]
    pub fn full_trace(&self) -> BigInt {
        BigInt::from(self.a) * 2 / self.c
    }

    fn norm_i128(&self) -> i128 {
        let (a, b, c) = (i128::from(self.a), i128::from(self.b), i128::from(self.c));
        let d = i128::from(self.ring.radicand());
        (a * a - d * b * b) / (c * c)
    }

    /// Get the norm `(a² - d·b²) / c²`, i.e. the product of the value and its conjugate.
    ///
    /// The norm is computed exactly; if it does not fit in an `i64` this
    /// reports [QuadraticError::Overflow]. Use [QuadraticInteger::full_norm]
    /// for values with parts close to the native limits.
    pub fn norm(&self) -> Result<i64, QuadraticError> {
        i64::try_from(self.norm_i128()).map_err(|_| {
            tracing::debug!(value = %self, "norm exceeds the native integer range");
            QuadraticError::Overflow { operation: "norm" }
        })
    }

    /// Arbitrary precision version of [QuadraticInteger::norm]
    pub fn full_norm(&self) -> BigInt {
        let (a, b) = (BigInt::from(self.a), BigInt::from(self.b));
        let d = BigInt::from(self.ring.radicand());
        (&a * &a - d * &b * &b) / (self.c * self.c)
    }

    /// Determine if the value is invertible in its ring (i.e. its norm is ±1)
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.norm_i128().abs() == 1
    }

    /// Coefficients of the minimal polynomial in ascending order of power.
    ///
    /// See [minimal_polynomial] for the layout of the result.
    #[inline]
    pub fn min_poly_coeffs(&self) -> Result<[i64; 3], QuadraticError> {
        minimal_polynomial(self, self.algebraic_degree())
    }

    /// Real part of the value, exact when it's a rational number
    pub fn real_part(&self) -> Approximation<f64> {
        let (a, b, c) = (f64::from(self.a), f64::from(self.b), f64::from(self.c));
        match self.ring.kind() {
            RingKind::Real if self.b == 0 => Approximation::Exact(a / c),
            RingKind::Real => Approximation::Approximated((a + self.ring.sqrt_approx() * b) / c),
            RingKind::Imaginary => Approximation::Exact(a / c),
        }
    }

    /// Imaginary part of the value, which is always zero in real rings
    pub fn imag_part(&self) -> Approximation<f64> {
        match self.ring.kind() {
            RingKind::Real => Approximation::Exact(0.0),
            RingKind::Imaginary => {
                let im = f64::from(self.b) * self.ring.sqrt_approx() / f64::from(self.c);
                if self.b == 0 || self.ring.radicand() == -1 {
                    Approximation::Exact(im)
                } else {
                    Approximation::Approximated(im)
                }
            }
        }
    }

    #[inline]
    pub fn real_part_numeric(&self) -> f64 {
        self.real_part().value()
    }

    #[inline]
    pub fn imag_part_numeric(&self) -> f64 {
        self.imag_part().value()
    }

    /// Whether [QuadraticInteger::real_part_numeric] is only an approximation
    #[inline]
    pub fn is_re_approx(&self) -> bool {
        !self.real_part().is_exact()
    }

    /// Whether [QuadraticInteger::imag_part_numeric] is only an approximation
    #[inline]
    pub fn is_im_approx(&self) -> bool {
        !self.imag_part().is_exact()
    }

    /// Distance of the value from zero
    pub fn abs(&self) -> f64 {
        self.real_part_numeric().hypot(self.imag_part_numeric())
    }

    /// Argument of the value in the complex plane, in `(-π, π]`
    pub fn angle(&self) -> f64 {
        match self.ring.kind() {
            RingKind::Real if self.real_part_numeric() < 0.0 => PI,
            RingKind::Real => 0.0,
            RingKind::Imaginary => self.imag_part_numeric().atan2(self.real_part_numeric()),
        }
    }
}

/// Coefficients `[c0, c1, c2]` of the minimal polynomial `c0 + c1·x + c2·x²`
/// of `x`, assuming `x` has the given algebraic degree.
///
/// - degree 2: `[norm, -trace, 1]`
/// - degree 1: `[-x, 1, 0]`
/// - degree 0: `[0, 1, 0]`
///
/// Any other degree is reported as [QuadraticError::DegreeOverflow] instead
/// of producing coefficients.
pub fn minimal_polynomial(x: &QuadraticInteger, degree: u32) -> Result<[i64; 3], QuadraticError> {
    match degree {
        0 => Ok([0, 1, 0]),
        1 => Ok([-i64::from(x.a / x.c), 1, 0]),
        2 => Ok([x.norm()?, -x.trace(), 1]),
        _ => {
            tracing::debug!(value = %x, degree, "unsupported degree for a minimal polynomial");
            Err(QuadraticError::DegreeOverflow {
                degree,
                detail: format!("{} cannot have a minimal polynomial of degree {}", x, degree),
            })
        }
    }
}

impl ToPrimitive for QuadraticInteger {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        if self.b != 0 {
            return None;
        }
        Some(i64::from(self.a / self.c))
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        if self.ring.kind() == RingKind::Imaginary && self.b != 0 {
            return None;
        }
        Some(self.real_part_numeric())
    }
}

#[cfg(feature = "num-complex")]
mod complex {
    use super::*;
    use num_complex::{Complex32, Complex64};

    impl QuadraticInteger {
        pub fn to_complex64(&self) -> Complex64 {
            Complex64::new(self.real_part_numeric(), self.imag_part_numeric())
        }

        pub fn to_complex32(&self) -> Option<Complex32> {
            let complex = self.to_complex64();
            Some(Complex32::new(complex.re.to_f32()?, complex.im.to_f32()?))
        }
    }
}
