//! This module contains several predefined quadratic integers

use crate::quadratic::{QuadraticInteger, QuadraticRing};
use std::sync::Arc;

/// The golden ratio `φ = (1+√5)/2`
pub fn golden_ratio() -> QuadraticInteger {
    QuadraticInteger::new_raw(1, 1, 2, QuadraticRing::golden())
}

/// The conjugate of the golden ratio `(1-√5)/2 = -1/φ`
pub fn golden_ratio_conj() -> QuadraticInteger {
    golden_ratio().conj()
}

/// The silver ratio `1+√2`
pub fn silver_ratio() -> QuadraticInteger {
    QuadraticInteger::new_raw(1, 1, 1, Arc::new(QuadraticRing::new_raw(2)))
}

/// The imaginary unit `i` of the Gaussian integers
pub fn imaginary_unit() -> QuadraticInteger {
    QuadraticInteger::sqrt_d(QuadraticRing::gaussian())
}
