//! Exact arithmetic over the integers of quadratic number fields.
//!
//! A [QuadraticInteger] is a value `(a + b√d) / c` with `c` either 1 or 2,
//! living in the ring of integers of `Q(√d)` described by a [QuadraticRing].
//! Ring operations stay exact and report, rather than approximate, results
//! that leave the ring: see [QuadraticError].
//!
//! ```
//! use num_quadint::{QuadraticInteger, QuadraticOps, QuadraticRing};
//!
//! let ring = QuadraticRing::new(10).unwrap();
//! let x = QuadraticInteger::new(-136, 44, ring, 1).unwrap();
//! assert_eq!(x.try_add(-7).unwrap().to_string(), "-143+44√10");
//! ```

pub mod error;
pub mod quadratic;
pub mod symbols;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{ConstructionError, NotDivisible, QuadraticError, RingError};
pub use quadratic::{minimal_polynomial, numeric_cmp, QuadraticInteger, QuadraticRing, RingKind};
pub use traits::{Approximation, QuadraticOps};
