//! Data structures and algorithms implementations related to
//! quadratic integers (algebraic integers of degree at most 2).

mod arith;
pub mod integer;
mod invariants;
mod ordering;
pub mod ring;

pub use integer::QuadraticInteger;
pub use invariants::minimal_polynomial;
pub use ordering::numeric_cmp;
pub use ring::{QuadraticRing, RingKind};
