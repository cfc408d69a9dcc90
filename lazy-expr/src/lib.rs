//! Lazily evaluated element-wise vector sums.
//!
//! Adding two [`Evaluable`] operands does not compute anything: it produces a
//! [`LazySum`] that borrows both operands and only adds their elements when a
//! specific index is requested via [`Evaluable::evaluate`].
//!
//! ```rust
//! use lazy_expr::{DenseVector, Evaluable};
//!
//! let a = DenseVector::from([1.0, 2.0, 3.0]);
//! let b = DenseVector::from([4.0, 5.0, 6.0]);
//!
//! let sum = &a + &b; // no arithmetic has happened yet
//!
//! assert_eq!(sum.evaluate(1), 7.0);
//! ```
mod error;
mod evaluable;
mod sum;
mod vector;

pub use error::EvalError;
pub use evaluable::{Bounded, Evaluable};
pub use sum::{add, LazySum};
pub use vector::DenseVector;

/// Eagerly evaluate every element of `expr` into a freshly allocated [`DenseVector`].
///
/// This is the strict counterpart of building a [`LazySum`]: each index is
/// evaluated exactly once, up front.
pub fn materialize<E: Bounded + ?Sized>(expr: &E) -> DenseVector {
    let len = expr.len();
    log::debug!("materializing expression of length {}", len);
    (0..len).map(|idx| expr.evaluate(idx)).collect()
}
