use crate::EvalError;

/// Anything that can produce the element at some index on demand.
///
/// # Motivation
///
/// This is the single capability shared by stored vectors and by lazy
/// expressions built on top of them. Because [`crate::LazySum`] only asks its
/// operands to implement `Evaluable`, sums can be nested (a sum of a vector and
/// another sum) without either type knowing about the other.
///
/// # Implementing this trait
///
/// `evaluate` must be a pure read: calling it twice with the same index
/// yields the same value and has no side effects on the expression.
///
/// ```rust
/// # use lazy_expr::Evaluable;
/// struct Ramp;
///
/// impl Evaluable for Ramp {
///     fn evaluate(&self, index: usize) -> f64 {
///         index as f64
///     }
/// }
///
/// assert_eq!(Ramp.evaluate(3), 3.0);
/// ```
///
/// # Use
///
/// Any implementor can be combined with a stored vector via [`crate::add`]:
/// ```rust
/// # use lazy_expr::{DenseVector, Evaluable};
/// # struct Ramp;
/// #
/// # impl Evaluable for Ramp {
/// #     fn evaluate(&self, index: usize) -> f64 {
/// #         index as f64
/// #     }
/// # }
/// let v = DenseVector::from([10.0, 20.0, 30.0]);
/// let shifted = lazy_expr::add(&v, &Ramp);
///
/// assert_eq!(shifted.evaluate(2), 32.0);
/// ```
pub trait Evaluable {
    /// Read the element at `index`.
    ///
    /// Reads are not bounds checked at this level: an out of range index
    /// panics for stored vectors. Use [`Bounded::try_evaluate`] for a checked read.
    fn evaluate(&self, index: usize) -> f64;
}

/// An [`Evaluable`] with a known number of valid indices, `0..len()`.
pub trait Bounded: Evaluable {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checked read, reporting out of range indices instead of panicking.
    fn try_evaluate(&self, index: usize) -> Result<f64, EvalError> {
        let len = self.len();
        if index < len {
            Ok(self.evaluate(index))
        } else {
            log::trace!("rejected read at index {} (len {})", index, len);
            Err(EvalError::IndexOutOfRange { index, len })
        }
    }
}

impl<E: Evaluable + ?Sized> Evaluable for &E {
    #[inline(always)]
    fn evaluate(&self, index: usize) -> f64 {
        (**self).evaluate(index)
    }
}

impl<E: Bounded + ?Sized> Bounded for &E {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<E: Evaluable + ?Sized> Evaluable for Box<E> {
    #[inline(always)]
    fn evaluate(&self, index: usize) -> f64 {
        (**self).evaluate(index)
    }
}

impl<E: Bounded + ?Sized> Bounded for Box<E> {
    fn len(&self) -> usize {
        (**self).len()
    }
}
