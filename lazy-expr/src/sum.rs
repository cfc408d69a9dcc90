use std::fmt;
use std::ops::Add;

use crate::{Bounded, Evaluable};

/// Build a [`LazySum`] of `left` and `right` without evaluating either.
///
/// Equivalent to `&left + &right` for operand types that implement [`Add`].
pub fn add<'a, L, R>(left: &'a L, right: &'a R) -> LazySum<'a, L, R>
where
    L: Evaluable + ?Sized,
    R: Evaluable + ?Sized,
{
    LazySum::new(left, right)
}

/// Element-wise sum of two borrowed operands, computed on demand.
///
/// Holds nothing but the two borrows. Every call to [`Evaluable::evaluate`]
/// reads both operands again; results are never cached.
pub struct LazySum<'a, L: ?Sized, R: ?Sized> {
    left: &'a L,
    right: &'a R,
}

impl<'a, L: ?Sized, R: ?Sized> LazySum<'a, L, R> {
    pub fn new(left: &'a L, right: &'a R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &'a L {
        self.left
    }

    pub fn right(&self) -> &'a R {
        self.right
    }
}

impl<L, R> Evaluable for LazySum<'_, L, R>
where
    L: Evaluable + ?Sized,
    R: Evaluable + ?Sized,
{
    #[inline(always)]
    fn evaluate(&self, index: usize) -> f64 {
        self.left.evaluate(index) + self.right.evaluate(index)
    }
}

// elements past the shorter operand have no defined sum
impl<L, R> Bounded for LazySum<'_, L, R>
where
    L: Bounded + ?Sized,
    R: Bounded + ?Sized,
{
    fn len(&self) -> usize {
        self.left.len().min(self.right.len())
    }
}

impl<'a, L, R, Rhs> Add<&'a Rhs> for &'a LazySum<'a, L, R>
where
    L: Evaluable + ?Sized,
    R: Evaluable + ?Sized,
    Rhs: Evaluable + ?Sized,
{
    type Output = LazySum<'a, LazySum<'a, L, R>, Rhs>;

    fn add(self, rhs: &'a Rhs) -> Self::Output {
        LazySum::new(self, rhs)
    }
}

impl<L: ?Sized, R: ?Sized> Clone for LazySum<'_, L, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized, R: ?Sized> Copy for LazySum<'_, L, R> {}

impl<L, R> fmt::Debug for LazySum<'_, L, R>
where
    L: fmt::Debug + ?Sized,
    R: fmt::Debug + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySum")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
