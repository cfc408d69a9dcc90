use std::ops::Add;

use crate::{Bounded, Evaluable, LazySum};

/// Owned, contiguous storage of `f64` values.
///
/// Immutable once built: every lazy expression over a `DenseVector` borrows
/// it, so the borrow checker keeps the vector alive and unchanged for as long
/// as any such expression exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseVector {
    values: Vec<f64>,
}

impl DenseVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl Evaluable for DenseVector {
    #[inline(always)]
    fn evaluate(&self, index: usize) -> f64 {
        self.values[index]
    }
}

impl Bounded for DenseVector {
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl<'a, Rhs: Evaluable + ?Sized> Add<&'a Rhs> for &'a DenseVector {
    type Output = LazySum<'a, DenseVector, Rhs>;

    fn add(self, rhs: &'a Rhs) -> Self::Output {
        LazySum::new(self, rhs)
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for DenseVector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<&[f64]> for DenseVector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DenseVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
