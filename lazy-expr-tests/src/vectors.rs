use lazy_expr::DenseVector;
use proptest::prelude::*;

/// Finite elements, bounded so that sums of a handful never overflow.
pub fn arb_element() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        any::<i16>().prop_map(|x| x as f64),
        Just(0.0),
        Just(-0.0),
    ]
}

/// `count` vectors sharing one length in `1..max_len`.
pub fn arb_vectors(count: usize, max_len: usize) -> impl Strategy<Value = Vec<DenseVector>> {
    (1..max_len).prop_flat_map(move |len| {
        prop::collection::vec(prop::collection::vec(arb_element(), len), count)
            .prop_map(|all| all.into_iter().map(DenseVector::from).collect())
    })
}

pub fn arb_pair() -> impl Strategy<Value = (DenseVector, DenseVector)> {
    arb_vectors(2, 64).prop_map(|mut vs| {
        let b = vs.pop().unwrap();
        let a = vs.pop().unwrap();
        (a, b)
    })
}

pub fn arb_triple() -> impl Strategy<Value = (DenseVector, DenseVector, DenseVector)> {
    arb_vectors(3, 64).prop_map(|mut vs| {
        let c = vs.pop().unwrap();
        let b = vs.pop().unwrap();
        let a = vs.pop().unwrap();
        (a, b, c)
    })
}

/// A pair plus an index that is valid for both.
pub fn arb_pair_and_index() -> impl Strategy<Value = (DenseVector, DenseVector, usize)> {
    arb_pair().prop_flat_map(|(a, b)| {
        let len = a.len();
        (Just(a), Just(b), 0..len)
    })
}

/// Vectors of arbitrary, possibly different lengths (including empty).
pub fn arb_ragged_pair() -> impl Strategy<Value = (DenseVector, DenseVector)> {
    (
        prop::collection::vec(arb_element(), 0..32),
        prop::collection::vec(arb_element(), 0..32),
    )
        .prop_map(|(a, b)| (DenseVector::from(a), DenseVector::from(b)))
}
