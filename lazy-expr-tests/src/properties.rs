use crate::vectors::*;
use lazy_expr::{add, materialize, Bounded, DenseVector, EvalError, Evaluable};
use lazy_expr_trace::Trace;
use proptest::prelude::*;

#[test]
fn end_to_end() {
    let a = DenseVector::from([1.0, 2.0, 3.0]);
    let b = DenseVector::from([4.0, 5.0, 6.0]);
    let sum = &a + &b;

    assert_eq!(sum.evaluate(1), 7.0);
    assert_eq!(sum.evaluate(0), 5.0);
    assert_eq!(sum.evaluate(2), 9.0);
}

proptest! {
    #[test]
    fn sum_is_elementwise((a, b) in arb_pair()) {
        let sum = &a + &b;
        for i in 0..a.len() {
            prop_assert_eq!(sum.evaluate(i), a.evaluate(i) + b.evaluate(i));
        }
    }

    #[test]
    fn sum_is_commutative((a, b) in arb_pair()) {
        let ab = &a + &b;
        let ba = &b + &a;
        for i in 0..a.len() {
            prop_assert_eq!(ab.evaluate(i), ba.evaluate(i));
        }
    }

    #[test]
    fn nested_sum_reads_every_operand((a, b, c) in arb_triple()) {
        let ab = &a + &b;
        let abc = &ab + &c;
        for i in 0..a.len() {
            prop_assert_eq!(abc.evaluate(i), a.evaluate(i) + b.evaluate(i) + c.evaluate(i));
        }
    }

    #[test]
    fn lazy_reads_match_eager_materialization((a, b, c) in arb_triple()) {
        let ab = &a + &b;
        let abc = &ab + &c;
        let eager = materialize(&abc);

        prop_assert_eq!(eager.len(), abc.len());
        for (i, x) in eager.iter().enumerate() {
            prop_assert_eq!(*x, abc.evaluate(i));
        }
    }

    #[test]
    fn construction_reads_nothing((a, b) in arb_pair()) {
        let trace = Trace::new();
        let a = trace.wrap("a", a);
        let b = trace.wrap("b", b);

        let _sum = add(&a, &b);

        prop_assert!(trace.is_empty());
    }

    #[test]
    fn every_read_is_recomputed((a, b, idx) in arb_pair_and_index(), repeats in 1usize..8) {
        let trace = Trace::new();
        let a = trace.wrap("a", a);
        let b = trace.wrap("b", b);
        let sum = add(&a, &b);

        for _ in 0..repeats {
            sum.evaluate(idx);
        }

        prop_assert_eq!(trace.count_for("a"), repeats);
        prop_assert_eq!(trace.count_for("b"), repeats);
        prop_assert!(trace.events().iter().all(|event| event.index == idx));
    }

    #[test]
    fn checked_reads_respect_shorter_operand((a, b) in arb_ragged_pair(), idx in 0usize..40) {
        let sum = &a + &b;
        let len = a.len().min(b.len());

        prop_assert_eq!(sum.len(), len);
        if idx < len {
            prop_assert_eq!(sum.try_evaluate(idx), Ok(a.evaluate(idx) + b.evaluate(idx)));
        } else {
            prop_assert_eq!(sum.try_evaluate(idx), Err(EvalError::IndexOutOfRange { index: idx, len }));
        }
    }
}
