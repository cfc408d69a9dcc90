//! Evaluate `(a + b) + c` at one index and dump every element read as JSON.
//!
//! usage: cargo run -p lazy-expr-trace --example trace [OUT_PATH]
use lazy_expr::{add, DenseVector};
use lazy_expr_trace::{Evaluable, Trace};

fn main() -> std::io::Result<()> {
    let trace = Trace::new();

    let a = trace.wrap("a", DenseVector::from([1.0, 2.0, 3.0]));
    let b = trace.wrap("b", DenseVector::from([4.0, 5.0, 6.0]));
    let c = trace.wrap("c", DenseVector::from([7.0, 8.0, 9.0]));

    let ab = trace.wrap("a + b", add(&a, &b));
    let abc = add(&ab, &c);

    println!("(a + b) + c at index 1: {}", abc.evaluate(1));

    match std::env::args().nth(1) {
        Some(path) => trace.write_json(path),
        None => {
            println!("{}", trace.to_json()?);
            Ok(())
        }
    }
}
