use lazy_expr::{DenseVector, Evaluable};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let a = DenseVector::from([1.0, 2.0, 3.0]);
    let b = DenseVector::from([4.0, 5.0, 6.0]);

    // only borrows `a` and `b`, nothing is added yet
    let sum = &a + &b;
    log::debug!("built {:?}", sum);

    println!("The math happens now: {}", sum.evaluate(1));
}
