//! Record every element read made through a lazy expression.
//!
//! Wrap the leaves (or any sub-expression) of an expression in [`Traced`]
//! and every call to [`Evaluable::evaluate`] on them is appended to a shared
//! [`Trace`], which can then be inspected or dumped as JSON.
//!
//! Recording is compiled in with the default `trace` feature. Without it,
//! [`Trace`] still exists but discards every event.
mod trace;

pub use trace::{EvalEvent, Trace, Traced};

pub use lazy_expr::Evaluable;
