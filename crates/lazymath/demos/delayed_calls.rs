//! Skipping a slow computation by passing it lazily.
//!
//! A selector picks one of two arguments. Called eagerly, both arguments are
//! computed up front, including the slow one that is thrown away. Wrapped
//! with [`LazyFn`], the slow call is only built, and since the selector never
//! picks it, it never runs.
//!
//! Timings are logged at info level. Run with `RUST_LOG=trace` to also see
//! cache hits and misses.

use std::thread;
use std::time::{Duration, Instant};

use lazymath::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn super_slow_function(args: &Arguments<'_>) -> Result<Value, LazyError> {
    thread::sleep(Duration::from_secs(3));
    Ok(args.get(0)?.try_mul(&Value::Int(2))?)
}

fn choosing_function<T>(choice: bool, if_true: T, if_false: T) -> T {
    if choice {
        if_true
    } else {
        if_false
    }
}

fn main() -> Result<(), LazyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let lazy_slow_function = lazy_fn!(
        super_slow_function,
        "Doubles its argument after a three second pause."
    );

    let start = Instant::now();
    let eager = lazy_slow_function.call([5]).evaluate()?;
    println!("{}", choosing_function(false, eager, Value::Int(-1)));
    info!(elapsed = ?start.elapsed(), "eager selection done");

    let start = Instant::now();
    let lazy = choosing_function(false, lazy_slow_function.call([5]), Lazy::constant(-1));
    println!("{lazy}");
    info!(elapsed = ?start.elapsed(), "lazy selection done");

    Ok(())
}
