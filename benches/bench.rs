use std::cell::Cell;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::env;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::Lazy;

use sort_test_tools::patterns;

/// Sort entry points compared by this benchmark. All of them are driven by a comparison callback,
/// the way a script engine would call them.
trait BenchSort {
    const NAME: &'static str;

    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F);
}

struct BottomUp;

impl BenchSort for BottomUp {
    const NAME: &'static str = "bottom_up_stable";

    #[inline]
    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
        // Through the fallible entry point, so the Result plumbing is part of the measurement.
        let res = bottom_up_sort::sort_by(v, |a, b| Ok::<_, Infallible>(compare(a, b)));
        black_box(res.is_ok());
    }
}

struct StdStable;

impl BenchSort for StdStable {
    const NAME: &'static str = "rust_std_stable";

    #[inline]
    fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F) {
        v.sort_by(compare);
    }
}

const LENS: [usize; 11] = [2, 8, 20, 50, 200, 1_000, 2_048, 10_000, 50_000, 100_000, 1_000_000];

static BENCH_FILTER: Lazy<Option<String>> = Lazy::new(|| env::var("BENCH_FILTER").ok());

type KeysFn = fn(usize) -> Vec<i32>;

fn inputs() -> [(&'static str, KeysFn); 6] {
    [
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(len as f64).log2() as i32)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws", |len| {
            patterns::saw_mixed(len, (len as f64).log2() as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ]
}

/// Prints the mean number of callback calls instead of timing.
fn report_comparisons<S: BenchSort, T: Ord + Clone>(
    id: &str,
    len: usize,
    to_values: fn(Vec<i32>) -> Vec<T>,
    keys: KeysFn,
) {
    let runs = (1_000_000 / len).clamp(10, 10_000);
    let calls = Cell::new(0u64);

    for _ in 0..runs {
        let mut v = to_values(keys(len));
        S::sort_by(black_box(v.as_mut_slice()), |a, b| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        });
    }

    println!("{id}: mean comparisons: {:.1}", calls.get() as f64 / runs as f64);
}

fn bench_one<S: BenchSort, T: Ord + Clone>(
    c: &mut Criterion,
    len: usize,
    values_name: &str,
    to_values: fn(Vec<i32>) -> Vec<T>,
    input_name: &str,
    keys: KeysFn,
) {
    let id = format!("{}-{values_name}-{input_name}-{len}", S::NAME);

    if let Some(filter) = BENCH_FILTER.as_deref() {
        if !id.contains(filter) {
            return;
        }
    }

    if env::var("MEASURE_COMP").is_ok() {
        report_comparisons::<S, T>(&id, len, to_values, keys);
        return;
    }

    let batch_size = if len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&id, |b| {
        b.iter_batched(
            || to_values(keys(len)),
            |mut v| S::sort_by(black_box(v.as_mut_slice()), |a, b| a.cmp(b)),
            batch_size,
        )
    });
}

fn bench_values<T: Ord + Clone>(
    c: &mut Criterion,
    len: usize,
    values_name: &str,
    to_values: fn(Vec<i32>) -> Vec<T>,
) {
    // Heap backed values get too slow to collect samples for at the largest size.
    if len > 100_000 && values_name != "i32" {
        return;
    }

    for (input_name, keys) in inputs() {
        bench_one::<BottomUp, T>(c, len, values_name, to_values, input_name, keys);
        bench_one::<StdStable, T>(c, len, values_name, to_values, input_name, keys);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    patterns::use_random_seed_each_time();
    assert_ne!(patterns::random(8), patterns::random(8));

    for len in LENS {
        bench_values(c, len, "i32", |keys| keys);

        // Cloning is a reference count bump, like the values of a script engine.
        bench_values(c, len, "rc_i32", |keys| keys.into_iter().map(Rc::new).collect());

        bench_values(c, len, "string", |keys| {
            keys.iter().map(|key| format!("{key:011}")).collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
