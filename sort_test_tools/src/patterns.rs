//! Key generators for tests and benchmarks.
//!
//! All generators draw from one seed per process, printed by the test suite, so a failing input can
//! be reproduced with `OVERRIDE_SEED=<seed>`. Benchmarks opt into a fresh seed per call.

use std::env;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Keys drawn uniformly from `range`, which may be inclusive or exclusive.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();

    seeded_rng().sample_iter(dist).take(len).collect()
}

/// Comparison signals as a script comparator would produce them, `nan_percent` of them `NaN`.
pub fn random_signals(len: usize, nan_percent: f64) -> Vec<f64> {
    let mut rng = seeded_rng();
    let nan_chance = (nan_percent / 100.0).clamp(0.0, 1.0);

    (0..len)
        .map(|_| {
            if rng.gen_bool(nan_chance) {
                f64::NAN
            } else {
                rng.gen_range(-1.0..=1.0)
            }
        })
        .collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    let mut keys = ascending(len);
    keys.reverse();

    keys
}

/// `saw_count` sorted runs back to back.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    runs(len, saw_count, |_| false)
}

/// `saw_count` reverse sorted runs back to back.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    runs(len, saw_count, |_| true)
}

/// `saw_count` runs, each one sorted or reverse sorted at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let flips = random_uniform(len.max(1), 0..=1);

    runs(len, saw_count, |run| flips.get(run) == Some(&1))
}

/// Rising first half, falling second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut keys = random(len);
    let (rising, falling) = keys.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    keys
}

/// Makes every generator call use a new random seed. Meant for benchmarks, where repeated calls
/// should not see the same input.
///
/// Panics if the seed was fixed through `OVERRIDE_SEED`.
pub fn use_random_seed_each_time() {
    if let Seed::Override(seed) = current_seed() {
        panic!("OVERRIDE_SEED={seed} conflicts with a fresh seed per call");
    }

    *SEED.lock().unwrap() = Some(Seed::Fresh);
}

/// Seed the next generator call starts from.
pub fn random_init_seed() -> u64 {
    match current_seed() {
        Seed::Override(seed) | Seed::Process(seed) => seed,
        Seed::Fresh => thread_rng().gen(),
    }
}

#[derive(Clone, Copy)]
enum Seed {
    Override(u64),
    Process(u64),
    Fresh,
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn current_seed() -> Seed {
    *SEED.lock().unwrap().get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => Seed::Override(val.parse().unwrap()),
        Err(_) => Seed::Process(thread_rng().gen()),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn runs(len: usize, run_count: usize, is_descending: impl Fn(usize) -> bool) -> Vec<i32> {
    let mut keys = random(len);
    let run_len = (len / run_count.max(1)).max(1);

    for (run, chunk) in keys.chunks_mut(run_len).enumerate() {
        chunk.sort_unstable();
        if is_descending(run) {
            chunk.reverse();
        }
    }

    keys
}
