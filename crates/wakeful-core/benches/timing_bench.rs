//! Criterion benchmark for the interval jitter computation.
//!
//! The jitter function sits on every worker tick, so it should stay in the
//! nanosecond range.  Run with `cargo bench -p wakeful-core`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wakeful_core::timing;

fn bench_jittered_interval(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("jittered_interval_enabled", |b| {
        b.iter(|| timing::jittered_interval_with(&mut rng, black_box(0.5), true, 0.1))
    });

    c.bench_function("jittered_interval_disabled", |b| {
        b.iter(|| timing::jittered_interval_with(&mut rng, black_box(0.5), false, 0.1))
    });
}

criterion_group!(benches, bench_jittered_interval);
criterion_main!(benches);
