use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use spel2sim::levelgen::{total_co_rooms, Run};

pub fn benchmark_seed_evaluation(c: &mut Criterion) {
    let mut rng: SmallRng = SeedableRng::seed_from_u64(0x12345678);

    c.bench_function("co room count (single seed)", |b| {
        b.iter(|| {
            let seed: u32 = rng.gen();
            black_box(total_co_rooms(seed));
        })
    });

    c.bench_function("full run simulation (single seed)", |b| {
        b.iter(|| {
            let seed: u32 = rng.gen();
            black_box(Run::simulate(seed));
        })
    });
}

criterion_group!(benches, benchmark_seed_evaluation);
criterion_main!(benches);
