//! Field, Miller loop and final exponentiation benchmarks

use ate_pairing::{CurveId, Mode, Pairing};
use criterion::{
    BenchmarkGroup, Criterion, black_box, criterion_group, criterion_main, measurement::Measurement,
};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn bench_field<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, e: &Pairing) {
    let f = e.pairing(&e.g1_generator(), &e.g2_generator());
    let x = f.c0.c0;
    let y = f.c1.c2;
    group.bench_function("fp2 mul", |b| b.iter(|| black_box(x) * black_box(y)));
    group.bench_function("fp12 mul", |b| b.iter(|| black_box(f) * black_box(f)));
    group.bench_function("fp12 square", |b| b.iter(|| black_box(f).square()));
    group.bench_function("fp12 cyclotomic square", |b| {
        b.iter(|| black_box(f).cyclotomic_square())
    });
}

fn bench_pairing<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, e: &Pairing) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let p = e.g1_generator() * &e.random_scalar(&mut rng);
    let q = e.g2_generator() * &e.random_scalar(&mut rng);
    let coeffs = e.precompute_g2(&q);
    let f = e.miller_loop(&p, &q);

    group.bench_function("miller loop", |b| b.iter(|| e.miller_loop(&p, &q)));
    group.bench_function("precompute g2", |b| b.iter(|| e.precompute_g2(&q)));
    group.bench_function("precomputed miller loop", |b| {
        b.iter(|| e.precomputed_miller_loop(&p, &coeffs))
    });
    group.bench_function("final exp", |b| b.iter(|| e.final_exp(&f)));
    group.bench_function("pairing", |b| b.iter(|| e.pairing(&p, &q)));
    group.bench_function("g1 scalar mul", |b| {
        let k = e.random_scalar(&mut rng);
        b.iter(|| p * &k)
    });
}

fn bench_curves(c: &mut Criterion) {
    for id in [CurveId::Fp254BNb, CurveId::Bls12_381] {
        let e = Pairing::new(id, Mode::Auto).unwrap();
        let mut group = c.benchmark_group(id.name());
        bench_field(&mut group, &e);
        bench_pairing(&mut group, &e);
        group.finish();
    }
}

criterion_group!(benches, bench_curves);
criterion_main!(benches);
