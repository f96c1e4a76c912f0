use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nadi_vedic_base::{
    lahiri_ayanamsha_deg, nadi_from_name, nakshatra_from_longitude, nakshatra_from_tropical,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri", |b| b.iter(|| lahiri_ayanamsha_deg(black_box(jd))));
    group.finish();
}

fn nakshatra_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("nakshatra");
    group.bench_function("from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(123.456)))
    });
    group.bench_function("from_tropical", |b| {
        b.iter(|| nakshatra_from_tropical(black_box(123.456), black_box(2_460_000.5)))
    });
    group.bench_function("nadi_from_name", |b| {
        b.iter(|| nadi_from_name(black_box("Uttara Bhadrapada")))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, nakshatra_bench);
criterion_main!(benches);
