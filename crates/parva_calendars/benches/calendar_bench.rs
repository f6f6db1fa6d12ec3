//! Criterion benchmarks for the calendar calculator entry points.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use parva_calendars::{diwali, eid_al_fitr, hanukkah, lunar_new_year};

fn bench_calculators(c: &mut Criterion) {
    c.bench_function("lunar_new_year", |b| {
        b.iter(|| lunar_new_year(black_box(2024)))
    });
    c.bench_function("hanukkah", |b| {
        b.iter(|| hanukkah(black_box(2024)).unwrap())
    });
    c.bench_function("eid_al_fitr", |b| b.iter(|| eid_al_fitr(black_box(2024))));
    c.bench_function("diwali", |b| b.iter(|| diwali(black_box(2024))));
}

criterion_group!(benches, bench_calculators);
criterion_main!(benches);
