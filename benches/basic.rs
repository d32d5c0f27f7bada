use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pure_compose::chai::{app, cups, recipe};
use pure_compose::AppConfig;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("recipe", |b| b.iter(|| recipe(black_box(10.0))));
    for count in [100, 1000, 5000, 10000, 50000] {
        c.bench_function(&format!("cups {}", count), |b| {
            b.iter(|| cups(black_box(count)))
        });
    }
    let card = AppConfig::recipe_card().guests(12);
    c.bench_function("recipe card", |b| b.iter(|| app(black_box(&card))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
