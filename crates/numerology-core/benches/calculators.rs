use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numerology_core::{compatibility_score, expression_number, life_path_number, reduce};

fn bench_reduce(c: &mut Criterion) {
    c.bench_function("reduce_u64_max", |b| b.iter(|| reduce(black_box(u64::MAX))));
}

fn bench_life_path(c: &mut Criterion) {
    c.bench_function("life_path_number", |b| {
        b.iter(|| life_path_number(black_box("1990-07-16")))
    });
}

fn bench_expression(c: &mut Criterion) {
    let latin = "Alexandra Catherine Montgomery-Worthington";
    let hangul = "김민수 이서연 박지훈";
    c.bench_function("expression_latin", |b| {
        b.iter(|| expression_number(black_box(latin)))
    });
    c.bench_function("expression_hangul", |b| {
        b.iter(|| expression_number(black_box(hangul)))
    });
}

fn bench_compatibility(c: &mut Criterion) {
    c.bench_function("compatibility_full_grid", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for x in 1..=33 {
                for y in 1..=33 {
                    total += u32::from(compatibility_score(x, y).unwrap_or(0));
                }
            }
            black_box(total)
        })
    });
}

criterion_group!(
    benches,
    bench_reduce,
    bench_life_path,
    bench_expression,
    bench_compatibility
);
criterion_main!(benches);
