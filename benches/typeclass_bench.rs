//! Benchmark for the type class instances.
//!
//! Compares generic code written against the traits with the inherent
//! methods it delegates to.

use adtkit::control::{Optional, Outcome};
use adtkit::typeclass::{Applicative, Bifunctor, Functor, Monad, Traversable};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn double_all<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
    container.fmap(|x| x * 2)
}

fn benchmark_functor(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("functor");

    group.bench_function("generic_fmap", |bencher| {
        bencher.iter(|| black_box(double_all(black_box(Optional::Some(21)))));
    });

    group.bench_function("inherent_map", |bencher| {
        bencher.iter(|| black_box(black_box(Optional::Some(21)).map(|x| x * 2)));
    });

    group.finish();
}

fn benchmark_monad(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("monad");

    group.bench_function("flat_map", |bencher| {
        bencher.iter(|| {
            let value: Outcome<i32, String> = black_box(Outcome::Ok(7));
            black_box(value.flat_map(|x| Outcome::Ok(x + 1)).flat_map(|x| Outcome::Ok(x * 3)))
        });
    });

    group.bench_function("map3", |bencher| {
        bencher.iter(|| {
            black_box(Optional::Some(1)).map3(
                black_box(Optional::Some(2)),
                black_box(Optional::Some(3)),
                |a, b, c| a + b + c,
            )
        });
    });

    group.finish();
}

fn benchmark_bifunctor(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_bimap");

    group.bench_function("bifunctor_bimap_err", |bencher| {
        bencher.iter(|| {
            let failed: Outcome<i32, String> = Outcome::Err("error".to_string());
            black_box(failed.bimap(|e: String| e.len(), |x: i32| x * 2))
        });
    });

    group.bench_function("map_then_map_err", |bencher| {
        bencher.iter(|| {
            let failed: Outcome<i32, String> = Outcome::Err("error".to_string());
            black_box(failed.map(|x| x * 2).map_err(|e| e.len()))
        });
    });

    group.finish();
}

fn benchmark_traversable(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversable");

    group.bench_function("sequence_outcome", |bencher| {
        bencher.iter(|| {
            let nested: Optional<Outcome<i32, String>> = black_box(Optional::Some(Outcome::Ok(1)));
            let sequenced: Outcome<Optional<i32>, String> = nested.sequence_outcome();
            black_box(sequenced)
        });
    });

    group.bench_function("transpose", |bencher| {
        bencher.iter(|| {
            let nested: Optional<Outcome<i32, String>> = black_box(Optional::Some(Outcome::Ok(1)));
            black_box(nested.transpose())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_functor,
    benchmark_monad,
    benchmark_bifunctor,
    benchmark_traversable
);

criterion_main!(benches);
