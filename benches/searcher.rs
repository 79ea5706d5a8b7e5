use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sorted_vector_map::key_search::*;

#[inline(never)]
fn probe<S: PairSearcher<Key = usize>>(pairs: &[(usize, usize)], n: usize) {
    for i in 0..n {
        let r = S::search(pairs, &black_box(i));
        if i < pairs.len() {
            assert_eq!(r.unwrap(), i);
        } else {
            assert!(r.is_err());
        }
    }
}

fn bench_pair_searcher(c: &mut Criterion) {
    let mut g = c.benchmark_group("pair_searcher");
    const N: usize = 64;
    let mut pairs = vec![];
    for i in 0..32 {
        pairs.push((i, i));
    }

    g.bench_function("binary_search", |b| {
        b.iter(|| {
            probe::<BinarySearch<_>>(&pairs, N);
        });
    });

    g.bench_function("linear", |b| {
        b.iter(|| {
            probe::<LinearSearch<_>>(&pairs, N);
        });
    });
}

criterion_group!(benches, bench_pair_searcher);
criterion_main!(benches);
