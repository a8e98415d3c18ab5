use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jpcr::{find_romanized_name, AddressIndex, RawRow};

fn sample_rows(count: usize) -> Vec<RawRow> {
    (0..count)
        .map(|i| {
            RawRow::new(
                format!("{i:07}"),
                "北海道",
                "帯広市",
                format!("町域{i}"),
                "HOKKAIDO",
                "OBIHIRO SHI",
                format!("CHOIKI{i}"),
            )
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let rows = sample_rows(10_000);

    c.bench_function("index_build_10k", |b| {
        b.iter(|| AddressIndex::build(black_box(rows.clone())))
    });
}

fn benchmark_resolve(c: &mut Criterion) {
    let index = AddressIndex::build(sample_rows(10_000));

    c.bench_function("resolve_hit", |b| {
        b.iter(|| {
            find_romanized_name(
                black_box(&index),
                black_box("0005000"),
                black_box("町域5000"),
            )
        })
    });

    c.bench_function("resolve_postal_code_miss", |b| {
        b.iter(|| find_romanized_name(black_box(&index), black_box("9999999"), black_box("町域")))
    });

    c.bench_function("resolve_substring_miss", |b| {
        b.iter(|| {
            find_romanized_name(
                black_box(&index),
                black_box("0005000"),
                black_box("存在しない町"),
            )
        })
    });
}

criterion_group!(benches, benchmark_build, benchmark_resolve);
criterion_main!(benches);
