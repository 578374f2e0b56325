use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use querybob::{Builder, Dialect, select, update};

/// SELECT col0, col1, ... FROM t WHERE col0=$1 AND col1=$2 ...
fn select_builder(n: usize) -> Builder {
    let names: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut qb = select("t")
        .dialect(Dialect::Postgres)
        .columns(&refs)
        .into_targets(refs.iter().copied());
    for (i, name) in names.iter().enumerate() {
        qb = qb.eq(name, i as i64);
    }
    qb
}

fn bench_generate_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/select");

    for n in [1, 5, 10, 50, 100] {
        let qb = select_builder(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.generate()));
        });
    }

    group.finish();
}

fn bench_build_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/update_build");

    for n in [5, 20, 100] {
        let names: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let qb = update("t")
            .dialect(Dialect::Oracle)
            .set(&refs)
            .to(0..n as i64)
            .eq("id", 1i64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate/in_list");

    for n in [5, 20, 100, 500] {
        let qb = select("t")
            .for_postgres()
            .in_list("id", 0..n as i64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.generate()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_select, bench_build_update, bench_in_list);
criterion_main!(benches);
