use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sphinxql::prelude::*;

/// `n` predicates cycling through the built-in node kinds.
fn build_set(n: usize) -> PredicateSet {
    let mut set = PredicateSet::new();
    for i in 0..n {
        let col = format!("col{i}");
        match i % 4 {
            0 => {
                set.equal_to(&col, i as i64);
            }
            1 => {
                set.between(&col, 1, 100);
            }
            2 => {
                set.literal("weight() > 10");
            }
            _ => {
                set.match_query("wireless | bluetooth");
            }
        }
    }
    set
}

fn bench_compile_clause(c: &mut Criterion) {
    let conn = OfflineConnection::new();
    let mut group = c.benchmark_group("clause/compile");

    for n in [1, 5, 10, 50, 100] {
        let set = build_set(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, set| {
            b.iter(|| black_box(compile_clause(set, &conn)));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let conn = OfflineConnection::new();
    let mut group = c.benchmark_group("clause/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut set = PredicateSet::new();
                if set.in_list("id", values.iter().copied()).is_ok() {
                    black_box(compile_clause(&set, &conn));
                }
            });
        });
    }

    group.finish();
}

fn bench_mapping_ingestion(c: &mut Criterion) {
    let conn = OfflineConnection::new();
    let mut group = c.benchmark_group("clause/mapping_ingestion");

    for n in [1, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut mapping = Mapping::new();
                for i in 0..n {
                    mapping = mapping.set(format!("col{i}"), i as i64);
                }
                let mut w = Where::new();
                if w.add(mapping).is_ok() {
                    black_box(w.compile(&conn));
                }
            });
        });
    }

    group.finish();
}

fn bench_select_to_sql(c: &mut Criterion) {
    let conn = OfflineConnection::new();
    let qb = qb::select("products")
        .match_query("wireless headphones")
        .eq("category_id", 3)
        .in_list("brand_id", [1, 2, 3, 4])
        .between("price", 10, 200)
        .order_by_raw("weight() DESC")
        .limit(20)
        .option("ranker", OptionValue::raw("bm25"));

    c.bench_function("qb/select_to_sql", |b| {
        b.iter(|| black_box(qb.to_sql(&conn)))
    });
}

criterion_group!(
    benches,
    bench_compile_clause,
    bench_in_list,
    bench_mapping_ingestion,
    bench_select_to_sql,
);
criterion_main!(benches);
