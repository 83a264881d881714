//! Generalization engine benchmarks.
//!
//! Measures throughput of the three stages over synthetic tables.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use coarsen::{ColumnSelection, DataTable, Generalizer};

/// Generate a synthetic table with job title, age, and city columns.
fn generate_table(rows: usize) -> DataTable {
    const TITLES: &[&str] = &["Software Engineer", "Nurse", "Accountant", "Beekeeper"];
    const CITIES: &[&str] = &["Austin", "Seattle", "Chicago", "Gotham"];

    let headers = vec![
        "id".to_string(),
        "job_title".to_string(),
        "age".to_string(),
        "city".to_string(),
    ];

    let data_rows = (0..rows)
        .map(|i| {
            vec![
                format!("ID_{:06}", i),
                TITLES[i % TITLES.len()].to_string(),
                ((i % 90) + 10).to_string(),
                CITIES[i % CITIES.len()].to_string(),
            ]
        })
        .collect();

    DataTable::new(headers, data_rows, b',')
}

fn all_columns() -> ColumnSelection {
    ColumnSelection {
        job_title: Some("job_title".to_string()),
        age: Some("age".to_string()),
        city: Some("city".to_string()),
    }
}

fn bench_generalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("generalize");
    let engine = Generalizer::with_builtin_rules();
    let operations = all_columns().operations();

    for rows in [100, 1_000, 10_000].iter() {
        let table = generate_table(*rows);

        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter_batched(
                || table.clone(),
                |mut data| engine.apply(&operations, &mut data),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_age_only(c: &mut Criterion) {
    let engine = Generalizer::with_builtin_rules();
    let operations = ColumnSelection {
        age: Some("age".to_string()),
        ..ColumnSelection::default()
    }
    .operations();
    let table = generate_table(10_000);

    c.bench_function("generalize_age_10k", |b| {
        b.iter_batched(
            || table.clone(),
            |mut data| engine.apply(&operations, &mut data),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generalize, bench_age_only);
criterion_main!(benches);
