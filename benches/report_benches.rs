use book_reports::catalog::Catalog;
use book_reports::reports::Report;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A synthetic book list with a handful of years and authors shared
/// between many books.
fn book_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "Title{} {} {} Author{} Author{}",
                i,
                1900 + i % 50,
                i % 97,
                i % 40,
                (i + 7) % 40
            )
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let lines = book_lines(2_000);
    let catalog = Catalog::from_lines(&lines);

    c.bench_function("catalog_from_lines", |b| {
        b.iter(|| Catalog::from_lines(black_box(&lines)))
    });

    for report in Report::ALL {
        c.bench_function(&format!("report_{}", report), |b| {
            b.iter(|| report.render(black_box(&catalog), "Author3"))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
