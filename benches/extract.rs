//! Performance benchmarks for wikitable-extract.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wikitable_extract::extract;

const SMALL_TABLE: &str = r#"
<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"><title>Postal codes</title></head>
<body>
    <table class="wikitable sortable">
        <tr><th>Postcode</th><th>Borough</th><th>Neighbourhood</th></tr>
        <tr><td>M3A</td><td>North York</td><td>Parkwoods</td></tr>
        <tr><td>M4A</td><td>North York</td><td>Victoria Village</td></tr>
        <tr><td>M5A</td><td>Downtown Toronto</td><td>Harbourfront</td></tr>
    </table>
</body>
</html>
"#;

fn synthetic_table(rows: usize, columns: usize) -> String {
    let mut html = String::from("<table><tr>");
    for c in 0..columns {
        html.push_str(&format!("<th>H{c}</th>"));
    }
    html.push_str("</tr>");
    for r in 0..rows {
        html.push_str("<tr>");
        for c in 0..columns {
            html.push_str(&format!("<td>R{r}C{c}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn bench_extract_small(c: &mut Criterion) {
    c.bench_function("extract_small", |b| {
        b.iter(|| extract(black_box(SMALL_TABLE)));
    });
}

fn bench_extract_synthetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic");

    for rows in [50_usize, 200, 1000] {
        let html = synthetic_table(rows, 20);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract", format!("{rows}x20")),
            &html,
            |b, html| {
                b.iter(|| extract(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extract_small, bench_extract_synthetic);
criterion_main!(benches);
