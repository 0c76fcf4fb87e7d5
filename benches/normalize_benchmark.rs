//! Benchmarks for pagenorm normalization performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic page text shaped like extracted
//! parliamentary speeches: ragged line breaks and a footer on every page.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates synthetic raw page texts.
fn create_pages(page_count: usize) -> Vec<String> {
    (0..page_count)
        .map(|i| {
            let mut page = String::new();
            for line in 0..40 {
                page.push_str("Member of Parliament speaking on item ");
                page.push_str(&line.to_string());
                page.push_str(",\n\u{a0}the committee\treport   was adopted.\r\n");
            }
            page.push_str(&format!("\n\n& /en {}\n", i + 1));
            page
        })
        .collect()
}

/// Benchmark a single page.
fn bench_single_page(c: &mut Criterion) {
    let pages = create_pages(1);
    let normalizer = pagenorm::PageTextNormalizer::default();

    c.bench_function("normalize_page", |b| {
        b.iter(|| normalizer.normalize(black_box(&pages[0])));
    });
}

/// Benchmark documents of various sizes, sequential and parallel.
fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_document");

    for page_count in [10, 100, 500].iter() {
        let doc = pagenorm::Document::from_texts(create_pages(*page_count));

        let parallel = pagenorm::PageTextNormalizer::default();
        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            b.iter(|| parallel.normalize_document(black_box(&doc)));
        });

        let sequential = pagenorm::PageTextNormalizer::new(
            pagenorm::NormalizeOptions::new().sequential(),
        )
        .unwrap();
        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            b.iter(|| sequential.normalize_document(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark format detection.
fn bench_format_detection(c: &mut Criterion) {
    let json = br#"["page one", "page two"]"#;
    let text = b"Plenary debate\x0cSecond page";

    c.bench_function("detect_json", |b| {
        b.iter(|| pagenorm::detect_format_from_bytes(black_box(json)).unwrap());
    });

    c.bench_function("detect_text", |b| {
        b.iter(|| pagenorm::detect_format_from_bytes(black_box(text)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_single_page,
    bench_documents,
    bench_format_detection,
);
criterion_main!(benches);
