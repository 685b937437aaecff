//! Benchmarks for visible-set recomputation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dalil_core::catalog::{Catalog, CatalogRecord};
use dalil_core::filter::{Facet, FilterEngine, SortField, SortSpec};

/// The sample procedures repeated with fresh ids
fn large_catalog(copies: u64) -> Catalog {
    let sample = Catalog::sample_procedures();
    let records: Vec<CatalogRecord> = (0..copies)
        .flat_map(|copy| {
            sample.records().iter().cloned().map(move |mut record| {
                record.id += copy * 1000;
                record
            })
        })
        .collect();
    Catalog::new(records).unwrap()
}

fn bench_filtering(c: &mut Criterion) {
    let catalog = large_catalog(1250);

    c.bench_function("search_and_facets_10k", |b| {
        let mut engine = FilterEngine::new(catalog.clone());
        b.iter(|| {
            engine.set_search_text(black_box("demande"));
            engine.set_facet(Facet::Type, Some("civil"));
            black_box(engine.count())
        })
    });

    c.bench_function("sorted_by_popularity_10k", |b| {
        let mut engine = FilterEngine::new(catalog.clone());
        b.iter(|| {
            engine.apply_sort(Some(SortSpec::descending(SortField::Popularity)));
            black_box(engine.visible_records().len())
        })
    });
}

criterion_group!(benches, bench_filtering);
criterion_main!(benches);
