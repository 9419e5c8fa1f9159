use chart_gallery::api::{ChartGallery, GalleryConfig};
use chart_gallery::core::{RngSource, generate_ranking_table, shuffle_in_place};
use chart_gallery::gallery::{BumpChartSettings, DemoChart};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_shuffle_10k(c: &mut Criterion) {
    let mut source = RngSource::seeded(42);
    let mut items: Vec<u32> = (0..10_000).collect();

    c.bench_function("shuffle_in_place_10k", |b| {
        b.iter(|| {
            shuffle_in_place(black_box(items.as_mut_slice()), &mut source)
                .expect("shuffle should succeed");
        })
    });
}

fn bench_ranking_table_default(c: &mut Criterion) {
    let settings = BumpChartSettings::default();
    let mut source = RngSource::seeded(7);

    c.bench_function("ranking_table_default", |b| {
        b.iter(|| {
            let _ = generate_ranking_table(
                black_box(&settings.names),
                black_box(settings.years.len()),
                &mut source,
            )
            .expect("ranking table should succeed");
        })
    });
}

fn bench_gallery_options_json(c: &mut Criterion) {
    let mut gallery =
        ChartGallery::new(GalleryConfig::default().with_seed(3)).expect("gallery init");

    c.bench_function("gallery_bump_chart_json", |b| {
        b.iter(|| {
            let _ = gallery
                .option_for(black_box(DemoChart::BumpChart))
                .and_then(|option| option.to_json_pretty())
                .expect("bump chart json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_shuffle_10k,
    bench_ranking_table_default,
    bench_gallery_options_json
);
criterion_main!(benches);
