use chart_views::lwc::model::{
    PaneId, PriceScaleHandle, Series, SeriesId, SeriesPlotRow, SeriesStyleOptions, SeriesType,
    StrictRange,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn candlestick_series(count: i64) -> Series {
    let mut series = Series::new(
        SeriesId::new(0),
        PriceScaleHandle::right(PaneId::new(0)),
        SeriesStyleOptions::defaults_for(SeriesType::Candlestick),
    );
    let rows = (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.05;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let (high, low) = (base.max(close) + 0.5, base.min(close) - 0.5);
            SeriesPlotRow::ohlc(i, i as f64, base, high, low, close).expect("valid generated bar")
        })
        .collect();
    series.set_data(rows).expect("sorted bars");
    series
}

fn bench_bar_style_lookup_10k(c: &mut Criterion) {
    let series = candlestick_series(10_000);
    let colorer = series.bar_colorer();

    c.bench_function("bar_style_lookup_10k", |b| {
        b.iter(|| {
            for index in 0..10_000 {
                let _ = colorer
                    .bar_style(black_box(index), None)
                    .expect("bar exists");
            }
        })
    });
}

fn bench_bar_styles_in_range_10k(c: &mut Criterion) {
    let series = candlestick_series(10_000);
    let colorer = series.bar_colorer();

    c.bench_function("bar_styles_in_range_10k", |b| {
        b.iter(|| {
            let _ = colorer
                .bar_styles_in_range(black_box(StrictRange::new(0, 9_999)))
                .expect("range scan");
        })
    });
}

criterion_group!(
    benches,
    bench_bar_style_lookup_10k,
    bench_bar_styles_in_range_10k
);
criterion_main!(benches);
