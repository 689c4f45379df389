use chrono::{Datelike, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meteopred::{build_grid, ClimatePredictor, DailySeries, Variable};

fn historical_series() -> DailySeries {
    let start = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
    let values = start.iter_days().take_while(|d| *d <= end).map(|d| {
        let season = (d.ordinal() as f64 / 58.0).sin();
        [season * 12.0, season * 12.0 - 6.0, season * 12.0 + 6.0, season.abs() * 3.0]
    });
    DailySeries::from_values(start, values).unwrap()
}

fn bench_predictor(c: &mut Criterion) {
    let series = historical_series();
    c.bench_function("build_grid", |b| b.iter(|| build_grid(black_box(&series))));

    let predictor = ClimatePredictor::from_series(&series).unwrap();
    c.bench_function("statistics_for_day", |b| {
        b.iter(|| predictor.statistics_for_day(black_box((6u32, 18u32)), Variable::AvgTemp))
    });
    c.bench_function("predict_temperature", |b| {
        b.iter(|| predictor.predict_temperature(black_box((6u32, 18u32))))
    });
}

criterion_group!(benches, bench_predictor);
criterion_main!(benches);
