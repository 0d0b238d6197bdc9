use chart_core::{ChartConfig, ChartScene, DataPoint};
use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn hourly_series(n: usize) -> Vec<DataPoint> {
    let start = Utc.with_ymd_and_hms(2015, 3, 23, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let t = start + TimeDelta::hours(i as i64);
            let temp = 17.0 + 4.0 * ((i as f64) * std::f64::consts::TAU / 24.0).sin();
            DataPoint::new(t, temp)
        })
        .collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_scene");
    let config = ChartConfig::default();
    for &n in &[1_000usize, 50_000usize] {
        let data = hourly_series(n);
        group.bench_function(format!("hourly_{n}"), |b| {
            b.iter(|| {
                let scene = ChartScene::compose(&config, black_box(&data)).expect("compose");
                black_box(scene);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
