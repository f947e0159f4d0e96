use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sun_calculator::{meeus, suncalc, time::JulianDate};

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2025-02-11T11:25:18Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 51.21131496342009;
    let lon = 3.2258847770102235;

    c.bench_function("meeus_single", |b| {
        b.iter(|| {
            meeus::solar_position(black_box(datetime), black_box(lat), black_box(lon)).unwrap()
        })
    });

    c.bench_function("suncalc_single", |b| {
        b.iter(|| {
            suncalc::solar_position(black_box(datetime), black_box(lat), black_box(lon)).unwrap()
        })
    });

    let jd = JulianDate::from_datetime(&datetime).unwrap();
    c.bench_function("meeus_single_from_julian", |b| {
        b.iter(|| {
            meeus::solar_position_from_julian(black_box(jd), black_box(lat), black_box(lon))
                .unwrap()
        })
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    let base_datetime = "2025-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 51.21131496342009;
    let lon = 3.2258847770102235;

    for &count in &[1440_u64, 10080, 43200] {
        // One day, one week and one month of minutes
        group.throughput(Throughput::Elements(count));

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::minutes(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("meeus", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result =
                        meeus::solar_position(black_box(dt), black_box(lat), black_box(lon))
                            .unwrap();
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("suncalc", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result =
                        suncalc::solar_position(black_box(dt), black_box(lat), black_box(lon))
                            .unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");

    let datetime = "2025-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let jd = JulianDate::from_datetime(&datetime).unwrap();

    for &grid_size in &[30, 70, 150] {
        let count = grid_size * grid_size;
        group.throughput(Throughput::Elements(count as u64));

        let coordinates: Vec<(f64, f64)> = (0..grid_size)
            .flat_map(|i| {
                (0..grid_size).map(move |j| {
                    let lat = -60.0 + (i as f64) * 120.0 / grid_size as f64;
                    let lon = -180.0 + (j as f64) * 360.0 / grid_size as f64;
                    (lat, lon)
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("meeus", format!("{grid_size}x{grid_size}")),
            &count,
            |b, _| {
                b.iter(|| {
                    for &(lat, lon) in &coordinates {
                        let _result = meeus::solar_position_from_julian(
                            black_box(jd),
                            black_box(lat),
                            black_box(lon),
                        )
                        .unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time
);
criterion_main!(benches);
