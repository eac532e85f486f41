use std::hint::black_box;

use cinema_core::{parse_time, Cinema};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// A screen booked back to back in 90-minute slots from 1:00 until 23:30.
fn busy_cinema() -> Cinema {
    let mut cinema = Cinema::new();
    cinema.add_screen("Screen #1", 100).unwrap();
    cinema.add_film("Trailer Reel", "U", "1:10").unwrap();
    cinema.add_film("Short", "U", "1:00").unwrap();
    for slot in 0..15 {
        let minutes = 60 + slot * 90;
        let start = format!("{}:{:02}", minutes / 60, minutes % 60);
        cinema.add_showing("Trailer Reel", "Screen #1", &start).unwrap();
    }
    cinema
}

fn bench_parse_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_parsing");

    for input in ["9:30", "12:40", "bad input"] {
        group.bench_with_input(BenchmarkId::new("parse_time", input), &input, |b, input| {
            b.iter(|| parse_time(black_box(input)));
        });
    }

    group.finish();
}

fn bench_add_showing(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_showing");
    let cinema = busy_cinema();

    group.bench_function("rejected_on_busy_screen", |b| {
        b.iter(|| {
            let mut cinema = cinema.clone();
            black_box(cinema.add_showing("Short", "Screen #1", black_box("12:00")))
        });
    });

    group.bench_function("listing_busy_screen", |b| {
        b.iter(|| black_box(cinema.list_showings()));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_time, bench_add_showing);
criterion_main!(benches);
