// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use plotpick_index::PathIndex;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A letter-size page with `series` data series of `len` segments each, plus
/// one grid line per series.
fn page(series: usize, len: usize) -> String {
    let mut rng = Rng::new(0x5eed_u64 + series as u64);
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="612pt" height="792pt"><g>"#,
    );
    for s in 0..series {
        let _ = write!(svg, r#"<path d="M 72 {y} L 540 {y}" stroke="gray"/>"#, y = 100 + s * 10);
        let _ = write!(svg, r#"<path d="M 72 {}"#, 400.0 + rng.next_f64() * 200.0);
        for i in 1..=len {
            let x = 72.0 + 468.0 * i as f64 / len as f64;
            let _ = write!(svg, " L {x:.3} {:.3}", 400.0 + rng.next_f64() * 200.0);
        }
        let _ = write!(
            svg,
            r#"" transform="matrix(1,0,0,-1,0,792)" stroke="C{s}" stroke-width="1"/>"#
        );
    }
    svg.push_str("</g></svg>");
    svg
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    for &(series, len) in &[(4_usize, 64_usize), (16, 256), (64, 256)] {
        let text = page(series, len);
        let index = PathIndex::parse(text.as_str()).unwrap();
        // Force every outline once so the timings exclude lazy interpretation.
        let _ = index.find_nearest(Point::ZERO);

        let mut rng = Rng::new(7);
        let queries: Vec<Point> = (0..64)
            .map(|_| Point::new(rng.next_f64() * 8.5, rng.next_f64() * 11.0))
            .collect();
        let label = format!("{series}x{len}");

        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_with_input(BenchmarkId::new("find_nearest", &label), &queries, |b, queries| {
            b.iter(|| {
                for &p in queries {
                    black_box(index.find_nearest(black_box(p)));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("find_inside", &label), &queries, |b, queries| {
            b.iter(|| {
                for &p in queries {
                    black_box(index.find_inside(black_box(p), p + kurbo::Vec2::new(1.0, 1.0)));
                }
            });
        });

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", &label), &text, |b, text| {
            b.iter(|| PathIndex::parse(black_box(text.as_str())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
