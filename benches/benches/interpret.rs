// Copyright 2025 the Plotpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use plotpick_path::interpret;

/// A polyline of `n` vertices mixing absolute, relative and axis-aligned commands.
fn polyline(n: usize) -> String {
    let mut d = String::from("M 10 10");
    for i in 0..n {
        match i % 4 {
            0 => d.push_str(&format!(" L {}.5 {}", 10 + i, 20 + i % 7)),
            1 => d.push_str(" l 1.25 -0.5"),
            2 => d.push_str(&format!(" H {}", 12 + i)),
            _ => d.push_str(" v 2e-1"),
        }
    }
    d
}

fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpret");
    for &len in &[16_usize, 256, 4096] {
        let d = polyline(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("plain", len), &d, |b, d| {
            b.iter(|| interpret(black_box(d), None));
        });
        group.bench_with_input(BenchmarkId::new("flipped_page", len), &d, |b, d| {
            b.iter(|| interpret(black_box(d), Some("matrix(1,0,0,-1,0,792)")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interpret);
criterion_main!(benches);
