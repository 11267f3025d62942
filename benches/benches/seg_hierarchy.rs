// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_seg_hierarchy::{HierarchyOptions, SegHierarchy, SegInput, group_intersecting_entries};

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
    fn next_below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// Month-view-like input: `count` events over `days` columns, mostly short, some multi-week.
fn gen_calendar_segs(count: usize, days: i64) -> Vec<SegInput<i64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCA1E_DA25_0000_0001);
    for i in 0..count {
        let start = rng.next_below(days as u64) as i64;
        let len = match rng.next_below(10) {
            0 => 7 + rng.next_below(14) as i64,
            1..=3 => 2 + rng.next_below(4) as i64,
            _ => 1,
        };
        let end = (start + len).min(days);
        out.push(SegInput::new(i, start, end, 18));
    }
    out
}

/// Time-grid-like input: float spans in minutes with varying heights.
fn gen_timed_segs(count: usize) -> Vec<SegInput<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0x7153_D0C5_F00D_BEEF);
    for i in 0..count {
        let start = rng.next_below(24 * 60) as f64;
        let len = 15.0 + rng.next_below(180) as f64;
        let thickness = 1.0 + rng.next_below(3) as f64;
        out.push(SegInput::new(i, start, start + len, thickness));
    }
    out
}

fn bench_add_segs(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_segs");
    for &n in &[64usize, 256, 1024] {
        let segs = gen_calendar_segs(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uncapped_n{}", n), |b| {
            b.iter_batched(
                SegHierarchy::<i64>::new,
                |mut h| {
                    let hidden = h.add_segs(&segs);
                    black_box((hidden.len(), h.level_count()));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("capped_reslicing_n{}", n), |b| {
            b.iter_batched(
                || {
                    SegHierarchy::<i64>::with_options(HierarchyOptions {
                        allow_reslicing: true,
                        max_coord: Some(18 * 4),
                        max_stack_cnt: Some(4),
                    })
                },
                |mut h| {
                    let hidden = h.add_segs(&segs);
                    black_box((hidden.len(), h.level_count()));
                },
                BatchSize::SmallInput,
            )
        });
    }
    let segs = gen_timed_segs(512);
    group.bench_function("timed_f64_n512", |b| {
        b.iter_batched(
            SegHierarchy::<f64>::new,
            |mut h| {
                let hidden = h.add_segs(&segs);
                black_box(hidden.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_to_rects(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_rects");
    for &n in &[256usize, 1024] {
        let segs = gen_calendar_segs(n, 42);
        let mut h = SegHierarchy::<i64>::with_options(HierarchyOptions {
            allow_reslicing: true,
            max_stack_cnt: Some(6),
            ..Default::default()
        });
        let hidden = h.add_segs(&segs);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("flatten_n{}", n), |b| {
            b.iter(|| black_box(h.to_rects().len()))
        });
        group.bench_function(format!("group_hidden_n{}", n), |b| {
            b.iter(|| black_box(group_intersecting_entries(&hidden).len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_segs, bench_to_rects);
criterion_main!(benches);
