// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_roi_geometry::{PolygonWithHoles, Ring};
use understory_roi_hover::HitTester;
use understory_roi_index::{Backend, QueryFilter, Region, RegionIndex, RegionIndexGeneric};

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

/// Regular `sides`-gon around (cx, cy).
fn blob(cx: f64, cy: f64, r: f64, sides: usize) -> Ring {
    let pts: Vec<Point> = (0..sides)
        .map(|i| {
            let a = i as f64 / sides as f64 * core::f64::consts::TAU;
            Point::new(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect();
    Ring::new(pts)
}

/// `n * n` cell regions on a grid, plus one covering region per row with a hole.
fn gen_tiled_regions(n: usize, cell: f64, sides: usize) -> Vec<Region<u32>> {
    let mut out = Vec::with_capacity(n * n + n);
    let mut id = 0_u32;
    for y in 0..n {
        for x in 0..n {
            let cx = (x as f64 + 0.5) * cell;
            let cy = (y as f64 + 0.5) * cell;
            let poly = PolygonWithHoles::from_outer(blob(cx, cy, cell * 0.45, sides));
            out.push(Region::new(id, "cell", [poly], 1 + id as usize % 7).unwrap());
            id += 1;
        }
    }
    let width = n as f64 * cell;
    for y in 0..n {
        let y0 = y as f64 * cell;
        let outer = [(0.0, y0), (width, y0), (width, y0 + cell), (0.0, y0 + cell)];
        let hole = blob(width * 0.5, y0 + cell * 0.5, cell * 0.25, sides);
        let poly = PolygonWithHoles::new(outer, [hole]);
        out.push(Region::new(id, "band", [poly], 10_000).unwrap());
        id += 1;
    }
    out
}

fn gen_random_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn run_queries<B: Backend>(idx: &RegionIndexGeneric<u32, B>, pts: &[Point]) -> usize {
    pts.iter()
        .filter(|&&p| idx.hit_test_point(p, QueryFilter::INTERACTIVE).is_some())
        .count()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[16usize, 32, 64] {
        let regions = gen_tiled_regions(n, 10.0, 24);
        group.throughput(Throughput::Elements(regions.len() as u64));
        group.bench_function(format!("flatvec_upsert_n{n}"), |b| {
            b.iter_batched(
                || regions.clone(),
                |regions| {
                    let mut idx = RegionIndex::<u32>::new();
                    black_box(idx.upsert_regions(regions).unwrap());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("grid_upsert_n{n}"), |b| {
            b.iter_batched(
                || regions.clone(),
                |regions| {
                    let mut idx = RegionIndex::<u32>::with_uniform_grid(20.0, 20.0);
                    black_box(idx.upsert_regions(regions).unwrap());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_point");
    let pts = gen_random_points(1024, 640.0);
    group.throughput(Throughput::Elements(pts.len() as u64));
    for &n in &[16usize, 32, 64] {
        let regions = gen_tiled_regions(n, 10.0, 24);

        let mut flat = RegionIndex::<u32>::new();
        flat.upsert_regions(regions.clone()).unwrap();
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter(|| black_box(run_queries(&flat, &pts)));
        });

        let mut grid = RegionIndex::<u32>::with_uniform_grid(20.0, 20.0);
        grid.upsert_regions(regions).unwrap();
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter(|| black_box(run_queries(&grid, &pts)));
        });
    }
    group.finish();
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    let mut idx = RegionIndex::<u32>::new();
    idx.upsert_regions(gen_tiled_regions(32, 10.0, 24)).unwrap();
    // A slow horizontal sweep: most moves stay inside the same region.
    let sweep: Vec<Point> = (0..3200).map(|i| Point::new(i as f64 * 0.1, 155.0)).collect();
    group.throughput(Throughput::Elements(sweep.len() as u64));
    group.bench_function("pointer_move_sweep", |b| {
        b.iter_batched(
            HitTester::<u32>::new,
            |mut hover| {
                let changes = sweep
                    .iter()
                    .filter(|&&p| hover.pointer_move(&idx, p).is_some())
                    .count();
                black_box(changes);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_point_queries, bench_hover_sweep);
criterion_main!(benches);
