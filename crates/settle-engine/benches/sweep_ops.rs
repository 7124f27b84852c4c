//! Criterion micro-benchmarks for the sweep driver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use settle_core::{Grid, SourcePoint, Sources};
use settle_engine::{sweep, sweep_buffered};
use settle_space::BoundaryMode;
use settle_stencil::FourPointBlend;

/// A 64x64 grid with a hot source in the middle of each quadrant.
fn make_fixture() -> (Grid, Sources) {
    let mut grid = Grid::new(64, 64).unwrap();
    let sources: Sources = [
        SourcePoint::new(16, 16, 100.0),
        SourcePoint::new(16, 48, 100.0),
        SourcePoint::new(48, 16, 100.0),
        SourcePoint::new(48, 48, 100.0),
    ]
    .into_iter()
    .collect();
    sources.seed(&mut grid).unwrap();
    (grid, sources)
}

fn bench_sweeps(c: &mut Criterion) {
    let blend = FourPointBlend::new(1.0).unwrap();

    c.bench_function("sweep_in_place_64x64_bounded", |b| {
        let (mut grid, sources) = make_fixture();
        b.iter(|| {
            black_box(sweep(
                &mut grid,
                &sources,
                &blend,
                BoundaryMode::Bounded,
            ))
        });
    });

    c.bench_function("sweep_in_place_64x64_cyclic", |b| {
        let (mut grid, sources) = make_fixture();
        b.iter(|| {
            black_box(sweep(&mut grid, &sources, &blend, BoundaryMode::Cyclic))
        });
    });

    c.bench_function("sweep_buffered_64x64_bounded", |b| {
        let (mut grid, sources) = make_fixture();
        let mut snapshot = grid.clone();
        b.iter(|| {
            black_box(sweep_buffered(
                &mut grid,
                &mut snapshot,
                &sources,
                &blend,
                BoundaryMode::Bounded,
            ))
        });
    });
}

criterion_group!(benches, bench_sweeps);
criterion_main!(benches);
