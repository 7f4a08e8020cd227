//! Huge-tier benchmarks (2048 x 2048 cells loaded from disk).
//!
//! Kept separate from the tiered benchmarks so `cargo bench --bench solve`
//! stays fast. Generate the fixture first with
//! `cargo run --release -p isthmus-bench --bin gen-grid`.
//!
//! Setup is cached in a `OnceLock` so the read and parse cost is paid once.
#![allow(clippy::expect_used)]

use std::sync::OnceLock;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use isthmus_bench::huge_fixture_path;
use isthmus_core::{ElevationGrid, IsthmusSolver, SolverConfig, parse_grid};

struct HugeSetup {
    text: String,
    grid: ElevationGrid,
}

static SETUP: OnceLock<HugeSetup> = OnceLock::new();

fn get_setup() -> &'static HugeSetup {
    SETUP.get_or_init(|| {
        let path = huge_fixture_path();
        eprintln!("Loading huge fixture from {}...", path.display());
        let text = std::fs::read_to_string(&path)
            .expect("Failed to read huge fixture. Run the gen-grid binary first to generate it.");
        let grid = parse_grid(&text).expect("parse huge fixture");
        eprintln!(
            "Huge tier ready: {}x{} cells, {} land, {:.1} MB text",
            grid.width(),
            grid.height(),
            grid.land_count(),
            text.len() as f64 / (1024.0 * 1024.0)
        );
        HugeSetup { text, grid }
    })
}

fn bench_huge_parse(c: &mut Criterion) {
    let s = get_setup();
    let mut group = c.benchmark_group("huge/parse");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(30));
    group.throughput(Throughput::Bytes(s.text.len() as u64));

    group.bench_function(BenchmarkId::from_parameter("Huge"), |b| {
        b.iter(|| parse_grid(&s.text).expect("parses"));
    });
    group.finish();
}

fn bench_huge_solve(c: &mut Criterion) {
    let s = get_setup();
    let mut group = c.benchmark_group("huge/solve");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(30));
    group.throughput(Throughput::Elements(s.grid.len() as u64));

    for (name, parallel) in [("sequential", false), ("parallel", true)] {
        let config = SolverConfig::default().with_parallel(parallel);
        group.bench_function(BenchmarkId::new(name, "Huge"), |b| {
            b.iter(|| IsthmusSolver::with_config(&s.grid, config).expect("solves"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huge_parse, bench_huge_solve);
criterion_main!(benches);
