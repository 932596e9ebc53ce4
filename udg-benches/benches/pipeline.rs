//! Graph construction and full pipeline benchmarks.
//!
//! Edge construction and crossing analysis are the two O(n²)-or-worse
//! stages, so they are measured in isolation before the whole
//! `recompute_from` pipeline is compared across backends.
#![allow(missing_docs, reason = "Criterion macros generate undocumented items")]
#![allow(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use udg_benches::{
    params::{GraphBenchParams, PipelineBenchParams},
    source::{connected_graph, critical_radius, scattered_graph},
};
use udg_core::{
    AnalysisParams, CancellationToken, CrossingAnalysis, ExecutionStrategy, recompute_from,
};

/// Seed used for all vertex generation in this benchmark.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const VERTEX_COUNTS: &[usize] = &[250, 500, 1_000];

fn graph_params(vertex_count: usize) -> GraphBenchParams {
    GraphBenchParams {
        vertex_count,
        radius: critical_radius(vertex_count).expect("vertex counts are non-zero"),
    }
}

fn edge_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_construction");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let params = graph_params(vertex_count);
        let graph = scattered_graph(&params, SEED).expect("scattered graph must build");

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| {
                let mut working = graph.clone();
                working.build_edges();
                working
            });
        });
    }

    group.finish();
}

fn crossing_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossing_analysis");
    group.sample_size(10);

    for &vertex_count in VERTEX_COUNTS {
        let params = graph_params(vertex_count);
        let graph = connected_graph(&params, SEED).expect("connected graph must build");

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| CrossingAnalysis::compute(graph));
        });
    }

    group.finish();
}

fn full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(10);

    let strategies = [
        ("sequential", ExecutionStrategy::Sequential),
        ("parallel", ExecutionStrategy::Parallel),
    ];
    for &vertex_count in VERTEX_COUNTS {
        let radius = graph_params(vertex_count).radius;
        for (label, strategy) in strategies {
            let analysis = AnalysisParams::new(vertex_count, radius)
                .expect("pipeline params must be valid")
                .with_seed(SEED)
                .with_execution_strategy(strategy);
            let bench_params = PipelineBenchParams {
                vertex_count,
                strategy: label,
            };

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_params),
                &analysis,
                |b, analysis| {
                    let cancel = CancellationToken::new();
                    b.iter(|| recompute_from(analysis, &cancel).expect("pipeline must succeed"));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, edge_construction, crossing_analysis, full_pipeline);
criterion_main!(benches);
