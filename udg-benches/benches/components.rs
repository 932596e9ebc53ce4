//! Super-free classification and component partition benchmarks.
//!
//! Both stages run on a prebuilt graph so the measurements exclude edge
//! construction.
#![allow(missing_docs, reason = "Criterion macros generate undocumented items")]
#![allow(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use udg_benches::{
    params::GraphBenchParams,
    source::{connected_graph, critical_radius},
};
use udg_core::{ComponentPartition, CrossingAnalysis, SuperFreeClassification};

const SEED: u64 = 7;

const VERTEX_COUNTS: &[usize] = &[500, 1_000, 2_000];

fn prepared(vertex_count: usize) -> GraphBenchParams {
    GraphBenchParams {
        vertex_count,
        radius: critical_radius(vertex_count).expect("vertex counts are non-zero"),
    }
}

fn super_free_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("super_free_classification");
    group.sample_size(10);

    for &vertex_count in VERTEX_COUNTS {
        let params = prepared(vertex_count);
        let graph = connected_graph(&params, SEED).expect("connected graph must build");
        let crossings = CrossingAnalysis::compute(&graph);

        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &(graph, crossings),
            |b, (graph, crossings)| {
                b.iter(|| SuperFreeClassification::classify(graph, crossings.free()));
            },
        );
    }

    group.finish();
}

fn component_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("component_partition");

    for &vertex_count in VERTEX_COUNTS {
        let params = prepared(vertex_count);
        let graph = connected_graph(&params, SEED).expect("connected graph must build");

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| ComponentPartition::compute(graph));
        });
    }

    group.finish();
}

criterion_group!(benches, super_free_classification, component_partition);
criterion_main!(benches);
