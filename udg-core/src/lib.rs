//! Unit disk graph analysis engine.
//!
//! Scatters points uniformly in the unit square, connects every pair within a
//! distance threshold, and analyses the result: connected components, edge
//! crossings, and super-free edges whose exclusion region holds no other
//! vertex.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
mod builder;
mod cancel;
mod components;
mod crossing;
mod error;
mod geometry;
mod graph;
mod pipeline;
mod radius;
mod result;
mod super_free;

pub use crate::{
    analyzer::UnitDiskAnalyzer,
    builder::{AnalyzerBuilder, ExecutionStrategy, RadiusSource},
    cancel::{CancellationToken, PipelineStage},
    components::{ComponentPartition, SizeHistogram, connected_component_of},
    crossing::CrossingAnalysis,
    error::{ErrorCategory, Result, UdgError, UdgErrorCode},
    geometry::{Orientation, Point, distance, orientation, polygon_contains, segments_intersect},
    graph::{Edge, EdgeId, UnitDiskGraph, Vertex, VertexId, generate_points},
    pipeline::{AnalysisParams, recompute_from},
    radius::{RadiusParams, radius_for},
    result::{AnalysisReport, GraphAnalysis, GraphStatistics},
    super_free::{ExclusionRegion, SuperFreeClassification},
};
