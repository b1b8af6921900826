//! Pipeline analysis entry point
//!
//! Single operation: build the graph, run cycle detection, report counts.

use crate::graph::PipelineGraph;
use crate::pipeline::{Pipeline, PipelineStats};

/// Analyze a pipeline: node/edge counts plus the DAG verdict.
///
/// Counts are raw input lengths. Duplicate node records are not collapsed
/// and edges are not filtered by validity, even though graph construction
/// de-duplicates ids and drops unknown-source edges.
pub fn analyze(pipeline: &Pipeline) -> PipelineStats {
    let graph = PipelineGraph::build(&pipeline.nodes, &pipeline.edges);

    PipelineStats {
        num_nodes: pipeline.nodes.len(),
        num_edges: pipeline.edges.len(),
        is_dag: graph.is_acyclic(),
    }
}
