//! Pipeline request/response schema

use serde::{Deserialize, Serialize};

/// A pipeline node. Only `id` matters for topology analysis; any other
/// fields a client sends (position, type, UI data) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub id: String,
}

/// A directed edge between two node ids.
///
/// `target` is not required to name a known node. Edges whose `source` is
/// unknown are dropped during graph construction.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Pipeline description as submitted by a client.
///
/// Records keep their input order; neighbor lists and traversal order are
/// derived from it.
#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Analysis result returned to the client.
///
/// `num_nodes` and `num_edges` are raw input counts: duplicates are not
/// collapsed and edges are not filtered by validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_pipeline() {
        let pipeline: Pipeline = serde_json::from_str(
            r#"{
                "nodes": [{"id": "a"}, {"id": "b"}],
                "edges": [{"source": "a", "target": "b"}]
            }"#,
        )
        .unwrap();

        assert_eq!(pipeline.nodes.len(), 2);
        assert_eq!(pipeline.edges.len(), 1);
        assert_eq!(pipeline.nodes[0].id, "a");
        assert_eq!(pipeline.edges[0].source, "a");
        assert_eq!(pipeline.edges[0].target, "b");
    }

    #[test]
    fn parse_ignores_opaque_fields() {
        // Clients send UI metadata alongside ids; none of it is schema.
        let pipeline: Pipeline = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id": "n1", "type": "customInput", "position": {"x": 0, "y": 10}},
                    {"id": "n2", "data": {"label": "LLM"}}
                ],
                "edges": [
                    {"source": "n1", "target": "n2", "sourceHandle": "n1-out", "animated": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(pipeline.nodes.len(), 2);
        assert_eq!(pipeline.edges.len(), 1);
    }

    #[test]
    fn parse_rejects_missing_id() {
        let result: Result<Pipeline, _> = serde_json::from_str(
            r#"{"nodes": [{"type": "customInput"}], "edges": []}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_missing_edge_endpoint() {
        let result: Result<Pipeline, _> = serde_json::from_str(
            r#"{"nodes": [{"id": "a"}], "edges": [{"source": "a"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_missing_collections() {
        let result: Result<Pipeline, _> = serde_json::from_str(r#"{"nodes": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn stats_wire_format() {
        let stats = PipelineStats {
            num_nodes: 3,
            num_edges: 2,
            is_dag: true,
        };

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"num_nodes": 3, "num_edges": 2, "is_dag": true})
        );
    }
}
