//! Flowcheck - pipeline topology analysis service

pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod server;

pub use analysis::analyze;
pub use config::ServerConfig;
pub use error::{FixSuggestion, FlowcheckError};
pub use graph::PipelineGraph;
pub use pipeline::{Edge, Node, Pipeline, PipelineStats};
