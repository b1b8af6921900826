//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors of the outer layers (CLI and server). The analysis core is a
/// total function and has no error path of its own.
#[derive(Error, Debug)]
pub enum FlowcheckError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listen address '{addr}'")]
    InvalidAddr { addr: String },

    #[error("Pipeline '{file}' contains a cycle")]
    CyclicPipeline { file: String },
}

impl FixSuggestion for FlowcheckError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            FlowcheckError::JsonParse(_) => {
                Some("Check the pipeline JSON: nodes need an 'id', edges need 'source' and 'target'")
            }
            FlowcheckError::Io(_) => Some("Check file path and permissions"),
            FlowcheckError::InvalidAddr { .. } => {
                Some("Pass an IP address for --host, e.g. 127.0.0.1 or 0.0.0.0")
            }
            FlowcheckError::CyclicPipeline { .. } => {
                Some("Break the cycle - pipeline edges must form a DAG")
            }
        }
    }
}
