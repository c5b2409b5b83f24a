//! Unified crate error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("failed to parse topology JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate component id '{0}'")]
    DuplicateComponent(String),

    #[error("component '{0}' not found in topology")]
    ComponentNotFound(String),
}
