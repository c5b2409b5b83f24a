//! Parse phase: topology JSON → Rust types.

pub mod types;

pub use types::*;

use crate::error::TopologyError;

/// Deserialize a topology JSON document into a [`Topology`].
///
/// Rejects documents with duplicate component ids; every `Topology`
/// returned from here has a distinct id per component.
pub fn parse(json: &str) -> Result<Topology, TopologyError> {
    let topology: Topology = serde_json::from_str(json)?;
    topology.check_distinct_ids()?;
    Ok(topology)
}
