//! Rust types for the topology description document.
//!
//! These types are the serde target for the JSON a topology builder submits
//! for wiring validation. The builder owns construction; this crate only
//! reads the result.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

// =============================================================================
// TOP-LEVEL TOPOLOGY
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub name: String,
    pub components: Vec<Component>,
}

impl Topology {
    /// Every component id in the topology, across all roles, in declaration
    /// order. Callers must not rely on the order: all validation results are
    /// sets and come out the same under any permutation.
    pub fn component_ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.id.as_str())
    }

    /// Look up one component by id. Fails for an unknown id rather than
    /// skipping it silently.
    pub fn component(&self, id: &str) -> Result<&Component, TopologyError> {
        self.components
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| TopologyError::ComponentNotFound(id.to_string()))
    }

    /// Reject duplicate component ids. `parse::parse` runs this on every
    /// document; callers assembling a `Topology` in code can run it
    /// themselves before validating.
    pub fn check_distinct_ids(&self) -> Result<(), TopologyError> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                return Err(TopologyError::DuplicateComponent(component.id.clone()));
            }
        }
        Ok(())
    }
}

// =============================================================================
// COMPONENT
// =============================================================================

/// One named unit of the topology: a source emitting streams or a processor
/// consuming and emitting them. All roles share the same declared contract;
/// the role tag keeps the builder's source/processor distinction available
/// to downstream consumers of the parsed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub role: ComponentRole,
    /// Executable payload attached at build time. Absent on components of a
    /// topology assembled purely to check wiring.
    #[serde(default)]
    pub executable: Option<Executable>,
    /// Upstream streams this component subscribes to.
    #[serde(default)]
    pub inputs: Vec<StreamSubscription>,
    /// Names of the streams this component declares as outputs.
    #[serde(default)]
    pub output_streams: Vec<String>,
}

impl Component {
    /// The stream references this component subscribes to.
    pub fn input_streams(&self) -> impl Iterator<Item = &StreamReference> {
        self.inputs.iter().map(|s| &s.stream)
    }

    /// The stream references this component produces. Always keyed by the
    /// component's own id: a component cannot declare an output under
    /// another component's identifier.
    pub fn output_references(&self) -> impl Iterator<Item = StreamReference> + '_ {
        self.output_streams
            .iter()
            .map(|stream_id| StreamReference::new(&self.id, stream_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentRole {
    Source,
    StatefulSource,
    Processor,
}

/// Opaque handle to the logic a component runs when deployed. Wiring
/// validation never looks inside it, only at its presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executable {
    pub runtime: String,
    pub artifact: String,
}

// =============================================================================
// STREAMS
// =============================================================================

/// Identifies one named output stream of one named component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamReference {
    pub component_id: String,
    pub stream_id: String,
}

impl StreamReference {
    pub fn new(component_id: impl Into<String>, stream_id: impl Into<String>) -> Self {
        StreamReference {
            component_id: component_id.into(),
            stream_id: stream_id.into(),
        }
    }
}

impl fmt::Display for StreamReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.component_id, self.stream_id)
    }
}

/// A declared subscription to an upstream stream. The grouping rides along
/// from the builder but plays no part in wiring validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSubscription {
    #[serde(flatten)]
    pub stream: StreamReference,
    #[serde(default)]
    pub grouping: Grouping,
}

/// How tuples on a stream are distributed across a consumer's instances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Grouping {
    #[default]
    Shuffle,
    Fields {
        fields: Vec<String>,
    },
    All,
    Global,
    Direct,
}
