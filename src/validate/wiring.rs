//! Collection of declared stream references across the component list.
//!
//! Both collectors do one flat pass; wiring validation matches reference
//! identity only, never reachability.

use std::collections::HashSet;

use crate::parse::types::{StreamReference, Topology};

/// Every stream reference some component in the topology subscribes to.
///
/// Set semantics: a stream consumed by several components appears once.
pub fn all_component_inputs(topology: &Topology) -> HashSet<StreamReference> {
    let mut all_inputs = HashSet::new();
    for component in &topology.components {
        all_inputs.extend(component.input_streams().cloned());
    }
    all_inputs
}

/// Every stream reference declared as an output by some component in the
/// topology, keyed by the declaring component's own id.
pub fn all_component_outputs(topology: &Topology) -> HashSet<StreamReference> {
    let mut all_outputs = HashSet::new();
    for component in &topology.components {
        all_outputs.extend(component.output_references());
    }
    all_outputs
}
