//! Wiring validation phase.
//!
//! Checks that every stream a component subscribes to is actually declared
//! by some component, and reports declared streams nobody consumes.

pub mod display;
pub mod result;
pub mod skeleton;
pub mod wiring;

pub use display::component_streams_to_string;
pub use result::ValidationResult;
pub use skeleton::is_skeleton_topology;

use crate::parse::types::Topology;

/// Validate the wiring of the whole topology.
///
/// Inputs with no matching declared output land in
/// [`ValidationResult::invalid_inputs`] and make the topology unsubmittable;
/// declared outputs with no subscriber land in
/// [`ValidationResult::unconsumed_outputs`] and are informational only. The
/// decision to reject or merely warn belongs to the caller.
pub fn validate_topology(topology: &Topology) -> ValidationResult {
    let inputs = wiring::all_component_inputs(topology);
    let outputs = wiring::all_component_outputs(topology);

    let invalid_inputs = inputs.difference(&outputs).cloned().collect();
    let unconsumed_outputs = outputs.difference(&inputs).cloned().collect();

    ValidationResult::new(invalid_inputs, unconsumed_outputs)
}
