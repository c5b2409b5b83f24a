//! Debug listing of one component's declared streams.

use crate::error::TopologyError;
use crate::parse::types::Topology;

/// Render the input and output stream references of one component as a
/// two-line `(component, stream)` listing. Purely a debugging aid; wiring
/// decisions never depend on it.
///
/// Fails with [`TopologyError::ComponentNotFound`] for an unknown id.
pub fn component_streams_to_string(
    topology: &Topology,
    component_id: &str,
) -> Result<String, TopologyError> {
    let component = topology.component(component_id)?;

    let mut listing = String::from("input (component, stream):  ");
    for input in component.input_streams() {
        listing.push_str(&format!("{} ", input));
    }
    listing.push_str("\noutput (component, stream):  ");
    for output in component.output_references() {
        listing.push_str(&format!("{} ", output));
    }

    Ok(listing)
}
