//! Skeleton topology detection.

use crate::parse::types::Topology;

/// Determine whether the topology was assembled only to check wiring.
///
/// Builders produce such topologies by declaring components without
/// attaching executable payloads, so one component of any role with no
/// payload marks the whole topology as a skeleton. An empty topology is not
/// a skeleton: there is no component missing a payload.
pub fn is_skeleton_topology(topology: &Topology) -> bool {
    topology
        .components
        .iter()
        .any(|component| component.executable.is_none())
}
