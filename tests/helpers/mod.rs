use topocheck::parse::types::*;

// =============================================================================
// Component builders
// =============================================================================

/// A source component declaring the given output streams, with an
/// executable payload attached.
pub fn source(id: &str, outputs: &[&str]) -> Component {
    component(id, ComponentRole::Source, &[], outputs)
}

/// A stateful source component declaring the given output streams.
pub fn stateful_source(id: &str, outputs: &[&str]) -> Component {
    component(id, ComponentRole::StatefulSource, &[], outputs)
}

/// A processor subscribing to the given `(componentId, streamId)` pairs and
/// declaring the given output streams.
pub fn processor(id: &str, inputs: &[(&str, &str)], outputs: &[&str]) -> Component {
    component(id, ComponentRole::Processor, inputs, outputs)
}

fn component(
    id: &str,
    role: ComponentRole,
    inputs: &[(&str, &str)],
    outputs: &[&str],
) -> Component {
    Component {
        id: id.into(),
        role,
        executable: Some(Executable {
            runtime: "process".into(),
            artifact: format!("registry://jobs/{id}"),
        }),
        inputs: inputs
            .iter()
            .map(|(component_id, stream_id)| StreamSubscription {
                stream: StreamReference::new(*component_id, *stream_id),
                grouping: Grouping::default(),
            })
            .collect(),
        output_streams: outputs.iter().map(|s| s.to_string()).collect(),
    }
}

/// Strip the executable payload, the way a wiring-only builder leaves it.
pub fn without_executable(mut component: Component) -> Component {
    component.executable = None;
    component
}

// =============================================================================
// Topology builders
// =============================================================================

pub fn topology(components: Vec<Component>) -> Topology {
    Topology {
        name: "test-topology".into(),
        components,
    }
}

pub fn stream(component_id: &str, stream_id: &str) -> StreamReference {
    StreamReference::new(component_id, stream_id)
}
