//! Outcome of validating a topology's wiring.

use std::collections::HashSet;

use crate::parse::types::StreamReference;

/// Result of a wiring validation pass. Immutable once constructed; repeated
/// validation of the same topology yields value-equal results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Declared inputs with no corresponding upstream component and stream.
    /// A topology with any of these will be rejected at submission.
    invalid_inputs: HashSet<StreamReference>,
    /// Declared outputs no component subscribes to. Harmless at submission,
    /// but useful feedback while a topology is being built.
    unconsumed_outputs: HashSet<StreamReference>,
}

impl ValidationResult {
    /// Takes ownership of both sets, so the result is independent of
    /// anything the caller still holds.
    pub fn new(
        invalid_inputs: HashSet<StreamReference>,
        unconsumed_outputs: HashSet<StreamReference>,
    ) -> Self {
        ValidationResult {
            invalid_inputs,
            unconsumed_outputs,
        }
    }

    /// Inputs that have no upstream output.
    pub fn invalid_inputs(&self) -> &HashSet<StreamReference> {
        &self.invalid_inputs
    }

    /// Outputs that are declared but not consumed downstream.
    pub fn unconsumed_outputs(&self) -> &HashSet<StreamReference> {
        &self.unconsumed_outputs
    }

    /// True when every input matches a declared output and every output has
    /// a subscriber.
    pub fn is_fully_wired(&self) -> bool {
        self.invalid_inputs.is_empty() && self.unconsumed_outputs.is_empty()
    }
}
