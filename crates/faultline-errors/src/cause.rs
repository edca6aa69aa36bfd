//! The cause union: every edge in a causal tree points at one of these
//!
//! Traversal code matches exhaustively over the three node shapes instead
//! of performing runtime type tests. A causal tree has chain nodes
//! (out-degree 1) and aggregate nodes (out-degree N) inside, and foreign
//! or cause-less taxonomy nodes at the leaves.

use crate::{Fault, MultiFault};
use faultline_core_types::OccurrenceId;
use std::fmt;

/// Opaque leaf captured from an error outside the taxonomy
///
/// Only the display name and the rendered message survive capture;
/// traversal never descends past a foreign leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignError {
    name: String,
    message: String,
}

impl ForeignError {
    /// Capture a foreign error under an explicit display name
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Capture any std error under the generic "Error" name
    pub fn from_std(error: &(dyn std::error::Error + '_)) -> Self {
        Self::new("Error", error.to_string())
    }

    /// Display name of the captured error
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered message of the captured error
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

impl std::error::Error for ForeignError {}

/// A single edge in a causal tree
#[derive(Debug, Clone, PartialEq)]
pub enum Cause {
    /// Leaf from outside the taxonomy
    Foreign(ForeignError),
    /// Chain node with at most one further cause
    Fault(Box<Fault>),
    /// Aggregate node fanning out over a cause list
    Aggregate(Box<MultiFault>),
}

impl Cause {
    /// Display name of the node behind this edge
    pub fn name(&self) -> &str {
        match self {
            Cause::Foreign(foreign) => foreign.name(),
            Cause::Fault(fault) => fault.name(),
            Cause::Aggregate(aggregate) => aggregate.name(),
        }
    }

    /// Message of the node behind this edge
    pub fn message(&self) -> &str {
        match self {
            Cause::Foreign(foreign) => foreign.message(),
            Cause::Fault(fault) => fault.message(),
            Cause::Aggregate(aggregate) => aggregate.message(),
        }
    }

    /// Occurrence identifier, absent for foreign leaves
    pub fn uuid(&self) -> Option<OccurrenceId> {
        match self {
            Cause::Foreign(_) => None,
            Cause::Fault(fault) => Some(fault.uuid()),
            Cause::Aggregate(aggregate) => Some(aggregate.uuid()),
        }
    }

    /// True for a leaf captured from outside the taxonomy
    pub fn is_foreign(&self) -> bool {
        matches!(self, Cause::Foreign(_))
    }

    /// The chain node behind this edge, if it is one
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Cause::Fault(fault) => Some(fault),
            _ => None,
        }
    }

    /// The aggregate node behind this edge, if it is one
    pub fn as_aggregate(&self) -> Option<&MultiFault> {
        match self {
            Cause::Aggregate(aggregate) => Some(aggregate),
            _ => None,
        }
    }

    /// First node in this subtree whose display name matches, depth-first
    ///
    /// The node behind this edge is itself a candidate.
    pub fn find_by_name(&self, name: &str) -> Option<&Cause> {
        if self.name() == name {
            return Some(self);
        }
        match self {
            Cause::Foreign(_) => None,
            Cause::Fault(fault) => fault
                .cause()
                .and_then(|cause| cause.find_by_name(name)),
            Cause::Aggregate(aggregate) => aggregate
                .causes()
                .into_iter()
                .flatten()
                .find_map(|cause| cause.find_by_name(name)),
        }
    }

    /// View as a std error, for `source()` interop
    pub fn as_std_error(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Cause::Foreign(foreign) => foreign,
            Cause::Fault(fault) => fault.as_ref(),
            Cause::Aggregate(aggregate) => aggregate.as_ref(),
        }
    }

    /// Trace lines for this subtree viewed standalone (no edge prefix)
    pub(crate) fn trace_lines(&self) -> Vec<String> {
        match self {
            Cause::Foreign(foreign) => vec![foreign.to_string()],
            Cause::Fault(fault) => fault.trace(),
            Cause::Aggregate(aggregate) => aggregate.trace(),
        }
    }

    /// Full stack for this subtree viewed standalone
    pub(crate) fn full_stack(&self) -> String {
        match self {
            Cause::Foreign(foreign) => foreign.to_string(),
            Cause::Fault(fault) => fault.full_stack(),
            Cause::Aggregate(aggregate) => aggregate.full_stack(),
        }
    }
}

impl From<ForeignError> for Cause {
    fn from(foreign: ForeignError) -> Self {
        Cause::Foreign(foreign)
    }
}

impl From<Fault> for Cause {
    fn from(fault: Fault) -> Self {
        Cause::Fault(Box::new(fault))
    }
}

impl From<MultiFault> for Cause {
    fn from(aggregate: MultiFault) -> Self {
        Cause::Aggregate(Box::new(aggregate))
    }
}
