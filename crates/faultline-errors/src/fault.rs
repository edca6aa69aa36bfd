//! Chain error: one node, at most one cause
//!
//! Catching an error and re-wrapping it as the cause of a new `Fault`
//! builds a singly-linked cause chain. The traversal helpers here walk
//! that chain outermost-first: a linear trace, a named-cause search, and
//! a full concatenated stack.

use crate::cause::Cause;
use crate::identity::{ErrorCore, ErrorSummary};
use faultline_core_types::{InvalidIdentifier, Metadata, OccurrenceId};
use std::fmt;

/// Display name used when no override was supplied
const DEFAULT_NAME: &str = "Fault";

/// Prefix marking a hierarchical (chain) link in a trace
pub(crate) const CHAIN_PREFIX: &str = "caused by: ";

/// Prefix marking a sibling (fan-out) line spliced from an aggregate
pub(crate) const FANOUT_PREFIX: &str = "failed with: ";

/// Error with a bounded message, an occurrence id, and at most one cause
///
/// Immutable once built. The id is generated at `new` and replaced via
/// [`Fault::with_id`] when wrapping code propagates the inner error's
/// identifier, keeping one id per logical failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    core: ErrorCore,
    cause: Option<Box<Cause>>,
}

impl Fault {
    /// Create a new fault with a freshly generated occurrence id
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            core: ErrorCore::new(message),
            cause: None,
        }
    }

    /// Keep an existing occurrence id instead of the generated one
    pub fn with_id(mut self, id: OccurrenceId) -> Self {
        self.core.set_id(id);
        self
    }

    /// Override the display name classifying this error
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.core.set_name(name);
        self
    }

    /// Attach diagnostic metadata
    pub fn with_info(mut self, info: Metadata) -> Self {
        self.core.set_info(info);
        self
    }

    /// Attach the error this one was caused by
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    /// Display name classifying this error
    pub fn name(&self) -> &str {
        self.core.name_override().unwrap_or(DEFAULT_NAME)
    }

    /// Human message, bounded at construction
    pub fn message(&self) -> &str {
        self.core.message()
    }

    /// Occurrence identifier
    pub fn uuid(&self) -> OccurrenceId {
        self.core.id()
    }

    /// Diagnostic metadata, when attached
    pub fn info(&self) -> Option<&Metadata> {
        self.core.info()
    }

    /// The causing error, when one was attached
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_deref()
    }

    /// One line per node in the cause chain, outermost first
    ///
    /// The first line is this error's own rendering. Chain links are
    /// prefixed `caused by: `; a foreign leaf renders the same way and
    /// ends the walk. An aggregate on the chain contributes its own
    /// `caused by: ` line and then splices in its causes as siblings,
    /// each sibling's first line prefixed `failed with: ` to mark the
    /// fan-out as non-hierarchical.
    pub fn trace(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        let mut next = self.cause();
        while let Some(cause) = next {
            match cause {
                Cause::Foreign(foreign) => {
                    lines.push(format!("{}{}", CHAIN_PREFIX, foreign));
                    next = None;
                }
                Cause::Fault(fault) => {
                    lines.push(format!("{}{}", CHAIN_PREFIX, fault));
                    next = fault.cause();
                }
                Cause::Aggregate(aggregate) => {
                    lines.push(format!("{}{}", CHAIN_PREFIX, aggregate));
                    splice_fanout(&mut lines, aggregate);
                    next = None;
                }
            }
        }
        lines
    }

    /// First error in the cause chain whose display name matches
    ///
    /// Walks depth-first: down the chain, and through the cause list of
    /// any aggregate encountered on it. The receiver's own name is not a
    /// candidate.
    pub fn find_cause_by_name(&self, name: &str) -> Option<&Cause> {
        self.cause().and_then(|cause| cause.find_by_name(name))
    }

    /// Check whether a cause with the given display name is present
    pub fn has_cause_with_name(&self, name: &str) -> bool {
        self.find_cause_by_name(name).is_some()
    }

    /// The whole chain rendered as one string, one `caused by: ` hop at a
    /// time
    ///
    /// There is no runtime frame capture; a node's stack representation
    /// is its display line, and the structured chain is the stack.
    pub fn full_stack(&self) -> String {
        match self.cause() {
            Some(cause) => format!("{}\n{}{}", self, CHAIN_PREFIX, cause.full_stack()),
            None => self.to_string(),
        }
    }

    /// Serializable digest of this error and its trace
    pub fn summary(&self) -> ErrorSummary {
        ErrorSummary {
            name: self.name().to_string(),
            message: self.message().to_string(),
            uuid: self.uuid(),
            trace: self.trace(),
        }
    }
}

/// Splice an aggregate's causes into a chain trace as sibling lines
fn splice_fanout(lines: &mut Vec<String>, aggregate: &crate::MultiFault) {
    for cause in aggregate.causes().unwrap_or(&[]) {
        for (position, line) in cause.trace_lines().into_iter().enumerate() {
            if position == 0 {
                lines.push(format!("{}{}", FANOUT_PREFIX, line));
            } else {
                lines.push(line);
            }
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message())
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(Cause::as_std_error)
    }
}

impl From<InvalidIdentifier> for Fault {
    fn from(error: InvalidIdentifier) -> Self {
        let mut info = Metadata::new();
        info.set(
            "candidate",
            serde_json::Value::String(error.candidate().to_string()),
        );
        Fault::new(error.to_string())
            .with_name("IdentifierError")
            .with_info(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForeignError;

    #[test]
    fn test_new_defaults() {
        let fault = Fault::new("Example");

        assert_eq!(fault.name(), "Fault");
        assert_eq!(fault.message(), "Example");
        assert!(fault.cause().is_none());
        assert!(fault.info().is_none());
    }

    #[test]
    fn test_display_is_name_and_message() {
        let fault = Fault::new("Example").with_name("ModelError");

        assert_eq!(fault.to_string(), "ModelError: Example");
    }

    #[test]
    fn test_with_id_propagates_identifier() {
        let inner = Fault::new("Cause");
        let outer = Fault::new("Example")
            .with_id(inner.uuid())
            .with_cause(inner.clone());

        assert_eq!(outer.uuid(), inner.uuid());
    }

    #[test]
    fn test_trace_of_single_fault_is_one_line() {
        let fault = Fault::new("Example");

        assert_eq!(fault.trace(), vec!["Fault: Example".to_string()]);
    }

    #[test]
    fn test_source_exposes_cause_as_std_error() {
        use std::error::Error;

        let fault = Fault::new("Example")
            .with_cause(ForeignError::new("RangeError", "Ranged"));
        let source = fault.source().unwrap();

        assert_eq!(source.to_string(), "RangeError: Ranged");
    }

    #[test]
    fn test_identifier_failure_converts_into_fault() {
        let error = faultline_core_types::OccurrenceId::parse("nope").unwrap_err();
        let fault = Fault::from(error);

        assert_eq!(fault.name(), "IdentifierError");
        assert!(fault.message().contains("RFC 4122"));
        assert_eq!(
            fault.info().unwrap().get("candidate"),
            Some(&serde_json::Value::String("nope".to_string()))
        );
    }
}
