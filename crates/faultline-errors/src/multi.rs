//! Aggregate error: one node fanning out over an ordered cause list
//!
//! Aggregates hold sibling failures rather than a chain: a batch of
//! validation errors, the collected failures of a scatter operation. The
//! traversal contract mirrors the chain node's, fanning out over the list
//! in sequence order.

use crate::cause::Cause;
use crate::fault::{Fault, CHAIN_PREFIX};
use crate::identity::{ErrorCore, ErrorSummary};
use faultline_core_types::{
    Metadata, OccurrenceId, ValidationFailure, VALIDATION_ERROR_NAME,
};
use std::fmt;

/// Display name used when no override was supplied
const DEFAULT_NAME: &str = "MultiFault";

/// Error holding zero or more sibling causes
///
/// The cause list is the one mutable surface in the taxonomy: [`push`]
/// and [`pop`] support incremental accumulation of failures. Instances
/// are not synchronized; concurrent mutation of a shared value must be
/// serialized by the caller.
///
/// [`push`]: MultiFault::push
/// [`pop`]: MultiFault::pop
#[derive(Debug, Clone, PartialEq)]
pub struct MultiFault {
    core: ErrorCore,
    causes: Option<Vec<Cause>>,
}

impl MultiFault {
    /// Create a new aggregate with a freshly generated occurrence id
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            core: ErrorCore::new(message),
            causes: None,
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

    /// Append one cause during construction
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.push(cause);
        self
    }

    /// Append a whole cause sequence during construction
    pub fn with_causes<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cause>,
    {
        for cause in causes {
            self.push(cause);
        }
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

    /// The cause list, absent until the first cause arrives
    pub fn causes(&self) -> Option<&[Cause]> {
        self.causes.as_deref()
    }

    /// Number of causes currently held
    pub fn size(&self) -> usize {
        self.causes.as_ref().map_or(0, Vec::len)
    }

    /// Append a cause, initializing the list on first use
    ///
    /// The cause tree must stay acyclic; nothing here detects a cause
    /// that reintroduces an ancestor.
    pub fn push(&mut self, cause: impl Into<Cause>) {
        self.causes.get_or_insert_with(Vec::new).push(cause.into());
    }

    /// Remove and return the most recently appended cause
    pub fn pop(&mut self) -> Option<Cause> {
        self.causes.as_mut().and_then(Vec::pop)
    }

    /// Trace of every cause, concatenated in sequence order
    ///
    /// Each cause contributes its own standalone trace: a foreign leaf is
    /// one `name: message` line, a chain cause brings its whole walk. No
    /// line for the aggregate itself; the fan-out is the content.
    pub fn trace(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for cause in self.causes().unwrap_or(&[]) {
            lines.extend(cause.trace_lines());
        }
        lines
    }

    /// First error in the cause list whose display name matches
    ///
    /// Causes are checked in sequence order, each one searched depth-first
    /// before the next is considered.
    pub fn find_cause_by_name(&self, name: &str) -> Option<&Cause> {
        self.causes()
            .unwrap_or(&[])
            .iter()
            .find_map(|cause| cause.find_by_name(name))
    }

    /// Check whether a cause with the given display name is present
    pub fn has_cause_with_name(&self, name: &str) -> bool {
        self.find_cause_by_name(name).is_some()
    }

    /// Own line plus each cause's full stack, bracketed per cause
    pub fn full_stack(&self) -> String {
        let mut stack = self.to_string();
        if let Some(causes) = self.causes() {
            if !causes.is_empty() {
                stack.push('\n');
                stack.push_str(CHAIN_PREFIX);
                for cause in causes {
                    stack.push_str(&format!("\n[{}]", cause.full_stack()));
                }
            }
        }
        stack
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

    /// Fold a schema-validation failure into the cause list
    ///
    /// Appends one chain error per reported detail, each named
    /// `ValidationError`, carrying the detail as metadata, and sharing
    /// this aggregate's occurrence id. Returns the number appended; an
    /// input without the marker name is ignored and yields 0.
    pub fn extend_from_validation(&mut self, failure: &ValidationFailure) -> usize {
        if !failure.is_validation() {
            return 0;
        }
        for detail in &failure.details {
            let fault = Fault::new(detail.message.clone())
                .with_id(self.uuid())
                .with_name(VALIDATION_ERROR_NAME)
                .with_info(detail.to_metadata());
            self.push(fault);
        }
        failure.details.len()
    }
}

impl fmt::Display for MultiFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message())
    }
}

impl std::error::Error for MultiFault {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForeignError;

    #[test]
    fn test_new_defaults() {
        let aggregate = MultiFault::new("Example");

        assert_eq!(aggregate.name(), "MultiFault");
        assert_eq!(aggregate.message(), "Example");
        assert!(aggregate.causes().is_none());
        assert_eq!(aggregate.size(), 0);
    }

    #[test]
    fn test_push_initializes_the_list() {
        let mut aggregate = MultiFault::new("Example");
        aggregate.push(ForeignError::new("Error", "Regular Error"));

        assert_eq!(aggregate.size(), 1);
        assert!(aggregate.causes().is_some());
    }

    #[test]
    fn test_pop_on_empty_returns_none() {
        let mut aggregate = MultiFault::new("Example");

        assert!(aggregate.pop().is_none());
    }

    #[test]
    fn test_display_is_name_and_message() {
        let aggregate = MultiFault::new("Example").with_name("ControllerError");

        assert_eq!(aggregate.to_string(), "ControllerError: Example");
    }

    #[test]
    fn test_trace_of_empty_aggregate_is_empty() {
        let aggregate = MultiFault::new("Example");

        assert!(aggregate.trace().is_empty());
    }
}
