//! Shared identity record embedded by every error kind
//!
//! Composition replaces inheritance: each variant embeds an [`ErrorCore`]
//! and layers its own cause structure on top. The core owns the behavior
//! every kind shares: message truncation, the occurrence identifier, the
//! optional display-name override, and the metadata bag.

use faultline_core_types::{Metadata, OccurrenceId};
use serde::{Deserialize, Serialize};

/// Maximum message length surfaced by any error
pub const MESSAGE_LIMIT: usize = 240;

/// Appended in place of the removed tail when a message is cut
const TRUNCATION_SUFFIX: &str = " ...too long error";

/// Characters of the original message kept when truncating
const TRUNCATED_KEEP: usize = 222;

/// Identity shared by every error kind
///
/// Fully immutable after the builder phase: the embedding variant exposes
/// `with_*` methods that delegate here during construction and only
/// read accessors afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCore {
    message: String,
    id: OccurrenceId,
    name: Option<String>,
    info: Option<Metadata>,
}

impl ErrorCore {
    /// Create a core with a freshly generated occurrence id
    ///
    /// Messages longer than [`MESSAGE_LIMIT`] characters are silently cut
    /// to 222 characters plus a fixed marker suffix; this is the one case
    /// of self-correction instead of failure in the taxonomy.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: truncate(message.into()),
            id: OccurrenceId::generate(),
            name: None,
            info: None,
        }
    }

    /// Replace the generated id with an existing one
    pub fn set_id(&mut self, id: OccurrenceId) {
        self.id = id;
    }

    /// Set the display-name override
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Attach the metadata bag
    pub fn set_info(&mut self, info: Metadata) {
        self.info = Some(info);
    }

    /// The (possibly truncated) message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The occurrence identifier
    pub fn id(&self) -> OccurrenceId {
        self.id
    }

    /// The explicit display-name override, when one was supplied
    ///
    /// Each variant resolves its own default when this is absent.
    pub fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The metadata bag, when one was attached
    pub fn info(&self) -> Option<&Metadata> {
        self.info.as_ref()
    }
}

/// Serialized digest of a chain or aggregate error
///
/// The `{name, message, uuid, trace}` object both node kinds produce for
/// structured logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    /// Display name classifying the error
    pub name: String,
    /// Human message, already bounded by [`MESSAGE_LIMIT`]
    pub message: String,
    /// Occurrence identifier
    pub uuid: OccurrenceId,
    /// One line per node reached by the error's own trace walk
    pub trace: Vec<String>,
}

/// Cap a message at [`MESSAGE_LIMIT`] characters, marking the cut
fn truncate(message: String) -> String {
    if message.chars().count() <= MESSAGE_LIMIT {
        return message;
    }
    let mut cut: String = message.chars().take(TRUNCATED_KEEP).collect();
    cut.push_str(TRUNCATION_SUFFIX);
    cut
}
