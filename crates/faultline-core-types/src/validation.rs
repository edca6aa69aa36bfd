//! Contract types for the external schema-validation engine
//!
//! The validation engine lives outside this workspace; these types only
//! describe the shape of the error it reports, so that the taxonomy's
//! adapters can fold one into a cause list. They are consumed, never
//! produced, here. Field renames match the engine's JSON surface.

use crate::Metadata;
use serde::{Deserialize, Serialize};

/// Marker name carried by every schema-validation failure
pub const VALIDATION_ERROR_NAME: &str = "ValidationError";

/// One element of the path from the document root to the offending value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object member name
    Key(String),
    /// Array position
    Index(u64),
}

impl From<&PathSegment> for serde_json::Value {
    fn from(segment: &PathSegment) -> Self {
        match segment {
            PathSegment::Key(key) => serde_json::Value::String(key.clone()),
            PathSegment::Index(index) => serde_json::Value::Number((*index).into()),
        }
    }
}

/// A single rule violation reported by the validation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetail {
    /// Human-readable description of the violation
    pub message: String,
    /// Path to the offending value
    pub path: Vec<PathSegment>,
    /// Engine-specific rule identifier
    #[serde(rename = "type")]
    pub kind: String,
    /// Engine-specific extra context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ValidationDetail {
    /// Render this detail into a metadata bag, field by field
    ///
    /// Used by the adapters so every appended cause carries the full
    /// detail it was built from.
    pub fn to_metadata(&self) -> Metadata {
        let mut meta = Metadata::new();
        meta.set(
            "message",
            serde_json::Value::String(self.message.clone()),
        );
        meta.set(
            "path",
            serde_json::Value::Array(self.path.iter().map(serde_json::Value::from).collect()),
        );
        meta.set("type", serde_json::Value::String(self.kind.clone()));
        if let Some(context) = &self.context {
            meta.set("context", serde_json::Value::Object(context.clone()));
        }
        meta
    }
}

/// The error surface produced by the external schema-validation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Engine error name; adapters only act on [`VALIDATION_ERROR_NAME`]
    pub name: String,
    /// Engine marker flag, carried through untouched
    #[serde(rename = "isJoi", default)]
    pub is_schema_error: bool,
    /// Top-level message summarizing the failure
    pub message: String,
    /// One entry per violated rule
    pub details: Vec<ValidationDetail>,
}

impl ValidationFailure {
    /// True when the marker name matches the expected contract
    pub fn is_validation(&self) -> bool {
        self.name == VALIDATION_ERROR_NAME
    }
}
