//! HTTP-facing error and its wire-format object
//!
//! An `HttpError` is built where a failure crosses the REST boundary:
//! application code catches a taxonomy (or foreign) error, wraps it with a
//! status and source metadata, and converts the result to the wire-format
//! [`ApiError`] for transmission.

use faultline_core_types::{Metadata, OccurrenceId, ValidationFailure, VALIDATION_ERROR_NAME};
use faultline_errors::{Cause, ErrorCore, Fault, MultiFault};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::codes::reason_phrase;

/// Display name used when neither an override nor a cause supplies one
const DEFAULT_NAME: &str = "HTTP";

/// Title substituted when the status has no reason phrase
const UNDEFINED_TITLE: &str = "Undefined error";

/// Status assumed until one is set
const DEFAULT_STATUS: u16 = 500;

/// Reference to the part of a request that produced an error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSource {
    /// Pointer to the offending entity in the request document,
    /// e.g. `"/data/job/title"`
    pub pointer: String,
    /// URI query parameter at fault, when one is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// Wire-format error object sent to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Identifier of this particular occurrence of the problem
    pub uuid: OccurrenceId,
    /// Links leading to further detail about the occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, String>>,
    /// HTTP status code
    pub status: u16,
    /// REST-API-specific machine code: the error's display name
    pub code: String,
    /// Human-readable summary, stable from occurrence to occurrence
    pub title: String,
    /// Human-readable explanation specific to this occurrence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Reference to the source of the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ApiSource>,
    /// Non-standard meta-information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Metadata>,
}

/// Error carrying an HTTP status for the REST boundary
///
/// Holds at most one cause, which may be foreign, a chain node, or an
/// aggregate node. Immutable once built, except for
/// [`attach_validation`], which installs a validation cause at the
/// boundary where the engine's error is caught.
///
/// [`attach_validation`]: HttpError::attach_validation
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    core: ErrorCore,
    status: u16,
    links: Option<BTreeMap<String, String>>,
    source: Option<ApiSource>,
    cause: Option<Box<Cause>>,
}

impl HttpError {
    /// Create a new HTTP error with status 500 and a fresh occurrence id
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            core: ErrorCore::new(message),
            status: DEFAULT_STATUS,
            links: None,
            source: None,
            cause: None,
        }
    }

    /// Set the HTTP status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
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

    /// Attach diagnostic metadata, surfaced as the wire object's `meta`
    pub fn with_info(mut self, info: Metadata) -> Self {
        self.core.set_info(info);
        self
    }

    /// Add one named link leading to further detail
    pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), url.into());
        self
    }

    /// Point at the part of the request that produced the error
    pub fn with_source(mut self, source: ApiSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach the error this one was caused by
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    /// Display name: the explicit override, else the cause's name, else
    /// `"HTTP"`
    pub fn name(&self) -> &str {
        self.core
            .name_override()
            .or_else(|| self.cause.as_deref().map(Cause::name))
            .unwrap_or(DEFAULT_NAME)
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

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Links leading to further detail, when any were added
    pub fn links(&self) -> Option<&BTreeMap<String, String>> {
        self.links.as_ref()
    }

    /// The source pointer, when one was set
    pub fn source_ref(&self) -> Option<&ApiSource> {
        self.source.as_ref()
    }

    /// The causing error, when one was attached
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_deref()
    }

    /// Wire-format error object for transmission to a client
    ///
    /// The title comes from the status table; unmapped statuses fall back
    /// to `"Undefined error"`.
    pub fn api_error(&self) -> ApiError {
        ApiError {
            uuid: self.uuid(),
            links: self.links.clone(),
            status: self.status,
            code: self.name().to_string(),
            title: reason_phrase(self.status)
                .unwrap_or(UNDEFINED_TITLE)
                .to_string(),
            detail: Some(self.message().to_string()),
            source: self.source.clone(),
            meta: self.info().cloned(),
        }
    }

    /// Absorb a schema-validation failure as this error's cause
    ///
    /// One reported detail becomes a single chain cause carrying the
    /// detail as metadata; several become an aggregate cause holding one
    /// chain error per detail. Inputs without the marker name, or with no
    /// details at all, leave the cause untouched. Either way the new
    /// cause shares this error's occurrence id.
    pub fn attach_validation(&mut self, failure: &ValidationFailure) {
        if !failure.is_validation() {
            return;
        }
        match failure.details.as_slice() {
            [] => {}
            [detail] => {
                let fault = Fault::new(failure.message.clone())
                    .with_id(self.uuid())
                    .with_name(VALIDATION_ERROR_NAME)
                    .with_info(detail.to_metadata());
                self.cause = Some(Box::new(Cause::from(fault)));
            }
            _ => {
                let mut aggregate = MultiFault::new(failure.message.clone())
                    .with_id(self.uuid())
                    .with_name(VALIDATION_ERROR_NAME);
                aggregate.extend_from_validation(failure);
                self.cause = Some(Box::new(Cause::from(aggregate)));
            }
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message())
    }
}

impl std::error::Error for HttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(Cause::as_std_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_errors::ForeignError;

    #[test]
    fn test_name_defaults_to_http() {
        let error = HttpError::new("Example");

        assert_eq!(error.name(), "HTTP");
        assert_eq!(error.status(), 500);
    }

    #[test]
    fn test_name_inherits_from_cause() {
        let error = HttpError::new("Example")
            .with_cause(Fault::new("Reading").with_name("ModelError"));

        assert_eq!(error.name(), "ModelError");
    }

    #[test]
    fn test_explicit_name_wins_over_cause() {
        let error = HttpError::new("Example")
            .with_name("GatewayError")
            .with_cause(Fault::new("Reading").with_name("ModelError"));

        assert_eq!(error.name(), "GatewayError");
    }

    #[test]
    fn test_foreign_cause_contributes_its_name() {
        let error =
            HttpError::new("Example").with_cause(ForeignError::new("RangeError", "Ranged"));

        assert_eq!(error.name(), "RangeError");
    }

    #[test]
    fn test_display_is_name_and_message() {
        let error = HttpError::new("no such job").with_status(404);

        assert_eq!(error.to_string(), "HTTP: no such job");
    }
}
