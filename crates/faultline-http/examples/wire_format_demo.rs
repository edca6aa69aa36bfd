//! Wire-format demonstration
//!
//! Shows the catch / re-wrap / convert flow: a failure deep in a service
//! is wrapped layer by layer under one occurrence id, surfaced at the
//! REST boundary as an `HttpError`, and rendered as the wire-format
//! object a client would receive.

use faultline_core_types::{
    PathSegment, ValidationDetail, ValidationFailure, VALIDATION_ERROR_NAME,
};
use faultline_errors::{Fault, ForeignError};
use faultline_http::helpers;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Faultline Wire Format Demo ===\n");

    // A foreign failure occurs at the bottom of the stack
    let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
    let model = Fault::new("reading job record")
        .with_name("ModelError")
        .with_cause(ForeignError::from_std(&io_error));

    // Each layer re-wraps, propagating the occurrence id
    let service = Fault::new("loading job 42")
        .with_id(model.uuid())
        .with_name("ServiceError")
        .with_cause(model);

    println!("Trace seen by the logs:");
    for line in service.trace() {
        println!("  {}", line);
    }

    // The REST boundary wraps once more and converts
    let boundary = helpers::service_unavailable("job store unreachable")
        .with_id(service.uuid())
        .with_link("status", "https://status.example.com")
        .with_cause(service);

    println!("\nWire-format object:");
    println!("{}", serde_json::to_string_pretty(&boundary.api_error())?);

    // A validation failure takes the cardinality-aware path instead
    let mut rejected = helpers::bad_request("payload rejected");
    rejected.attach_validation(&ValidationFailure {
        name: VALIDATION_ERROR_NAME.to_string(),
        is_schema_error: true,
        message: "\"age\" must be a number".to_string(),
        details: vec![ValidationDetail {
            message: "\"age\" must be a number".to_string(),
            path: vec![
                PathSegment::Key("data".to_string()),
                PathSegment::Key("age".to_string()),
            ],
            kind: "number.base".to_string(),
            context: None,
        }],
    });

    println!("\nValidation wire-format object:");
    println!("{}", serde_json::to_string_pretty(&rejected.api_error())?);

    Ok(())
}
