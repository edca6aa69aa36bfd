use faultline_core_types::{
    OccurrenceId, PathSegment, ValidationDetail, ValidationFailure, VALIDATION_ERROR_NAME,
};
use faultline_errors::{Fault, ForeignError};
use faultline_http::{helpers, ApiSource, HttpError};
use serde_json::json;

fn sample_failure(detail_count: usize) -> ValidationFailure {
    ValidationFailure {
        name: VALIDATION_ERROR_NAME.to_string(),
        is_schema_error: true,
        message: "\"age\" must be a number".to_string(),
        details: (0..detail_count)
            .map(|index| ValidationDetail {
                message: format!("detail {}", index),
                path: vec![PathSegment::Index(index as u64)],
                kind: "number.base".to_string(),
                context: None,
            })
            .collect(),
    }
}

#[test]
fn test_api_error_carries_the_full_wire_shape() {
    let id = OccurrenceId::generate();
    let mut info = faultline_core_types::Metadata::new();
    info.set("job", json!("import"));

    let error = HttpError::new("job 42 does not exist")
        .with_id(id)
        .with_status(404)
        .with_name("JobError")
        .with_info(info)
        .with_link("docs", "https://api.example.com/docs/errors")
        .with_source(ApiSource {
            pointer: "/data/job/id".to_string(),
            parameter: Some("id".to_string()),
        });

    let wire = serde_json::to_value(error.api_error()).unwrap();
    assert_eq!(
        wire,
        json!({
            "uuid": id.to_string(),
            "links": {"docs": "https://api.example.com/docs/errors"},
            "status": 404,
            "code": "JobError",
            "title": "Not Found",
            "detail": "job 42 does not exist",
            "source": {"pointer": "/data/job/id", "parameter": "id"},
            "meta": {"job": "import"}
        })
    );
}

#[test]
fn test_api_error_omits_absent_options() {
    let error = HttpError::new("boom");
    let wire = serde_json::to_value(error.api_error()).unwrap();

    assert_eq!(wire["status"], 500);
    assert_eq!(wire["code"], "HTTP");
    assert_eq!(wire["title"], "Internal Server Error");
    assert_eq!(wire["detail"], "boom");
    assert!(wire.get("links").is_none());
    assert!(wire.get("source").is_none());
    assert!(wire.get("meta").is_none());
}

#[test]
fn test_unmapped_status_gets_the_undefined_title() {
    let error = HttpError::new("strange").with_status(599);

    assert_eq!(error.api_error().title, "Undefined error");
}

#[test]
fn test_api_error_is_byte_identical_across_identical_constructions() {
    let id = OccurrenceId::parse("b0c139b6-6a51-4c43-ad6b-2a9deb1a4f25").unwrap();
    let build = || {
        HttpError::new("job 42 does not exist")
            .with_id(id)
            .with_status(404)
            .with_link("docs", "https://api.example.com/docs/errors")
            .with_link("support", "https://example.com/support")
    };

    let first = serde_json::to_string(&build().api_error()).unwrap();
    let second = serde_json::to_string(&build().api_error()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_helpers_set_status_and_title() {
    let cases: [(fn(String) -> HttpError, u16, &str); 8] = [
        (|m| helpers::bad_request(m), 400, "Bad Request"),
        (|m| helpers::unauthorized(m), 401, "Unauthorized"),
        (|m| helpers::not_found(m), 404, "Not Found"),
        (|m| helpers::request_timeout(m), 408, "Request Time-out"),
        (|m| helpers::teapot(m), 418, "I'm a teapot"),
        (|m| helpers::illegal(m), 451, "Unavailable For Legal Reasons"),
        (|m| helpers::internal_server_error(m), 500, "Internal Server Error"),
        (|m| helpers::gateway_timeout(m), 504, "Gateway Time-out"),
    ];

    for (build, status, title) in cases {
        let error = build("Example".to_string());
        assert_eq!(error.status(), status);
        assert_eq!(error.api_error().title, title);
        assert_eq!(error.name(), "HTTP");
    }
}

#[test]
fn test_attach_validation_with_one_detail_installs_a_chain_cause() {
    let mut error = helpers::bad_request("payload rejected");
    error.attach_validation(&sample_failure(1));

    let cause = error.cause().unwrap();
    let fault = cause.as_fault().expect("single detail should yield a chain cause");
    assert_eq!(fault.name(), VALIDATION_ERROR_NAME);
    assert_eq!(fault.message(), "\"age\" must be a number");
    assert_eq!(fault.uuid(), error.uuid());
    assert_eq!(fault.info().unwrap().get("type"), Some(&json!("number.base")));
}

#[test]
fn test_attach_validation_with_many_details_installs_an_aggregate_cause() {
    let mut error = helpers::bad_request("payload rejected");
    error.attach_validation(&sample_failure(3));

    let cause = error.cause().unwrap();
    let aggregate = cause
        .as_aggregate()
        .expect("several details should yield an aggregate cause");
    assert_eq!(aggregate.name(), VALIDATION_ERROR_NAME);
    assert_eq!(aggregate.size(), 3);
    assert_eq!(aggregate.uuid(), error.uuid());

    // the installed cause also renames the wire code
    assert_eq!(error.api_error().code, VALIDATION_ERROR_NAME);
}

#[test]
fn test_attach_validation_with_no_details_is_a_no_op() {
    let mut error = helpers::bad_request("payload rejected")
        .with_cause(ForeignError::new("RangeError", "Ranged"));
    error.attach_validation(&sample_failure(0));

    assert!(error.cause().unwrap().is_foreign());
}

#[test]
fn test_attach_validation_ignores_unmarked_input() {
    let mut error = helpers::bad_request("payload rejected");
    let mut failure = sample_failure(2);
    failure.name = "SomethingElse".to_string();
    error.attach_validation(&failure);

    assert!(error.cause().is_none());
}

#[test]
fn test_http_error_interoperates_as_std_error() {
    use std::error::Error;

    let error = helpers::bad_gateway("upstream died")
        .with_cause(Fault::new("connect timed out").with_name("UpstreamError"));

    assert_eq!(error.to_string(), "UpstreamError: upstream died");
    assert_eq!(error.source().unwrap().to_string(), "UpstreamError: connect timed out");
}

#[test]
fn test_message_truncation_applies_at_the_boundary_too() {
    let error = HttpError::new("o".repeat(300));

    assert_eq!(error.message().chars().count(), 240);
    assert_eq!(error.api_error().detail.unwrap().chars().count(), 240);
}
