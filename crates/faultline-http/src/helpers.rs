//! Shortcut constructors for commonly raised HTTP errors
//!
//! One function per status, each returning an [`HttpError`] pre-set to
//! that status. Builder methods still apply afterwards:
//!
//! ```
//! use faultline_http::helpers::not_found;
//!
//! let error = not_found("no job with id 42").with_link("docs", "https://api.example.com/jobs");
//! assert_eq!(error.status(), 404);
//! ```

use crate::codes::HttpCode;
use crate::error::HttpError;

fn regular_error(message: impl Into<String>, code: HttpCode) -> HttpError {
    HttpError::new(message).with_status(code.status())
}

/// 400: the server cannot process the request due to a client error
/// (malformed syntax, invalid framing, deceptive routing). The client
/// should not repeat the request without modification.
pub fn bad_request(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::BadRequest)
}

/// 401: the request lacks valid authentication credentials for the
/// target resource.
pub fn unauthorized(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::Unauthorized)
}

/// 402: reserved; conventionally, the request cannot be processed until
/// the client makes a payment.
pub fn payment_required(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::PaymentRequired)
}

/// 403: the server understood the request but refuses to authorize it;
/// re-authenticating will make no difference.
pub fn forbidden(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::Forbidden)
}

/// 404: the server can't find the requested resource
pub fn not_found(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::NotFound)
}

/// 405: the request method is known but not supported by the target
/// resource
pub fn method_not_allowed(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::MethodNotAllowed)
}

/// 406: no representation acceptable to the request's content
/// negotiation headers
pub fn not_acceptable(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::NotAcceptable)
}

pub fn proxy_auth_required(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::ProxyAuthenticationRequired)
}

pub fn request_timeout(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::RequestTimeout)
}

pub fn conflict(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::Conflict)
}

pub fn gone(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::Gone)
}

pub fn length_required(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::LengthRequired)
}

pub fn precondition_failed(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::PreconditionFailed)
}

pub fn payload_too_large(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::PayloadTooLarge)
}

pub fn uri_too_long(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::UriTooLong)
}

pub fn unsupported_media_type(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::UnsupportedMediaType)
}

pub fn range_not_satisfiable(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::RangeNotSatisfiable)
}

pub fn expectation_failed(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::ExpectationFailed)
}

pub fn teapot(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::Teapot)
}

pub fn locked(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::Locked)
}

pub fn failed_dependency(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::FailedDependency)
}

pub fn too_early(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::TooEarly)
}

pub fn precondition_required(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::PreconditionRequired)
}

pub fn too_many_requests(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::TooManyRequests)
}

/// 451: access denied following a legal demand
pub fn illegal(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::UnavailableForLegalReasons)
}

/// 500: an unexpected condition with no more specific message available
pub fn internal_server_error(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::InternalServerError)
}

pub fn not_implemented(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::NotImplemented)
}

pub fn bad_gateway(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::BadGateway)
}

pub fn service_unavailable(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::ServiceUnavailable)
}

pub fn gateway_timeout(message: impl Into<String>) -> HttpError {
    regular_error(message, HttpCode::GatewayTimeout)
}
