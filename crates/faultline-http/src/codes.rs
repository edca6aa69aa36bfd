//! HTTP status codes and canonical reason phrases
//!
//! A static table consumed when building the wire-format error object.
//! Phrase spellings are kept as clients have always received them, legacy
//! hyphenations included ("Request Time-out", "Request-URI Too Large").

/// Named HTTP response status codes, 100 through 511
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum HttpCode {
    Continue = 100,
    SwitchingProtocols = 101,
    Processing = 102,
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,
    MultiStatus = 207,
    AlreadyReported = 208,
    ImUsed = 226,
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    TemporaryRedirect = 307,
    PermanentRedirect = 308,
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    Teapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    BandwidthLimitExceeded = 509,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
}

impl HttpCode {
    /// Numeric status for this code
    pub const fn status(self) -> u16 {
        self as u16
    }

    /// Canonical reason phrase for this code
    pub const fn phrase(self) -> &'static str {
        match self {
            HttpCode::Continue => "Continue",
            HttpCode::SwitchingProtocols => "Switching Protocols",
            HttpCode::Processing => "Processing",
            HttpCode::Ok => "OK",
            HttpCode::Created => "Created",
            HttpCode::Accepted => "Accepted",
            HttpCode::NonAuthoritativeInformation => "Non-Authoritative Information",
            HttpCode::NoContent => "No Content",
            HttpCode::ResetContent => "Reset Content",
            HttpCode::PartialContent => "Partial Content",
            HttpCode::MultiStatus => "Multi-Status",
            HttpCode::AlreadyReported => "Already Reported",
            HttpCode::ImUsed => "IM Used",
            HttpCode::MultipleChoices => "Multiple Choices",
            HttpCode::MovedPermanently => "Moved Permanently",
            HttpCode::Found => "Found",
            HttpCode::SeeOther => "See Other",
            HttpCode::NotModified => "Not Modified",
            HttpCode::UseProxy => "Use Proxy",
            HttpCode::TemporaryRedirect => "Temporary Redirect",
            HttpCode::PermanentRedirect => "Permanent Redirect",
            HttpCode::BadRequest => "Bad Request",
            HttpCode::Unauthorized => "Unauthorized",
            HttpCode::PaymentRequired => "Payment Required",
            HttpCode::Forbidden => "Forbidden",
            HttpCode::NotFound => "Not Found",
            HttpCode::MethodNotAllowed => "Method Not Allowed",
            HttpCode::NotAcceptable => "Not Acceptable",
            HttpCode::ProxyAuthenticationRequired => "Proxy Authentication Required",
            HttpCode::RequestTimeout => "Request Time-out",
            HttpCode::Conflict => "Conflict",
            HttpCode::Gone => "Gone",
            HttpCode::LengthRequired => "Length Required",
            HttpCode::PreconditionFailed => "Precondition Failed",
            HttpCode::PayloadTooLarge => "Request Entity Too Large",
            HttpCode::UriTooLong => "Request-URI Too Large",
            HttpCode::UnsupportedMediaType => "Unsupported Media Type",
            HttpCode::RangeNotSatisfiable => "Requested Range Not Satisfiable",
            HttpCode::ExpectationFailed => "Expectation Failed",
            HttpCode::Teapot => "I'm a teapot",
            HttpCode::MisdirectedRequest => "Misdirected Request",
            HttpCode::UnprocessableEntity => "Unprocessable Entity",
            HttpCode::Locked => "Locked",
            HttpCode::FailedDependency => "Failed Dependency",
            HttpCode::TooEarly => "Too Early",
            HttpCode::UpgradeRequired => "Upgrade Required",
            HttpCode::PreconditionRequired => "Precondition Required",
            HttpCode::TooManyRequests => "Too Many Requests",
            HttpCode::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            HttpCode::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            HttpCode::InternalServerError => "Internal Server Error",
            HttpCode::NotImplemented => "Not Implemented",
            HttpCode::BadGateway => "Bad Gateway",
            HttpCode::ServiceUnavailable => "Service Unavailable",
            HttpCode::GatewayTimeout => "Gateway Time-out",
            HttpCode::HttpVersionNotSupported => "HTTP Version Not Supported",
            HttpCode::VariantAlsoNegotiates => "Variant Also Negotiates",
            HttpCode::InsufficientStorage => "Insufficient Storage",
            HttpCode::LoopDetected => "Loop Detected",
            HttpCode::BandwidthLimitExceeded => "Bandwidth Limit Exceeded",
            HttpCode::NotExtended => "Not Extended",
            HttpCode::NetworkAuthenticationRequired => "Network Authentication Required",
        }
    }

    /// Look up the named code for a numeric status
    pub const fn from_status(status: u16) -> Option<HttpCode> {
        match status {
            100 => Some(HttpCode::Continue),
            101 => Some(HttpCode::SwitchingProtocols),
            102 => Some(HttpCode::Processing),
            200 => Some(HttpCode::Ok),
            201 => Some(HttpCode::Created),
            202 => Some(HttpCode::Accepted),
            203 => Some(HttpCode::NonAuthoritativeInformation),
            204 => Some(HttpCode::NoContent),
            205 => Some(HttpCode::ResetContent),
            206 => Some(HttpCode::PartialContent),
            207 => Some(HttpCode::MultiStatus),
            208 => Some(HttpCode::AlreadyReported),
            226 => Some(HttpCode::ImUsed),
            300 => Some(HttpCode::MultipleChoices),
            301 => Some(HttpCode::MovedPermanently),
            302 => Some(HttpCode::Found),
            303 => Some(HttpCode::SeeOther),
            304 => Some(HttpCode::NotModified),
            305 => Some(HttpCode::UseProxy),
            307 => Some(HttpCode::TemporaryRedirect),
            308 => Some(HttpCode::PermanentRedirect),
            400 => Some(HttpCode::BadRequest),
            401 => Some(HttpCode::Unauthorized),
            402 => Some(HttpCode::PaymentRequired),
            403 => Some(HttpCode::Forbidden),
            404 => Some(HttpCode::NotFound),
            405 => Some(HttpCode::MethodNotAllowed),
            406 => Some(HttpCode::NotAcceptable),
            407 => Some(HttpCode::ProxyAuthenticationRequired),
            408 => Some(HttpCode::RequestTimeout),
            409 => Some(HttpCode::Conflict),
            410 => Some(HttpCode::Gone),
            411 => Some(HttpCode::LengthRequired),
            412 => Some(HttpCode::PreconditionFailed),
            413 => Some(HttpCode::PayloadTooLarge),
            414 => Some(HttpCode::UriTooLong),
            415 => Some(HttpCode::UnsupportedMediaType),
            416 => Some(HttpCode::RangeNotSatisfiable),
            417 => Some(HttpCode::ExpectationFailed),
            418 => Some(HttpCode::Teapot),
            421 => Some(HttpCode::MisdirectedRequest),
            422 => Some(HttpCode::UnprocessableEntity),
            423 => Some(HttpCode::Locked),
            424 => Some(HttpCode::FailedDependency),
            425 => Some(HttpCode::TooEarly),
            426 => Some(HttpCode::UpgradeRequired),
            428 => Some(HttpCode::PreconditionRequired),
            429 => Some(HttpCode::TooManyRequests),
            431 => Some(HttpCode::RequestHeaderFieldsTooLarge),
            451 => Some(HttpCode::UnavailableForLegalReasons),
            500 => Some(HttpCode::InternalServerError),
            501 => Some(HttpCode::NotImplemented),
            502 => Some(HttpCode::BadGateway),
            503 => Some(HttpCode::ServiceUnavailable),
            504 => Some(HttpCode::GatewayTimeout),
            505 => Some(HttpCode::HttpVersionNotSupported),
            506 => Some(HttpCode::VariantAlsoNegotiates),
            507 => Some(HttpCode::InsufficientStorage),
            508 => Some(HttpCode::LoopDetected),
            509 => Some(HttpCode::BandwidthLimitExceeded),
            510 => Some(HttpCode::NotExtended),
            511 => Some(HttpCode::NetworkAuthenticationRequired),
            _ => None,
        }
    }
}

/// Reason phrase for a numeric status, when one is defined
pub const fn reason_phrase(status: u16) -> Option<&'static str> {
    match HttpCode::from_status(status) {
        Some(code) => Some(code.phrase()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_the_table() {
        let codes = [
            HttpCode::Continue,
            HttpCode::Ok,
            HttpCode::BadRequest,
            HttpCode::Teapot,
            HttpCode::InternalServerError,
            HttpCode::NetworkAuthenticationRequired,
        ];
        for code in codes {
            assert_eq!(HttpCode::from_status(code.status()), Some(code));
        }
    }

    #[test]
    fn test_legacy_phrase_spellings_are_kept() {
        assert_eq!(reason_phrase(408), Some("Request Time-out"));
        assert_eq!(reason_phrase(413), Some("Request Entity Too Large"));
        assert_eq!(reason_phrase(414), Some("Request-URI Too Large"));
        assert_eq!(reason_phrase(504), Some("Gateway Time-out"));
        assert_eq!(reason_phrase(418), Some("I'm a teapot"));
    }

    #[test]
    fn test_unmapped_statuses_yield_nothing() {
        assert_eq!(reason_phrase(99), None);
        assert_eq!(reason_phrase(306), None);
        assert_eq!(reason_phrase(599), None);
        assert_eq!(reason_phrase(1000), None);
    }

    #[test]
    fn test_every_named_code_has_a_nonempty_phrase() {
        // spot check across the ranges; the match is exhaustive by type
        for status in [100, 102, 208, 226, 308, 421, 451, 508, 511] {
            let code = HttpCode::from_status(status).unwrap();
            assert!(!code.phrase().is_empty());
        }
    }
}
