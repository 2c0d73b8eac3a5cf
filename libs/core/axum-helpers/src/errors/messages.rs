//! Problem type URIs, titles and fixed detail strings.

pub const PROBLEM_JSON: &str = "application/problem+json";

pub const TYPE_BAD_REQUEST: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
pub const TYPE_NOT_FOUND: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.4";
pub const TYPE_METHOD_NOT_ALLOWED: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.5";
pub const TYPE_INTERNAL_ERROR: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.1";
pub const TYPE_SERVICE_UNAVAILABLE: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.4";

pub const TITLE_BAD_REQUEST: &str = "Bad Request";
pub const TITLE_VALIDATION: &str = "Validation Error";
pub const TITLE_NOT_FOUND: &str = "Not Found";
pub const TITLE_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const TITLE_INTERNAL_ERROR: &str = "Internal Server Error";
pub const TITLE_SERVICE_UNAVAILABLE: &str = "Service Unavailable";

/// Detail sent for every 5xx unless internal error exposure is enabled.
pub const INTERNAL_ERROR_DETAIL: &str = "An error occurred while processing your request.";
pub const SERVICE_UNAVAILABLE_DETAIL: &str = "The service is temporarily unavailable.";
pub const ROUTE_NOT_FOUND_DETAIL: &str = "The requested resource was not found.";
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "The HTTP method is not allowed for this resource.";
