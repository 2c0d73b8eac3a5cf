//! HTTP middleware: CORS, security headers, development error detail.

pub mod cors;
pub mod error_detail;
pub mod security;

pub use cors::{CORS_ALLOWED_ORIGIN, cors_layer_from_env, create_cors_layer, parse_origins};
pub use error_detail::expose_internal_errors;
pub use security::security_headers;
