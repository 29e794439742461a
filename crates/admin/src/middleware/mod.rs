//! HTTP middleware stack for admin.

pub mod security_headers;

pub use security_headers::security_headers_middleware;
