//! Correlation id propagation from request headers into command metadata.

use axum::http::HeaderMap;

use crate::domain::foundation::CommandMetadata;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Builds command metadata, reusing the caller's correlation id if one was sent.
pub fn request_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("api");
    match headers
        .get(CORRELATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}
