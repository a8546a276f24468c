//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A referenced client, trip or registration does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The write collides with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// The trip has no free places left.
    #[schema(rename = "capacity_exceeded")]
    CapacityExceeded,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "client 7 not found")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let schema = serde_json::to_value(ErrorSchema::schema()).expect("schema serialises");
        let properties = &schema["properties"];
        assert!(properties.get("traceId").is_some());
        assert!(properties.get("trace_id").is_none());
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema = serde_json::to_value(ErrorCodeSchema::schema()).expect("schema serialises");
        let codes = schema["enum"].as_array().expect("enum values");
        for code in [
            "invalid_request",
            "not_found",
            "conflict",
            "capacity_exceeded",
            "internal_error",
        ] {
            assert!(codes.iter().any(|value| value == code), "{code}");
        }
    }
}
