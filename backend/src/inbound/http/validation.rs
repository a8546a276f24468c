//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejected request is reported as `invalid_request` with a `details`
//! object naming the offending field and a stable sub-code.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use serde_json::json;
use tracing::debug;

use crate::domain::{ClientValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidBody,
    InvalidPathParameter,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidBody => "invalid_body",
            ErrorCode::InvalidPathParameter => "invalid_path_parameter",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Unwrap a required body field, reporting its absence by name.
pub(crate) fn require_field(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Translate a client value-object failure into a request error.
pub(crate) fn client_validation_error(error: ClientValidationError) -> Error {
    let details = match &error {
        ClientValidationError::InvalidPeselLength { expected, actual } => json!({
            "field": error.field(),
            "code": error.code(),
            "expected": expected,
            "actual": actual,
        }),
        ClientValidationError::TooLong { max, actual, .. } => json!({
            "field": error.field(),
            "code": error.code(),
            "max": max,
            "actual": actual,
        }),
        _ => json!({
            "field": error.field(),
            "code": error.code(),
        }),
    };
    Error::invalid_request(error.to_string()).with_details(details)
}

/// `JsonConfig` error handler reporting malformed bodies in the standard
/// error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request("request body is not valid JSON for this endpoint")
        .with_details(json!({
            "code": ErrorCode::InvalidBody.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}

/// `PathConfig` error handler reporting non-integer identifiers in the
/// standard error envelope.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameters");
    Error::invalid_request("path identifiers must be integers")
        .with_details(json!({
            "code": ErrorCode::InvalidPathParameter.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode as DomainErrorCode, PESEL_LENGTH};
    use rstest::rstest;

    #[rstest]
    fn require_field_names_missing_field() {
        let error = require_field(None, FieldName::new("pesel")).expect_err("missing");
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(error.message(), "missing required field: pesel");
        let details = error.details().expect("details");
        assert_eq!(details["field"], "pesel");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    fn require_field_passes_value_through() {
        let value = require_field(Some("Ann".to_owned()), FieldName::new("firstName"));
        assert_eq!(value.expect("present"), "Ann");
    }

    #[rstest]
    #[case(ClientValidationError::EmptyFirstName, "firstName", "empty_field")]
    #[case(ClientValidationError::InvalidEmail, "email", "invalid_email")]
    #[case(
        ClientValidationError::InvalidPeselLength { expected: PESEL_LENGTH, actual: 3 },
        "pesel",
        "invalid_pesel_length"
    )]
    fn client_errors_carry_field_and_code(
        #[case] error: ClientValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = client_validation_error(error);
        let details = mapped.details().expect("details");
        assert_eq!(mapped.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(details["field"], field);
        assert_eq!(details["code"], code);
    }

    #[rstest]
    fn too_long_reports_the_limit() {
        let mapped = client_validation_error(ClientValidationError::TooLong {
            field: "lastName",
            max: 120,
            actual: 121,
        });
        let details = mapped.details().expect("details");
        assert_eq!(details["field"], "lastName");
        assert_eq!(details["code"], "too_long");
        assert_eq!(details["max"], 120);
        assert_eq!(details["actual"], 121);
    }
}
