//! Mapping of calculator and extractor failures onto HTTP responses.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calc_core::{CalcError, ErrorKind};

use super::json_error;

/// Every error a handler can return. Rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// The calculator rejected the input.
    Calc(CalcError),
    /// axum could not extract the request (bad JSON, bad query string, ...).
    Rejected { status: StatusCode, detail: String },
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError::Calc(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Calc(err) => {
                let status = match err.kind() {
                    ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
                };
                json_error(status, &err.to_string()).into_response()
            }
            ApiError::Rejected { status, detail } => {
                tracing::debug!(%status, %detail, "request rejected");
                json_error(status, &detail).into_response()
            }
        }
    }
}
