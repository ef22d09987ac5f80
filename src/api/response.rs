//! Response types for the shift API.
//!
//! Every response, success or failure, is an [`Envelope`]. Business-rule
//! rejections travel with transport status 200 and `statusCode: 400` in the
//! body; unexpected failures use the matching transport status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Message returned when create hits a taken window.
pub const CREATE_REJECTED: &str = "Can't create shift. Same Shift is already exist";
/// Message returned when update hits a taken window.
pub const UPDATE_REJECTED: &str = "Can't edit shift. Same Shift is already exist";

/// The uniform `{statusCode, message, results}` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Outcome code; mirrors HTTP semantics.
    pub status_code: u16,
    /// Human-readable outcome.
    pub message: String,
    /// Payload, `null` when there is none.
    pub results: T,
}

impl<T> Envelope<T> {
    /// A 200 envelope carrying `results`.
    pub fn ok(message: impl Into<String>, results: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            message: message.into(),
            results,
        }
    }
}

impl<T> Envelope<Option<T>> {
    /// A 400 envelope for a refused write. Carries no results.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            message: message.into(),
            results: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// An unexpected failure, rendered as an envelope with a matching status.
#[derive(Debug)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub envelope: Envelope<()>,
}

impl ErrorResponse {
    /// Creates an error response with `status` and `message`.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            envelope: Envelope {
                status_code: status.as_u16(),
                message: message.into(),
                results: (),
            },
        }
    }

    /// Creates a 400 response for an unreadable request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}

impl From<SchedulerError> for ErrorResponse {
    fn from(error: SchedulerError) -> Self {
        let status = match &error {
            SchedulerError::ShiftNotFound { .. } => StatusCode::NOT_FOUND,
            SchedulerError::InvalidDate { .. }
            | SchedulerError::InvalidTime { .. }
            | SchedulerError::WindowConflict { .. } => StatusCode::BAD_REQUEST,
            SchedulerError::Store { .. }
            | SchedulerError::ConfigNotFound { .. }
            | SchedulerError::ConfigParseError { .. }
            | SchedulerError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}
