//! HTTP error responses
//!
//! Every failure leaves a handler as an `ApiError`, which renders as
//! `{"message": "..."}`. Store details are logged here and never sent to the
//! client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::PromptError;

pub const INVALID_CATEGORY: &str = "Invalid category";

/// JSON error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status:  StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_category() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_CATEGORY)
    }

    /// Map a store failure, replacing its detail with `message`
    ///
    /// An empty candidate set is reported as 500 along with every other
    /// store failure.
    pub fn from_store(err: PromptError, message: &str) -> Self {
        if err.is_client_error() {
            tracing::debug!(error = %err, "Rejected request");
            return Self::invalid_category();
        }

        tracing::error!(
            error = %err,
            category = err.category(),
            "{}",
            message
        );
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
