//! HTTP mapping for registry errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repo_registry::RegistryError;
use serde::{Deserialize, Serialize};

/// JSON body of every error response: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A registry error on its way out as an HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(pub RegistryError);

impl ApiError {
    /// Status code sent for this error.
    ///
    /// Both validation failures are client errors and map to `400`.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RegistryError::InvalidParams | RegistryError::RepositoryNotFound => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
