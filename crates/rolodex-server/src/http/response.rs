// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub(crate) enum ApiErrorCode {
    ValidationFailed,
    ContactNotFound,
    Internal,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

#[must_use]
pub(crate) fn api_error(code: ApiErrorCode, message: &str, details: Value) -> ApiError {
    ApiError {
        code,
        message: message.to_string(),
        details,
    }
}

#[must_use]
pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ApiErrorCode::ContactNotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = api_error_status(err.code);
    (status, Json(json!({ "error": err }))).into_response()
}
