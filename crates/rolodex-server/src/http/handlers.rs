// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::error;

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let resp = (StatusCode::OK, "ok").into_response();
    state.metrics.observe_request("/healthz", StatusCode::OK).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render_prometheus().await;
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}

pub(crate) async fn debug_contacts_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    if !state.api.enable_debug_routes {
        let resp = StatusCode::NOT_FOUND.into_response();
        state
            .metrics
            .observe_request("/debug/contacts", StatusCode::NOT_FOUND)
            .await;
        return with_request_id(resp, &request_id);
    }
    let count = { state.store.lock().await.count() };
    let (status, resp) = match count {
        Ok(n) => (
            StatusCode::OK,
            Json(json!({ "contacts": n })).into_response(),
        ),
        Err(e) => {
            error!(request_id = %request_id, "contact count failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            )
        }
    };
    state.metrics.observe_request("/debug/contacts", status).await;
    with_request_id(resp, &request_id)
}
