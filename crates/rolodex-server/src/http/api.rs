// SPDX-License-Identifier: Apache-2.0
//! JSON API controller. A strict, machine-consumable mirror of the HTML
//! surface: same validation, same store operations, outcomes communicated
//! through status codes and JSON bodies instead of redirects and markup.

use crate::http::handlers::{propagated_request_id, with_request_id};
use crate::http::response::{api_error, api_error_response, ApiErrorCode};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolodex_model::{validate, ContactDraft, ValidationErrors};
use rolodex_store::StoreError;
use serde_json::{json, Value};
use tracing::{error, info};

const LIST_ROUTE: &str = "/api/contacts";
const ITEM_ROUTE: &str = "/api/contacts/{id}";

fn validation_details(errors: &ValidationErrors) -> Value {
    json!({ "field_errors": errors.field_errors() })
}

fn store_failure(request_id: &str, op: &str, err: &StoreError) -> Response {
    error!(request_id = %request_id, "{op} failed: {err}");
    api_error_response(api_error(
        ApiErrorCode::Internal,
        "store operation failed",
        json!({}),
    ))
}

pub(crate) async fn list_contacts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = { state.store.lock().await.list() };
    let resp = match result {
        Ok(contacts) => Json(contacts).into_response(),
        Err(e) => store_failure(&request_id, "contact list", &e),
    };
    state.metrics.observe_request(LIST_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn get_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = { state.store.lock().await.get(id) };
    let resp = match result {
        Ok(contact) => Json(contact).into_response(),
        Err(StoreError::NotFound) => api_error_response(api_error(
            ApiErrorCode::ContactNotFound,
            "contact not found",
            json!({ "id": id }),
        )),
        Err(e) => store_failure(&request_id, "contact get", &e),
    };
    state.metrics.observe_request(ITEM_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn create_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<ContactDraft>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match validate(&draft) {
        Err(errors) => api_error_response(api_error(
            ApiErrorCode::ValidationFailed,
            "validation failed",
            validation_details(&errors),
        )),
        Ok(()) => {
            let result = { state.store.lock().await.create(&draft) };
            match result {
                Ok(contact) => {
                    info!(request_id = %request_id, id = contact.id, "contact created");
                    (StatusCode::CREATED, Json(contact)).into_response()
                }
                Err(e) => store_failure(&request_id, "contact create", &e),
            }
        }
    };
    state.metrics.observe_request(LIST_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn update_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(draft): Json<ContactDraft>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match validate(&draft) {
        Err(errors) => api_error_response(api_error(
            ApiErrorCode::ValidationFailed,
            "validation failed",
            validation_details(&errors),
        )),
        Ok(()) => {
            let result = { state.store.lock().await.update(id, &draft) };
            match result {
                Ok(contact) => {
                    info!(request_id = %request_id, id, "contact updated");
                    Json(contact).into_response()
                }
                Err(StoreError::NotFound) => api_error_response(api_error(
                    ApiErrorCode::ContactNotFound,
                    "contact not found",
                    json!({ "id": id }),
                )),
                Err(e) => store_failure(&request_id, "contact update", &e),
            }
        }
    };
    state.metrics.observe_request(ITEM_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn delete_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = { state.store.lock().await.delete(id) };
    let resp = match result {
        Ok(()) => {
            info!(request_id = %request_id, id, "contact deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(StoreError::NotFound) => api_error_response(api_error(
            ApiErrorCode::ContactNotFound,
            "contact not found",
            json!({ "id": id }),
        )),
        Err(e) => store_failure(&request_id, "contact delete", &e),
    };
    state.metrics.observe_request(ITEM_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}
