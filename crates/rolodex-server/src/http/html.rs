// SPDX-License-Identifier: Apache-2.0
//! HTML controller. Successful writes redirect back to the index
//! (redirect-after-post); validation failures re-render the form in place
//! with the submitted values so nothing the user typed is lost.

use crate::http::handlers::{propagated_request_id, with_request_id};
use crate::http::render;
use crate::AppState;
use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use rolodex_model::{validate, ContactDraft};
use rolodex_store::StoreError;
use tracing::{error, info};

const INDEX_ROUTE: &str = "/";
const ADD_ROUTE: &str = "/add";
const UPDATE_ROUTE: &str = "/update/{id}";
const DELETE_ROUTE: &str = "/delete/{id}";

fn page(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

fn html_failure(request_id: &str, op: &str, err: &StoreError) -> Response {
    error!(request_id = %request_id, "{op} failed: {err}");
    page(StatusCode::INTERNAL_SERVER_ERROR, render::error_page())
}

pub(crate) async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = { state.store.lock().await.list() };
    let resp = match result {
        Ok(contacts) => page(StatusCode::OK, render::index_page(&contacts)),
        Err(e) => html_failure(&request_id, "contact list", &e),
    };
    state.metrics.observe_request(INDEX_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn add_form_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let body = render::contact_form_page(
        &render::FormAction::Add,
        &ContactDraft::default(),
        &[],
    );
    let resp = page(StatusCode::OK, body);
    state.metrics.observe_request(ADD_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn add_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(draft): Form<ContactDraft>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match validate(&draft) {
        Err(errors) => {
            let body =
                render::contact_form_page(&render::FormAction::Add, &draft, errors.field_errors());
            page(StatusCode::OK, body)
        }
        Ok(()) => {
            let result = { state.store.lock().await.create(&draft) };
            match result {
                Ok(contact) => {
                    info!(request_id = %request_id, id = contact.id, "contact created");
                    Redirect::to("/").into_response()
                }
                Err(e) => html_failure(&request_id, "contact create", &e),
            }
        }
    };
    state.metrics.observe_request(ADD_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn update_form_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = { state.store.lock().await.get(id) };
    let resp = match result {
        Ok(contact) => {
            let body = render::contact_form_page(
                &render::FormAction::Update(id),
                &contact.draft(),
                &[],
            );
            page(StatusCode::OK, body)
        }
        Err(StoreError::NotFound) => page(StatusCode::NOT_FOUND, render::not_found_page(id)),
        Err(e) => html_failure(&request_id, "contact get", &e),
    };
    state.metrics.observe_request(UPDATE_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn update_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(draft): Form<ContactDraft>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match validate(&draft) {
        Err(errors) => {
            // Record unchanged; hand the submitted values back with errors.
            let body = render::contact_form_page(
                &render::FormAction::Update(id),
                &draft,
                errors.field_errors(),
            );
            page(StatusCode::OK, body)
        }
        Ok(()) => {
            let result = { state.store.lock().await.update(id, &draft) };
            match result {
                Ok(_) => {
                    info!(request_id = %request_id, id, "contact updated");
                    Redirect::to("/").into_response()
                }
                Err(StoreError::NotFound) => {
                    page(StatusCode::NOT_FOUND, render::not_found_page(id))
                }
                Err(e) => html_failure(&request_id, "contact update", &e),
            }
        }
    };
    state.metrics.observe_request(UPDATE_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn delete_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = { state.store.lock().await.delete(id) };
    let resp = match result {
        Ok(()) => {
            info!(request_id = %request_id, id, "contact deleted");
            Redirect::to("/").into_response()
        }
        // Deleting an id that never existed still lands back on the index.
        Err(StoreError::NotFound) => Redirect::to("/").into_response(),
        Err(e) => html_failure(&request_id, "contact delete", &e),
    };
    state.metrics.observe_request(DELETE_ROUTE, resp.status()).await;
    with_request_id(resp, &request_id)
}
