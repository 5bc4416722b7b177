#![forbid(unsafe_code)]
//! Contact manager HTTP server.
//!
//! Two symmetric front-ends over one core: a server-rendered HTML surface
//! (`/`, `/add`, `/update/{id}`, `/delete/{id}`) and a JSON API under `/api`.
//! Both run the same validation rules and the same [`ContactStore`]; neither
//! calls into the other's rendering.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use rolodex_store::ContactStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;
mod telemetry;

pub use config::{validate_startup_config, ApiConfig};

pub const CRATE_NAME: &str = "rolodex-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<ContactStore>>,
    pub api: ApiConfig,
    pub(crate) metrics: Arc<telemetry::RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ContactStore) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: ContactStore, api: ApiConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            api,
            metrics: Arc::new(telemetry::RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::html::index_handler))
        .route(
            "/add",
            get(http::html::add_form_handler).post(http::html::add_submit_handler),
        )
        .route(
            "/update/:id",
            get(http::html::update_form_handler).post(http::html::update_submit_handler),
        )
        .route("/delete/:id", get(http::html::delete_handler))
        .route(
            "/api/contacts",
            get(http::api::list_contacts_handler).post(http::api::create_contact_handler),
        )
        .route(
            "/api/contacts/:id",
            get(http::api::get_contact_handler)
                .put(http::api::update_contact_handler)
                .delete(http::api::delete_contact_handler),
        )
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/debug/contacts", get(http::handlers::debug_contacts_handler))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
