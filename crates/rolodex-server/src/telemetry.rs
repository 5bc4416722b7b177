// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Per-route/status request counters, rendered by the `/metrics` endpoint.
#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
    }

    pub(crate) async fn render_prometheus(&self) -> String {
        let counts = self.counts.lock().await.clone();
        let mut rows: Vec<((String, u16), u64)> = counts.into_iter().collect();
        rows.sort();
        let mut body = String::from("# TYPE http_requests_total counter\n");
        for ((route, status), count) in rows {
            body.push_str(&format!(
                "http_requests_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }
        body
    }
}
