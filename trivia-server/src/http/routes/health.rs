//! Liveness and store reachability
//!
//! `/health` answers 200 while the question store responds and 503 with
//! `status: "degraded"` when it does not, so load balancers can drain an
//! instance whose database went away.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub reachable: bool,
    /// Number of categories, when the store answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreHealth,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.service.store().list_categories().await {
        Ok(categories) => (
            StatusCode::OK,
            "ok",
            StoreHealth {
                reachable: true,
                categories: Some(categories.len()),
            },
        ),
        Err(err) => {
            tracing::error!(error = %err, "health check: question store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "degraded",
                StoreHealth {
                    reachable: false,
                    categories: None,
                },
            )
        }
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
    };
    (code, Json(body))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
