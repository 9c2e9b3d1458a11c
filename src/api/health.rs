use crate::infrastructure::database::DatabaseConnection;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use di_axum::Inject;
use log::error;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check(
    Inject(database): Inject<DatabaseConnection>,
) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match database.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            error!("health check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
