//! The Grand Reserve hotel website
//!

use grand_reserve::api;
use grand_reserve::core::settings::Settings;
use grand_reserve::infrastructure::database::DatabaseConnection;

use anyhow::anyhow;
use axum::http::Method;
use di_axum::RouterServiceProviderExtensions;
use log::info;
use tokio::runtime::{Builder, Runtime};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    // fail fast on bad configuration, before anything binds
    let settings = Settings::load()?;

    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task(settings))
}

async fn web_server_task(settings: Settings) -> anyhow::Result<()> {
    let provider = grand_reserve::services()
        .build_provider()
        .map_err(|e| anyhow!("invalid service registrations: {e:?}"))?;

    let database = provider.get_required::<DatabaseConnection>();
    database.migrate().await?;
    info!("database migrations applied");

    let app = api::router()
        .nest_service(
            "/static",
            ServiceBuilder::new().service(ServeDir::new(&settings.static_dir)),
        )
        .layer(
            CorsLayer::new()
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_origin(settings.cors_origins.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(settings.bind_address).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {e}");
    }
}
