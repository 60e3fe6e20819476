//! Process bootstrap for the warehouse management backend.
//!
//! Loads configuration, connects the PostgreSQL pool, wires the picking slip
//! read path, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hanpoom_wms::adapters::http::{picking_slip_routes, PickingSlipHandlers};
use hanpoom_wms::adapters::postgres::PostgresPickingSlipReader;
use hanpoom_wms::application::ListPickingSlipsHandler;
use hanpoom_wms::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let subscriber =
        tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let reader = Arc::new(PostgresPickingSlipReader::new(pool));
    let list_handler = Arc::new(ListPickingSlipsHandler::new(reader));
    let handlers = PickingSlipHandlers::new(list_handler);

    let cors = {
        let origins = config.server.cors_origins_list();
        if origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins = origins
                .iter()
                .map(|origin| HeaderValue::from_str(origin))
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = Router::new()
        .nest("/picking-slips", picking_slip_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors),
        );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Hanpoom Warehouse Management System Backend");
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
