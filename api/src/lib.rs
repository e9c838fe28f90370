mod config;
mod error;
mod extract;
mod form;
mod handlers;

pub use config::{Config, ConfigError};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use extract::RecordId;
pub use form::{CreateBakedGoodForm, UpdateBakeryForm};

use axum::{
    routing::{delete, get, post},
    Router,
};
use bakery_service::{
    sea_orm::{Database, DatabaseConnection},
    setup_schema,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// State shared by every handler. The connection is constructed once at
/// startup and handed down explicitly.
#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/bakeries", get(handlers::list_bakeries))
        .route(
            "/bakeries/{id}",
            get(handlers::get_bakery).patch(handlers::update_bakery),
        )
        .route("/baked_goods", post(handlers::create_baked_good))
        .route("/baked_goods/by_price", get(handlers::baked_goods_by_price))
        .route(
            "/baked_goods/most_expensive",
            get(handlers::most_expensive_baked_good),
        )
        .route("/baked_goods/{id}", delete(handlers::delete_baked_good))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let conn = Database::connect(config.database_url.as_str()).await?;
    setup_schema(&conn).await?;

    let app = router(AppState { conn });

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "bakery api listening");
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        eprintln!("Error: {err}");
    }
}
