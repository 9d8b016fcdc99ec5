pub mod request_id;

use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{article::ArticleController, health};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(pool: Arc<DbPool>, article_controller: Arc<ArticleController>) -> Router {
    // Newsroom routes: analyze a pasted article, publish a reviewed draft
    let article_routes = Router::new()
        .route("/api/articles/analyze", post(ArticleController::analyze))
        .route("/api/articles/publish", post(ArticleController::publish))
        .with_state(article_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(article_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    article_controller: Arc<ArticleController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, article_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
