mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::CatalogStore};

#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/movies", get(routes::list_movies))
        .route("/watchlist", get(routes::list_watchlist))
        .route("/watched", get(routes::list_watched))
        .route("/ratings", get(routes::list_ratings))
        .route("/newmovie", post(routes::new_movie))
        .route("/add-to-watchlist", post(routes::add_to_watchlist))
        .route("/remove-from-watchlist", post(routes::remove_from_watchlist))
        .route("/add-to-watched", post(routes::add_to_watched))
        .route("/remove-from-watched", post(routes::remove_from_watched))
        .route("/add-update-rating", post(routes::add_update_rating))
        .route("/remove-rating", post(routes::remove_rating))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,filmshelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let state = Arc::new(AppState { store: CatalogStore::new(db) });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
