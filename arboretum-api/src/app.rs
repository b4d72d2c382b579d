/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use arboretum_api::{app::AppState, config::Config};
/// use arboretum_shared::store::MemoryStore;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let state = AppState::new(Arc::new(MemoryStore::new()), config);
/// let app = arboretum_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::security::SecurityHeadersLayer};
use arboretum_shared::store::Store;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into each handler via axum's `State` extractor; both fields are
/// reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend, opened once at startup
    pub store: Arc<dyn Store>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Gets JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// ```text
/// /
/// ├── GET    /health
/// ├── POST   /create-user
/// ├── POST   /login
/// ├── POST   /create-species
/// ├── GET    /species
/// ├── PUT    /species/:id
/// ├── DELETE /species/:id
/// ├── POST   /speciesImg
/// ├── POST   /upload-video
/// └── GET    /videos
/// ```
///
/// Middleware (outermost last): body limit, tracing, CORS, security headers.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let cors = if state.config.api.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/create-user", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/create-species", post(routes::species::create_species))
        .route("/species", get(routes::species::list_species))
        .route(
            "/species/:id",
            put(routes::species::update_species).delete(routes::species::delete_species),
        )
        .route("/speciesImg", post(routes::images::upload_image))
        .route("/upload-video", post(routes::videos::upload_video))
        .route("/videos", get(routes::videos::list_videos))
        .layer(DefaultBodyLimit::max(state.config.api.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}
