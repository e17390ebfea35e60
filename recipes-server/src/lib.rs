//! recipes-server library - HTTP surface for the recipe catalog

use axum::Router;
use recipes_common::db::RecipeStore;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway, injected explicitly (never a process global)
    pub store: RecipeStore,
}

impl AppState {
    /// Create new application state
    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::pages::welcome))
        .route("/help", get(api::pages::help_guide))
        .route("/health", get(api::health::health_check))
        .route(
            "/recipes",
            get(api::recipes::list_recipes).post(api::recipes::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(api::recipes::get_recipe)
                .put(api::recipes::replace_recipe)
                .delete(api::recipes::delete_recipe),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
