// src/routes/mod.rs
pub mod chat;
pub mod pages;
pub mod recipes;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use pages::{add_recipe_page, index_page, recipe_page};
use recipes::create_recipe_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const PUBLIC_DIR: &str = "public";

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/recipes", post(create_recipe_handler));

    Router::new()
        .route("/", get(index_page))
        .route("/recipe/{id}", get(recipe_page))
        .route("/add-recipe", get(add_recipe_page))
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(TraceLayer::new_for_http())
}
