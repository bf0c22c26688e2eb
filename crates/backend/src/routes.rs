use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Sector tree
        // ========================================
        .route("/sectors/all", get(handlers::a001_sector_tree::list_all))
        // ========================================
        // A002 User sector submissions
        // ========================================
        .route(
            "/sectors",
            get(handlers::a002_user_sector::list_all).post(handlers::a002_user_sector::create),
        )
        .route("/sectors/edit", put(handlers::a002_user_sector::update))
}
