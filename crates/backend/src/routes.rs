use axum::{routing::get, Router};

use crate::handlers;

/// All routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Shop handlers
        .route(
            "/api/shops",
            get(handlers::a001_shop::list).post(handlers::a001_shop::create),
        )
        .route(
            "/api/shops/:id",
            get(handlers::a001_shop::get_by_id)
                .put(handlers::a001_shop::update)
                .delete(handlers::a001_shop::delete),
        )
        // A002 Category handlers
        .route(
            "/api/categories",
            get(handlers::a002_category::list).post(handlers::a002_category::create),
        )
        .route(
            "/api/categories/:id",
            get(handlers::a002_category::get_by_id)
                .put(handlers::a002_category::update)
                .delete(handlers::a002_category::delete),
        )
        // A003 Product handlers
        .route(
            "/api/products",
            get(handlers::a003_product::list).post(handlers::a003_product::create),
        )
        .route(
            "/api/products/:id",
            get(handlers::a003_product::get_by_id)
                .put(handlers::a003_product::update)
                .delete(handlers::a003_product::delete),
        )
}
