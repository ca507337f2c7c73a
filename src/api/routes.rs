use std::path::Path;

use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::core::catalog::CatalogService;

pub fn router(service: CatalogService, public_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/api/modules", get(handlers::list_modules))
        .route("/api/modules/", get(handlers::list_modules))
        .route("/api/modules/{number}", get(handlers::get_module))
        .route("/api/modules/{number}/", get(handlers::get_module));

    // 靜態檔案目錄存在時才掛載
    if let Some(dir) = public_dir.filter(|dir| dir.is_dir()) {
        tracing::debug!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(Extension(service))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
