use axum::extract::{Extension, Path};
use axum::Json;

use crate::core::catalog::CatalogService;
use crate::domain::model::Module;
use crate::utils::error::Result;

pub async fn list_modules(Extension(svc): Extension<CatalogService>) -> Result<Json<Vec<Module>>> {
    let modules = svc.list_modules().await?;
    tracing::debug!("Listing {} modules", modules.len());
    Ok(Json(modules))
}

pub async fn get_module(
    Extension(svc): Extension<CatalogService>,
    Path(number): Path<String>,
) -> Result<Json<Module>> {
    let module = svc.get_module(&number).await?;
    Ok(Json(module))
}
