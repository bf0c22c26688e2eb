use axum::Json;
use contracts::domain::a001_sector_tree::SectorTree;

use crate::domain::a001_sector_tree;

/// GET /sectors/all
pub async fn list_all() -> Result<Json<SectorTree>, axum::http::StatusCode> {
    match a001_sector_tree::service::get_all() {
        Ok(tree) => Ok(Json(tree)),
        Err(e) => {
            tracing::error!("Failed to get sector tree: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
