use contracts::domain::a001_sector_tree::SectorTree;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::{execute, FetchError, PendingRequest};

/// Загрузка дерева секторов (`GET /sectors/all`).
/// Дерево с неоднозначными именами не принимается.
pub async fn fetch_tree(pending: &PendingRequest) -> Result<SectorTree, FetchError> {
    let request = Request::get(&api_url("/sectors/all"))
        .header("Accept", "application/json")
        .abort_signal(Some(&pending.signal()))
        .build();

    let tree: SectorTree = execute(request, pending).await?;
    tree.validate_names()?;
    Ok(tree)
}
