use super::repository;
use crate::shared::config::{resolve_path, SectorsConfig};
use contracts::domain::a001_sector_tree::SectorTree;

/// Разбор и проверка дерева: имена должны однозначно идентифицировать сектор
pub fn parse_tree(json: &str) -> anyhow::Result<SectorTree> {
    let tree: SectorTree = serde_json::from_str(json)?;
    tree.validate_names()
        .map_err(|e| anyhow::anyhow!("Invalid sector tree: {}", e))?;
    Ok(tree)
}

/// Загрузка дерева из файла, указанного в конфиге, или встроенного
pub fn load(config: &SectorsConfig) -> anyhow::Result<SectorTree> {
    match &config.tree_path {
        Some(path) => {
            let path = resolve_path(path);
            tracing::info!("Loading sector tree from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
            parse_tree(&contents)
        }
        None => {
            tracing::info!("Using embedded sector tree");
            parse_tree(repository::DEFAULT_TREE_JSON)
        }
    }
}

/// Загрузить и установить дерево при старте сервера
pub fn initialize(config: &SectorsConfig) -> anyhow::Result<()> {
    let tree = load(config)?;
    tracing::info!(
        "Sector tree loaded: {} categories, {} options",
        tree.group_count(),
        tree.option_count()
    );
    if !repository::install(tree) {
        tracing::warn!("Sector tree already initialized, keeping the first one");
    }
    Ok(())
}

/// Дерево для `GET /sectors/all`
pub fn get_all() -> anyhow::Result<SectorTree> {
    repository::get()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Sector tree is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tree_is_valid() {
        let tree = parse_tree(repository::DEFAULT_TREE_JSON).unwrap();
        assert_eq!(tree.group_count(), 3);
        assert_eq!(tree.categories()[0].name, "Manufacturing");
    }

    #[test]
    fn test_duplicate_names_fail_fast() {
        let json = r#"[
            {"id":1,"name":"A","subcategories":[{"id":1,"name":"X","subSubcategories":[]}]},
            {"id":2,"name":"B","subcategories":[{"id":2,"name":"Y","subSubcategories":[{"id":1,"name":"X"}]}]}
        ]"#;
        let err = parse_tree(json).unwrap_err();
        assert!(err.to_string().contains("not unique"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = SectorsConfig {
            tree_path: Some("/nonexistent/sectors.json".into()),
        };
        assert!(load(&config).is_err());
    }

    #[test]
    fn test_initialize_with_default() {
        initialize(&SectorsConfig::default()).unwrap();
        let tree = get_all().unwrap();
        assert!(!tree.is_empty());
    }
}
