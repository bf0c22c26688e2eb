use contracts::domain::a001_sector_tree::SectorTree;
use once_cell::sync::OnceCell;

/// Дерево загружается один раз при старте и дальше не меняется
static SECTOR_TREE: OnceCell<SectorTree> = OnceCell::new();

/// Встроенное дерево по умолчанию
pub const DEFAULT_TREE_JSON: &str = include_str!("default_tree.json");

/// Сохранить дерево. Повторная установка игнорируется.
pub fn install(tree: SectorTree) -> bool {
    SECTOR_TREE.set(tree).is_ok()
}

pub fn get() -> Option<&'static SectorTree> {
    SECTOR_TREE.get()
}
