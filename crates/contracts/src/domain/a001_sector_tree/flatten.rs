use super::aggregate::Category;
use serde::{Deserialize, Serialize};

/// Отступ для листьев в выпадающем списке (три неразрывных пробела)
pub const INDENT: &str = "\u{a0}\u{a0}\u{a0}";

/// Опция списка выбора, проекция узла дерева только для чтения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableOption {
    /// Имя узла, оно же значение, уходящее на сервер
    pub value: String,
    /// 1 - подкатегория, 2 - лист. Уровень 0 занят заголовком группы.
    pub depth: u8,
    #[serde(rename = "groupId")]
    pub group_id: i64,
}

impl SelectableOption {
    /// Текст для отображения, с отступом по глубине
    pub fn label(&self) -> String {
        let level = usize::from(self.depth.saturating_sub(1));
        format!("{}{}", INDENT.repeat(level), self.value)
    }
}

/// Группа опций, одна на категорию
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub id: i64,
    pub label: String,
    pub options: Vec<SelectableOption>,
}

/// Разворачивает дерево в плоский список групп.
///
/// Порядок категорий, подкатегорий и листьев сохраняется как во входных
/// данных, дубликаты не удаляются.
pub fn flatten(tree: &[Category]) -> Vec<OptionGroup> {
    tree.iter()
        .map(|category| {
            let mut options = Vec::new();
            for sub in &category.subcategories {
                options.push(SelectableOption {
                    value: sub.name.clone(),
                    depth: 1,
                    group_id: category.id,
                });
                options.extend(sub.sub_subcategories.iter().map(|leaf| SelectableOption {
                    value: leaf.name.clone(),
                    depth: 2,
                    group_id: category.id,
                }));
            }
            OptionGroup {
                id: category.id,
                label: category.name.clone(),
                options,
            }
        })
        .collect()
}
