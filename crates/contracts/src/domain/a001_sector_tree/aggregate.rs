use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectorTreeError {
    /// Значения опций - это имена, поэтому дубликат делает выбор неоднозначным
    #[error("Sector name is not unique: {name}")]
    DuplicateName { name: String },

    /// Выбор уходит на сервер строкой через запятую
    #[error("Sector name must not contain a comma: {name}")]
    SeparatorInName { name: String },

    /// При разборе выбора значения обрезаются, пустые отбрасываются
    #[error("Sector name must be non-empty without surrounding whitespace: {name:?}")]
    UntrimmedName { name: String },
}

// ============================================================================
// Tree nodes
// ============================================================================

/// Конечный сектор (третий уровень)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub id: i64,
    pub name: String,
}

/// Подкатегория (второй уровень)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    #[serde(rename = "subSubcategories", default)]
    pub sub_subcategories: Vec<Leaf>,
}

/// Категория верхнего уровня, в списке выбора становится заголовком группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

// ============================================================================
// Tree
// ============================================================================

/// Дерево секторов в том виде, в каком его отдаёт `GET /sectors/all`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorTree(pub Vec<Category>);

impl SectorTree {
    pub fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Количество групп в списке выбора (по одной на категорию)
    pub fn group_count(&self) -> usize {
        self.0.len()
    }

    /// Количество выбираемых опций: подкатегории + листья
    pub fn option_count(&self) -> usize {
        self.0
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .map(|s| 1 + s.sub_subcategories.len())
            .sum()
    }

    /// Выбираемые имена (подкатегории и листья) в порядке обхода
    pub fn selectable_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0
            .iter()
            .flat_map(|c| c.subcategories.iter())
            .flat_map(|s| {
                std::iter::once(s.name.as_str())
                    .chain(s.sub_subcategories.iter().map(|l| l.name.as_str()))
            })
    }

    /// Проверка выбираемых имён по всему дереву. Имя должно без потерь
    /// пройти через строку выбора: уникальное, без запятых, непустое и без
    /// пробелов по краям. Возвращает первую найденную ошибку.
    pub fn validate_names(&self) -> Result<(), SectorTreeError> {
        let mut seen = HashSet::new();
        for name in self.selectable_names() {
            if name.is_empty() || name.trim() != name {
                return Err(SectorTreeError::UntrimmedName {
                    name: name.to_string(),
                });
            }
            if name.contains(',') {
                return Err(SectorTreeError::SeparatorInName {
                    name: name.to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(SectorTreeError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Category>> for SectorTree {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: i64, name: &str) -> Leaf {
        Leaf {
            id,
            name: name.to_string(),
        }
    }

    fn tree() -> SectorTree {
        SectorTree::new(vec![
            Category {
                id: 1,
                name: "Manufacturing".into(),
                subcategories: vec![
                    Subcategory {
                        id: 1,
                        name: "Food and Beverage".into(),
                        sub_subcategories: vec![leaf(1, "Bakery"), leaf(2, "Milk")],
                    },
                    Subcategory {
                        id: 2,
                        name: "Furniture".into(),
                        sub_subcategories: vec![],
                    },
                ],
            },
            Category {
                id: 2,
                name: "Service".into(),
                subcategories: vec![Subcategory {
                    id: 3,
                    name: "Tourism".into(),
                    sub_subcategories: vec![leaf(3, "Hotels")],
                }],
            },
        ])
    }

    #[test]
    fn test_counts() {
        let t = tree();
        assert_eq!(t.group_count(), 2);
        // 3 подкатегории + 3 листа
        assert_eq!(t.option_count(), 6);
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"[{"id":1,"name":"Tech","subcategories":[{"id":1,"name":"Software","subSubcategories":[{"id":1,"name":"Web"}]}]}]"#;
        let t: SectorTree = serde_json::from_str(json).unwrap();
        assert_eq!(t.categories()[0].subcategories[0].sub_subcategories[0].name, "Web");
    }

    #[test]
    fn test_unique_names_ok() {
        assert!(tree().validate_names().is_ok());
    }

    #[test]
    fn test_duplicate_name_across_categories() {
        let mut t = tree();
        t.0[1].subcategories[0]
            .sub_subcategories
            .push(leaf(9, "Milk"));
        assert_eq!(
            t.validate_names(),
            Err(SectorTreeError::DuplicateName {
                name: "Milk".into()
            })
        );
    }

    #[test]
    fn test_comma_in_name_is_rejected() {
        let mut t = tree();
        t.0[0].subcategories[1].name = "Software, Hardware".into();
        assert_eq!(
            t.validate_names(),
            Err(SectorTreeError::SeparatorInName {
                name: "Software, Hardware".into()
            })
        );
    }

    #[test]
    fn test_padded_name_is_rejected() {
        let mut t = tree();
        t.0[1].subcategories[0].sub_subcategories[0].name = " Hotels".into();
        assert_eq!(
            t.validate_names(),
            Err(SectorTreeError::UntrimmedName {
                name: " Hotels".into()
            })
        );

        let mut t = tree();
        t.0[0].subcategories[1].name = "Furniture ".into();
        assert!(matches!(
            t.validate_names(),
            Err(SectorTreeError::UntrimmedName { .. })
        ));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut t = tree();
        t.0[0].subcategories[0].sub_subcategories[1].name = String::new();
        assert_eq!(
            t.validate_names(),
            Err(SectorTreeError::UntrimmedName {
                name: String::new()
            })
        );
    }

    #[test]
    fn test_category_names_are_not_selectable() {
        // Категория с тем же именем, что и лист, не мешает выбору
        let mut t = tree();
        t.0[1].name = "Hotels".into();
        assert!(t.validate_names().is_ok());
    }
}
