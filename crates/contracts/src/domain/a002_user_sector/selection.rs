use serde::{Deserialize, Serialize};

const SEPARATOR: &str = ", ";

/// Выбранные секторы в порядке выбора пользователем
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedSectors(Vec<String>);

impl SelectedSectors {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Разбор строки, сохранённой на сервере
    pub fn parse(joined: &str) -> Self {
        Self(
            joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Строка для отправки на сервер. Без дедупликации.
    pub fn join(&self) -> String {
        self.0.join(SEPARATOR)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Нативный `<select multiple>` отдаёт выбранные опции в порядке DOM.
    /// Уже выбранные значения остаются на своих местах, новые добавляются
    /// в конец, снятые удаляются.
    pub fn reconcile(&self, now_selected: &[String]) -> Self {
        let mut next: Vec<String> = self
            .0
            .iter()
            .filter(|v| now_selected.contains(*v))
            .cloned()
            .collect();
        for value in now_selected {
            if !next.contains(value) {
                next.push(value.clone());
            }
        }
        Self(next)
    }
}

impl From<Vec<String>> for SelectedSectors {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_join_keeps_order_and_duplicates() {
        let sel = SelectedSectors::new(s(&["Web", "Bakery", "Web"]));
        assert_eq!(sel.join(), "Web, Bakery, Web");
    }

    #[test]
    fn test_parse_roundtrip() {
        let sel = SelectedSectors::parse("Software, Web");
        assert_eq!(sel.values(), &s(&["Software", "Web"])[..]);
        assert!(SelectedSectors::parse("").is_empty());
    }

    #[test]
    fn test_reconcile_appends_new_selection_last() {
        let prev = SelectedSectors::new(s(&["Milk"]));
        // DOM-порядок: Bakery идёт раньше Milk
        let next = prev.reconcile(&s(&["Bakery", "Milk"]));
        assert_eq!(next.values(), &s(&["Milk", "Bakery"])[..]);
    }

    #[test]
    fn test_reconcile_drops_deselected() {
        let prev = SelectedSectors::new(s(&["Milk", "Bakery", "Hotels"]));
        let next = prev.reconcile(&s(&["Bakery", "Hotels"]));
        assert_eq!(next.values(), &s(&["Bakery", "Hotels"])[..]);
    }
}
