use serde::{Deserialize, Serialize};

/// Сохранённая запись пользователя (имя + выбранные секторы).
/// `id` назначает сервер при создании.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub name: String,
    /// Секторы, склеенные через ", " в порядке выбора
    pub sectors: String,
}

/// Тело запроса для `POST /sectors` и `PUT /sectors/edit`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub sectors: String,
}

impl SubmissionDto {
    pub fn for_create(name: impl Into<String>, sectors: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            sectors: sectors.into(),
        }
    }

    pub fn for_update(
        id: impl Into<String>,
        name: impl Into<String>,
        sectors: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            sectors: sectors.into(),
        }
    }

    /// Проверка обязательных полей. Пустой `id` трактуется как отсутствующий.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.sectors.trim().is_empty() {
            return Err("At least one sector is required".into());
        }
        Ok(())
    }

    /// `id` без пустых строк: `{"id": ""}` равнозначен отсутствию id
    pub fn effective_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

/// Строка локальной таблицы. `key` - позиция в списке на момент вставки,
/// нужна только для идентификации строки в UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub key: usize,
    pub record: Submission,
}
