use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a002_user_sector::{Submission, SubmissionDto};
use uuid::Uuid;

fn validate(dto: &SubmissionDto) -> Result<(), ServiceError> {
    dto.validate().map_err(ServiceError::Validation)
}

/// Создание новой записи, id назначается здесь.
/// Пришедший от клиента id игнорируется.
pub async fn create(dto: SubmissionDto) -> Result<Submission, ServiceError> {
    validate(&dto)?;

    let record = Submission {
        id: Uuid::new_v4().to_string(),
        name: dto.name.trim().to_string(),
        sectors: dto.sectors,
    };
    tracing::info!("Creating submission {}", record.id);
    Ok(repository::insert(record).await)
}

/// Обновление существующей записи по id
pub async fn update(dto: SubmissionDto) -> Result<Submission, ServiceError> {
    let id = dto.effective_id().ok_or(ServiceError::MissingId)?.to_string();
    validate(&dto)?;

    let record = Submission {
        id: id.clone(),
        name: dto.name.trim().to_string(),
        sectors: dto.sectors,
    };
    tracing::info!("Updating submission {}", id);
    repository::update(record)
        .await
        .ok_or(ServiceError::NotFound(id))
}

pub async fn get_by_id(id: &str) -> Option<Submission> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Vec<Submission> {
    repository::list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_id() {
        let created = create(SubmissionDto::for_create("Ann", "Software, Web"))
            .await
            .unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.name, "Ann");
        assert_eq!(created.sectors, "Software, Web");
        assert_eq!(get_by_id(&created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let mut dto = SubmissionDto::for_create("Bob", "Milk");
        dto.id = Some(String::new());
        let created = create(dto).await.unwrap();
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let created = create(SubmissionDto::for_create("Ann", "Web")).await.unwrap();

        let updated = update(SubmissionDto::for_update(&created.id, "Anna", "Web, Milk"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Anna");
        assert_eq!(get_by_id(&created.id).await.unwrap().sectors, "Web, Milk");
        // Хранилище общее для всех тестов, поэтому считаем только свою запись
        let copies = list_all()
            .await
            .into_iter()
            .filter(|s| s.id == created.id)
            .count();
        assert_eq!(copies, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let err = update(SubmissionDto::for_update("missing", "Ann", "Web"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_update_without_id() {
        let err = update(SubmissionDto::for_create("Ann", "Web"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingId));
    }

    #[tokio::test]
    async fn test_validation() {
        let err = create(SubmissionDto::for_create("  ", "Web"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
