use contracts::domain::a002_user_sector::Submission;
use once_cell::sync::Lazy;
use tokio::sync::RwLock;

/// Хранилище записей в памяти, порядок вставки сохраняется
static STORE: Lazy<RwLock<Vec<Submission>>> = Lazy::new(|| RwLock::new(Vec::new()));

pub async fn insert(record: Submission) -> Submission {
    STORE.write().await.push(record.clone());
    record
}

/// Заменить запись с тем же `id`. `None`, если такой записи нет.
pub async fn update(record: Submission) -> Option<Submission> {
    let mut items = STORE.write().await;
    let slot = items.iter_mut().find(|r| r.id == record.id)?;
    *slot = record.clone();
    Some(record)
}

pub async fn get_by_id(id: &str) -> Option<Submission> {
    STORE.read().await.iter().find(|r| r.id == id).cloned()
}

pub async fn list_all() -> Vec<Submission> {
    STORE.read().await.clone()
}
