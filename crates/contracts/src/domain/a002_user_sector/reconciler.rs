//! Состояние формы и список отправленных записей.
//!
//! Вся изменяемая часть клиента - один сериализуемый [`FormState`].
//! События применяются через [`FormState::apply`], который либо меняет
//! состояние и возвращает эффекты (HTTP-запрос, уведомление), либо
//! возвращает ошибку и оставляет состояние как было.

use super::aggregate::{Submission, SubmissionDto, SubmissionRow};
use super::selection::SelectedSectors;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MSG_NAME_REQUIRED: &str = "Please input your name!";
pub const MSG_SECTORS_REQUIRED: &str = "Please select at least one sector!";
pub const MSG_TERMS_REQUIRED: &str = "Please agree to the terms!";
pub const MSG_CREATED: &str = "Data saved successfully!";
pub const MSG_UPDATED: &str = "Data updated successfully!";
pub const MSG_CREATE_FAILED: &str = "Error saving data!";
pub const MSG_UPDATE_FAILED: &str = "Error updating data!";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Another record is already being edited")]
    AlreadyEditing,
    #[error("A request is already in flight")]
    SubmitInFlight,
    #[error("No record with key {0}")]
    UnknownRecord(usize),
    #[error("No request is in flight")]
    NoRequestInFlight,
    #[error("{0}")]
    Validation(String),
}

/// Поле формы, к которому относится сообщение валидации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Sectors,
    Terms,
}

impl FormError {
    /// Поле для вывода сообщения под ним; `None` для ошибок не валидации
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormError::Validation(message) => match message.as_str() {
                MSG_NAME_REQUIRED => Some(FormField::Name),
                MSG_SECTORS_REQUIRED => Some(FormField::Sectors),
                MSG_TERMS_REQUIRED => Some(FormField::Terms),
                _ => None,
            },
            _ => None,
        }
    }
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitIntent {
    Create,
    /// `key` - строка таблицы, `id` - идентификатор записи на сервере
    Update { key: usize, id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Editing {
        key: usize,
    },
    Submitting {
        intent: SubmitIntent,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub sectors: SelectedSectors,
    #[serde(rename = "agreedToTerms")]
    pub agreed_to_terms: bool,
}

impl FormValues {
    fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Validation(MSG_NAME_REQUIRED.into()));
        }
        if self.sectors.is_empty() {
            return Err(FormError::Validation(MSG_SECTORS_REQUIRED.into()));
        }
        if !self.agreed_to_terms {
            return Err(FormError::Validation(MSG_TERMS_REQUIRED.into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Что должен сделать вызывающий код после перехода
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Create(SubmissionDto),
    Update(SubmissionDto),
    Notify(Notification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    BeginEdit { key: usize },
    CancelEdit,
    NameChanged(String),
    SectorsChanged(SelectedSectors),
    TermsChanged(bool),
    Submit,
    RequestSucceeded(Submission),
    /// Сетевая ошибка, не-2xx ответ, ошибка разбора или таймаут
    RequestFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub phase: Phase,
    pub form: FormValues,
    pub submissions: Vec<SubmissionRow>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ключ редактируемой строки. Одновременно редактируется не больше одной.
    pub fn editing_key(&self) -> Option<usize> {
        match &self.phase {
            Phase::Editing { key } => Some(*key),
            Phase::Submitting {
                intent: SubmitIntent::Update { key, .. },
            } => Some(*key),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// Кнопка отправки активна только вне запроса и при согласии с условиями
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.form.agreed_to_terms
    }

    pub fn row(&self, key: usize) -> Option<&SubmissionRow> {
        self.submissions.iter().find(|r| r.key == key)
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<Vec<Effect>, FormError> {
        match event {
            FormEvent::BeginEdit { key } => self.begin_edit(key),
            FormEvent::CancelEdit => self.cancel_edit(),
            FormEvent::NameChanged(name) => self.edit_form(|f| f.name = name),
            FormEvent::SectorsChanged(sectors) => self.edit_form(|f| f.sectors = sectors),
            FormEvent::TermsChanged(agreed) => self.edit_form(|f| f.agreed_to_terms = agreed),
            FormEvent::Submit => self.submit(),
            FormEvent::RequestSucceeded(record) => self.request_succeeded(record),
            FormEvent::RequestFailed(_) => self.request_failed(),
        }
    }

    fn begin_edit(&mut self, key: usize) -> Result<Vec<Effect>, FormError> {
        match self.phase {
            Phase::Idle => {}
            Phase::Editing { .. } => return Err(FormError::AlreadyEditing),
            Phase::Submitting { .. } => return Err(FormError::SubmitInFlight),
        }
        let (name, sectors) = {
            let record = &self
                .row(key)
                .ok_or(FormError::UnknownRecord(key))?
                .record;
            (record.name.clone(), SelectedSectors::parse(&record.sectors))
        };

        self.form.name = name;
        self.form.sectors = sectors;
        self.phase = Phase::Editing { key };
        Ok(vec![])
    }

    fn cancel_edit(&mut self) -> Result<Vec<Effect>, FormError> {
        match self.phase {
            Phase::Editing { .. } => {
                self.phase = Phase::Idle;
                self.clear_form();
                Ok(vec![])
            }
            Phase::Idle => Ok(vec![]),
            Phase::Submitting { .. } => Err(FormError::SubmitInFlight),
        }
    }

    fn edit_form(&mut self, f: impl FnOnce(&mut FormValues)) -> Result<Vec<Effect>, FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmitInFlight);
        }
        f(&mut self.form);
        Ok(vec![])
    }

    fn submit(&mut self) -> Result<Vec<Effect>, FormError> {
        let intent = match &self.phase {
            Phase::Submitting { .. } => return Err(FormError::SubmitInFlight),
            Phase::Idle => SubmitIntent::Create,
            Phase::Editing { key } => {
                let row = self.row(*key).ok_or(FormError::UnknownRecord(*key))?;
                SubmitIntent::Update {
                    key: *key,
                    id: row.record.id.clone(),
                }
            }
        };
        self.form.validate()?;

        let name = self.form.name.trim().to_string();
        let sectors = self.form.sectors.join();
        let effect = match &intent {
            SubmitIntent::Create => Effect::Create(SubmissionDto::for_create(name, sectors)),
            SubmitIntent::Update { id, .. } => {
                Effect::Update(SubmissionDto::for_update(id.clone(), name, sectors))
            }
        };
        self.phase = Phase::Submitting { intent };
        Ok(vec![effect])
    }

    fn request_succeeded(&mut self, record: Submission) -> Result<Vec<Effect>, FormError> {
        let message = match &self.phase {
            Phase::Submitting {
                intent: SubmitIntent::Create,
            } => {
                let key = self.submissions.len();
                self.submissions.push(SubmissionRow { key, record });
                MSG_CREATED
            }
            Phase::Submitting {
                intent: SubmitIntent::Update { key, .. },
            } => {
                let key = *key;
                // Строки не удаляются, поэтому ключ из Editing всегда найдётся
                if let Some(row) = self.submissions.iter_mut().find(|r| r.key == key) {
                    row.record = record;
                }
                MSG_UPDATED
            }
            _ => return Err(FormError::NoRequestInFlight),
        };
        self.phase = Phase::Idle;
        self.clear_form();
        Ok(vec![Effect::Notify(Notification::success(message))])
    }

    fn request_failed(&mut self) -> Result<Vec<Effect>, FormError> {
        let (next, message) = match &self.phase {
            Phase::Submitting {
                intent: SubmitIntent::Create,
            } => (Phase::Idle, MSG_CREATE_FAILED),
            Phase::Submitting {
                intent: SubmitIntent::Update { key, .. },
            } => (Phase::Editing { key: *key }, MSG_UPDATE_FAILED),
            _ => return Err(FormError::NoRequestInFlight),
        };
        self.phase = next;
        Ok(vec![Effect::Notify(Notification::error(message))])
    }

    fn clear_form(&mut self) {
        // Согласие с условиями сбрасывается вместе с остальными полями
        self.form = FormValues::default();
    }
}
