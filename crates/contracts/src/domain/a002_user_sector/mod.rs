pub mod aggregate;
pub mod reconciler;
pub mod selection;

pub use aggregate::{Submission, SubmissionDto, SubmissionRow};
pub use reconciler::{
    Effect, FormError, FormEvent, FormField, FormState, FormValues, Notification,
    NotificationLevel, Phase, SubmitIntent,
};
pub use selection::SelectedSectors;
