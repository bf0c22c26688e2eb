//! Всплывающие уведомления (toasts)

use contracts::domain::a002_user_sector::{Notification, NotificationLevel};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Сервис уведомлений, раздаётся через context из `App`
#[derive(Clone, Copy)]
pub struct ToastService {
    pub items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Показать уведомление; оно исчезнет само через несколько секунд
    pub fn push(&self, notification: Notification) {
        let Some(id) = self.next_id.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };

        match notification.level {
            NotificationLevel::Success => log::info!("{}", notification.message),
            NotificationLevel::Error => log::warn!("{}", notification.message),
        }

        let _ = self.items.try_update(|items| items.push(Toast { id, notification }));

        let this = *self;
        Timeout::new(TOAST_LIFETIME_MS, move || this.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    pub fn dismiss(&self, id: u64) {
        // Компонент мог быть уже удалён
        let _ = self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Сервис из context; если провайдера нет, создаётся локальный
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().unwrap_or_else(|| {
        log::warn!("ToastService is not provided, using a local instance");
        ToastService::new()
    })
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.items.get()
                key=|t| t.id
                children=move |toast| {
                    let intent = match toast.notification.level {
                        NotificationLevel::Success => MessageBarIntent::Success,
                        NotificationLevel::Error => MessageBarIntent::Error,
                    };
                    let id = toast.id;
                    view! {
                        <div on:click=move |_| toasts.dismiss(id)>
                            <MessageBar intent=intent>
                                <div>{toast.notification.message.clone()}</div>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
