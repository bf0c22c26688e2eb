use crate::domain::a002_user_sector::ui::form::UserSectorForm;
use crate::shared::toast::{ToastService, ToastStack};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the ToastService to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <UserSectorForm />
        <ToastStack />
    }
}
