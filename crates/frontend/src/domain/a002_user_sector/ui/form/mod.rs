//! User Sector Form UI Module
//!
//! MVVM:
//! - model.rs: API functions (create, update)
//! - view_model.rs: ViewModel, drives the shared FormState reducer
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::UserSectorForm;
pub use view_model::UserSectorFormViewModel;
