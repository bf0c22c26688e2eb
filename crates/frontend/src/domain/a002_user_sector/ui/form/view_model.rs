use super::model;
use crate::domain::a001_sector_tree::api;
use crate::shared::http::{FetchError, PendingRequest};
use crate::shared::toast::{use_toasts, ToastService};
use contracts::domain::a001_sector_tree::{flatten, OptionGroup};
use contracts::domain::a002_user_sector::{
    Effect, FormError, FormEvent, FormField, FormState, Phase, SelectedSectors,
    SubmissionDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

type RequestSlot = StoredValue<Option<AbortController>, LocalStorage>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SaveMode {
    Create,
    Update,
}

/// ViewModel for the user sector form and the submissions table.
///
/// All mutable form data lives in one `FormState`; every user action is
/// turned into a `FormEvent` and the returned effects are executed here.
#[derive(Clone, Copy)]
pub struct UserSectorFormViewModel {
    pub state: RwSignal<FormState>,
    pub groups: RwSignal<Vec<OptionGroup>>,
    pub tree_loading: RwSignal<bool>,
    /// Сообщение валидации выводится под своим полем
    pub error: RwSignal<Option<(FormField, String)>>,
    tree_request: RequestSlot,
    submit_request: RequestSlot,
    toasts: ToastService,
}

impl UserSectorFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::new()),
            groups: RwSignal::new(Vec::new()),
            tree_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            tree_request: StoredValue::new_local(None),
            submit_request: StoredValue::new_local(None),
            toasts: use_toasts(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.is_editing())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(|s| s.can_submit())
    }

    /// Редактирование можно начать только из состояния Idle
    pub fn can_begin_edit(&self) -> bool {
        self.state.with(|s| s.phase == Phase::Idle)
    }

    pub fn editing_key(&self) -> Option<usize> {
        self.state.with(|s| s.editing_key())
    }

    pub fn field_error(&self, field: FormField) -> Option<String> {
        self.error.with(|e| match e {
            Some((f, message)) if *f == field => Some(message.clone()),
            _ => None,
        })
    }

    pub fn selected_text(&self) -> String {
        self.state.with(|s| s.form.sectors.join())
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn set_name(&self, name: String) {
        self.dispatch(FormEvent::NameChanged(name));
    }

    pub fn set_sectors(&self, sectors: SelectedSectors) {
        self.dispatch(FormEvent::SectorsChanged(sectors));
    }

    pub fn set_terms(&self, agreed: bool) {
        self.dispatch(FormEvent::TermsChanged(agreed));
    }

    pub fn submit(&self) {
        self.dispatch(FormEvent::Submit);
    }

    pub fn begin_edit(&self, key: usize) {
        self.dispatch(FormEvent::BeginEdit { key });
    }

    pub fn cancel_edit(&self) {
        self.dispatch(FormEvent::CancelEdit);
    }

    /// Load the sector tree once on mount
    pub fn load_tree(&self) {
        let this = *self;
        let pending = match PendingRequest::new() {
            Ok(p) => p,
            Err(e) => return this.tree_failed(e),
        };
        let _ = self
            .tree_request
            .try_update_value(|slot| *slot = Some(pending.controller()));
        self.tree_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_tree(&pending).await;
            let _ = this.tree_request.try_update_value(|slot| *slot = None);
            let _ = this.tree_loading.try_set(false);

            match result {
                Ok(tree) => {
                    log::info!(
                        "Sector tree loaded: {} groups, {} options",
                        tree.group_count(),
                        tree.option_count()
                    );
                    let _ = this.groups.try_set(flatten(tree.categories()));
                }
                Err(e) => this.tree_failed(e),
            }
        });
    }

    /// Abort everything in flight. Called when the form unmounts.
    pub fn abort_pending(&self) {
        for slot in [self.tree_request, self.submit_request] {
            let _ = slot.try_update_value(|c| {
                if let Some(controller) = c.take() {
                    controller.abort();
                }
            });
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn tree_failed(&self, error: FetchError) {
        if matches!(error, FetchError::Aborted) {
            log::debug!("Sector tree request aborted");
            return;
        }
        // Список секторов остаётся пустым, форма продолжает работать
        log::error!("Error fetching data: {}", error);
        self.toasts.error(format!("Error fetching sectors: {}", error));
    }

    fn dispatch(&self, event: FormEvent) {
        let Some(result) = self.state.try_update(|s| s.apply(event)) else {
            return;
        };
        match result {
            Ok(effects) => {
                let _ = self.error.try_set(None);
                effects.into_iter().for_each(|effect| self.run(effect));
            }
            Err(e @ FormError::Validation(_)) => match e.field() {
                Some(field) => {
                    let _ = self.error.try_set(Some((field, e.to_string())));
                }
                None => self.toasts.error(e.to_string()),
            },
            Err(e) => log::warn!("Form event rejected: {}", e),
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Notify(notification) => self.toasts.push(notification),
            Effect::Create(dto) => self.save(dto, SaveMode::Create),
            Effect::Update(dto) => self.save(dto, SaveMode::Update),
        }
    }

    fn save(&self, dto: SubmissionDto, mode: SaveMode) {
        let this = *self;
        let pending = match PendingRequest::new() {
            Ok(p) => p,
            Err(e) => return this.dispatch(FormEvent::RequestFailed(e.to_string())),
        };
        let _ = self
            .submit_request
            .try_update_value(|slot| *slot = Some(pending.controller()));

        spawn_local(async move {
            let result = match mode {
                SaveMode::Create => model::create(&dto, &pending).await,
                SaveMode::Update => model::update(&dto, &pending).await,
            };
            let _ = this.submit_request.try_update_value(|slot| *slot = None);

            match result {
                Ok(record) => this.dispatch(FormEvent::RequestSucceeded(record)),
                // Форма уже размонтирована
                Err(FetchError::Aborted) => log::debug!("Save request aborted"),
                Err(e) => {
                    log::error!("Failed to save submission: {}", e);
                    this.dispatch(FormEvent::RequestFailed(e.to_string()));
                }
            }
        });
    }
}

impl Default for UserSectorFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
