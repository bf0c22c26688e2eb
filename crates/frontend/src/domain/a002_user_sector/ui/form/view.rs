use super::view_model::UserSectorFormViewModel;
use crate::domain::a001_sector_tree::ui::picker::SectorPicker;
use crate::domain::a002_user_sector::ui::list::SubmissionsTable;
use contracts::domain::a002_user_sector::FormField;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UserSectorForm() -> impl IntoView {
    let vm = UserSectorFormViewModel::new();
    vm.load_tree();
    on_cleanup(move || vm.abort_pending());

    let inputs_disabled = Signal::derive(move || vm.is_submitting());
    let field_error = move |field: FormField| {
        move || {
            vm.field_error(field)
                .map(|e| view! { <div class="form__error">{e}</div> })
        }
    };

    view! {
        <div class="user-sector-page">
            <Card attr:style="width: 360px;">
                <div style="padding: var(--spacing-md, 16px);">
                    <h3>
                        {move || if vm.is_editing() { "Edit User Sectors" } else { "User Sector Form" }}
                    </h3>

                    <Show when=move || !vm.selected_text().is_empty()>
                        <div class="selection-summary">
                            "You selected: " {move || vm.selected_text()}
                        </div>
                    </Show>

                    <div class="form__group">
                        <label class="form__label" for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.state.with(|s| s.form.name.clone())
                            prop:disabled=move || inputs_disabled.get()
                            on:input=move |ev| vm.set_name(event_target_value(&ev))
                        />
                        {field_error(FormField::Name)}
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="sectors">"Sectors"</label>
                        <SectorPicker
                            groups=vm.groups
                            selected=Signal::derive(move || vm.state.with(|s| s.form.sectors.clone()))
                            disabled=inputs_disabled
                            on_change=Callback::new(move |sectors| vm.set_sectors(sectors))
                        />
                        <Show when=move || vm.tree_loading.get()>
                            <span class="form__hint">"Loading sectors..."</span>
                        </Show>
                        {field_error(FormField::Sectors)}
                    </div>

                    <div class="form__group">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || vm.state.with(|s| s.form.agreed_to_terms)
                                prop:disabled=move || inputs_disabled.get()
                                on:change=move |ev| vm.set_terms(event_target_checked(&ev))
                            />
                            " Agree to terms"
                        </label>
                        {field_error(FormField::Terms)}
                    </div>

                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.submit()
                            disabled=Signal::derive(move || !vm.can_submit())
                        >
                            {move || {
                                if vm.is_submitting() {
                                    "Saving..."
                                } else if vm.is_editing() {
                                    "Update"
                                } else {
                                    "Save"
                                }
                            }}
                        </Button>
                        <Show when=move || vm.is_editing()>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.cancel_edit()
                            >
                                "Cancel"
                            </Button>
                        </Show>
                    </Flex>
                </div>
            </Card>

            <SubmissionsTable
                rows=Signal::derive(move || vm.state.with(|s| s.submissions.clone()))
                editing_key=Signal::derive(move || vm.editing_key())
                edit_enabled=Signal::derive(move || vm.can_begin_edit())
                on_edit=Callback::new(move |key| vm.begin_edit(key))
            />
        </div>
    }
}
