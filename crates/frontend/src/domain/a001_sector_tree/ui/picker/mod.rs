use contracts::domain::a001_sector_tree::OptionGroup;
use contracts::domain::a002_user_sector::SelectedSectors;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Значения выбранных опций в порядке DOM
fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}

/// Множественный выбор секторов, сгруппированных по категориям.
///
/// `on_change` получает выбор в порядке, в котором пользователь отмечал
/// значения, а не в порядке списка.
#[component]
pub fn SectorPicker(
    #[prop(into)] groups: Signal<Vec<OptionGroup>>,
    #[prop(into)] selected: Signal<SelectedSectors>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: Callback<SelectedSectors>,
) -> impl IntoView {
    let handle_change = move |ev: leptos::ev::Event| {
        let select = event_target::<HtmlSelectElement>(&ev);
        let now = selected_values(&select);
        on_change.run(selected.get_untracked().reconcile(&now));
    };

    view! {
        <select
            id="sectors"
            class="sector-select"
            multiple=true
            size="12"
            prop:disabled=move || disabled.get()
            on:change=handle_change
        >
            {move || {
                groups
                    .get()
                    .into_iter()
                    .map(|OptionGroup { label, options, .. }| {
                        view! {
                            <optgroup label=label>
                                {options
                                    .into_iter()
                                    .map(|opt| {
                                        let text = opt.label();
                                        let value = opt.value;
                                        let probe = value.clone();
                                        view! {
                                            <option
                                                value=value
                                                prop:selected=move || selected.with(|s| s.contains(&probe))
                                            >
                                                {text}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </optgroup>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
