//! Filterable medicine list for the prescription panel.

use leptos::prelude::*;

use crate::state::actions::ActionsState;

/// Text filter plus clickable matches; the pick is stored in `state.selected`.
#[component]
pub fn MedicinePicker(state: RwSignal<ActionsState>) -> impl IntoView {
    let selected_name = move || state.get().selected.map(|m| m.name);

    view! {
        <div class="medicine-picker">
            <input
                class="medicine-picker__input"
                type="search"
                placeholder="Select Medicine"
                prop:value=move || state.get().medicine_query
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| s.medicine_query = query);
                }
            />
            <ul class="medicine-picker__options" role="listbox">
                {move || {
                    let selected_id = state.get().selected.map(|m| m.id);
                    state
                        .get()
                        .visible_medicines()
                        .into_iter()
                        .map(|medicine| {
                            let is_selected = selected_id.as_deref() == Some(medicine.id.as_str());
                            let id = medicine.id.clone();
                            view! {
                                <li
                                    class="medicine-picker__option"
                                    class:medicine-picker__option--selected=is_selected
                                    role="option"
                                    aria-selected=is_selected.to_string()
                                    on:click=move |_| state.update(|s| s.select_medicine(&id))
                                >
                                    <span class="medicine-picker__name">{medicine.name}</span>
                                    <span class="medicine-picker__price">{format!("{:.2}", medicine.price)}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=move || selected_name().is_some()>
                <p class="medicine-picker__selected">
                    "Selected Medicine: "
                    {move || selected_name().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
