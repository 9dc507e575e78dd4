//! Text Field Component
//!
//! Labelled input bound to one store field.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
