use leptos::prelude::*;

use crate::actions::Action;
use crate::context::use_console;

/// Button that runs one console action
#[component]
pub fn ActionButton(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    action: Action,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let console = use_console();

    view! {
        <button
            type="button"
            id=id
            class=format!("action-btn {}", class)
            on:click=move |_| console.run(action)
        >
            {label}
        </button>
    }
}
