use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

/// Status-message slot
#[component]
pub fn FlashMessage() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div id="flash_message" class="flash-message" role="status">
            {move || store.flash().get()}
        </div>
    }
}
