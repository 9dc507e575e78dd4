//! Wishlist Panel Component
//!
//! Wishlist form plus its action buttons.

use leptos::prelude::*;

use crate::actions::Action;
use crate::components::{ActionButton, TextField};
use crate::context::use_console;
use crate::store::{ViewStateStoreFields, WishlistFormStoreFields};

#[component]
pub fn WishlistPanel() -> impl IntoView {
    let store = use_console().store;

    view! {
        <section class="panel wishlist-panel">
            <h2>"Wishlist"</h2>
            <TextField
                id="wishlist_id"
                label="ID"
                value=Signal::derive(move || store.wishlist().id().get())
                on_input=move |v: String| store.wishlist().id().set(v)
            />
            <TextField
                id="wishlist_name"
                label="Name"
                value=Signal::derive(move || store.wishlist().name().get())
                on_input=move |v: String| store.wishlist().name().set(v)
            />
            <TextField
                id="customer_id"
                label="Customer ID"
                value=Signal::derive(move || store.wishlist().customer_id().get())
                on_input=move |v: String| store.wishlist().customer_id().set(v)
            />
            <TextField
                id="wishlist_created"
                label="Created On"
                readonly=true
                value=Signal::derive(move || store.wishlist().created_on().get())
                on_input=move |v: String| store.wishlist().created_on().set(v)
            />
            <TextField
                id="item_list"
                label="Items"
                readonly=true
                value=Signal::derive(move || store.wishlist().item_list().get())
                on_input=move |v: String| store.wishlist().item_list().set(v)
            />

            <div class="button-row">
                <ActionButton id="retrieve-btn" label="Retrieve" action=Action::RetrieveWishlist />
                <ActionButton id="search-btn" label="Search" action=Action::SearchWishlists />
                <ActionButton id="clear-btn" label="Clear" action=Action::ClearForm />
                <ActionButton id="create-btn" label="Create" action=Action::CreateWishlist />
                <ActionButton id="update-btn" label="Update" action=Action::UpdateWishlist />
                <ActionButton id="delete-btn" label="Delete" action=Action::DeleteWishlist class="danger" />
            </div>
        </section>
    }
}
