//! Item Panel Component
//!
//! Item form scoped to the wishlist ID in the wishlist panel.

use leptos::prelude::*;

use crate::actions::Action;
use crate::components::{ActionButton, TextField};
use crate::context::use_console;
use crate::store::{ItemFormStoreFields, ViewStateStoreFields};

#[component]
pub fn ItemPanel() -> impl IntoView {
    let store = use_console().store;

    view! {
        <section class="panel item-panel">
            <h2>"Items"</h2>
            <TextField
                id="item_id"
                label="Item ID"
                value=Signal::derive(move || store.item().id().get())
                on_input=move |v: String| store.item().id().set(v)
            />
            <TextField
                id="item_name"
                label="Name"
                value=Signal::derive(move || store.item().name().get())
                on_input=move |v: String| store.item().name().set(v)
            />
            <TextField
                id="product_id"
                label="Product ID"
                value=Signal::derive(move || store.item().product_id().get())
                on_input=move |v: String| store.item().product_id().set(v)
            />
            <TextField
                id="item_quantity"
                label="Quantity"
                placeholder="1"
                value=Signal::derive(move || store.item().quantity().get())
                on_input=move |v: String| store.item().quantity().set(v)
            />
            <TextField
                id="item_price"
                label="Price"
                placeholder="100"
                value=Signal::derive(move || store.item().price().get())
                on_input=move |v: String| store.item().price().set(v)
            />

            <div class="button-row">
                <ActionButton id="retrieve-item-btn" label="Retrieve" action=Action::RetrieveItem />
                <ActionButton id="search-item-btn" label="Search" action=Action::SearchItems />
                <ActionButton id="create-item-btn" label="Create" action=Action::CreateItem />
                <ActionButton id="update-item-btn" label="Update" action=Action::UpdateItem />
                <ActionButton id="delete-item-btn" label="Delete" action=Action::DeleteItem class="danger" />
            </div>
        </section>
    }
}
