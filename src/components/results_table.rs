//! Search Results Components
//!
//! Tables for the last wishlist and item searches. Nothing is shown until
//! a search has succeeded.

use leptos::prelude::*;

use crate::store::{
    item_row, use_view_store, wishlist_row, ViewStateStoreFields, ITEM_COLUMNS, WISHLIST_COLUMNS,
};

/// Plain striped table
#[component]
fn ResultsTable(headers: &'static [&'static str], rows: Vec<Vec<String>>) -> impl IntoView {
    view! {
        <table class="table table-striped">
            <thead>
                <tr>
                    {headers.iter().map(|header| view! { <th>{*header}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, cells)| {
                        view! {
                            <tr id=format!("row_{}", i)>
                                {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn WishlistResults() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div id="search_results" class="search-results">
            {move || store.wishlist_results().get().map(|found| {
                let rows = found.iter().map(|w| wishlist_row(w).to_vec()).collect::<Vec<_>>();
                view! { <ResultsTable headers=&WISHLIST_COLUMNS rows=rows /> }
            })}
        </div>
    }
}

#[component]
pub fn ItemResults() -> impl IntoView {
    let store = use_view_store();

    view! {
        <div id="item_results" class="search-results">
            {move || store.item_results().get().map(|found| {
                let rows = found.iter().map(|item| item_row(item).to_vec()).collect::<Vec<_>>();
                view! { <ResultsTable headers=&ITEM_COLUMNS rows=rows /> }
            })}
        </div>
    }
}
