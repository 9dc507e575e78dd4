//! Wishlist Console App
//!
//! Root component: wishlist and item panels over their result tables.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FlashMessage, HealthBadge, ItemPanel, ItemResults, WishlistPanel, WishlistResults};
use crate::config::ConsoleConfig;
use crate::context::ConsoleContext;
use crate::store::ViewState;

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    let store = Store::new(ViewState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(ConsoleContext::new(store, &config));

    view! {
        <div class="console-layout">
            <header class="console-header">
                <h1>"Wishlist Administration"</h1>
                <HealthBadge />
            </header>

            <FlashMessage />

            <main class="console-main">
                <WishlistPanel />
                <WishlistResults />

                <ItemPanel />
                <ItemResults />
            </main>
        </div>
    }
}
