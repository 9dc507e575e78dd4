//! Console View State Store
//!
//! Everything the page shows lives here: the two forms, the status slot
//! and the last result tables. Uses Leptos reactive_stores so each input
//! only re-renders when its own field changes.

use leptos::prelude::expect_context;
use reactive_stores::Store;

use crate::models::{display_opt, Wishlist, WishlistItem};

pub const SUCCESS: &str = "Success";

/// Wishlist form fields, kept as typed text
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WishlistForm {
    pub id: String,
    pub name: String,
    pub customer_id: String,
    pub created_on: String,
    /// Names of the items embedded in the last loaded wishlist
    pub item_list: String,
}

/// Item form fields
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ItemForm {
    pub id: String,
    pub name: String,
    pub product_id: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewState {
    pub wishlist: WishlistForm,
    pub item: ItemForm,
    /// Status-message slot, overwritten by every operation
    pub flash: String,
    /// Last wishlist search (None until one succeeds)
    pub wishlist_results: Option<Vec<Wishlist>>,
    /// Last item search
    pub item_results: Option<Vec<WishlistItem>>,
}

impl ViewState {
    /// Copy a wishlist into the form
    pub fn fill_wishlist(&mut self, wishlist: &Wishlist) {
        self.wishlist = WishlistForm {
            id: wishlist.id.to_string(),
            name: wishlist.name.clone(),
            customer_id: display_opt(&wishlist.customer_id),
            created_on: display_opt(&wishlist.created_on),
            item_list: wishlist
                .items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        };
    }

    /// Copy an item into the item fields; the wishlist fields stay as they are
    pub fn fill_item(&mut self, item: &WishlistItem) {
        self.item = ItemForm {
            id: item.id.to_string(),
            name: item.name.clone(),
            product_id: display_opt(&item.product_id),
            quantity: display_opt(&item.quantity),
            price: display_opt(&item.price),
        };
    }

    /// Reset both forms
    pub fn clear_form(&mut self) {
        self.wishlist = WishlistForm::default();
        self.item = ItemForm::default();
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash = message.into();
    }

    pub fn clear_flash(&mut self) {
        self.flash.clear();
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Table Rows
// ========================

pub const WISHLIST_COLUMNS: [&str; 4] = ["ID", "Name", "Customer ID", "Created On"];

pub const ITEM_COLUMNS: [&str; 6] = ["ID", "Name", "Product ID", "Quantity", "Price", "Created On"];

pub fn wishlist_row(wishlist: &Wishlist) -> [String; 4] {
    [
        wishlist.id.to_string(),
        wishlist.name.clone(),
        display_opt(&wishlist.customer_id),
        display_opt(&wishlist.created_on),
    ]
}

pub fn item_row(item: &WishlistItem) -> [String; 6] {
    [
        item.id.to_string(),
        item.name.clone(),
        display_opt(&item.product_id),
        display_opt(&item.quantity),
        display_opt(&item.price),
        display_opt(&item.created_on),
    ]
}
