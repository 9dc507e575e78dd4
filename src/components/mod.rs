//! UI Components
//!
//! Leptos components for the console page.

mod action_button;
mod flash_message;
mod health_badge;
mod item_panel;
mod results_table;
mod text_field;
mod wishlist_panel;

pub use action_button::ActionButton;
pub use flash_message::FlashMessage;
pub use health_badge::HealthBadge;
pub use item_panel::ItemPanel;
pub use results_table::{ItemResults, WishlistResults};
pub use text_field::TextField;
pub use wishlist_panel::WishlistPanel;
