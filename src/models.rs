//! Frontend Models
//!
//! Data structures matching the wishlist service's JSON.

use serde::{Deserialize, Serialize};

/// Wishlist as returned by the service
///
/// Only `id` is guaranteed; older service builds answered with just `id` and `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

/// Line entry in a wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: i64,
    #[serde(default)]
    pub wishlist_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub updated_on: Option<String>,
}

/// A lookup by id answers with one object, a listing with an array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(all) => all,
            OneOrMany::One(one) => vec![one],
        }
    }
}

/// Health probe response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    pub message: String,
}

/// Render an optional value as form text (missing → empty)
pub fn display_opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
