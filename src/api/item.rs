//! Wishlist Item Endpoints
//!
//! Items only exist under a wishlist, so every path starts from one.

use serde_json::json;

use super::{query_value, segment, ApiRequest};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CreateItemArgs<'a> {
    pub name: &'a str,
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
    pub price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemArgs<'a> {
    pub name: &'a str,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemQuery<'a> {
    ById(&'a str),
    ByName(&'a str),
    All,
}

// ========================
// Requests
// ========================

pub fn create_item(wishlist_id: &str, args: &CreateItemArgs<'_>) -> ApiRequest {
    ApiRequest::post(
        items_path(wishlist_id),
        json!({
            "name": args.name,
            "product_id": args.product_id,
            "quantity": args.quantity,
            "price": args.price,
        }),
    )
}

pub fn get_item(wishlist_id: &str, item_id: &str) -> ApiRequest {
    ApiRequest::get(item_path(wishlist_id, item_id))
}

pub fn update_item(wishlist_id: &str, item_id: &str, args: &UpdateItemArgs<'_>) -> ApiRequest {
    ApiRequest::put(
        item_path(wishlist_id, item_id),
        json!({
            "name": args.name,
            "quantity": args.quantity,
        }),
    )
}

pub fn delete_item(wishlist_id: &str, item_id: &str) -> ApiRequest {
    ApiRequest::delete(item_path(wishlist_id, item_id))
}

pub fn list_items(wishlist_id: &str, query: &ItemQuery<'_>) -> ApiRequest {
    match query {
        ItemQuery::ById(item_id) => get_item(wishlist_id, item_id),
        ItemQuery::ByName(name) => {
            ApiRequest::get(format!("{}?name={}", items_path(wishlist_id), query_value(name)))
        }
        ItemQuery::All => ApiRequest::get(items_path(wishlist_id)),
    }
}

fn items_path(wishlist_id: &str) -> String {
    format!("/wishlists/{}/items", segment(wishlist_id))
}

fn item_path(wishlist_id: &str, item_id: &str) -> String {
    format!("{}/{}", items_path(wishlist_id), segment(item_id))
}
