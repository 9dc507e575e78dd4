//! Wishlist Endpoints

use serde_json::json;

use super::{query_value, segment, ApiRequest};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CreateWishlistArgs<'a> {
    pub name: &'a str,
    pub customer_id: Option<i64>,
    pub created_on: &'a str,
}

/// Which slice of the collection a search asks for
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistQuery<'a> {
    ById(&'a str),
    ByCustomer(&'a str),
    All,
}

// ========================
// Requests
// ========================

pub fn create_wishlist(args: &CreateWishlistArgs<'_>) -> ApiRequest {
    ApiRequest::post(
        "/wishlists".to_string(),
        json!({
            "name": args.name,
            "customer_id": args.customer_id,
            "created_on": args.created_on,
        }),
    )
}

/// Rename only; ownership never changes after creation
pub fn rename_wishlist(wishlist_id: &str, name: &str) -> ApiRequest {
    ApiRequest::put(wishlist_path(wishlist_id), json!({ "name": name }))
}

pub fn get_wishlist(wishlist_id: &str) -> ApiRequest {
    ApiRequest::get(wishlist_path(wishlist_id))
}

pub fn delete_wishlist(wishlist_id: &str) -> ApiRequest {
    ApiRequest::delete(wishlist_path(wishlist_id))
}

/// Drops every item of a wishlist
pub fn delete_wishlist_items(wishlist_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{}/items", wishlist_path(wishlist_id)))
}

pub fn list_wishlists(query: &WishlistQuery<'_>) -> ApiRequest {
    match query {
        WishlistQuery::ById(id) => get_wishlist(id),
        WishlistQuery::ByCustomer(customer_id) => {
            ApiRequest::get(format!("/wishlists?customer_id={}", query_value(customer_id)))
        }
        WishlistQuery::All => ApiRequest::get("/wishlists".to_string()),
    }
}

fn wishlist_path(wishlist_id: &str) -> String {
    format!("/wishlists/{}", segment(wishlist_id))
}
