//! Console Actions
//!
//! Each button maps to an `Action`. Handling one is split in two pure steps:
//! `plan` reads the form and decides what to send, `apply` folds the answer
//! back into whatever the view looks like when it arrives.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    self, ApiError, ApiRequest, CreateItemArgs, CreateWishlistArgs, ItemQuery, UpdateItemArgs,
    WishlistQuery, GENERIC_ERROR,
};
use crate::coerce::{coerce_int, coerce_int_or, is_blank};
use crate::models::{OneOrMany, Wishlist, WishlistItem};
use crate::store::{ViewState, SUCCESS};

pub const WISHLIST_DELETED: &str = "Wishlist has been Deleted!";
pub const ITEM_DELETED: &str = "Item has been Deleted!";

const DEFAULT_QUANTITY: i64 = 1;
const DEFAULT_PRICE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateWishlist,
    UpdateWishlist,
    RetrieveWishlist,
    DeleteWishlist,
    ClearForm,
    SearchWishlists,
    CreateItem,
    RetrieveItem,
    UpdateItem,
    DeleteItem,
    SearchItems,
}

/// What an action does before any answer arrives
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// View to show right away
    pub state: ViewState,
    /// Request whose answer is applied to the view
    pub request: Option<ApiRequest>,
    /// Fire-and-forget requests; their answers are never looked at
    pub detached: Vec<ApiRequest>,
}

/// Decide the outgoing requests for `action` from the current form.
/// `now` is the RFC 3339 timestamp stamped on new wishlists.
pub fn plan(action: Action, current: &ViewState, now: &str) -> Plan {
    let mut state = current.clone();
    state.clear_flash();

    let wishlist = &current.wishlist;
    let item = &current.item;
    let mut detached = Vec::new();

    let request = match action {
        Action::CreateWishlist => Some(api::create_wishlist(&CreateWishlistArgs {
            name: &wishlist.name,
            customer_id: coerce_int(&wishlist.customer_id),
            created_on: now,
        })),
        Action::UpdateWishlist => Some(api::rename_wishlist(&wishlist.id, &wishlist.name)),
        Action::RetrieveWishlist => Some(api::get_wishlist(&wishlist.id)),
        Action::DeleteWishlist => {
            detached.push(api::delete_wishlist_items(&wishlist.id));
            Some(api::delete_wishlist(&wishlist.id))
        }
        Action::ClearForm => {
            state.clear_form();
            None
        }
        // whitespace-only fields count as empty when picking the filter
        Action::SearchWishlists => {
            let query = if !is_blank(&wishlist.id) {
                WishlistQuery::ById(&wishlist.id)
            } else if !is_blank(&wishlist.customer_id) {
                WishlistQuery::ByCustomer(&wishlist.customer_id)
            } else {
                WishlistQuery::All
            };
            Some(api::list_wishlists(&query))
        }
        Action::CreateItem => Some(api::create_item(
            &wishlist.id,
            &CreateItemArgs {
                name: &item.name,
                product_id: coerce_int(&item.product_id),
                quantity: coerce_int_or(&item.quantity, DEFAULT_QUANTITY),
                price: coerce_int_or(&item.price, DEFAULT_PRICE),
            },
        )),
        Action::RetrieveItem => Some(api::get_item(&wishlist.id, &item.id)),
        Action::UpdateItem => Some(api::update_item(
            &wishlist.id,
            &item.id,
            &UpdateItemArgs {
                name: &item.name,
                quantity: coerce_int(&item.quantity),
            },
        )),
        Action::DeleteItem => Some(api::delete_item(&wishlist.id, &item.id)),
        Action::SearchItems => {
            let query = if !is_blank(&item.id) {
                ItemQuery::ById(&item.id)
            } else if !is_blank(&item.name) {
                ItemQuery::ByName(&item.name)
            } else {
                ItemQuery::All
            };
            Some(api::list_items(&wishlist.id, &query))
        }
    };

    Plan { state, request, detached }
}

/// Fold the answer to `action`'s request into `state`
pub fn apply(action: Action, mut state: ViewState, outcome: Result<Value, ApiError>) -> ViewState {
    match action {
        Action::CreateWishlist | Action::UpdateWishlist => match decode::<Wishlist>(outcome) {
            Ok(wishlist) => {
                state.fill_wishlist(&wishlist);
                state.flash(SUCCESS);
            }
            Err(err) => state.flash(err.flash_message()),
        },
        Action::RetrieveWishlist => match decode::<Wishlist>(outcome) {
            Ok(wishlist) => {
                state.fill_wishlist(&wishlist);
                state.flash(SUCCESS);
            }
            Err(err) => {
                state.clear_form();
                state.flash(err.flash_message());
            }
        },
        Action::DeleteWishlist => deleted(&mut state, outcome, WISHLIST_DELETED),
        Action::DeleteItem => deleted(&mut state, outcome, ITEM_DELETED),
        Action::ClearForm => {}
        Action::SearchWishlists => match decode::<OneOrMany<Wishlist>>(outcome) {
            Ok(found) => {
                let rows = found.into_vec();
                if let Some(first) = rows.first() {
                    state.fill_wishlist(first);
                }
                state.wishlist_results = Some(rows);
                state.flash(SUCCESS);
            }
            Err(err) => state.flash(err.flash_message()),
        },
        Action::CreateItem | Action::UpdateItem => match decode::<WishlistItem>(outcome) {
            Ok(item) => {
                state.fill_item(&item);
                state.flash(SUCCESS);
            }
            Err(err) => state.flash(err.flash_message()),
        },
        Action::RetrieveItem => match decode::<WishlistItem>(outcome) {
            Ok(item) => {
                state.fill_item(&item);
                state.flash(SUCCESS);
            }
            Err(err) => {
                state.clear_form();
                state.flash(err.flash_message());
            }
        },
        Action::SearchItems => match decode::<OneOrMany<WishlistItem>>(outcome) {
            Ok(found) => {
                let rows = found.into_vec();
                if let Some(first) = rows.first() {
                    state.fill_item(first);
                }
                state.item_results = Some(rows);
                state.flash(SUCCESS);
            }
            Err(err) => state.flash(err.flash_message()),
        },
    }
    state
}

/// Deletes report a fixed message either way; the server's text is dropped
fn deleted(state: &mut ViewState, outcome: Result<Value, ApiError>, message: &str) {
    match outcome {
        Ok(_) => {
            state.clear_form();
            state.flash(message);
        }
        Err(_) => state.flash(GENERIC_ERROR),
    }
}

fn decode<T: DeserializeOwned>(outcome: Result<Value, ApiError>) -> Result<T, ApiError> {
    Ok(serde_json::from_value(outcome?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use serde_json::json;

    const NOW: &str = "2024-01-01T00:00:00.000Z";

    fn not_found() -> ApiError {
        ApiError::Server { status: 404, message: Some("not found".to_string()) }
    }

    fn filled() -> ViewState {
        let mut state = ViewState::default();
        state.wishlist.id = "7".into();
        state.wishlist.name = "Birthday".into();
        state.wishlist.customer_id = "42".into();
        state.item.id = "5".into();
        state.item.name = "Lamp".into();
        state.flash("previous");
        state
    }

    #[test]
    fn test_plan_clears_flash() {
        let plan = plan(Action::RetrieveWishlist, &filled(), NOW);
        assert_eq!(plan.state.flash, "");
        assert_eq!(plan.state.wishlist.id, "7");
    }

    #[test]
    fn test_create_wishlist_scenario() {
        let mut state = ViewState::default();
        state.wishlist.name = "Birthday".into();
        state.wishlist.customer_id = "42".into();

        let plan = plan(Action::CreateWishlist, &state, NOW);
        let request = plan.request.clone().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/wishlists");
        assert_eq!(
            request.body,
            Some(json!({"name": "Birthday", "customer_id": 42, "created_on": NOW}))
        );

        let response = json!({
            "id": 7, "name": "Birthday", "customer_id": 42, "created_on": "2024-01-01T00:00:00Z"
        });
        let after = apply(Action::CreateWishlist, plan.state, Ok(response));
        assert_eq!(after.wishlist.id, "7");
        assert_eq!(after.wishlist.name, "Birthday");
        assert_eq!(after.wishlist.customer_id, "42");
        assert_eq!(after.wishlist.created_on, "2024-01-01T00:00:00Z");
        assert_eq!(after.flash, "Success");
    }

    #[test]
    fn test_create_wishlist_failure_keeps_form() {
        let state = filled();
        let after = apply(
            Action::CreateWishlist,
            state.clone(),
            Err(ApiError::Server { status: 400, message: Some("name is required".into()) }),
        );
        assert_eq!(after.wishlist, state.wishlist);
        assert_eq!(after.flash, "name is required");
    }

    #[test]
    fn test_retrieve_failure_clears_form() {
        let plan = plan(Action::RetrieveWishlist, &filled(), NOW);
        assert_eq!(plan.request.as_ref().unwrap().path, "/wishlists/7");

        let after = apply(Action::RetrieveWishlist, plan.state, Err(not_found()));
        assert_eq!(after.wishlist, Default::default());
        assert_eq!(after.item, Default::default());
        assert_eq!(after.flash, "not found");
    }

    #[test]
    fn test_delete_wishlist_plan_detaches_item_cleanup() {
        let plan = plan(Action::DeleteWishlist, &filled(), NOW);
        assert_eq!(plan.detached, vec![ApiRequest::delete("/wishlists/7/items".into())]);
        assert_eq!(plan.request, Some(ApiRequest::delete("/wishlists/7".into())));
    }

    #[test]
    fn test_delete_wishlist_outcomes() {
        let ok = apply(Action::DeleteWishlist, filled(), Ok(Value::Null));
        assert_eq!(ok.wishlist, Default::default());
        assert_eq!(ok.flash, WISHLIST_DELETED);

        let failed = apply(Action::DeleteWishlist, filled(), Err(not_found()));
        assert_eq!(failed.wishlist.id, "7");
        assert_eq!(failed.flash, "Server error!");
    }

    #[test]
    fn test_clear_form_has_no_request() {
        let plan = plan(Action::ClearForm, &filled(), NOW);
        assert_eq!(plan.request, None);
        assert!(plan.detached.is_empty());
        assert_eq!(plan.state.wishlist, Default::default());
        assert_eq!(plan.state.flash, "");
    }

    #[test]
    fn test_search_wishlists_query_choice() {
        let by_id = plan(Action::SearchWishlists, &filled(), NOW);
        assert_eq!(by_id.request.unwrap().path, "/wishlists/7");

        let mut state = filled();
        state.wishlist.id.clear();
        let by_customer = plan(Action::SearchWishlists, &state, NOW);
        assert_eq!(by_customer.request.unwrap().path, "/wishlists?customer_id=42");

        state.wishlist.customer_id = "  ".into();
        let all = plan(Action::SearchWishlists, &state, NOW);
        assert_eq!(all.request.unwrap().path, "/wishlists");
    }

    #[test]
    fn test_search_wishlists_renders_rows() {
        let response = json!([
            {"id": 1, "name": "A", "customer_id": 42, "created_on": "t1"},
            {"id": 2, "name": "B", "customer_id": 42, "created_on": "t2"},
            {"id": 3, "name": "C", "customer_id": 42, "created_on": "t3"}
        ]);
        let after = apply(Action::SearchWishlists, ViewState::default(), Ok(response));
        let rows = after.wishlist_results.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].name, "C");
        assert_eq!(after.wishlist.id, "1");
        assert_eq!(after.flash, "Success");
    }

    #[test]
    fn test_search_wishlists_single_entity() {
        let response = json!({"id": 7, "name": "Birthday", "customer_id": 42});
        let after = apply(Action::SearchWishlists, ViewState::default(), Ok(response));
        assert_eq!(after.wishlist_results.map(|rows| rows.len()), Some(1));
        assert_eq!(after.wishlist.name, "Birthday");
    }

    #[test]
    fn test_search_empty_leaves_form() {
        let state = filled();
        let after = apply(Action::SearchWishlists, state.clone(), Ok(json!([])));
        assert_eq!(after.wishlist_results, Some(vec![]));
        assert_eq!(after.wishlist, state.wishlist);
    }

    #[test]
    fn test_create_item_defaults() {
        let mut state = filled();
        state.item.product_id = "11".into();
        let plan = plan(Action::CreateItem, &state, NOW);
        let request = plan.request.unwrap();
        assert_eq!(request.path, "/wishlists/7/items");
        assert_eq!(
            request.body,
            Some(json!({"name": "Lamp", "product_id": 11, "quantity": 1, "price": 100}))
        );
    }

    #[test]
    fn test_create_item_coerces_given_values() {
        let mut state = filled();
        state.item.product_id = "11".into();
        state.item.quantity = "3".into();
        state.item.price = "250abc".into();
        let body = plan(Action::CreateItem, &state, NOW).request.unwrap().body.unwrap();
        assert_eq!(body["quantity"], 3);
        assert_eq!(body["price"], 250);
    }

    #[test]
    fn test_create_item_populates_item_fields() {
        let response = json!({
            "id": 5, "wishlist_id": 7, "name": "Lamp", "product_id": 11, "quantity": 1, "price": 100
        });
        let after = apply(Action::CreateItem, filled(), Ok(response));
        assert_eq!(after.item.id, "5");
        assert_eq!(after.item.product_id, "11");
        assert_eq!(after.item.price, "100");
        assert_eq!(after.flash, "Success");
    }

    #[test]
    fn test_update_item_request() {
        let mut state = filled();
        state.item.quantity = "4".into();
        let request = plan(Action::UpdateItem, &state, NOW).request.unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/wishlists/7/items/5");
        assert_eq!(request.body, Some(json!({"name": "Lamp", "quantity": 4})));
    }

    #[test]
    fn test_retrieve_item_failure_clears_form() {
        let after = apply(Action::RetrieveItem, filled(), Err(ApiError::Network("offline".into())));
        assert_eq!(after.item, Default::default());
        assert_eq!(after.wishlist, Default::default());
        assert_eq!(after.flash, "Server error!");
    }

    #[test]
    fn test_delete_item() {
        let request = plan(Action::DeleteItem, &filled(), NOW).request.unwrap();
        assert_eq!(request, ApiRequest::delete("/wishlists/7/items/5".into()));

        let after = apply(Action::DeleteItem, filled(), Ok(Value::Null));
        assert_eq!(after.item, Default::default());
        assert_eq!(after.wishlist, Default::default());
        assert_eq!(after.flash, ITEM_DELETED);
    }

    #[test]
    fn test_search_items_query_choice() {
        let by_id = plan(Action::SearchItems, &filled(), NOW);
        assert_eq!(by_id.request.unwrap().path, "/wishlists/7/items/5");

        let mut state = filled();
        state.item.id.clear();
        let by_name = plan(Action::SearchItems, &state, NOW);
        assert_eq!(by_name.request.unwrap().path, "/wishlists/7/items?name=Lamp");

        state.item.name.clear();
        let all = plan(Action::SearchItems, &state, NOW);
        assert_eq!(all.request.unwrap().path, "/wishlists/7/items");
    }

    #[test]
    fn test_search_items_renders_rows() {
        let response = json!([
            {"id": 5, "name": "Lamp", "product_id": 11, "quantity": 1, "price": 100, "created_on": "t"},
            {"id": 6, "name": "Desk", "product_id": 12, "quantity": 2, "price": 300, "created_on": "t"}
        ]);
        let after = apply(Action::SearchItems, ViewState::default(), Ok(response));
        assert_eq!(after.item_results.as_ref().map(Vec::len), Some(2));
        assert_eq!(after.item.name, "Lamp");
    }

    #[test]
    fn test_update_wishlist_request() {
        let mut state = filled();
        state.wishlist.name = "Holiday".into();
        let plan = plan(Action::UpdateWishlist, &state, NOW);
        let request = plan.request.unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/wishlists/7");
        assert_eq!(request.body, Some(json!({"name": "Holiday"})));
        assert!(plan.detached.is_empty());
    }

    #[test]
    fn test_update_wishlist_outcomes() {
        let response = json!({
            "id": 7, "name": "Holiday", "customer_id": 42, "created_on": "2024-01-01T00:00:00Z"
        });
        let ok = apply(Action::UpdateWishlist, filled(), Ok(response));
        assert_eq!(ok.wishlist.id, "7");
        assert_eq!(ok.wishlist.name, "Holiday");
        assert_eq!(ok.wishlist.customer_id, "42");
        assert_eq!(ok.wishlist.created_on, "2024-01-01T00:00:00Z");
        assert_eq!(ok.flash, "Success");

        let state = filled();
        let failed = apply(Action::UpdateWishlist, state.clone(), Err(not_found()));
        assert_eq!(failed.wishlist, state.wishlist);
        assert_eq!(failed.flash, "not found");
    }

    #[test]
    fn test_retrieve_item_request_and_success() {
        let request = plan(Action::RetrieveItem, &filled(), NOW).request.unwrap();
        assert_eq!(request, ApiRequest::get("/wishlists/7/items/5".into()));

        let response = json!({
            "id": 5, "wishlist_id": 7, "name": "Lamp", "product_id": 11, "quantity": 2, "price": 30
        });
        let state = filled();
        let after = apply(Action::RetrieveItem, state.clone(), Ok(response));
        assert_eq!(after.item.id, "5");
        assert_eq!(after.item.name, "Lamp");
        assert_eq!(after.item.product_id, "11");
        assert_eq!(after.item.quantity, "2");
        assert_eq!(after.item.price, "30");
        assert_eq!(after.wishlist, state.wishlist);
        assert_eq!(after.flash, "Success");
    }

    #[test]
    fn test_update_item_populates_fields() {
        let response = json!({
            "id": 5, "wishlist_id": 7, "name": "Desk lamp", "product_id": 11, "quantity": 4, "price": 30
        });
        let after = apply(Action::UpdateItem, filled(), Ok(response));
        assert_eq!(after.item.name, "Desk lamp");
        assert_eq!(after.item.quantity, "4");
        assert_eq!(after.item.price, "30");
        assert_eq!(after.wishlist.id, "7");
        assert_eq!(after.flash, "Success");

        let failed = apply(Action::UpdateItem, filled(), Err(not_found()));
        assert_eq!(failed.item.name, "Lamp");
        assert_eq!(failed.flash, "not found");
    }

    #[test]
    fn test_search_whitespace_fields_count_as_empty() {
        let mut state = filled();
        state.wishlist.id = "  ".into();
        state.wishlist.customer_id = "\t".into();
        let all = plan(Action::SearchWishlists, &state, NOW);
        assert_eq!(all.request.unwrap().path, "/wishlists");

        state.wishlist.id = "7".into();
        state.item.id = " ".into();
        let by_name = plan(Action::SearchItems, &state, NOW);
        assert_eq!(by_name.request.unwrap().path, "/wishlists/7/items?name=Lamp");
    }

    #[test]
    fn test_unexpected_body_is_generic_error() {
        let after = apply(Action::RetrieveWishlist, filled(), Ok(json!("nope")));
        assert_eq!(after.flash, "Server error!");
    }
}
