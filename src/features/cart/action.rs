//! Actions for the shopping cart.

use serde::{Deserialize, Serialize};

use crate::mvi::Action;

use super::state::Discount;

/// Catalog entry added to the cart by `ADD_ITEM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Actions that can be dispatched to the cart reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of a product, merging by id.
    AddItem(Product),
    /// Increase the quantity of an item by id.
    Increment(u64),
    /// Decrease the quantity of an item by id, never below 1.
    Decrement(u64),
    /// Drop an item by id.
    RemoveItem(u64),
    ApplyDiscount(Discount),
    SetNote(String),
    /// Empty the cart and reset discount and note.
    ClearCart,
}

impl Action for CartAction {}
