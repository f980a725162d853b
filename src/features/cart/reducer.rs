//! Reducer for the shopping cart.

use crate::mvi::Reducer;

use super::action::CartAction;
use super::state::{CartItem, CartState, Discount};

/// Reducer for cart state transitions.
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CartAction::AddItem(product) => {
                if !product.price.is_finite() {
                    return state;
                }
                let mut items = state.items;
                match items.iter_mut().find(|item| item.id == product.id) {
                    Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
                    None => items.push(CartItem::from_product(product)),
                }
                CartState { items, ..state }
            }

            CartAction::Increment(id) => CartState {
                items: update_quantity(state.items, id, |q| q.saturating_add(1)),
                ..state
            },

            // Floors at 1: only REMOVE_ITEM takes a line out of the cart.
            CartAction::Decrement(id) => CartState {
                items: update_quantity(state.items, id, |q| q.saturating_sub(1).max(1)),
                ..state
            },

            CartAction::RemoveItem(id) => {
                let mut items = state.items;
                items.retain(|item| item.id != id);
                CartState { items, ..state }
            }

            CartAction::ApplyDiscount(discount) => CartState { discount, ..state },

            CartAction::SetNote(note) => CartState { note, ..state },

            CartAction::ClearCart => CartState {
                items: Vec::new(),
                discount: Discount::None,
                note: String::new(),
            },
        }
    }
}

fn update_quantity(mut items: Vec<CartItem>, id: u64, f: impl Fn(u32) -> u32) -> Vec<CartItem> {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.quantity = f(item.quantity);
    }
    items
}
