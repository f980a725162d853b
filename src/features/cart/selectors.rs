//! Derived values for the shopping cart.

use super::state::{CartItem, CartState};

/// Sum of `price * quantity` over all lines.
pub fn subtotal(state: &CartState) -> f64 {
    // Folding from +0.0: an empty `f64` sum is -0.0.
    state
        .items
        .iter()
        .fold(0.0, |acc, item| acc + item.line_total())
}

/// Amount taken off the subtotal by the applied discount.
pub fn discount_amount(state: &CartState) -> f64 {
    subtotal(state) * f64::from(state.discount.percent()) / 100.0
}

/// Amount due: subtotal minus discount.
pub fn total(state: &CartState) -> f64 {
    subtotal(state) - discount_amount(state)
}

/// Number of units across all lines.
pub fn total_items(state: &CartState) -> u32 {
    state.items.iter().map(|item| item.quantity).sum()
}

pub fn find_item(state: &CartState, id: u64) -> Option<&CartItem> {
    state.items.iter().find(|item| item.id == id)
}
