//! Shopping cart feature.
//!
//! Items merge by id, quantities never drop below 1 (only `REMOVE_ITEM`
//! takes an item out), and the discount is one of a fixed set of
//! percentages.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::{CartAction, Product};
pub use reducer::CartReducer;
pub use state::{sample_products, CartItem, CartState, Discount, InvalidDiscount};
