//! State for the shopping cart.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::mvi::ReducerState;

use super::action::Product;

/// A line in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

/// Stored lines with quantity 0 are rejected, so such a cart hydrates to the
/// default instead of breaking the quantity floor.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = u32::deserialize(deserializer)?;
    if quantity == 0 {
        return Err(de::Error::custom("quantity must be at least 1"));
    }
    Ok(quantity)
}

impl CartItem {
    /// New line for `product` with quantity 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: 1,
        }
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Discount percentage. Only the offered codes exist.
///
/// Serialized as the bare percentage (`0`, `10`, `20`, `50`); any other
/// number fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Discount {
    #[default]
    None,
    Ten,
    Twenty,
    Fifty,
}

/// Error for a percentage outside the offered set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid discount '{0}': expected one of 0, 10, 20, 50")]
pub struct InvalidDiscount(pub String);

impl Discount {
    /// All offered discounts, in display order.
    pub const ALL: [Discount; 4] = [Self::None, Self::Ten, Self::Twenty, Self::Fifty];

    pub fn percent(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<u8> for Discount {
    type Error = InvalidDiscount;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.percent() == percent)
            .ok_or_else(|| InvalidDiscount(percent.to_string()))
    }
}

impl From<Discount> for u8 {
    fn from(discount: Discount) -> Self {
        discount.percent()
    }
}

impl FromStr for Discount {
    type Err = InvalidDiscount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        let percent: u8 = trimmed.parse().map_err(|_| InvalidDiscount(s.to_string()))?;
        Self::try_from(percent)
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Cart state: lines, applied discount and a free-form note.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub discount: Discount,
    #[serde(default)]
    pub note: String,
}

impl ReducerState for CartState {}

impl CartState {
    /// The lesson's starting cart: two lines, no discount.
    pub fn sample() -> Self {
        Self {
            items: vec![
                CartItem {
                    id: 1,
                    name: "iPhone 16".to_string(),
                    price: 999.0,
                    quantity: 1,
                },
                CartItem {
                    id: 2,
                    name: "AirPods Pro".to_string(),
                    price: 249.0,
                    quantity: 2,
                },
            ],
            discount: Discount::None,
            note: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Products offered for adding to the cart.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 3,
            name: "Magic Keyboard".to_string(),
            price: 299.0,
        },
        Product {
            id: 4,
            name: "Magic Mouse".to_string(),
            price: 99.0,
        },
        Product {
            id: 5,
            name: "Studio Display".to_string(),
            price: 1599.0,
        },
    ]
}
