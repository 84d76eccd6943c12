//! Offer catalogue: the market as plain listings.
//!
//! A listing reads "get `object` for `price`". Sell-side listings trade goods
//! for goods (or currency for goods); buy-side listings are one-time orders
//! paying currency for a good. The core does not care which list a listing
//! came from: use classes are derived from whether the object is the currency.
//!
//! Offer ids are positions in `buy ++ sell`.

mod builtin;
pub mod rand;

use serde::{Deserialize, Serialize};

/// A quantity of a named resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    pub name: String,
    pub count: u64,
}

impl Lot {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Receive `object` by paying `price`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub object: Lot,
    pub price: Lot,
}

impl Listing {
    pub fn new(object: (&str, u64), price: (&str, u64)) -> Self {
        Self {
            object: Lot::new(object.0, object.1),
            price: Lot::new(price.0, price.1),
        }
    }
}

/// Full market description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub currency: String,
    #[serde(default)]
    pub sell: Vec<Listing>,
    #[serde(default)]
    pub buy: Vec<Listing>,
}

impl Catalogue {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            sell: Vec::new(),
            buy: Vec::new(),
        }
    }

    /// The reference market shipped with the crate (currency `"g"`).
    pub fn builtin() -> Self {
        builtin::market()
    }

    /// Listings in offer-id order (`buy ++ sell`).
    pub fn listings(&self) -> impl Iterator<Item = &Listing> {
        self.buy.iter().chain(self.sell.iter())
    }

    pub fn len(&self) -> usize {
        self.buy.len() + self.sell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buy.is_empty() && self.sell.is_empty()
    }
}
