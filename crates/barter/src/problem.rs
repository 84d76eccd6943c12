//! Problem assembly: dictionary, graph and start state from a catalogue.
//!
//! All validation happens here, before any search starts. Once a `Problem`
//! exists its graph is complete and never changes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::dict::Dictionary;
use crate::graph::{End, Graph, Offer, OfferId, ResourceId, UseClass};
use crate::search::{BitSet, SearchState};

/// Currency units in the default start inventory.
pub const DEFAULT_CURRENCY_UNITS: u64 = 10;

/// Errors surfaced while building a problem or its start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The catalogue names no currency.
    EmptyCurrency,
    /// A listing has a zero quantity on either side.
    ZeroQuantity { offer: OfferId },
    /// A start inventory names a resource absent from the catalogue.
    UnknownResource(String),
    /// A resumption mask names an offer id that does not exist.
    UnknownOffer(OfferId),
    /// A resumption mask names a repeatable offer.
    RepeatableInMask(OfferId),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyCurrency => write!(f, "catalogue has an empty currency name"),
            SetupError::ZeroQuantity { offer } => {
                write!(f, "offer #{} has a zero quantity", offer.0)
            }
            SetupError::UnknownResource(name) => {
                write!(f, "resource {name:?} does not appear in the catalogue")
            }
            SetupError::UnknownOffer(id) => write!(f, "offer #{} does not exist", id.0),
            SetupError::RepeatableInMask(id) => write!(
                f,
                "offer #{} is repeatable and cannot be marked as used",
                id.0
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Where a search starts.
///
/// Deserializes from the `StateView` JSON written for a best result, so a
/// previous witness can be fed back in to resume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartSpec {
    /// Units per resource name, zero elsewhere. `None`: the default currency amount.
    pub inventory: Option<BTreeMap<String, u64>>,
    /// Single-use offers already fulfilled.
    pub used: Vec<usize>,
}

/// Named, serializable view of a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateView {
    pub moves: usize,
    pub used_count: usize,
    pub used: Vec<usize>,
    /// Nonzero holdings only.
    pub inventory: BTreeMap<String, u64>,
}

/// Interned market ready to search.
#[derive(Clone, Debug)]
pub struct Problem {
    pub dict: Dictionary,
    pub graph: Graph,
}

impl Problem {
    /// Intern the currency first, then every listing's names in offer-id
    /// order, and build the graph with edges price → object.
    pub fn from_catalogue(cat: &Catalogue) -> Result<Self, SetupError> {
        if cat.currency.is_empty() {
            return Err(SetupError::EmptyCurrency);
        }
        let mut dict = Dictionary::new();
        let currency = dict.intern(&cat.currency);
        let mut ends = Vec::with_capacity(cat.len());
        for (i, l) in cat.listings().enumerate() {
            if l.object.count == 0 || l.price.count == 0 {
                return Err(SetupError::ZeroQuantity { offer: OfferId(i) });
            }
            let object = End::new(dict.intern(&l.object.name), l.object.count);
            let price = End::new(dict.intern(&l.price.name), l.price.count);
            ends.push((price, object));
        }
        let mut graph = Graph::with_resources(dict.len(), currency);
        for (i, (from, to)) in ends.into_iter().enumerate() {
            graph.add(Offer::new(OfferId(i), from, to, currency));
        }
        Ok(Self { dict, graph })
    }

    #[inline]
    pub fn currency(&self) -> ResourceId {
        self.graph.currency()
    }

    /// Build the start state described by `spec`.
    pub fn start(&self, spec: &StartSpec) -> Result<SearchState, SetupError> {
        let mut inventory = vec![0u64; self.dict.len()];
        match &spec.inventory {
            None => inventory[self.currency().0] = DEFAULT_CURRENCY_UNITS,
            Some(units) => {
                for (name, &n) in units {
                    let id = self
                        .dict
                        .get(name)
                        .ok_or_else(|| SetupError::UnknownResource(name.clone()))?;
                    inventory[id.0] = n;
                }
            }
        }
        let mut used = BitSet::with_width(self.graph.offer_id_bound());
        for &i in &spec.used {
            let id = OfferId(i);
            let offer = self.graph.offer(id).ok_or(SetupError::UnknownOffer(id))?;
            if offer.class != UseClass::SingleUse {
                return Err(SetupError::RepeatableInMask(id));
            }
            used.insert(i);
        }
        Ok(SearchState::new(inventory, used))
    }

    /// Default start: the default currency amount and an empty mask.
    pub fn default_start(&self) -> SearchState {
        let mut inventory = vec![0u64; self.dict.len()];
        inventory[self.currency().0] = DEFAULT_CURRENCY_UNITS;
        SearchState::new(inventory, BitSet::with_width(self.graph.offer_id_bound()))
    }

    fn name(&self, r: ResourceId) -> &str {
        // Every graph resource was interned by `from_catalogue`.
        self.dict.name_of(r).unwrap_or("?")
    }

    pub fn describe(&self, state: &SearchState) -> StateView {
        let inventory = state
            .inventory()
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .map(|(i, &n)| (self.name(ResourceId(i)).to_string(), n))
            .collect();
        StateView {
            moves: state.moves(),
            used_count: state.used_count(),
            used: state.used().iter().collect(),
            inventory,
        }
    }

    /// `(2x g) -#0-> (1x Hand Axe)`
    pub fn describe_offer(&self, o: &Offer) -> String {
        format!(
            "({}x {}) -#{}-> ({}x {})",
            o.from.units,
            self.name(o.from.res),
            o.id.0,
            o.to.units,
            self.name(o.to.res)
        )
    }
}
