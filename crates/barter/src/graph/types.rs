//! Data types for the conversion graph.
//!
//! Kept small and explicit; all ids are dense indices.

use serde::{Deserialize, Serialize};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OfferId(pub usize);

/// Whether an offer may be repeated or fulfilled at most once per path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseClass {
    Repeatable,
    SingleUse,
}

/// One side of an offer: a resource and a strictly positive quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct End {
    pub res: ResourceId,
    pub units: u64,
}

impl End {
    #[inline]
    pub fn new(res: ResourceId, units: u64) -> Self {
        Self { res, units }
    }
}

/// Conversion edge: pay `from`, receive `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offer {
    pub id: OfferId,
    pub from: End,
    pub to: End,
    pub class: UseClass,
}

impl Offer {
    /// Build an offer, classifying it against the currency: anything paying out
    /// the currency is single-use.
    pub fn new(id: OfferId, from: End, to: End, currency: ResourceId) -> Self {
        let class = if to.res == currency {
            UseClass::SingleUse
        } else {
            UseClass::Repeatable
        };
        Self {
            id,
            from,
            to,
            class,
        }
    }

    #[inline]
    pub fn is_single_use(&self) -> bool {
        self.class == UseClass::SingleUse
    }
}

/// Adjacency of one resource.
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub out: Vec<Offer>,
    pub inc: Vec<Offer>,
}

/// Conversion graph over a fixed resource set.
///
/// Offers are stored twice (outgoing by source, incoming by destination), in
/// insertion order. Offer ids are never renumbered once added.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) by_id: Vec<Option<Offer>>,
    pub(crate) currency: ResourceId,
    pub(crate) single_use: usize,
}

impl Graph {
    /// Empty graph over `resources` vertices. Panics if the currency is out of range.
    pub fn with_resources(resources: usize, currency: ResourceId) -> Self {
        assert!(
            currency.0 < resources,
            "currency id {} outside vertex range 0..{resources}",
            currency.0
        );
        Self {
            nodes: vec![Node::default(); resources],
            by_id: Vec::new(),
            currency,
            single_use: 0,
        }
    }

    /// Insert an offer into both adjacency indices.
    ///
    /// The vertex array must already cover both endpoints and the id must be
    /// fresh; violating either is a construction bug and panics.
    pub fn add(&mut self, offer: Offer) {
        let n = self.nodes.len();
        assert!(
            offer.from.res.0 < n && offer.to.res.0 < n,
            "offer {:?} references a resource outside 0..{n}",
            offer.id
        );
        if self.by_id.len() <= offer.id.0 {
            self.by_id.resize(offer.id.0 + 1, None);
        }
        assert!(
            self.by_id[offer.id.0].is_none(),
            "offer id {:?} added twice",
            offer.id
        );
        self.by_id[offer.id.0] = Some(offer);
        if offer.is_single_use() {
            self.single_use += 1;
        }
        self.nodes[offer.from.res.0].out.push(offer);
        self.nodes[offer.to.res.0].inc.push(offer);
    }

    /// Offers paying with `res`, in insertion order.
    #[inline]
    pub fn outgoing(&self, res: ResourceId) -> &[Offer] {
        &self.nodes[res.0].out
    }

    /// Offers yielding `res`, in insertion order.
    #[inline]
    pub fn incoming(&self, res: ResourceId) -> &[Offer] {
        &self.nodes[res.0].inc
    }

    pub fn offer(&self, id: OfferId) -> Option<&Offer> {
        self.by_id.get(id.0).and_then(Option::as_ref)
    }

    /// All offers in id order.
    pub fn offers(&self) -> impl Iterator<Item = &Offer> {
        self.by_id.iter().flatten()
    }

    #[inline]
    pub fn resource_count(&self) -> usize {
        self.nodes.len()
    }

    /// One past the largest offer id; the width a used-offer mask must cover.
    #[inline]
    pub fn offer_id_bound(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn single_use_count(&self) -> usize {
        self.single_use
    }

    #[inline]
    pub fn currency(&self) -> ResourceId {
        self.currency
    }
}
