//! Depth-bounded search over offer chains.
//!
//! A market is a list of offers converting one resource into another. Offers
//! that pay out the currency are single-use; everything else may be repeated.
//! Starting from a fixed inventory, the search explores chains of offers and
//! keeps the state that fulfilled the most single-use offers.
//!
//! Layout
//! - `dict`: name ↔ dense id interning.
//! - `catalogue`: listing data (built-in market, JSON shape, seeded sampler).
//! - `graph`: conversion graph plus auxiliary analyses.
//! - `problem`: assembly of dictionary, graph and start state from a catalogue.
//! - `search`: search state, scoped offer application, DFS and depth sweeps.

pub mod api;
pub mod catalogue;
pub mod dict;
pub mod graph;
pub mod problem;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use catalogue::Catalogue;
pub use graph::{Graph, Offer, OfferId, ResourceId, UseClass};
pub use problem::{Problem, SetupError, StartSpec};
pub use search::{BestResult, DepthBudget, RestrictionMode, SearchCfg, SearchState};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalogue::{Catalogue, Listing, Lot};
    pub use crate::graph::{Graph, Offer, OfferId, ResourceId, UseClass};
    pub use crate::problem::{Problem, StartSpec};
    pub use crate::search::{
        search, sweep, BestResult, DepthBudget, Observer, RestrictionMode, SearchCfg,
        SearchOutcome, SearchState,
    };
}
