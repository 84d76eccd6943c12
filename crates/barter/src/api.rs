//! Curated internal API for the CLI, benches and examples (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for crates in this
//!   workspace. Breaking changes are allowed and expected.

// Market data
pub use crate::catalogue::rand::{draw_market, MarketCfg, ReplayToken};
pub use crate::catalogue::{Catalogue, Listing, Lot};
// Interning and assembly
pub use crate::dict::{DictError, Dictionary};
pub use crate::problem::{Problem, SetupError, StartSpec, StateView, DEFAULT_CURRENCY_UNITS};
// Graph
pub use crate::graph::{End, Graph, Offer, OfferId, PathCost, ResourceId, UseClass};
// Search
pub use crate::search::{
    search, sweep, Applied, BestResult, BitSet, DepthBudget, Observer, RestrictionMode,
    SearchCfg, SearchOutcome, SearchState, Silent, SweepRow,
};

/// Build a problem from `cat` and run one search from the default start.
pub fn solve_with_defaults(cat: &Catalogue, cfg: SearchCfg) -> Result<SearchOutcome, SetupError> {
    let p = Problem::from_catalogue(cat)?;
    let start = p.default_start();
    Ok(search(&p.graph, &start, cfg, &mut Silent))
}
