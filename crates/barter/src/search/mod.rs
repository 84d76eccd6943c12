//! Backtracking search over offer applications.
//!
//! Purpose
//! - Explore every chain of offers from a start state up to a depth budget and
//!   keep the state that fulfilled the most single-use offers.
//!
//! Design
//! - One `SearchState` per search, mutated in place. Each application returns
//!   a guard that undoes it on drop, so every frame restores exactly what it
//!   changed no matter how it exits.
//! - Repeatable offers are applied at maximum multiplicity in one move; the
//!   search never branches on smaller multiplicities.
//! - Pruning knobs are configuration on one engine: depth budget policy
//!   (`DepthBudget`), order restriction (`RestrictionMode`), and a resumption
//!   mask carried by the start state.
//! - Progress goes to an explicit `Observer`, which may also stop the search.
//!
//! Layout
//! - `bits.rs`: growable bitset.
//! - `types.rs`: state, config, results.
//! - `apply.rs`: scoped application guard.
//! - `dfs.rs`: DFS runner and depth sweep.

mod apply;
mod bits;
mod dfs;
mod types;

pub use apply::Applied;
pub use bits::BitSet;
pub use dfs::{search, sweep, Observer, Silent, SweepRow};
pub use types::{
    BestResult, DepthBudget, Restriction, RestrictionMode, SearchCfg, SearchOutcome, SearchState,
};
