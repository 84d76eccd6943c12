//! Conversion graph: resources as nodes, offers as edges.
//!
//! Purpose
//! - Hold every offer of a market twice, by paying resource (outgoing) and by
//!   yielded resource (incoming), so the DFS can enumerate what a resource
//!   buys and the analyses can walk edges backwards.
//! - Classify offers structurally: an offer yielding the currency is
//!   single-use, everything else is repeatable.
//!
//! Layout
//! - `types.rs`: ids, offers, the graph container.
//! - `analysis.rs`: elimination order, transpose, multiplicative path costs.
//!
//! The graph is built once (see `problem::Problem::from_catalogue`) and is
//! read-only for the duration of any search.

mod analysis;
mod types;

pub use analysis::PathCost;
pub use types::{End, Graph, Node, Offer, OfferId, ResourceId, UseClass};

#[cfg(test)]
mod tests;
