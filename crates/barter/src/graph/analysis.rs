//! Auxiliary graph analyses: elimination order, transpose, and
//! multiplicative path costs.
//!
//! None of these are needed by the DFS itself; they are used to inspect a
//! market (which goods sit upstream of the currency, how expensive a good is
//! to reach in price units).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use super::types::{Graph, ResourceId};

/// Cost of the cheapest chain reaching a resource from the root.
///
/// Ordered by `cost`, then `modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PathCost {
    /// Product of price quantities along the chain (saturating).
    pub cost: u64,
    /// Last nonzero price quantity on the chain; 0 at the root.
    pub modulus: u64,
}

impl PathCost {
    pub const ROOT: PathCost = PathCost { cost: 1, modulus: 0 };

    fn extend(self, price_units: u64) -> PathCost {
        PathCost {
            cost: self.cost.saturating_mul(price_units),
            modulus: if price_units != 0 {
                price_units
            } else {
                self.modulus
            },
        }
    }
}

impl Graph {
    /// Resources ordered by out-degree elimination.
    ///
    /// Sinks seed a LIFO worklist; emitting a resource decrements the
    /// out-degree of every source feeding it. Resources on cycles never reach
    /// zero and are left out of the result.
    pub fn topological_order(&self) -> Vec<ResourceId> {
        let mut out_deg: Vec<usize> = self.nodes.iter().map(|n| n.out.len()).collect();
        let mut work: Vec<ResourceId> = out_deg
            .iter()
            .enumerate()
            .filter(|(_, &d)| d == 0)
            .map(|(i, _)| ResourceId(i))
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = work.pop() {
            order.push(id);
            for e in &self.nodes[id.0].inc {
                let d = &mut out_deg[e.from.res.0];
                *d -= 1;
                if *d == 0 {
                    work.push(e.from.res);
                }
            }
        }
        order
    }

    /// Graph with every edge reversed. Offer ids and use classes are kept.
    pub fn transpose(&self) -> Graph {
        let mut g = self.clone();
        for n in g.nodes.iter_mut() {
            std::mem::swap(&mut n.out, &mut n.inc);
            for e in n.out.iter_mut().chain(n.inc.iter_mut()) {
                std::mem::swap(&mut e.from, &mut e.to);
            }
        }
        for e in g.by_id.iter_mut().flatten() {
            std::mem::swap(&mut e.from, &mut e.to);
        }
        g
    }

    /// Cheapest multiplicative cost from `root` to every reachable resource.
    ///
    /// Best-first search keyed by `(cost, modulus)`; each edge multiplies the
    /// cost by its price quantity. Entry `i` is `None` when resource `i` is
    /// unreachable.
    pub fn shortest_multiplicative_path(&self, root: ResourceId) -> Vec<Option<PathCost>> {
        let mut best: Vec<Option<PathCost>> = vec![None; self.nodes.len()];
        let mut done = vec![false; self.nodes.len()];
        let mut heap = BinaryHeap::new();
        best[root.0] = Some(PathCost::ROOT);
        heap.push(Reverse((PathCost::ROOT, root)));
        while let Some(Reverse((pc, id))) = heap.pop() {
            if done[id.0] {
                continue;
            }
            done[id.0] = true;
            for e in &self.nodes[id.0].out {
                if done[e.to.res.0] {
                    continue;
                }
                let cand = pc.extend(e.from.units);
                let slot = &mut best[e.to.res.0];
                if slot.map_or(true, |cur| cand < cur) {
                    *slot = Some(cand);
                    heap.push(Reverse((cand, e.to.res)));
                }
            }
        }
        best
    }
}
