//! Search state, configuration and result types.

use std::fmt;

use serde::Serialize;

use crate::graph::ResourceId;

use super::bits::BitSet;

/// Maximum number of moves along one path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthBudget {
    /// Same limit everywhere.
    Fixed(usize),
    /// `used_count * per_single_use + base`, re-evaluated at every node, so
    /// paths that fulfil more single-use offers may run longer.
    Affine { per_single_use: usize, base: usize },
}

impl DepthBudget {
    #[inline]
    pub fn limit(&self, used_count: usize) -> usize {
        match *self {
            DepthBudget::Fixed(n) => n,
            DepthBudget::Affine {
                per_single_use,
                base,
            } => used_count.saturating_mul(per_single_use).saturating_add(base),
        }
    }
}

/// Which order restriction (if any) the search maintains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionMode {
    /// Full enumeration.
    #[default]
    Off,
    /// Scalar bound: resources with id `<= max` are allowed.
    MaxId,
    /// Explicit set of resources discovered so far.
    Discovered,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchCfg {
    pub budget: DepthBudget,
    pub restriction: RestrictionMode,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            budget: DepthBudget::Fixed(100),
            restriction: RestrictionMode::Off,
        }
    }
}

/// Live order restriction. Both flavors start at the currency alone and widen
/// to the endpoints of every applied offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    MaxId(ResourceId),
    Discovered(BitSet),
}

impl Restriction {
    pub fn start(mode: RestrictionMode, currency: ResourceId) -> Option<Self> {
        match mode {
            RestrictionMode::Off => None,
            RestrictionMode::MaxId => Some(Restriction::MaxId(currency)),
            RestrictionMode::Discovered => Some(Restriction::Discovered(BitSet::from_indices(
                currency.0 + 1,
                [currency.0],
            ))),
        }
    }

    #[inline]
    pub fn allows(&self, r: ResourceId) -> bool {
        match self {
            Restriction::MaxId(max) => r <= *max,
            Restriction::Discovered(set) => set.contains(r.0),
        }
    }
}

/// Mutable configuration explored by the DFS.
///
/// Mutated only through `SearchState::try_apply`, whose guard restores the
/// exact prior value on drop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub(crate) inventory: Vec<u64>,
    pub(crate) used: BitSet,
    pub(crate) used_count: usize,
    pub(crate) moves: usize,
    pub(crate) restriction: Option<Restriction>,
}

impl SearchState {
    /// State with the given per-resource inventory and already-used offers.
    ///
    /// `inventory` must have one entry per graph resource; outside the crate
    /// states come from `Problem::start`, which guarantees that.
    pub(crate) fn new(inventory: Vec<u64>, used: BitSet) -> Self {
        let used_count = used.count();
        Self {
            inventory,
            used,
            used_count,
            moves: 0,
            restriction: None,
        }
    }

    /// Install a fresh restriction of the given flavor (or remove it).
    pub fn restrict(&mut self, mode: RestrictionMode, currency: ResourceId) {
        self.restriction = Restriction::start(mode, currency);
    }

    #[inline]
    pub fn inventory(&self) -> &[u64] {
        &self.inventory
    }

    #[inline]
    pub fn units(&self, r: ResourceId) -> u64 {
        self.inventory[r.0]
    }

    /// Bitset of single-use offers applied on the current path.
    #[inline]
    pub fn used(&self) -> &BitSet {
        &self.used
    }

    #[inline]
    pub fn used_count(&self) -> usize {
        self.used_count
    }

    #[inline]
    pub fn moves(&self) -> usize {
        self.moves
    }

    #[inline]
    pub fn restriction(&self) -> Option<&Restriction> {
        self.restriction.as_ref()
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ moves = {}; used = {}; resources = {{",
            self.moves, self.used
        )?;
        for (i, x) in self.inventory.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("} }")
    }
}

/// Incumbent: the largest single-use count seen and the state achieving it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BestResult {
    pub count: usize,
    pub state: SearchState,
}

impl BestResult {
    /// Mask of the witness state.
    #[inline]
    pub fn mask(&self) -> &BitSet {
        &self.state.used
    }
}

/// Result of one bounded search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub best: BestResult,
    /// Number of DFS nodes visited (root included).
    pub nodes: u64,
    /// `true` if the observer stopped the search before exhaustion.
    pub cancelled: bool,
}
