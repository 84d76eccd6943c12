//! Scoped offer application.
//!
//! `SearchState::try_apply` mutates the state in place and hands back an
//! `Applied` guard. Dropping the guard (normal scope exit, early return, or
//! unwinding) performs the exact inverse, so the state compares equal to its
//! value before the call. The guard derefs to the state read-only; the only
//! mutation reachable through it is a nested `try_apply`, which hands out a
//! guard of its own.

use std::ops::Deref;

use crate::graph::{Offer, ResourceId};

use super::types::{Restriction, SearchState};

/// What an application did to the restriction, for exact undo.
#[derive(Clone, Copy, Debug)]
enum Widened {
    Nothing,
    MaxId { prev: ResourceId },
    Discovered { from: bool, to: bool },
}

/// Live application of one offer; undone on drop.
#[must_use = "the offer is undone as soon as the guard is dropped"]
pub struct Applied<'s> {
    state: &'s mut SearchState,
    offer: Offer,
    /// Multiplicity (1 for single-use offers).
    times: u64,
    widened: Widened,
}

impl Applied<'_> {
    #[inline]
    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    #[inline]
    pub fn times(&self) -> u64 {
        self.times
    }

    /// Apply another offer on top of this one; see `SearchState::try_apply`.
    #[inline]
    pub fn try_apply(&mut self, offer: &Offer) -> Option<Applied<'_>> {
        self.state.try_apply(offer)
    }

    /// Mutable view for the DFS, which only recurses through `try_apply`.
    #[inline]
    pub(crate) fn state_mut(&mut self) -> &mut SearchState {
        &mut *self.state
    }
}

impl SearchState {
    /// Apply `offer` if it is applicable; `None` leaves the state untouched.
    ///
    /// Checks, in order: the price is affordable, a single-use offer is not
    /// already used, and (with a restriction active) at least one endpoint is
    /// allowed. Repeatable offers are applied at their maximum affordable
    /// multiplicity. An application whose yield would overflow is refused.
    pub fn try_apply(&mut self, offer: &Offer) -> Option<Applied<'_>> {
        let (from, to) = (offer.from.res, offer.to.res);
        let got = self.inventory[from.0];
        if got < offer.from.units {
            return None;
        }
        let single = offer.is_single_use();
        if single && self.used.contains(offer.id.0) {
            return None;
        }
        if let Some(r) = &self.restriction {
            if !r.allows(from) && !r.allows(to) {
                return None;
            }
        }
        let times = if single { 1 } else { got / offer.from.units };
        let cost = offer.from.units * times;
        let gain = offer.to.units.checked_mul(times)?;
        let to_before = if from == to {
            got - cost
        } else {
            self.inventory[to.0]
        };
        to_before.checked_add(gain)?;

        self.inventory[from.0] -= cost;
        self.inventory[to.0] += gain;
        if single {
            self.used.insert(offer.id.0);
            self.used_count += 1;
        }
        self.moves += 1;
        let widened = match &mut self.restriction {
            None => Widened::Nothing,
            Some(Restriction::MaxId(max)) => {
                let prev = *max;
                *max = prev.max(from).max(to);
                Widened::MaxId { prev }
            }
            Some(Restriction::Discovered(set)) => Widened::Discovered {
                from: set.insert(from.0),
                to: set.insert(to.0),
            },
        };
        Some(Applied {
            state: self,
            offer: *offer,
            times,
            widened,
        })
    }
}

impl Drop for Applied<'_> {
    fn drop(&mut self) {
        let s = &mut *self.state;
        let o = &self.offer;
        match (&mut s.restriction, self.widened) {
            (Some(Restriction::MaxId(max)), Widened::MaxId { prev }) => *max = prev,
            (Some(Restriction::Discovered(set)), Widened::Discovered { from, to }) => {
                if to {
                    set.remove(o.to.res.0);
                }
                if from {
                    set.remove(o.from.res.0);
                }
            }
            _ => {}
        }
        s.moves -= 1;
        if o.is_single_use() {
            s.used.remove(o.id.0);
            s.used_count -= 1;
        }
        s.inventory[o.to.res.0] -= o.to.units * self.times;
        s.inventory[o.from.res.0] += o.from.units * self.times;
    }
}

impl Deref for Applied<'_> {
    type Target = SearchState;

    fn deref(&self) -> &SearchState {
        &*self.state
    }
}

