//! Depth-first search with scoped apply/undo and incumbent tracking.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::graph::{Graph, ResourceId};

use super::types::{BestResult, DepthBudget, RestrictionMode, SearchCfg, SearchOutcome, SearchState};

/// Receives new incumbents and may stop the search.
///
/// `should_stop` is polled at every node; returning `true` unwinds the DFS
/// through all pending guards, leaving the incumbent valid.
pub trait Observer {
    fn on_best(&mut self, best: &BestResult) {
        let _ = best;
    }

    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {}

impl<F: FnMut(&BestResult)> Observer for F {
    fn on_best(&mut self, best: &BestResult) {
        self(best)
    }
}

/// Run one bounded search from `start`.
///
/// The start state is cloned with its move count reset to zero; the
/// restriction configured in `cfg` replaces whatever restriction `start`
/// carries. Each new maximum of the single-use count is reported to `obs` as
/// it is found. Panics if `start` does not cover every resource of `graph`.
pub fn search<O: Observer>(
    graph: &Graph,
    start: &SearchState,
    cfg: SearchCfg,
    obs: &mut O,
) -> SearchOutcome {
    assert_eq!(
        start.inventory().len(),
        graph.resource_count(),
        "start state was built for a different graph"
    );
    let mut state = start.clone();
    // A witness from an earlier search may be passed back in as the start.
    state.moves = 0;
    state.restrict(cfg.restriction, graph.currency());
    let mut runner = DfsRunner::new(graph, cfg, &state, obs);
    runner.recur(&mut state);
    debug_assert_eq!(state.moves(), 0, "search left the state mutated");
    tracing::debug!(
        best = runner.best.count,
        nodes = runner.nodes,
        cancelled = runner.stopped,
        "search finished"
    );
    SearchOutcome {
        best: runner.best,
        nodes: runner.nodes,
        cancelled: runner.stopped,
    }
}

/// One step of a depth sweep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SweepRow {
    pub depth: usize,
    pub outcome: SearchOutcome,
}

/// Independent fixed-budget searches over `depths`, in increasing order.
///
/// Each step owns a fresh copy of `start`. Stops after the first step whose
/// best reaches `target` (if given) or that was cancelled.
pub fn sweep<O: Observer>(
    graph: &Graph,
    start: &SearchState,
    restriction: RestrictionMode,
    depths: RangeInclusive<usize>,
    target: Option<usize>,
    obs: &mut O,
) -> Vec<SweepRow> {
    let mut rows = Vec::new();
    for depth in depths {
        let cfg = SearchCfg {
            budget: DepthBudget::Fixed(depth),
            restriction,
        };
        let outcome = search(graph, start, cfg, obs);
        tracing::debug!(depth, best = outcome.best.count, nodes = outcome.nodes, "sweep step");
        let done = outcome.cancelled || target.is_some_and(|t| outcome.best.count >= t);
        rows.push(SweepRow { depth, outcome });
        if done {
            break;
        }
    }
    rows
}

/// DFS runner carrying shared context and accumulators.
struct DfsRunner<'a, O> {
    g: &'a Graph,
    cfg: SearchCfg,
    best: BestResult,
    nodes: u64,
    stopped: bool,
    obs: &'a mut O,
}

impl<'a, O: Observer> DfsRunner<'a, O> {
    fn new(g: &'a Graph, cfg: SearchCfg, start: &SearchState, obs: &'a mut O) -> Self {
        Self {
            g,
            cfg,
            best: BestResult {
                count: 0,
                state: start.clone(),
            },
            nodes: 0,
            stopped: false,
            obs,
        }
    }

    fn recur(&mut self, state: &mut SearchState) {
        self.nodes += 1;
        if state.used_count() > self.best.count {
            self.best = BestResult {
                count: state.used_count(),
                state: state.clone(),
            };
            self.obs.on_best(&self.best);
        }
        if self.stopped || self.obs.should_stop() {
            self.stopped = true;
            return;
        }
        if state.moves() >= self.cfg.budget.limit(state.used_count()) {
            return;
        }
        let g = self.g;
        // Descending resource id; offers in insertion order.
        for r in (0..g.resource_count()).rev() {
            let r = ResourceId(r);
            if state.units(r) == 0 {
                continue;
            }
            for offer in g.outgoing(r) {
                let Some(mut applied) = state.try_apply(offer) else {
                    continue;
                };
                self.recur(applied.state_mut());
                if self.stopped {
                    return;
                }
            }
        }
    }
}
