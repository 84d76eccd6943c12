//! Depth timing probe on the built-in market.
//!
//! Purpose
//! - Give concrete numbers for "how many nodes and how long does a bounded
//!   search take at depth d", with and without the order restriction, so the
//!   CLI defaults can be picked from data rather than guesses.
//!
//! Run with `cargo run --release --example depth_probe -- <max_depth>`.

use std::time::Instant;

use barter::api::*;

fn main() {
    let max_depth: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);
    let p = Problem::from_catalogue(&Catalogue::builtin()).expect("built-in market is valid");
    let start = p.default_start();
    println!(
        "resources={} offers={} single_use={}",
        p.graph.resource_count(),
        p.graph.offer_id_bound(),
        p.graph.single_use_count()
    );
    for mode in [RestrictionMode::Off, RestrictionMode::Discovered] {
        for depth in 1..=max_depth {
            let cfg = SearchCfg {
                budget: DepthBudget::Fixed(depth),
                restriction: mode,
            };
            let t0 = Instant::now();
            let out = search(&p.graph, &start, cfg, &mut Silent);
            let ms = t0.elapsed().as_secs_f64() * 1e3;
            println!(
                "restriction={mode:?} depth={depth} best={} nodes={} time_ms={ms:.3}",
                out.best.count, out.nodes
            );
        }
    }
}
