//! Criterion microbenches for the search engine (group "search").
//!
//! - Scoped apply/undo of a single offer.
//! - Full bounded DFS on the built-in market at a few depths.
//! - DFS on sampled markets, with and without the order restriction.
//!
//! Inputs are deterministic (built-in market, fixed replay tokens).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use barter::api::*;

fn builtin() -> Problem {
    Problem::from_catalogue(&Catalogue::builtin()).expect("built-in market is valid")
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let p = builtin();
    let mut state = p.default_start();
    let offers: Vec<Offer> = p.graph.outgoing(p.currency()).to_vec();
    group.bench_function("apply_undo_currency_offers", |b| {
        b.iter(|| {
            let mut applied = 0usize;
            for o in &offers {
                if let Some(g) = state.try_apply(o) {
                    applied += g.times() as usize;
                }
            }
            black_box(applied)
        })
    });
    group.finish();
}

fn bench_builtin_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    let p = builtin();
    let start = p.default_start();
    for depth in [3usize, 4, 5] {
        let cfg = SearchCfg {
            budget: DepthBudget::Fixed(depth),
            restriction: RestrictionMode::Off,
        };
        group.bench_with_input(BenchmarkId::new("builtin_dfs", depth), &cfg, |b, &cfg| {
            b.iter(|| black_box(search(&p.graph, &start, cfg, &mut Silent).best.count))
        });
    }
    group.finish();
}

fn bench_sampled_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let problems: Vec<Problem> = (0..16)
        .map(|i| {
            let cat = draw_market(MarketCfg::default(), ReplayToken::new(2024, i));
            Problem::from_catalogue(&cat).expect("sampled markets are valid")
        })
        .collect();
    for mode in [
        RestrictionMode::Off,
        RestrictionMode::MaxId,
        RestrictionMode::Discovered,
    ] {
        let cfg = SearchCfg {
            budget: DepthBudget::Fixed(5),
            restriction: mode,
        };
        group.bench_function(format!("sampled_dfs_{mode:?}"), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for p in &problems {
                    total += search(&p.graph, &p.default_start(), cfg, &mut Silent).best.count;
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_apply_undo, bench_builtin_dfs, bench_sampled_dfs);
criterion_main!(benches);
