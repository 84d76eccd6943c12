//! Random markets (seeded, replayable).
//!
//! Purpose
//! - Provide small deterministic catalogues for property tests and benches.
//!   Every draw is reproducible from a `(seed, index)` replay token.
//!
//! Model
//! - `goods` non-currency resources named `good-<k>`.
//! - Sell listings yield one random good for either the currency or another
//!   good; buy orders pay the currency for some quantity of a good.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Catalogue, Listing, Lot};

/// Market sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct MarketCfg {
    /// Number of non-currency goods. Clamped to at least 1.
    pub goods: usize,
    pub sell_listings: usize,
    pub buy_orders: usize,
    /// Upper bound for quantities on both sides of a listing.
    pub max_units: u64,
    /// Probability that a sell listing is priced in the currency.
    pub currency_price_frac: f64,
}

impl Default for MarketCfg {
    fn default() -> Self {
        Self {
            goods: 4,
            sell_listings: 6,
            buy_orders: 4,
            max_units: 6,
            currency_price_frac: 0.4,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

pub const CURRENCY: &str = "g";

fn good(k: usize) -> String {
    format!("good-{k}")
}

/// Draw a market. All quantities are in `1..=max_units`.
pub fn draw_market(cfg: MarketCfg, tok: ReplayToken) -> Catalogue {
    let mut rng = tok.to_std_rng();
    let goods = cfg.goods.max(1);
    let hi = cfg.max_units.max(1);
    let frac = cfg.currency_price_frac.clamp(0.0, 1.0);
    let mut cat = Catalogue::new(CURRENCY);
    for _ in 0..cfg.sell_listings {
        let object = rng.gen_range(0..goods);
        let price_name = if goods == 1 || rng.gen_bool(frac) {
            CURRENCY.to_string()
        } else {
            // Any good other than the object.
            let k = rng.gen_range(0..goods - 1);
            good(if k >= object { k + 1 } else { k })
        };
        cat.sell.push(Listing {
            object: Lot::new(good(object), rng.gen_range(1..=hi)),
            price: Lot::new(price_name, rng.gen_range(1..=hi)),
        });
    }
    for _ in 0..cfg.buy_orders {
        let price = rng.gen_range(0..goods);
        cat.buy.push(Listing {
            object: Lot::new(CURRENCY, rng.gen_range(1..=hi)),
            price: Lot::new(good(price), rng.gen_range(1..=hi)),
        });
    }
    cat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_market() {
        let cfg = MarketCfg::default();
        let a = draw_market(cfg, ReplayToken::new(7, 3));
        let b = draw_market(cfg, ReplayToken::new(7, 3));
        assert_eq!(a, b);
        let c = draw_market(cfg, ReplayToken::new(7, 4));
        assert_ne!(a, c);
    }

    #[test]
    fn sampled_listings_respect_bounds() {
        let cfg = MarketCfg {
            max_units: 3,
            ..MarketCfg::default()
        };
        for i in 0..20 {
            let m = draw_market(cfg, ReplayToken::new(1, i));
            assert_eq!(m.sell.len(), cfg.sell_listings);
            assert_eq!(m.buy.len(), cfg.buy_orders);
            for l in m.listings() {
                assert!((1..=3).contains(&l.object.count));
                assert!((1..=3).contains(&l.price.count));
                assert_ne!(l.object.name, l.price.name);
            }
            assert!(m.buy.iter().all(|l| l.object.name == CURRENCY));
            assert!(m.sell.iter().all(|l| l.object.name != CURRENCY));
        }
    }
}
