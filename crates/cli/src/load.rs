//! Catalogue and start-state inputs.
//!
//! Catalogues load from JSON (the `Catalogue` serde shape) or CSV with
//! columns `side,object,object_count,price,price_count`, where `side` is
//! `sell` or `buy`. Without a path the built-in market is used.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use barter::api::{Catalogue, Listing, Lot, StartSpec};
use polars::prelude::*;

const DEFAULT_CURRENCY: &str = "g";

pub fn catalogue(path: Option<&Path>, currency: Option<&str>) -> Result<Catalogue> {
    let mut cat = match path {
        None => Catalogue::builtin(),
        Some(p) if has_ext(p, "csv") => catalogue_csv(p, currency.unwrap_or(DEFAULT_CURRENCY))?,
        Some(p) => {
            let bytes = fs::read(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing catalogue {}", p.display()))?
        }
    };
    if let Some(c) = currency {
        cat.currency = c.to_string();
    }
    Ok(cat)
}

fn has_ext(p: &Path, ext: &str) -> bool {
    p.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn catalogue_csv(path: &Path, currency: &str) -> Result<Catalogue> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let side = df.column("side")?.str()?;
    let object = df.column("object")?.str()?;
    let price = df.column("price")?.str()?;
    let object_count = df.column("object_count")?.cast(&DataType::UInt64)?;
    let object_count = object_count.u64()?;
    let price_count = df.column("price_count")?.cast(&DataType::UInt64)?;
    let price_count = price_count.u64()?;

    let mut cat = Catalogue::new(currency);
    for row in 0..df.height() {
        let (Some(s), Some(o), Some(oc), Some(p), Some(pc)) = (
            side.get(row),
            object.get(row),
            object_count.get(row),
            price.get(row),
            price_count.get(row),
        ) else {
            bail!("{}: row {} has an empty or non-numeric cell", path.display(), row + 1);
        };
        let listing = Listing {
            object: Lot::new(o, oc),
            price: Lot::new(p, pc),
        };
        match s.trim() {
            "sell" => cat.sell.push(listing),
            "buy" => cat.buy.push(listing),
            other => bail!("{}: row {} has unknown side {other:?}", path.display(), row + 1),
        }
    }
    Ok(cat)
}

/// Start description from an optional resume file plus command-line overrides.
pub fn start_spec(
    resume: Option<&Path>,
    currency: &str,
    gold: Option<u64>,
    used: &[usize],
) -> Result<StartSpec> {
    let mut spec = match resume {
        None => StartSpec::default(),
        Some(p) => {
            let bytes = fs::read(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing start state {}", p.display()))?
        }
    };
    if let Some(g) = gold {
        spec.inventory
            .get_or_insert_with(BTreeMap::new)
            .insert(currency.to_string(), g);
    }
    spec.used.extend_from_slice(used);
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_when_no_path() {
        let cat = catalogue(None, None).unwrap();
        assert_eq!(cat, Catalogue::builtin());
        let renamed = catalogue(None, Some("gold")).unwrap();
        assert_eq!(renamed.currency, "gold");
    }

    #[test]
    fn json_catalogue_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("market.json");
        let mut c = Catalogue::new("g");
        c.sell.push(Listing::new(("widget", 1), ("g", 2)));
        c.buy.push(Listing::new(("g", 5), ("widget", 1)));
        fs::write(&path, serde_json::to_vec(&c).unwrap()).unwrap();
        assert_eq!(catalogue(Some(&path), None).unwrap(), c);
    }

    #[test]
    fn csv_catalogue_loads_by_side() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("market.csv");
        fs::write(
            &path,
            "side,object,object_count,price,price_count\n\
             sell,widget,1,g,2\n\
             buy,g,5,widget,1\n",
        )
        .unwrap();
        let cat = catalogue(Some(&path), None).unwrap();
        assert_eq!(cat.currency, "g");
        assert_eq!(cat.sell, vec![Listing::new(("widget", 1), ("g", 2))]);
        assert_eq!(cat.buy, vec![Listing::new(("g", 5), ("widget", 1))]);
    }

    #[test]
    fn csv_unknown_side_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(
            &path,
            "side,object,object_count,price,price_count\ntrade,widget,1,g,2\n",
        )
        .unwrap();
        let err = catalogue(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("unknown side"));
    }

    #[test]
    fn start_spec_merges_resume_and_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        fs::write(
            &path,
            r#"{"moves": 2, "used_count": 1, "used": [0], "inventory": {"g": 5, "widget": 4}}"#,
        )
        .unwrap();
        let spec = start_spec(Some(&path), "g", Some(12), &[3]).unwrap();
        let inv = spec.inventory.unwrap();
        assert_eq!(inv["g"], 12);
        assert_eq!(inv["widget"], 4);
        assert_eq!(spec.used, vec![0, 3]);

        let fresh = start_spec(None, "g", None, &[]).unwrap();
        assert_eq!(fresh, StartSpec::default());
    }
}
