mod load;
mod progress;
mod provenance;

use anyhow::{Context, Result};
use barter::api::*;
use clap::{Args, Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::progress::Progress;
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Depth-bounded offer-chain search")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run one bounded search and report the best result
    Search {
        #[command(flatten)]
        input: InputArgs,
        /// Fixed depth budget (ignored when --per-single-use is given)
        #[arg(long, default_value_t = 8)]
        depth: usize,
        /// Affine budget: extra moves granted per fulfilled single-use offer
        #[arg(long)]
        per_single_use: Option<usize>,
        /// Affine budget: moves granted with no single-use offer fulfilled
        #[arg(long, default_value_t = 4)]
        base: usize,
        #[arg(long, value_enum, default_value_t = Restriction::Off)]
        restriction: Restriction,
        /// Stop and report the incumbent after this many seconds
        #[arg(long)]
        time_limit_secs: Option<u64>,
        /// Write the result JSON here (stdout otherwise)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run independent fixed-depth searches over a range of budgets
    Sweep {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, default_value_t = 1)]
        from: usize,
        #[arg(long, default_value_t = 6)]
        to: usize,
        /// Stop at the first depth whose best reaches this count
        #[arg(long)]
        target: Option<usize>,
        #[arg(long, value_enum, default_value_t = Restriction::Off)]
        restriction: Restriction,
        #[arg(long)]
        time_limit_secs: Option<u64>,
        /// Write the sweep table here (.parquet or .csv)
        #[arg(long)]
        table: Option<PathBuf>,
    },
    /// Print graph analyses (elimination order, path costs) as JSON
    Analyze {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct InputArgs {
    /// Catalogue file (.json or .csv); the built-in market otherwise
    #[arg(long)]
    catalogue: Option<PathBuf>,
    /// Override the currency name
    #[arg(long)]
    currency: Option<String>,
    /// Start state JSON (e.g. the `view` of an earlier result)
    #[arg(long)]
    resume: Option<PathBuf>,
    /// Currency units at the start
    #[arg(long)]
    gold: Option<u64>,
    /// Single-use offer ids already fulfilled
    #[arg(long, value_delimiter = ',')]
    used: Vec<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Restriction {
    Off,
    MaxId,
    Discovered,
}

impl From<Restriction> for RestrictionMode {
    fn from(r: Restriction) -> Self {
        match r {
            Restriction::Off => RestrictionMode::Off,
            Restriction::MaxId => RestrictionMode::MaxId,
            Restriction::Discovered => RestrictionMode::Discovered,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Search {
            input,
            depth,
            per_single_use,
            base,
            restriction,
            time_limit_secs,
            out,
        } => {
            let budget = match per_single_use {
                Some(k) => DepthBudget::Affine {
                    per_single_use: k,
                    base,
                },
                None => DepthBudget::Fixed(depth),
            };
            let cfg = SearchCfg {
                budget,
                restriction: restriction.into(),
            };
            run_search(&input, cfg, time_limit_secs, out.as_deref(), cmd.tag)
        }
        Action::Sweep {
            input,
            from,
            to,
            target,
            restriction,
            time_limit_secs,
            table,
        } => run_sweep(
            &input,
            from..=to,
            target,
            restriction.into(),
            time_limit_secs,
            table.as_deref(),
            cmd.tag,
        ),
        Action::Analyze { input } => analyze(&input),
        Action::Report => report(cmd.tag),
    }
}

fn setup(input: &InputArgs) -> Result<(Problem, SearchState)> {
    let cat = load::catalogue(input.catalogue.as_deref(), input.currency.as_deref())?;
    let problem = Problem::from_catalogue(&cat).context("building conversion graph")?;
    let spec = load::start_spec(input.resume.as_deref(), &cat.currency, input.gold, &input.used)?;
    let start = problem.start(&spec).context("building start state")?;
    tracing::info!(
        resources = problem.graph.resource_count(),
        offers = problem.graph.offer_id_bound(),
        single_use = problem.graph.single_use_count(),
        start_used = start.used_count(),
        "problem ready"
    );
    Ok((problem, start))
}

fn input_params(input: &InputArgs) -> serde_json::Value {
    json!({
        "catalogue": input.catalogue.as_ref().map(|p| p.display().to_string()),
        "currency": input.currency,
        "resume": input.resume.as_ref().map(|p| p.display().to_string()),
        "gold": input.gold,
        "used": input.used,
    })
}

fn run_search(
    input: &InputArgs,
    cfg: SearchCfg,
    time_limit_secs: Option<u64>,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    let (problem, start) = setup(input)?;
    tracing::info!(cfg = ?cfg, tag = ?tag, "search");
    let mut obs = Progress::new(time_limit_secs.map(Duration::from_secs));
    let outcome = search(&problem.graph, &start, cfg, &mut obs);
    tracing::info!(
        best = outcome.best.count,
        nodes = outcome.nodes,
        cancelled = outcome.cancelled,
        "search done"
    );
    let doc = json!({
        "best": outcome.best.count,
        "nodes": outcome.nodes,
        "cancelled": outcome.cancelled,
        "mask": outcome.best.mask().to_string(),
        "view": problem.describe(&outcome.best.state),
    });
    match out {
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
        Some(path) => {
            ensure_parent(path)?;
            std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
            let params = json!({ "input": input_params(input), "cfg": cfg });
            provenance::write_sidecar(path, Payload::new(params, tag))?;
        }
    }
    Ok(())
}

fn run_sweep(
    input: &InputArgs,
    depths: std::ops::RangeInclusive<usize>,
    target: Option<usize>,
    restriction: RestrictionMode,
    time_limit_secs: Option<u64>,
    table: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    let (problem, start) = setup(input)?;
    tracing::info!(from = depths.start(), to = depths.end(), target = ?target, tag = ?tag, "sweep");
    let mut obs = Progress::new(time_limit_secs.map(Duration::from_secs));
    let rows = sweep(&problem.graph, &start, restriction, depths.clone(), target, &mut obs);
    for row in &rows {
        tracing::info!(
            depth = row.depth,
            best = row.outcome.best.count,
            nodes = row.outcome.nodes,
            cancelled = row.outcome.cancelled,
            "sweep row"
        );
    }
    if let Some(path) = table {
        let mut df = sweep_frame(&rows)?;
        write_frame(&mut df, path)?;
        let params = json!({
            "input": input_params(input),
            "from": depths.start(),
            "to": depths.end(),
            "target": target,
            "restriction": restriction,
        });
        provenance::write_sidecar(path, Payload::new(params, tag))?;
    }
    Ok(())
}

fn sweep_frame(rows: &[SweepRow]) -> Result<DataFrame> {
    let depth: Vec<u64> = rows.iter().map(|r| r.depth as u64).collect();
    let best: Vec<u64> = rows.iter().map(|r| r.outcome.best.count as u64).collect();
    let moves: Vec<u64> = rows
        .iter()
        .map(|r| r.outcome.best.state.moves() as u64)
        .collect();
    let nodes: Vec<u64> = rows.iter().map(|r| r.outcome.nodes).collect();
    let cancelled: Vec<bool> = rows.iter().map(|r| r.outcome.cancelled).collect();
    let mask: Vec<String> = rows
        .iter()
        .map(|r| r.outcome.best.mask().to_string())
        .collect();
    Ok(df!(
        "depth" => depth,
        "best" => best,
        "best_moves" => moves,
        "nodes" => nodes,
        "cancelled" => cancelled,
        "mask" => mask,
    )?)
}

fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let file =
        std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(file).finish(df)?;
    }
    tracing::info!(rows = df.height(), path = %path.display(), "sweep table written");
    Ok(())
}

fn analyze(input: &InputArgs) -> Result<()> {
    let (problem, _start) = setup(input)?;
    let doc = analysis_doc(&problem)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn analysis_doc(problem: &Problem) -> Result<serde_json::Value> {
    let name = |r: ResourceId| problem.dict.name_of(r).map(str::to_string);
    // Elimination order on the transpose: goods furthest from the currency first.
    let order = problem
        .graph
        .transpose()
        .topological_order()
        .into_iter()
        .map(name)
        .collect::<Result<Vec<_>, _>>()?;
    let costs = problem
        .graph
        .shortest_multiplicative_path(problem.currency())
        .into_iter()
        .enumerate()
        .filter_map(|(i, c)| c.map(|c| (ResourceId(i), c)))
        .map(|(r, c)| Ok((name(r)?, c)))
        .collect::<Result<std::collections::BTreeMap<_, _>, DictError>>()?;
    let single_use: Vec<String> = problem
        .graph
        .offers()
        .filter(|o| o.is_single_use())
        .map(|o| problem.describe_offer(o))
        .collect();
    Ok(json!({
        "transpose_order": order,
        "path_costs": costs,
        "single_use_offers": single_use,
    }))
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document(&Payload::new(json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_input() -> InputArgs {
        InputArgs {
            catalogue: None,
            currency: None,
            resume: None,
            gold: None,
            used: vec![],
        }
    }

    #[test]
    fn search_writes_result_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("runs/best.json");
        let cfg = SearchCfg {
            budget: DepthBudget::Fixed(3),
            restriction: RestrictionMode::Discovered,
        };
        run_search(&builtin_input(), cfg, None, Some(&out), Some("ci".into())).unwrap();

        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert!(doc["best"].as_u64().unwrap() >= 1);
        assert_eq!(doc["cancelled"], false);
        assert_eq!(doc["view"]["used_count"], doc["best"]);

        let sidecar = dir.path().join("runs/best.provenance.json");
        let prov: serde_json::Value =
            serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["tag"], "ci");
        assert_eq!(prov["params"]["cfg"]["restriction"], "discovered");
    }

    #[test]
    fn written_view_resumes_a_search() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("best.json");
        run_search(&builtin_input(), fixed_cfg(3), None, Some(&out), None).unwrap();
        let first: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();

        let view = dir.path().join("view.json");
        std::fs::write(&view, serde_json::to_vec(&first["view"]).unwrap()).unwrap();
        let input = InputArgs {
            resume: Some(view),
            ..builtin_input()
        };
        let (_, start) = setup(&input).unwrap();
        assert_eq!(start.used_count() as u64, first["best"].as_u64().unwrap());
        assert_eq!(start.moves(), 0);
    }

    fn fixed_cfg(depth: usize) -> SearchCfg {
        SearchCfg {
            budget: DepthBudget::Fixed(depth),
            restriction: RestrictionMode::Off,
        }
    }

    #[test]
    fn analysis_doc_names_resources() {
        let p = Problem::from_catalogue(&Catalogue::builtin()).unwrap();
        let doc = analysis_doc(&p).unwrap();
        assert_eq!(doc["path_costs"]["g"]["cost"], 1);
        assert_eq!(doc["path_costs"]["g"]["modulus"], 0);
        assert_eq!(
            doc["single_use_offers"].as_array().unwrap().len(),
            p.graph.single_use_count()
        );
        let order = doc["transpose_order"].as_array().unwrap();
        assert!(order.len() <= p.graph.resource_count());
    }

    #[test]
    fn sweep_frame_has_one_row_per_depth() {
        let p = Problem::from_catalogue(&Catalogue::builtin()).unwrap();
        let rows = sweep(
            &p.graph,
            &p.default_start(),
            RestrictionMode::Off,
            1..=3,
            None,
            &mut Silent,
        );
        let df = sweep_frame(&rows).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 6);
    }

    #[test]
    fn sweep_table_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let p = Problem::from_catalogue(&Catalogue::builtin()).unwrap();
        let rows = sweep(
            &p.graph,
            &p.default_start(),
            RestrictionMode::Discovered,
            1..=2,
            None,
            &mut Silent,
        );
        let mut df = sweep_frame(&rows).unwrap();
        write_frame(&mut df, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("depth,best,best_moves,nodes,cancelled,mask"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn cli_parses_affine_search() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "search",
            "--per-single-use",
            "3",
            "--base",
            "5",
            "--restriction",
            "max-id",
            "--used",
            "0,4",
        ])
        .unwrap();
        match cmd.action {
            Action::Search {
                input,
                per_single_use,
                base,
                restriction,
                ..
            } => {
                assert_eq!(per_single_use, Some(3));
                assert_eq!(base, 5);
                assert_eq!(RestrictionMode::from(restriction), RestrictionMode::MaxId);
                assert_eq!(input.used, vec![0, 4]);
            }
            _ => panic!("expected search"),
        }
    }
}
