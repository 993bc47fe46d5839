use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use disfam::prelude::*;

#[derive(Parser)]
#[command(name = "disfam")]
#[command(about = "Isomorph-free enumeration of distinguishing set families")]
#[command(version)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate distinguishing families for each n in a range
    Search {
        /// Ground-set size: a single value ("4") or an inclusive range ("1-6")
        #[arg(short = 's', long, default_value = "1-6")]
        size: String,

        /// Pending families accumulated before a filter-and-write pass
        #[arg(short = 'b', long, default_value_t = 100_000)]
        batch_size: usize,

        /// Canonicalization memo capacity in entries (0 disables the memo)
        #[arg(short = 'c', long, default_value_t = 1 << 20)]
        cache_size: usize,

        /// Progress event every this many visited classes
        #[arg(long, default_value_t = 1_000)]
        log_interval: usize,

        /// Output path pattern; `{n}` is replaced by the ground-set size
        #[arg(short = 'o', long, default_value = "distinguished_families_n{n}.txt")]
        out: String,
    },
    /// Canonicalize one family literal and print its representative
    Canon {
        /// Family literal, e.g. "{{1, 2}, {1, 3}}"
        family: String,

        /// Ground-set size; inferred from the family when omitted
        #[arg(short = 's', long)]
        size: Option<usize>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Search {
            size,
            batch_size,
            cache_size,
            log_interval,
            out,
        } => search(&size, batch_size, cache_size, log_interval, &out),
        Action::Canon { family, size } => canon(&family, size),
    }
}

fn search(
    size: &str,
    batch_size: usize,
    cache_size: usize,
    log_interval: usize,
    out_pattern: &str,
) -> Result<()> {
    let (lo, hi) = parse_size_range(size)?;
    let cfg = GenCfg {
        batch_size,
        memo_capacity: cache_size,
        log_interval,
    };
    let total_start = Instant::now();
    for n in lo..=hi {
        let out_path = PathBuf::from(out_pattern.replace("{n}", &n.to_string()));
        let start = Instant::now();
        let summary = generate(n, &out_path, cfg)
            .with_context(|| format!("generation failed for n = {n}"))?;
        let secs = start.elapsed().as_secs_f64();
        tracing::info!(
            n,
            discovered = summary.discovered,
            visited = summary.visited,
            out = %summary.path.display(),
            secs,
            "run complete"
        );
        write_sidecar(&summary.path, &summary, cfg, secs)?;
    }
    tracing::info!(secs = total_start.elapsed().as_secs_f64(), "all runs complete");
    Ok(())
}

/// Write `<artifact>.provenance.json` next to each run artifact.
fn write_sidecar(artifact: &Path, summary: &RunSummary, cfg: GenCfg, secs: f64) -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let doc = serde_json::json!({
        "code_rev": rev,
        "params": {
            "n": summary.n,
            "batch_size": cfg.batch_size,
            "cache_size": cfg.memo_capacity,
            "log_interval": cfg.log_interval,
        },
        "results": {
            "discovered": summary.discovered,
            "visited": summary.visited,
            "secs": secs,
        },
        "outputs": [artifact.to_string_lossy()]
    });
    let sidecar = artifact.with_extension("provenance.json");
    std::fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(())
}

fn canon(family_str: &str, size: Option<usize>) -> Result<()> {
    // Infer n before parsing so range checks use the widest plausible ground set.
    let n = match size {
        Some(n) => n,
        None => infer_size(&parse_family(family_str, usize::MAX)?),
    };
    let family = parse_family(family_str, n)?;
    let canonical = canonicalize_once(&family, n)?;
    println!("{}", render_family(&canonical, n));
    Ok(())
}

/// Parses "4" or "1-6" into an inclusive range.
fn parse_size_range(s: &str) -> Result<(usize, usize)> {
    let parse_one = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| anyhow!("invalid size `{part}`"))
    };
    match s.split_once('-') {
        Some((lo, hi)) => {
            let (lo, hi) = (parse_one(lo)?, parse_one(hi)?);
            if lo > hi {
                return Err(anyhow!("empty size range `{s}`"));
            }
            Ok((lo, hi))
        }
        None => {
            let n = parse_one(s)?;
            Ok((n, n))
        }
    }
}
