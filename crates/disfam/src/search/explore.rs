//! Depth-first explorer with global class-level dedup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::canon::{Canonicalizer, LabelingOracle};
use crate::error::Error;
use crate::family::Family;

use super::extend::extend;
use super::writer::BatchWriter;

/// Generation configuration.
#[derive(Clone, Copy, Debug)]
pub struct GenCfg {
    /// Pending families accumulated before a filter-and-write pass.
    pub batch_size: usize,
    /// Canonicalization memo capacity (entries); 0 disables the memo.
    /// Affects wall-clock cost only, never output content.
    pub memo_capacity: usize,
    /// Emit a progress event every this many visited classes.
    pub log_interval: usize,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            batch_size: 100_000,
            memo_capacity: 1 << 20,
            log_interval: 1_000,
        }
    }
}

/// Outcome of one generation run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub n: usize,
    /// Families that passed the distinguishing filter and were written.
    pub discovered: usize,
    /// Canonical isomorphism classes visited by the search.
    pub visited: usize,
    pub path: PathBuf,
}

/// Enumerates all distinguishing families over `[1, n]` up to relabeling,
/// writing one rendered family per line to `out_path` (truncated first).
///
/// The artifact is created even for `n = 0`, which otherwise short-circuits
/// to an empty run.
pub fn generate(n: usize, out_path: &Path, cfg: GenCfg) -> Result<RunSummary, Error> {
    let canon = Canonicalizer::new(n, cfg.memo_capacity);
    run(n, out_path, cfg, canon)
}

/// Same as [`generate`] with an explicit labeling oracle, for tests that
/// exercise the engine without nauty.
pub fn generate_with_oracle(
    n: usize,
    out_path: &Path,
    cfg: GenCfg,
    oracle: Box<dyn LabelingOracle>,
) -> Result<RunSummary, Error> {
    let canon = Canonicalizer::with_oracle(n, cfg.memo_capacity, oracle);
    run(n, out_path, cfg, canon)
}

fn run(
    n: usize,
    out_path: &Path,
    cfg: GenCfg,
    canon: Canonicalizer,
) -> Result<RunSummary, Error> {
    let writer = BatchWriter::create(out_path)?;
    if n == 0 {
        let path = writer.finish()?;
        return Ok(RunSummary {
            n,
            discovered: 0,
            visited: 0,
            path,
        });
    }

    let mut explorer = Explorer {
        n,
        cfg,
        canon,
        visited: HashSet::new(),
        pending: Vec::new(),
        discovered: 0,
        writer,
    };

    let root = Family::root(n);
    explorer.visited.insert(root.clone());
    explorer.pending.push(root.clone());
    explorer.recur(&root)?;
    explorer.flush()?;

    let visited = explorer.visited.len();
    let discovered = explorer.discovered;
    let path = explorer.writer.finish()?;
    tracing::info!(n, visited, discovered, "generation complete");
    Ok(RunSummary {
        n,
        discovered,
        visited,
        path,
    })
}

/// Per-run search state; constructed fresh for each `n` and dropped at run
/// end, so no state leaks across runs.
struct Explorer {
    n: usize,
    cfg: GenCfg,
    canon: Canonicalizer,
    visited: HashSet<Family>,
    pending: Vec<Family>,
    discovered: usize,
    writer: BatchWriter,
}

impl Explorer {
    /// Expands `family`, recursing into each accepted unvisited child before
    /// moving to the next sibling (true depth-first order). Stack depth is
    /// bounded by the longest generator chain, far below `2^n` thanks to the
    /// closure and canonical-parent filters.
    fn recur(&mut self, family: &Family) -> Result<(), Error> {
        let children = extend(family, self.n, &mut self.canon)?;
        for child in children {
            if self.visited.contains(&child) {
                continue;
            }
            self.visited.insert(child.clone());
            self.pending.push(child.clone());
            if self.cfg.log_interval > 0 && self.visited.len() % self.cfg.log_interval == 0 {
                tracing::debug!(
                    visited = self.visited.len(),
                    pending = self.pending.len(),
                    "exploring"
                );
            }
            if self.pending.len() >= self.cfg.batch_size {
                self.flush()?;
            }
            self.recur(&child)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.discovered += self.writer.flush_batch(&mut self.pending, self.n)?;
        Ok(())
    }
}
