//! Canonical forms of families under ground-set relabeling.
//!
//! Purpose
//! - Map a family to the fixed representative of its isomorphism class:
//!   build the colored incidence graph, ask the labeling oracle for a
//!   canonical vertex ordering, read a relabeling of `[1, n]` off the
//!   element part of that ordering, and re-encode every member under it.
//! - Provide the delete-and-recanonicalize parent operator the canonical
//!   augmentation discipline depends on.
//!
//! Canonicalization is the dominant cost center: many search paths
//! rediscover the same family before acceptance or rejection, so results
//! are memoized per run in a bounded LRU cache. Eviction only ever costs
//! recomputation; it cannot change results.

mod graph;
mod oracle;

pub use graph::{family_graph, ColoredGraph};
pub use oracle::{IdentityOracle, LabelingOracle, NautyOracle};

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::OracleError;
use crate::family::{Code, Family};

/// Run-local canonicalizer: fixed ground-set size, owned oracle, bounded memo.
pub struct Canonicalizer {
    n: usize,
    oracle: Box<dyn LabelingOracle>,
    memo: Option<LruCache<Family, Family>>,
}

impl Canonicalizer {
    /// Canonicalizer backed by nauty. `memo_capacity == 0` disables the memo.
    pub fn new(n: usize, memo_capacity: usize) -> Self {
        Self::with_oracle(n, memo_capacity, Box::new(NautyOracle))
    }

    pub fn with_oracle(
        n: usize,
        memo_capacity: usize,
        oracle: Box<dyn LabelingOracle>,
    ) -> Self {
        let memo = NonZeroUsize::new(memo_capacity).map(LruCache::new);
        Self { n, oracle, memo }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Canonical form of `family`. Depends only on the isomorphism class:
    /// `canonicalize(π(F)) == canonicalize(F)` for any permutation π of
    /// `[1, n]`, and the result is a fixed point of the operation.
    pub fn canonicalize(&mut self, family: &Family) -> Result<Family, OracleError> {
        if family.is_empty() {
            return Ok(Family::empty());
        }
        if let Some(memo) = self.memo.as_mut() {
            if let Some(hit) = memo.get(family) {
                return Ok(hit.clone());
            }
        }
        let graph = family_graph(family, self.n);
        let order = self.oracle.canonical_order(&graph)?;
        let relabel = element_relabeling(&order, self.n)?;
        let canonical: Family = family
            .iter()
            .map(|code| relabel_code(code, &relabel, self.n))
            .collect();
        if let Some(memo) = self.memo.as_mut() {
            memo.put(family.clone(), canonical.clone());
        }
        Ok(canonical)
    }

    /// Canonical-parent operator: removes the numerically smallest member and
    /// canonicalizes the remainder. Families with fewer than two members map
    /// to the empty family.
    pub fn canonical_delete(&mut self, family: &Family) -> Result<Family, OracleError> {
        if family.len() < 2 {
            return Ok(Family::empty());
        }
        self.canonicalize(&family.without_smallest())
    }
}

/// One-off canonicalization without a persistent memo.
pub fn canonicalize_once(family: &Family, n: usize) -> Result<Family, OracleError> {
    Canonicalizer::new(n, 0).canonicalize(family)
}

/// Reads the ground-set relabeling off the element part of a canonical order:
/// `relabel[i]` is the canonical position of element index `i`. The first `n`
/// entries of the order must be exactly the element vertices.
fn element_relabeling(order: &[usize], n: usize) -> Result<Vec<usize>, OracleError> {
    let mut relabel = vec![usize::MAX; n];
    for (pos, &vertex) in order.iter().take(n).enumerate() {
        if vertex >= n || relabel[vertex] != usize::MAX {
            return Err(OracleError::OrderNotColorRespecting { n });
        }
        relabel[vertex] = pos;
    }
    if relabel.iter().any(|&p| p == usize::MAX) {
        return Err(OracleError::OrderNotColorRespecting { n });
    }
    Ok(relabel)
}

/// Re-encodes a subset code under an element relabeling.
fn relabel_code(code: &Code, relabel: &[usize], n: usize) -> Code {
    let mut out = Code::default();
    for (i, &pos) in relabel.iter().enumerate().take(n) {
        if code.bit(i as u64) {
            out.set_bit(pos as u64, true);
        }
    }
    out
}

#[cfg(test)]
mod tests;
