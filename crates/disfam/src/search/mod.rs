//! Isomorph-free generation: extension engine, DFS explorer, batched output.
//!
//! Purpose
//! - Grow canonical families one generator at a time. A candidate generator
//!   must be an ideal extension (its union with every member is already a
//!   member) and the canonicalized child must name the current family as its
//!   canonical parent; together these guarantee each isomorphism class has
//!   exactly one accepting parent in the search tree.
//! - Traverse that implicit tree depth first with a global visited set, so
//!   each class is expanded exactly once regardless of which branch reaches
//!   it first, and stream accepted families through the distinguishing
//!   filter into the output artifact in memory-bounded batches.

mod explore;
mod extend;
mod writer;

pub use explore::{generate, generate_with_oracle, GenCfg, RunSummary};
pub use extend::extend;
pub use writer::{has_all_distinguished, is_distinguished, BatchWriter};
