//! Isomorph-free enumeration of distinguishing set families.
//!
//! Purpose
//! - For a ground set `[1, n]`, enumerate every family of nonempty subsets in
//!   which each pair of elements is separated by some member, producing exactly
//!   one representative per relabeling-equivalence class.
//! - The engine follows the canonical construction path method: families grow
//!   one generator at a time, and a candidate child survives only if deleting
//!   its smallest member and re-canonicalizing reproduces its parent.
//!
//! Layout
//! - `family`: bit-packed subset codes (arbitrary precision) and family
//!   rendering/parsing.
//! - `canon`: colored incidence graph, the canonical-labeling oracle seam,
//!   and the memoized canonicalizer with its delete-and-recanonicalize parent
//!   operator.
//! - `search`: ideal-extension engine, depth-first explorer with global
//!   class-level dedup, distinguishing filter, and batched artifact writer.

pub mod canon;
pub mod error;
pub mod family;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canon::{
        canonicalize_once, family_graph, Canonicalizer, ColoredGraph, IdentityOracle,
        LabelingOracle, NautyOracle,
    };
    pub use crate::error::{Error, OracleError, ParseFamilyError};
    pub use crate::family::{
        decode, encode, full_code, infer_size, parse_family, render_family, Code, Family,
    };
    pub use crate::search::{
        extend, generate, generate_with_oracle, has_all_distinguished, is_distinguished,
        BatchWriter, GenCfg, RunSummary,
    };
}
