//! Error types for oracle calls, family parsing, and full runs.
//!
//! Rejected extension candidates are not errors: failing the ideal-extension
//! or canonical-parent test is an expected, frequent outcome of the search and
//! is handled by discarding the candidate. Errors here are the fatal kind —
//! a malformed graph handed to the labeling oracle, an oracle answer that is
//! not a permutation, or I/O failure on the output artifact.

use std::io;

use thiserror::Error;

/// Fatal failures of the canonical-labeling oracle or its input contract.
#[derive(Debug, Error)]
pub enum OracleError {
    /// An edge references a vertex outside `0..vertices`.
    #[error("edge ({0}, {1}) out of range for graph with {2} vertices")]
    EdgeOutOfRange(usize, usize, usize),

    /// The color classes do not partition the vertex set.
    #[error("color classes do not partition the {0} vertices")]
    BadColorPartition(usize),

    /// The oracle returned something other than a permutation of the vertices.
    #[error("oracle returned a non-permutation ordering for {vertices} vertices")]
    NotAPermutation { vertices: usize },

    /// The canonical order does not keep the element class in front, so no
    /// relabeling of the ground set can be read off it.
    #[error("canonical order does not respect the element color class (n = {n})")]
    OrderNotColorRespecting { n: usize },
}

/// Failures when parsing a family literal such as `{{1, 2}, {3}}`.
#[derive(Debug, Error)]
pub enum ParseFamilyError {
    #[error("family must be enclosed in outer braces, e.g. {{{{1,2}},{{3}}}}")]
    MissingOuterBraces,

    #[error("set literal must be enclosed in braces: `{0}`")]
    MissingSetBraces(String),

    #[error("unbalanced braces in family literal")]
    UnbalancedBraces,

    #[error("invalid element `{0}`")]
    InvalidElement(String),

    #[error("element {element} out of range for n = {n}")]
    ElementOutOfRange { element: usize, n: usize },

    #[error("members must be nonempty subsets")]
    EmptySet,
}

/// Top-level error for a generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("output artifact I/O failed: {0}")]
    Io(#[from] io::Error),
}
