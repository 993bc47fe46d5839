//! Subset and family encoding.
//!
//! Purpose
//! - Represent a nonempty subset of the ground set `[1, n]` as a bit-packed
//!   code (bit `j-1` set ⇔ element `j` present) and a family as an ordered
//!   set of distinct codes.
//! - Codes are arbitrary-precision (`BigUint`) so that `n` is not capped by
//!   a native integer width.
//!
//! `text` holds the deterministic rendering used for output lines and the
//! inverse parser used by the CLI.

mod text;
mod types;

pub use text::{infer_size, parse_family, render_family};
pub use types::{decode, encode, full_code, Code, Family};
