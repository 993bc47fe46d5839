//! Ideal-extension / canonical-augmentation engine.

use std::collections::BTreeSet;

use num_traits::One;

use crate::canon::Canonicalizer;
use crate::error::OracleError;
use crate::family::{full_code, Code, Family};

/// Canonical children of `family` over the ground set `[1, n]`.
///
/// For every non-member code `s` in `[1, 2^n - 1]`: `s` is admissible iff for
/// all members `x`, `x | s` is already a member (the extended family stays
/// closed under union with `s`). Each admissible candidate `F ∪ {s}` is
/// canonicalized to `C`, and `C` is accepted iff deleting its smallest member
/// and re-canonicalizing reproduces `family` exactly. Distinct generators may
/// canonicalize to the same child; the result set deduplicates by value and
/// iterates in a deterministic order.
///
/// Pure apart from the canonicalizer's memo. Never returns `family` itself:
/// an accepted child has one more member than its canonical parent.
pub fn extend(
    family: &Family,
    n: usize,
    canon: &mut Canonicalizer,
) -> Result<BTreeSet<Family>, OracleError> {
    let mut children = BTreeSet::new();
    let limit = full_code(n);
    let mut s = Code::one();
    while s <= limit {
        if !family.contains(&s) && is_ideal_extension(family, &s) {
            let candidate = family.with_member(s.clone());
            let child = canon.canonicalize(&candidate)?;
            if canon.canonical_delete(&child)? == *family {
                children.insert(child);
            }
        }
        s += 1u32;
    }
    Ok(children)
}

/// Upward-closure test: `x ∪ s` must already be a member for every member
/// `x`. Vacuously true for the empty family.
fn is_ideal_extension(family: &Family, s: &Code) -> bool {
    family.iter().all(|x| family.contains(&(x | s)))
}
