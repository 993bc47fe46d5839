//! Code and family types.

use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Bit-packed subset code. Valid codes for ground-set size `n` lie in
/// `[1, 2^n - 1]`.
pub type Code = BigUint;

/// Code of the full ground set `{1, ..., n}`, i.e. `2^n - 1`.
pub fn full_code(n: usize) -> Code {
    (Code::one() << n) - Code::one()
}

/// Encodes a set of 1-based elements as a code.
pub fn encode(elements: &[usize]) -> Code {
    let mut code = Code::zero();
    for &e in elements {
        debug_assert!(e >= 1, "elements are 1-based");
        code.set_bit((e - 1) as u64, true);
    }
    code
}

/// Decodes a code back to its sorted 1-based elements, reading bits `0..n`.
pub fn decode(code: &Code, n: usize) -> Vec<usize> {
    (0..n)
        .filter(|&j| code.bit(j as u64))
        .map(|j| j + 1)
        .collect()
}

/// A family of distinct subset codes.
///
/// Immutable by construction: canonical families are never mutated in place,
/// only combined into new families via [`Family::with_member`] and
/// [`Family::without_smallest`]. Iteration is in ascending code order, which
/// is also the order used wherever a "smallest member" must be identified.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Family(BTreeSet<Code>);

impl Family {
    /// The empty family.
    pub fn empty() -> Self {
        Family(BTreeSet::new())
    }

    /// The search root for ground-set size `n`: the family containing only
    /// the full ground set.
    pub fn root(n: usize) -> Self {
        let mut members = BTreeSet::new();
        members.insert(full_code(n));
        Family(members)
    }

    pub fn from_codes<I: IntoIterator<Item = Code>>(codes: I) -> Self {
        Family(codes.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, code: &Code) -> bool {
        self.0.contains(code)
    }

    /// Members in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.0.iter()
    }

    /// Numerically smallest member, if any.
    pub fn smallest(&self) -> Option<&Code> {
        self.0.first()
    }

    /// New family with `code` added.
    pub fn with_member(&self, code: Code) -> Self {
        let mut members = self.0.clone();
        members.insert(code);
        Family(members)
    }

    /// New family with the numerically smallest member removed.
    pub fn without_smallest(&self) -> Self {
        let mut members = self.0.clone();
        members.pop_first();
        Family(members)
    }
}

impl FromIterator<Code> for Family {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Family::from_codes(iter)
    }
}
