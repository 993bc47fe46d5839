use proptest::prelude::*;

use super::*;
use crate::error::OracleError;
use crate::family::encode;

fn fam(sets: &[&[usize]]) -> Family {
    Family::from_codes(sets.iter().map(|s| encode(s)))
}

/// Applies the permutation `perm` (element `i+1` ↦ `perm[i]`) to a family.
fn permute_family(family: &Family, perm: &[usize]) -> Family {
    family
        .iter()
        .map(|code| {
            let elements: Vec<usize> = crate::family::decode(code, perm.len())
                .into_iter()
                .map(|e| perm[e - 1])
                .collect();
            encode(&elements)
        })
        .collect()
}

/// Oracle that must never be called; asserts short-circuit paths.
struct UnreachableOracle;

impl LabelingOracle for UnreachableOracle {
    fn canonical_order(&self, _graph: &ColoredGraph) -> Result<Vec<usize>, OracleError> {
        panic!("oracle invoked on a short-circuit path");
    }
}

/// Oracle that reverses the vertex order, breaking the color contract.
struct ReversedOracle;

impl LabelingOracle for ReversedOracle {
    fn canonical_order(&self, graph: &ColoredGraph) -> Result<Vec<usize>, OracleError> {
        Ok((0..graph.vertices).rev().collect())
    }
}

#[test]
fn family_graph_is_bipartite_incidence() {
    let f = fam(&[&[1, 2], &[1]]);
    let g = family_graph(&f, 3);
    assert_eq!(g.vertices, 5);
    assert_eq!(g.colors, vec![vec![0, 1, 2], vec![3, 4]]);
    // Members in ascending code order: {1} (code 1) then {1, 2} (code 3).
    assert_eq!(g.edges, vec![(0, 3), (0, 4), (1, 4)]);
}

#[test]
fn identity_oracle_keeps_labels() {
    let f = fam(&[&[1, 3], &[2]]);
    let mut canon = Canonicalizer::with_oracle(3, 16, Box::new(IdentityOracle));
    assert_eq!(canon.canonicalize(&f).unwrap(), f);
}

#[test]
fn empty_family_short_circuits_without_oracle() {
    let mut canon = Canonicalizer::with_oracle(3, 16, Box::new(UnreachableOracle));
    assert_eq!(canon.canonicalize(&Family::empty()).unwrap(), Family::empty());
    // Fewer than two members: parent is the empty family, no oracle call.
    assert_eq!(
        canon.canonical_delete(&fam(&[&[1, 2]])).unwrap(),
        Family::empty()
    );
}

#[test]
fn canonicalize_is_isomorphism_invariant() {
    let mut canon = Canonicalizer::new(3, 64);
    let f = fam(&[&[1], &[1, 2], &[1, 2, 3]]);
    let base = canon.canonicalize(&f).unwrap();
    for perm in [
        vec![2, 1, 3],
        vec![3, 2, 1],
        vec![2, 3, 1],
        vec![1, 3, 2],
        vec![3, 1, 2],
    ] {
        let relabeled = permute_family(&f, &perm);
        assert_eq!(canon.canonicalize(&relabeled).unwrap(), base);
    }
}

#[test]
fn canonicalize_is_idempotent() {
    let mut canon = Canonicalizer::new(4, 64);
    for f in [
        fam(&[&[1, 2, 3, 4]]),
        fam(&[&[2], &[2, 4], &[1, 2, 3, 4]]),
        fam(&[&[1], &[2], &[1, 2], &[1, 2, 3, 4]]),
    ] {
        let c = canon.canonicalize(&f).unwrap();
        assert_eq!(canon.canonicalize(&c).unwrap(), c);
    }
}

#[test]
fn canonical_delete_preserves_fixed_points() {
    let mut canon = Canonicalizer::new(3, 64);
    let c = canon
        .canonicalize(&fam(&[&[2], &[2, 3], &[1, 2, 3]]))
        .unwrap();
    let parent = canon.canonical_delete(&c).unwrap();
    assert_eq!(parent.len(), 2);
    assert_eq!(canon.canonicalize(&parent).unwrap(), parent);
}

#[test]
fn memo_capacity_does_not_change_results() {
    let families = [
        fam(&[&[1], &[1, 2, 3]]),
        fam(&[&[3], &[1, 3], &[1, 2, 3]]),
        fam(&[&[2, 3], &[1, 2, 3]]),
    ];
    let mut uncached = Canonicalizer::new(3, 0);
    let mut tight = Canonicalizer::new(3, 1);
    for _ in 0..3 {
        for f in &families {
            assert_eq!(
                tight.canonicalize(f).unwrap(),
                uncached.canonicalize(f).unwrap()
            );
        }
    }
}

#[test]
fn color_disrespecting_order_is_fatal() {
    let mut canon = Canonicalizer::with_oracle(2, 0, Box::new(ReversedOracle));
    let err = canon.canonicalize(&fam(&[&[1]])).unwrap_err();
    assert!(matches!(err, OracleError::OrderNotColorRespecting { n: 2 }));
}

#[test]
fn malformed_graphs_are_rejected() {
    let bad_edge = ColoredGraph {
        vertices: 2,
        edges: vec![(0, 5)],
        colors: vec![vec![0], vec![1]],
    };
    assert!(matches!(
        NautyOracle.canonical_order(&bad_edge),
        Err(OracleError::EdgeOutOfRange(0, 5, 2))
    ));

    let bad_colors = ColoredGraph {
        vertices: 3,
        edges: vec![(0, 1)],
        colors: vec![vec![0], vec![1]],
    };
    assert!(matches!(
        NautyOracle.canonical_order(&bad_colors),
        Err(OracleError::BadColorPartition(3))
    ));
}

proptest! {
    #[test]
    fn canonical_form_invariant_under_relabeling(
        codes in proptest::collection::btree_set(1u32..16, 1..5),
        perm in Just(vec![1usize, 2, 3, 4]).prop_shuffle(),
    ) {
        let f = Family::from_codes(codes.into_iter().map(Code::from));
        let mut canon = Canonicalizer::new(4, 32);
        let base = canon.canonicalize(&f).unwrap();
        let relabeled = permute_family(&f, &perm);
        prop_assert_eq!(canon.canonicalize(&relabeled).unwrap(), base.clone());
        // Idempotence on the same draw.
        prop_assert_eq!(canon.canonicalize(&base).unwrap(), base);
    }
}
