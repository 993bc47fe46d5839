//! Canonical-labeling oracle seam.
//!
//! The engine never looks inside the labeling algorithm: it hands over a
//! [`ColoredGraph`] and gets back a canonical vertex ordering that is
//! invariant under relabeling within a color class. [`NautyOracle`] is the
//! production implementation (dense nauty); [`IdentityOracle`] is a trivial
//! stand-in for engine unit tests.

use std::os::raw::c_int;

use nauty_Traces_sys::{
    densenauty, graph, optionblk, setword, statsblk, ADDELEMENT, SETWORDSNEEDED,
};

use crate::error::OracleError;

use super::graph::ColoredGraph;

/// Single-operation capability: canonical vertex ordering of a colored graph.
///
/// Contract: two color-respecting isomorphic graphs must yield identical
/// canonical forms after applying their respective orderings. A violation
/// silently corrupts every downstream invariant, so input and output are
/// validated and any mismatch is a fatal [`OracleError`].
pub trait LabelingOracle {
    fn canonical_order(&self, graph: &ColoredGraph) -> Result<Vec<usize>, OracleError>;
}

/// Checks that edges are in range and the color classes partition `0..v`.
pub(super) fn validate_graph(g: &ColoredGraph) -> Result<(), OracleError> {
    for &(a, b) in &g.edges {
        if a >= g.vertices || b >= g.vertices {
            return Err(OracleError::EdgeOutOfRange(a, b, g.vertices));
        }
    }
    let mut seen: Vec<usize> = g.colors.iter().flatten().copied().collect();
    seen.sort_unstable();
    let expected: Vec<usize> = (0..g.vertices).collect();
    if seen != expected {
        return Err(OracleError::BadColorPartition(g.vertices));
    }
    Ok(())
}

fn validate_order(order: &[usize], vertices: usize) -> Result<(), OracleError> {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    let expected: Vec<usize> = (0..vertices).collect();
    if sorted != expected {
        return Err(OracleError::NotAPermutation { vertices });
    }
    Ok(())
}

/// Production oracle backed by dense nauty with an explicit color partition.
#[derive(Clone, Copy, Debug, Default)]
pub struct NautyOracle;

impl LabelingOracle for NautyOracle {
    fn canonical_order(&self, g: &ColoredGraph) -> Result<Vec<usize>, OracleError> {
        validate_graph(g)?;
        let v = g.vertices;
        if v == 0 {
            return Ok(Vec::new());
        }
        let m = SETWORDSNEEDED(v);

        let mut dense = vec![0 as setword; v * m];
        for &(a, b) in &g.edges {
            ADDELEMENT(&mut dense[a * m..(a + 1) * m], b);
            ADDELEMENT(&mut dense[b * m..(b + 1) * m], a);
        }

        // lab lists the classes back to back; ptn marks the last vertex of
        // each class with 0, every other position with 1.
        let mut lab: Vec<c_int> = Vec::with_capacity(v);
        let mut ptn: Vec<c_int> = Vec::with_capacity(v);
        for class in &g.colors {
            for (i, &vertex) in class.iter().enumerate() {
                lab.push(vertex as c_int);
                ptn.push(if i + 1 == class.len() { 0 } else { 1 });
            }
        }

        let mut orbits = vec![0 as c_int; v];
        let mut options = optionblk::default();
        options.getcanon = 1;
        options.defaultptn = 0;
        let mut stats: statsblk = unsafe { std::mem::zeroed() };
        let mut canon = vec![0 as setword; v * m];

        unsafe {
            densenauty(
                dense.as_mut_ptr() as *mut graph,
                lab.as_mut_ptr(),
                ptn.as_mut_ptr(),
                orbits.as_mut_ptr(),
                &mut options,
                &mut stats,
                m as c_int,
                v as c_int,
                canon.as_mut_ptr() as *mut graph,
            );
        }

        let order: Vec<usize> = lab.iter().map(|&x| x as usize).collect();
        validate_order(&order, v)?;
        Ok(order)
    }
}

/// Trivial oracle returning `0..v`. Not isomorphism-invariant; only for unit
/// tests that exercise the engine plumbing without nauty.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityOracle;

impl LabelingOracle for IdentityOracle {
    fn canonical_order(&self, g: &ColoredGraph) -> Result<Vec<usize>, OracleError> {
        validate_graph(g)?;
        Ok((0..g.vertices).collect())
    }
}
