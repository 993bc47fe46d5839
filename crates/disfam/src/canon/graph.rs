//! Colored incidence graph handed to the labeling oracle.

use crate::family::Family;

/// Undirected vertex-colored graph: vertex count, edge list, and a partition
/// of the vertices into color classes (each class sorted ascending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoredGraph {
    pub vertices: usize,
    pub edges: Vec<(usize, usize)>,
    pub colors: Vec<Vec<usize>>,
}

/// Builds the bipartite incidence graph of a family over `[1, n]`.
///
/// Element vertices are `0..n` (one color class), member vertices follow in
/// ascending code order (a second class). An edge joins element vertex `j`
/// and member vertex `n + k` iff bit `j` is set in the k-th member's code.
pub fn family_graph(family: &Family, n: usize) -> ColoredGraph {
    let vertices = n + family.len();
    let mut edges = Vec::new();
    for (k, code) in family.iter().enumerate() {
        let member_vertex = n + k;
        for j in 0..n {
            if code.bit(j as u64) {
                edges.push((j, member_vertex));
            }
        }
    }
    let mut colors = Vec::new();
    if n > 0 {
        colors.push((0..n).collect());
    }
    if !family.is_empty() {
        colors.push((n..vertices).collect());
    }
    ColoredGraph {
        vertices,
        edges,
        colors,
    }
}
