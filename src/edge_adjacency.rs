use crate::graph::{EdgeAdjacency, NodeAdjacency};
use ndarray::Array2;

/// Derives the edge-to-edge adjacency of a graph with `num_edges` edges.
///
/// For every path `j -> i -> k` the incoming edge `j -> i` is followed by the
/// outgoing edge `i -> k` through node `i`. Edge ids are expected to be
/// unique per node pair. Should an id be reused, the last node visited wins.
pub fn derive_edge_adjacency(adjacency: &NodeAdjacency, num_edges: usize) -> EdgeAdjacency {
    let n = adjacency.nrows();
    let mut edge_adjacency = Array2::from_elem((num_edges, num_edges), None);

    for i in 0..n {
        for j in 0..n {
            if let Some(src) = adjacency[[j, i]] {
                for k in 0..n {
                    if let Some(dst) = adjacency[[i, k]] {
                        edge_adjacency[[src, dst]] = Some(i);
                    }
                }
            }
        }
    }

    edge_adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_fork() {
        // 1 -e1-> 0 -e0-> 2 -e3-> 3, 1 -e2-> 2
        let mut adj = Array2::from_elem((4, 4), None);
        adj[[0, 2]] = Some(0);
        adj[[1, 0]] = Some(1);
        adj[[1, 2]] = Some(2);
        adj[[2, 3]] = Some(3);

        let eadj = derive_edge_adjacency(&adj, 4);
        assert_eq!((4, 4), eadj.dim());
        assert_eq!(Some(2), eadj[[0, 3]]);
        assert_eq!(Some(0), eadj[[1, 0]]);
        assert_eq!(Some(2), eadj[[2, 3]]);
        assert_eq!(3, eadj.iter().filter(|n| n.is_some()).count());
    }

    #[test]
    fn test_cycle_links_edge_to_itself_via_loop() {
        // 0 -e0-> 0
        let mut adj = Array2::from_elem((1, 1), None);
        adj[[0, 0]] = Some(0);

        let eadj = derive_edge_adjacency(&adj, 1);
        assert_eq!(Some(0), eadj[[0, 0]]);
    }

    #[test]
    fn test_no_edges() {
        let adj = Array2::from_elem((3, 3), None);
        let eadj = derive_edge_adjacency(&adj, 0);
        assert_eq!((0, 0), eadj.dim());
    }
}
