//! Neighbor lists the similarity iteration walks over.
//!
//! The same representation serves both layers of a graph: nodes linked to
//! nodes through edges, and edges linked to edges through nodes.

use crate::strength::StrengthMatrix;
use ndarray::Array2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the neighboring element.
    pub neighbor: usize,
    /// Index of the element of the other kind that connects the two.
    pub via: usize,
    pub strength: f32,
}

#[derive(Debug, Clone)]
pub struct Topology {
    in_links: Vec<Vec<Link>>,
    out_links: Vec<Vec<Link>>,
}

impl Topology {
    /// `adjacency[[u, v]]` names the connecting element of the link `u -> v`,
    /// `strength` holds the strength of the same link.
    pub fn new(adjacency: &Array2<Option<usize>>, strength: &StrengthMatrix) -> Topology {
        let n = adjacency.nrows();
        let mut in_links = vec![Vec::new(); n];
        let mut out_links = vec![Vec::new(); n];

        // Row-major order keeps every list sorted by neighbor index.
        for ((u, v), via) in adjacency.indexed_iter() {
            if let (Some(via), Some(strength)) = (*via, strength[[u, v]]) {
                out_links[u].push(Link {
                    neighbor: v,
                    via,
                    strength,
                });
                in_links[v].push(Link {
                    neighbor: u,
                    via,
                    strength,
                });
            }
        }

        Topology {
            in_links,
            out_links,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.in_links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.in_links.is_empty()
    }

    #[inline]
    pub fn in_links_of(&self, idx: usize) -> &[Link] {
        &self.in_links[idx]
    }

    #[inline]
    pub fn out_links_of(&self, idx: usize) -> &[Link] {
        &self.out_links[idx]
    }

    pub fn num_links(&self) -> usize {
        self.out_links.iter().map(Vec::len).sum()
    }
}
