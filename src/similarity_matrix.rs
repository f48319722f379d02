use crate::convergence::ConvergenceTracker;
use crate::error::Result;
use crate::graph::GraphElements;
use crate::normalize::{mask_lower_values, normalize_matrix};
use crate::strength::coherence;
use crate::topology::{Link, Topology};
use ndarray::Array2;
use tracing::{debug, trace};

/// Node and edge similarity between the elements of graph A (rows) and
/// graph B (columns).
///
/// Both matrices start out as all ones. Every update step reads only from
/// the snapshot taken at its start, so the node update and the edge update
/// see the same previous state.
#[derive(Debug)]
pub struct SimilarityMatrix<'a> {
    graph_a: &'a GraphElements,
    graph_b: &'a GraphElements,
    nodes: Array2<f32>,
    edges: Array2<f32>,
    prev_nodes: Array2<f32>,
    prev_edges: Array2<f32>,
    num_iterations: usize,
    converged: bool,
}

impl<'a> SimilarityMatrix<'a> {
    pub fn new(graph_a: &'a GraphElements, graph_b: &'a GraphElements) -> SimilarityMatrix<'a> {
        let node_shape = (graph_a.nodes().len(), graph_b.nodes().len());
        let edge_shape = (graph_a.edges().len(), graph_b.edges().len());
        SimilarityMatrix {
            graph_a,
            graph_b,
            nodes: Array2::ones(node_shape),
            edges: Array2::ones(edge_shape),
            prev_nodes: Array2::zeros(node_shape),
            prev_edges: Array2::zeros(edge_shape),
            num_iterations: 0,
            converged: false,
        }
    }

    /// Performs one update step and normalizes both matrices.
    pub fn next(&mut self) -> Result<()> {
        self.prev_nodes.assign(&self.nodes);
        self.prev_edges.assign(&self.edges);

        propagate(
            &mut self.nodes,
            &self.prev_nodes,
            &self.prev_edges,
            self.graph_a.nodes(),
            self.graph_b.nodes(),
        )?;
        propagate(
            &mut self.edges,
            &self.prev_edges,
            &self.prev_nodes,
            self.graph_a.edges(),
            self.graph_b.edges(),
        )?;

        normalize_matrix(&mut self.nodes);
        normalize_matrix(&mut self.edges);

        self.num_iterations += 1;
        Ok(())
    }

    /// Iterates until both matrices changed by at most `eps` in every cell
    /// during the last step, or until `max_iterations` steps were performed.
    /// Running out of iterations is not an error.
    pub fn iterate(&mut self, max_iterations: usize, eps: f32) -> Result<()> {
        let mut tracker = ConvergenceTracker::new(max_iterations, eps);
        while tracker.should_continue(
            (&self.nodes, &self.prev_nodes),
            (&self.edges, &self.prev_edges),
        ) {
            self.next()?;
            tracker.advance();
            trace!(iteration = tracker.iterations(), "updated similarity");
        }
        self.converged = tracker.converged();

        debug!(
            iterations = tracker.iterations(),
            converged = self.converged,
            eps = tracker.eps(),
            "similarity iteration finished"
        );
        Ok(())
    }

    /// Zeroes every entry below `tolerance` in absolute value.
    pub fn mask(&mut self, tolerance: f32) {
        mask_lower_values(&mut self.nodes, tolerance);
        mask_lower_values(&mut self.edges, tolerance);
    }

    pub fn num_iterations(&self) -> usize {
        self.num_iterations
    }

    /// Whether the last call to `iterate` stopped because the matrices
    /// settled.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn node_matrix(&self) -> &Array2<f32> {
        &self.nodes
    }

    pub fn edge_matrix(&self) -> &Array2<f32> {
        &self.edges
    }

    /// Returns `(node similarity, edge similarity)`.
    pub fn into_matrices(self) -> (Array2<f32>, Array2<f32>) {
        (self.nodes, self.edges)
    }
}

/// Adds the neighbor contributions to every cell of `current`. The value a
/// cell held before is kept and accumulated upon.
fn propagate(
    current: &mut Array2<f32>,
    prev_same: &Array2<f32>,
    prev_other: &Array2<f32>,
    a: &Topology,
    b: &Topology,
) -> Result<()> {
    for ((i, j), cell) in current.indexed_iter_mut() {
        accumulate(cell, a.in_links_of(i), b.in_links_of(j), prev_same, prev_other)?;
        accumulate(cell, a.out_links_of(i), b.out_links_of(j), prev_same, prev_other)?;
    }
    Ok(())
}

#[inline]
fn accumulate(
    cell: &mut f32,
    links_a: &[Link],
    links_b: &[Link],
    prev_same: &Array2<f32>,
    prev_other: &Array2<f32>,
) -> Result<()> {
    for la in links_a {
        for lb in links_b {
            *cell += 0.5
                * coherence(la.strength, lb.strength)?
                * (prev_same[[la.neighbor, lb.neighbor]] + prev_other[[la.via, lb.via]]);
        }
    }
    Ok(())
}
