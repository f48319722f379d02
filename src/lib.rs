//! Topology-attribute coupled similarity (TACSim) of weighted directed graphs.
//!
//! Computes how similar every node (and every edge) of graph A is to every
//! node (and edge) of graph B, taking both the wiring of the graphs and the
//! weights on their nodes and edges into account. Node and edge similarity
//! are mutually recursive and are computed together by a fixed-point
//! iteration.

mod convergence;
mod edge_adjacency;
mod error;
pub mod graph;
mod normalize;
mod similarity_matrix;
mod strength;
mod topology;

use ndarray::Array2;
use tracing::instrument;

pub use {
    convergence::*, edge_adjacency::*, error::*, normalize::*, similarity_matrix::*, strength::*,
    topology::*,
};

use graph::WeightedGraph;

/// Iteration parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
    /// Upper bound on the number of update steps.
    pub max_iterations: usize,

    /// Convergence threshold on the per-cell change between two steps.
    pub eps: f32,

    /// Entries of the final matrices below this value are set to zero.
    pub tolerance: f32,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_iterations: 100,
            eps: 1e-4,
            tolerance: 1e-6,
        }
    }
}

/// Returns `(node similarity, edge similarity)` of shape `N_a x N_b` and
/// `E_a x E_b`.
#[instrument(skip(a, b))]
pub fn compute_similarity(
    a: &WeightedGraph,
    b: &WeightedGraph,
    max_iterations: usize,
    eps: f32,
    tolerance: f32,
) -> Result<(Array2<f32>, Array2<f32>)> {
    let elements_a = a.elements()?;
    let elements_b = b.elements()?;
    let mut s = SimilarityMatrix::new(&elements_a, &elements_b);
    s.iterate(max_iterations, eps)?;
    s.mask(tolerance);
    Ok(s.into_matrices())
}

/// Similarity of a graph to itself. Same as `compute_similarity(g, g, ..)`,
/// but derives the graph elements only once.
#[instrument(skip(g))]
pub fn compute_self_similarity(
    g: &WeightedGraph,
    max_iterations: usize,
    eps: f32,
    tolerance: f32,
) -> Result<(Array2<f32>, Array2<f32>)> {
    let elements = g.elements()?;
    let mut s = SimilarityMatrix::new(&elements, &elements);
    s.iterate(max_iterations, eps)?;
    s.mask(tolerance);
    Ok(s.into_matrices())
}

pub fn similarity(
    a: &WeightedGraph,
    b: &WeightedGraph,
    params: &Params,
) -> Result<(Array2<f32>, Array2<f32>)> {
    compute_similarity(a, b, params.max_iterations, params.eps, params.tolerance)
}

pub fn self_similarity(g: &WeightedGraph, params: &Params) -> Result<(Array2<f32>, Array2<f32>)> {
    compute_self_similarity(g, params.max_iterations, params.eps, params.tolerance)
}
