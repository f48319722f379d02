//! Strength of the coupling between adjacent graph elements.

use crate::error::{Error, Result};
use crate::graph::{EdgeAdjacency, NodeAdjacency};
use ndarray::Array2;

/// Strength values, defined only where the corresponding adjacency is.
pub type StrengthMatrix = Array2<Option<f32>>;

/// Strength of the link between adjacent nodes with weights `w_i` and `w_j`,
/// connected by an edge of weight `w_e`.
#[inline]
pub fn node_strength(w_i: f32, w_j: f32, w_e: f32) -> f32 {
    w_i * w_j / (w_e * w_e)
}

/// Strength of the link between adjacent edges with weights `w_e1` and
/// `w_e2`, sharing a node of weight `w_n`.
#[inline]
pub fn edge_strength(w_e1: f32, w_e2: f32, w_n: f32) -> f32 {
    w_n * w_n / (w_e1 * w_e2)
}

/// Symmetric mixing weight of two strengths, in `(0, 1]` for positive
/// strengths.
pub fn coherence(s1: f32, s2: f32) -> Result<f32> {
    let sum = s1 + s2;
    if sum == 0.0 {
        return Err(Error::DegenerateStrength(format!(
            "cannot mix strengths {} and {}",
            s1, s2
        )));
    }
    // s1 * s2 and s1 + s2 may overflow f32; rounding may exceed one
    Ok((s1.sqrt() * s2.sqrt() / (0.5 * s1 + 0.5 * s2)).min(1.0))
}

fn checked(s: f32, what: &str, i: usize, j: usize) -> Result<f32> {
    if s.is_finite() && s >= 0.0 {
        Ok(s)
    } else {
        Err(Error::DegenerateStrength(format!(
            "{} strength at ({}, {}) is {}",
            what, i, j, s
        )))
    }
}

pub fn node_strength_matrix(
    adjacency: &NodeAdjacency,
    node_weights: &[f32],
    edge_weights: &[f32],
) -> Result<StrengthMatrix> {
    let mut strength = Array2::from_elem(adjacency.dim(), None);
    for ((i, j), edge) in adjacency.indexed_iter() {
        if let Some(e) = *edge {
            let s = node_strength(node_weights[i], node_weights[j], edge_weights[e]);
            strength[[i, j]] = Some(checked(s, "node", i, j)?);
        }
    }
    Ok(strength)
}

pub fn edge_strength_matrix(
    edge_adjacency: &EdgeAdjacency,
    node_weights: &[f32],
    edge_weights: &[f32],
) -> Result<StrengthMatrix> {
    let mut strength = Array2::from_elem(edge_adjacency.dim(), None);
    for ((i, j), node) in edge_adjacency.indexed_iter() {
        if let Some(n) = *node {
            let s = edge_strength(edge_weights[i], edge_weights[j], node_weights[n]);
            strength[[i, j]] = Some(checked(s, "edge", i, j)?);
        }
    }
    Ok(strength)
}
