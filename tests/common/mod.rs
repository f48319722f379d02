#![allow(dead_code)]

use ndarray::Array2;
use tacsim::graph::WeightedGraph;

/// Converts rows with `-1` for "no edge" into an adjacency matrix.
pub fn adjacency(rows: &[&[i32]]) -> Array2<Option<usize>> {
    let n = rows.len();
    let m = rows.first().map_or(0, |r| r.len());
    Array2::from_shape_fn((n, m), |(i, j)| {
        let e = rows[i][j];
        if e >= 0 {
            Some(e as usize)
        } else {
            None
        }
    })
}

pub fn load_graph(rows: &[&[i32]], node_weights: &[f32], edge_weights: &[f32]) -> WeightedGraph {
    WeightedGraph::new(
        adjacency(rows),
        node_weights.to_vec(),
        edge_weights.to_vec(),
    )
    .unwrap()
}

/// 4 nodes: 1 -e1-> 0 -e0-> 2 -e3-> 3 and 1 -e2-> 2
pub fn graph_a() -> WeightedGraph {
    load_graph(
        &[
            &[-1, -1, 0, -1],
            &[1, -1, 2, -1],
            &[-1, -1, -1, 3],
            &[-1, -1, -1, -1],
        ],
        &[1.0, 1.0, 5.0, 1.0],
        &[12.0, 8.0, 10.0, 15.0],
    )
}

/// 3 nodes: 0 -e0-> 1 -e1-> 2
pub fn graph_b() -> WeightedGraph {
    load_graph(
        &[&[-1, 0, -1], &[-1, -1, 1], &[-1, -1, -1]],
        &[1.0, 3.0, 1.0],
        &[15.0, 10.0],
    )
}

/// A directed ring of `n` nodes with varying weights.
pub fn ring(n: usize) -> WeightedGraph {
    let mut adj = Array2::from_elem((n, n), None);
    for i in 0..n {
        adj[[i, (i + 1) % n]] = Some(i);
    }
    let node_weights = (0..n).map(|i| 1.0 + (i % 7) as f32).collect();
    let edge_weights = (0..n).map(|i| 2.0 + (i % 5) as f32).collect();
    WeightedGraph::new(adj, node_weights, edge_weights).unwrap()
}

pub fn sum_of_squares(m: &Array2<f32>) -> f32 {
    m.iter().map(|v| v * v).sum()
}
