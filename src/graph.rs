use crate::edge_adjacency::derive_edge_adjacency;
use crate::error::{Error, Result};
use crate::normalize::normalize_vector;
use crate::strength::{edge_strength_matrix, node_strength_matrix, StrengthMatrix};
use crate::topology::Topology;
use ndarray::Array2;
use petgraph::graph::NodeIndex;
use petgraph::Directed;
use petgraph::Graph as PetGraph;
use tracing::{debug, warn};

/// Node adjacency: `adjacency[[i, j]] == Some(e)` is the directed edge `e`
/// from node `i` to node `j`.
pub type NodeAdjacency = Array2<Option<usize>>;

/// Edge adjacency: `adjacency[[e1, e2]] == Some(n)` if edge `e1` ends at node
/// `n` and edge `e2` starts at `n`.
pub type EdgeAdjacency = Array2<Option<usize>>;

/// A directed graph with positive weights on its nodes and edges.
///
/// Weights are rescaled to unit L2 norm on construction, so graphs of
/// different absolute weight scale are comparable.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: NodeAdjacency,
    node_weights: Vec<f32>,
    edge_weights: Vec<f32>,
}

impl WeightedGraph {
    pub fn new(
        adjacency: NodeAdjacency,
        mut node_weights: Vec<f32>,
        mut edge_weights: Vec<f32>,
    ) -> Result<WeightedGraph> {
        if adjacency.nrows() != adjacency.ncols() {
            return Err(Error::ShapeMismatch(format!(
                "adjacency matrix must be square, got {}x{}",
                adjacency.nrows(),
                adjacency.ncols()
            )));
        }

        let num_nodes = adjacency.nrows();
        if node_weights.len() != num_nodes {
            return Err(Error::ShapeMismatch(format!(
                "expected {} node weights, got {}",
                num_nodes,
                node_weights.len()
            )));
        }

        let num_edges = adjacency.iter().filter(|e| e.is_some()).count();
        if edge_weights.len() != num_edges {
            return Err(Error::ShapeMismatch(format!(
                "expected {} edge weights, got {}",
                num_edges,
                edge_weights.len()
            )));
        }

        let mut seen = vec![false; num_edges];
        for ((i, j), edge) in adjacency.indexed_iter() {
            if let Some(e) = *edge {
                if e >= num_edges {
                    return Err(Error::ShapeMismatch(format!(
                        "edge {} -> {} has id {}, but there are only {} edges",
                        i, j, e, num_edges
                    )));
                }
                if seen[e] {
                    warn!(edge = e, "edge id used for more than one node pair");
                }
                seen[e] = true;
            }
        }

        normalize_vector(&mut node_weights);
        normalize_vector(&mut edge_weights);

        Ok(WeightedGraph {
            adjacency,
            node_weights,
            edge_weights,
        })
    }

    /// Builds a graph from a petgraph graph. Node and edge payloads are the
    /// weights, edge ids are the petgraph edge indices.
    pub fn from_petgraph(pg: &PetGraph<f32, f32, Directed>) -> Result<WeightedGraph> {
        let n = pg.node_count();
        let mut adjacency = Array2::from_elem((n, n), None);
        for (id, edge) in pg.raw_edges().iter().enumerate() {
            let cell = &mut adjacency[[edge.source().index(), edge.target().index()]];
            if cell.is_some() {
                return Err(Error::ShapeMismatch(format!(
                    "parallel edges between {} and {}",
                    edge.source().index(),
                    edge.target().index()
                )));
            }
            *cell = Some(id);
        }

        let node_weights = (0..n).map(|i| pg[NodeIndex::new(i)]).collect();
        let edge_weights = pg.raw_edges().iter().map(|e| e.weight).collect();

        WeightedGraph::new(adjacency, node_weights, edge_weights)
    }

    pub fn num_nodes(&self) -> usize {
        self.node_weights.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_weights.len()
    }

    pub fn adjacency(&self) -> &NodeAdjacency {
        &self.adjacency
    }

    /// The normalized node weights.
    pub fn node_weights(&self) -> &[f32] {
        &self.node_weights
    }

    /// The normalized edge weights.
    pub fn edge_weights(&self) -> &[f32] {
        &self.edge_weights
    }

    /// Derives the edge adjacency, the strength matrices and the neighbor
    /// lists the similarity iteration operates on.
    pub fn elements(&self) -> Result<GraphElements> {
        let edge_adjacency = derive_edge_adjacency(&self.adjacency, self.num_edges());
        let node_strength =
            node_strength_matrix(&self.adjacency, &self.node_weights, &self.edge_weights)?;
        let edge_strength =
            edge_strength_matrix(&edge_adjacency, &self.node_weights, &self.edge_weights)?;

        let nodes = Topology::new(&self.adjacency, &node_strength);
        let edges = Topology::new(&edge_adjacency, &edge_strength);

        debug!(
            num_nodes = self.num_nodes(),
            num_edges = self.num_edges(),
            num_edge_pairs = edges.num_links(),
            "derived graph elements"
        );

        Ok(GraphElements {
            edge_adjacency,
            node_strength,
            edge_strength,
            nodes,
            edges,
        })
    }
}

/// Everything derived from one `WeightedGraph`. Immutable once built.
#[derive(Debug, Clone)]
pub struct GraphElements {
    edge_adjacency: EdgeAdjacency,
    node_strength: StrengthMatrix,
    edge_strength: StrengthMatrix,
    nodes: Topology,
    edges: Topology,
}

impl GraphElements {
    pub fn edge_adjacency(&self) -> &EdgeAdjacency {
        &self.edge_adjacency
    }

    pub fn node_strength(&self) -> &StrengthMatrix {
        &self.node_strength
    }

    pub fn edge_strength(&self) -> &StrengthMatrix {
        &self.edge_strength
    }

    /// Nodes linked by edges.
    pub fn nodes(&self) -> &Topology {
        &self.nodes
    }

    /// Edges linked by nodes.
    pub fn edges(&self) -> &Topology {
        &self.edges
    }
}

pub struct GraphBuilder {
    node_weights: Vec<f32>,
    // (source, target, weight), indexed by edge id
    edges: Vec<(usize, usize, f32)>,
}

impl GraphBuilder {
    pub fn new() -> GraphBuilder {
        GraphBuilder {
            node_weights: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the node index.
    pub fn add_node(&mut self, weight: f32) -> usize {
        self.node_weights.push(weight);
        self.node_weights.len() - 1
    }

    /// Returns the edge id.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f32) -> usize {
        self.edges.push((source, target, weight));
        self.edges.len() - 1
    }

    pub fn graph(self) -> Result<WeightedGraph> {
        let n = self.node_weights.len();
        let mut adjacency = Array2::from_elem((n, n), None);
        for (id, &(source, target, _)) in self.edges.iter().enumerate() {
            if source >= n || target >= n {
                return Err(Error::ShapeMismatch(format!(
                    "edge {} -> {} refers to a node outside 0..{}",
                    source, target, n
                )));
            }
            let cell = &mut adjacency[[source, target]];
            if cell.is_some() {
                return Err(Error::ShapeMismatch(format!(
                    "parallel edges between {} and {}",
                    source, target
                )));
            }
            *cell = Some(id);
        }

        let edge_weights = self.edges.iter().map(|&(_, _, w)| w).collect();
        WeightedGraph::new(adjacency, self.node_weights, edge_weights)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        GraphBuilder::new()
    }
}
