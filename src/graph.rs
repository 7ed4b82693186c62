use crate::adj::Adj;
use crate::error::{GraphError, GraphResult};

/// An in-memory graph over dense node indices `0..len`.
///
/// The store holds either an undirected or a directed graph, chosen at
/// construction. Nodes are appended one at a time and get consecutive
/// indices starting at 0; indices are never reused. Edges are recorded in
/// insertion order, at most one per node pair (ordered pair for directed
/// graphs, unordered for undirected ones).
///
/// Degree and edge-existence queries are O(1). There are no removal
/// operations: a graph only grows while a generator populates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    adj: Vec<Adj>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            adj: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// An empty graph pre-populated with `n` nodes and no edges.
    pub fn with_nodes(directed: bool, n: usize) -> Self {
        let mut graph = Self::new(directed);
        graph.add_nodes(n);
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Number of edges, counting each edge once.
    pub fn edges_len(&self) -> usize {
        self.edges.len()
    }

    /// Appends one node and returns its index.
    pub fn add_node(&mut self) -> usize {
        self.adj.push(Adj::default());
        self.adj.len() - 1
    }

    /// Appends `n` consecutive nodes.
    pub fn add_nodes(&mut self, n: usize) {
        self.adj.reserve(n);
        for _ in 0..n {
            self.adj.push(Adj::default());
        }
    }

    /// Inserts the edge `(src, dst)`: `src -> dst` for a directed graph,
    /// `{src, dst}` for an undirected one.
    ///
    /// The edge becomes visible to [`Graph::has_edge`] and both endpoints'
    /// degrees are bumped before this returns; no intermediate state is
    /// observable.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> GraphResult<()> {
        self.check_node(src)?;
        self.check_node(dst)?;
        if self.has_edge(src, dst) {
            return Err(GraphError::DuplicateEdge { src, dst });
        }
        if self.directed {
            self.adj[src].out.insert(dst);
            self.adj[dst].into.insert(src);
        } else {
            self.adj[src].out.insert(dst);
            self.adj[dst].out.insert(src);
        }
        self.edges.push((src, dst));
        Ok(())
    }

    /// Whether the edge `(src, dst)` exists. Symmetric for undirected
    /// graphs; `false` when either index is out of range.
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.adj.get(src).map_or(false, |adj| adj.out.contains(&dst))
    }

    /// Total degree of `node`: incident edge count for undirected graphs,
    /// in-degree plus out-degree for directed ones. An undirected self-loop
    /// is stored once and counts once.
    pub fn degree(&self, node: usize) -> GraphResult<usize> {
        self.check_node(node)?;
        let adj = &self.adj[node];
        if self.directed {
            Ok(adj.out_edges_len() + adj.in_edges_len())
        } else {
            Ok(adj.out_edges_len())
        }
    }

    /// Out-degree of `node`; equal to [`Graph::degree`] for undirected
    /// graphs.
    pub fn out_degree(&self, node: usize) -> GraphResult<usize> {
        self.check_node(node)?;
        Ok(self.adj[node].out_edges_len())
    }

    /// In-degree of `node`; equal to [`Graph::degree`] for undirected
    /// graphs.
    pub fn in_degree(&self, node: usize) -> GraphResult<usize> {
        self.check_node(node)?;
        let adj = &self.adj[node];
        if self.directed {
            Ok(adj.in_edges_len())
        } else {
            Ok(adj.out_edges_len())
        }
    }

    /// Node indices in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = usize> {
        0..self.adj.len()
    }

    /// Edges in insertion order, each edge exactly once, as the `(src, dst)`
    /// pair originally passed to [`Graph::add_edge`].
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    fn check_node(&self, index: usize) -> GraphResult<()> {
        if index < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                index,
                len: self.adj.len(),
            })
        }
    }
}
