//! Generates a graph using the Erdős–Rényi model.
//!
//! # Examples
//!
//! ```
//! use graphgen::erdos_renyi;
//! let graph = erdos_renyi(1000, 0.1, false, false, None).unwrap();
//! ```

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::rng::gen_rng;
use rand::Rng;

/// Generates an Erdős–Rényi random graph `G(n, p)` and returns it.
///
/// Every candidate node pair receives an edge independently with probability
/// `p`. For an undirected graph the candidates are the unordered pairs
/// `{i, j}` with `i < j`; for a directed graph they are all ordered pairs
/// `(i, j)` with `i != j`. With `self_loops` set, pairs with `i == j` are
/// candidates as well.
///
/// Pairs are visited with `i` ascending and, for each `i`, `j` ascending,
/// and exactly one uniform draw is consumed per candidate pair whether or
/// not the edge is created. Together with a fixed `seed` this makes the
/// output reproducible edge for edge.
///
/// # Arguments
/// * `n` - Number of nodes to create.
/// * `p` - Probability of edge creation for each candidate pair.
/// * `directed` - Whether to build a directed graph.
/// * `self_loops` - Whether `i == j` pairs are candidates.
/// * `seed` - Seed for deterministic generation; `None` uses entropy.
///
/// # Errors
/// `GraphError::InvalidProbability` when `p` is not within `[0, 1]`
/// (including NaN), raised before any node is created.
pub fn erdos_renyi(
    n: usize,
    p: f64,
    directed: bool,
    self_loops: bool,
    seed: Option<u64>,
) -> GraphResult<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidProbability(p));
    }
    let mut rng = gen_rng(seed);
    let mut graph = Graph::with_nodes(directed, n);

    if directed {
        for i in 0..n {
            for j in 0..n {
                if i == j && !self_loops {
                    continue;
                }
                if rng.gen::<f64>() < p {
                    graph.add_edge(i, j)?;
                }
            }
        }
    } else {
        for i in 0..n {
            let start = if self_loops { i } else { i + 1 };
            for j in start..n {
                if rng.gen::<f64>() < p {
                    graph.add_edge(i, j)?;
                }
            }
        }
    }

    Ok(graph)
}
