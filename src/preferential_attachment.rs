//! Generates a graph using the Barabási–Albert preferential attachment
//! model.
//!
//! This is a graph generation model based upon:
//! Barabási, Albert-László, and Réka Albert. "Emergence of scaling in random
//! networks." Science 286.5439 (1999): 509-512.
//!
//! # Examples
//!
//! ```
//! use graphgen::barabasi_albert;
//! let graph = barabasi_albert(1000, 10, false, None).unwrap();
//! ```

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::rng::gen_rng;
use rand::prelude::*;
use rustc_hash::FxHashSet;

/// Generates a Barabási–Albert preferential attachment graph and returns it.
///
/// The graph starts from a fixed bootstrap in which node `m` is connected to
/// each of nodes `0..m` (node `m` is the source in the directed variant).
/// Every further node then joins by attaching `m` edges to distinct existing
/// nodes, each chosen with probability proportional to its current weight:
/// degree for undirected graphs, in-degree plus out-degree for directed
/// ones. Sampling is without replacement within a node's attachment round,
/// so no node ever receives two edges from the same newcomer.
///
/// Selection uses a running cumulative sum over a linear scan of the
/// existing nodes rather than a weighted sampling index. Each draw picks a
/// uniform integer below the total weight still eligible this round and
/// takes the first unchosen node whose cumulative weight exceeds it; weight
/// consumed by earlier picks in the same round is subtracted from the range
/// of later draws.
///
/// # Arguments
/// * `n` - Total number of nodes in the generated graph.
/// * `m` - Number of edges each joining node attaches.
/// * `directed` - Whether to build a directed graph (new node as source).
/// * `seed` - Seed for deterministic generation; `None` uses entropy.
///
/// # Errors
/// `GraphError::InvalidEdgesPerStep` unless `1 <= m < n`, raised before any
/// node is created.
pub fn barabasi_albert(
    n: usize,
    m: usize,
    directed: bool,
    seed: Option<u64>,
) -> GraphResult<Graph> {
    if m < 1 || m >= n {
        return Err(GraphError::InvalidEdgesPerStep { m, n });
    }
    let mut rng = gen_rng(seed);
    let mut graph = Graph::with_nodes(directed, n);

    // Local weight mirror so selection never re-queries the store. For the
    // undirected case this is the degree, for the directed case in + out.
    let mut weights: Vec<usize> = vec![0; n];
    for v in 0..m {
        graph.add_edge(m, v)?;
        weights[m] += 1;
        weights[v] += 1;
    }

    // Sum of weights over all finalised nodes: 2 per edge in both variants.
    let mut num_endpoints = 2 * m;

    for new_node in (m + 1)..n {
        let mut chosen: FxHashSet<usize> = FxHashSet::default();
        // Weight consumed by targets already picked this round; later draws
        // in the round are rescaled over the remaining eligible weight.
        let mut delta_endpoints = 0;

        for _ in 0..m {
            let rnd = rng.gen_range(0..num_endpoints - delta_endpoints);
            let mut sum = 0;
            for target in 0..new_node {
                if chosen.contains(&target) {
                    continue;
                }
                sum += weights[target];
                if sum > rnd {
                    // The edge must land before the compensation below:
                    // delta_endpoints has to reflect the target's weight as
                    // it was when the scan saw it, not after the bump.
                    let weight_before = weights[target];
                    graph.add_edge(new_node, target)?;
                    weights[target] += 1;
                    weights[new_node] += 1;
                    delta_endpoints += weight_before;
                    chosen.insert(target);
                    break;
                }
            }
        }
        num_endpoints += 2 * m;
    }

    Ok(graph)
}

#[cfg(test)]
mod preferential_attachment_tests {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use quickcheck::TestResult;

    #[test]
    fn bootstrap_only() {
        // n == m + 1 leaves nothing to grow beyond the bootstrap star
        let graph = barabasi_albert(3, 2, false, Some(1)).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            barabasi_albert(10, 0, false, None),
            Err(GraphError::InvalidEdgesPerStep { m: 0, n: 10 })
        );
        assert_eq!(
            barabasi_albert(10, 10, false, None),
            Err(GraphError::InvalidEdgesPerStep { m: 10, n: 10 })
        );
        assert_eq!(
            barabasi_albert(3, 7, false, None),
            Err(GraphError::InvalidEdgesPerStep { m: 7, n: 3 })
        );
        assert_eq!(
            barabasi_albert(0, 1, false, None),
            Err(GraphError::InvalidEdgesPerStep { m: 1, n: 0 })
        );
    }

    #[test]
    fn ten_nodes_two_edges_per_step() {
        let graph = barabasi_albert(10, 2, false, Some(7)).unwrap();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.edges_len(), 16);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(&edges[..2], &[(2, 0), (2, 1)]);

        // each joining node contributes exactly two edges, in order
        for (round, pair) in edges[2..].chunks(2).enumerate() {
            let new_node = round + 3;
            assert_eq!(pair.len(), 2);
            for &(src, dst) in pair {
                assert_eq!(src, new_node);
                assert!(dst < new_node);
            }
            assert_ne!(pair[0].1, pair[1].1);
        }

        let rerun = barabasi_albert(10, 2, false, Some(7)).unwrap();
        assert_eq!(edges, rerun.edges().collect::<Vec<_>>());
    }

    #[test]
    fn seed_7_edge_list_is_pinned() {
        // recorded against this crate's own RNG; any change to the draw
        // order or the selection arithmetic shows up here, even one that
        // still reproduces against itself run to run
        let graph = barabasi_albert(10, 2, false, Some(7)).unwrap();
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![
                (2, 0),
                (2, 1),
                (3, 2),
                (3, 0),
                (4, 2),
                (4, 1),
                (5, 1),
                (5, 2),
                (6, 2),
                (6, 1),
                (7, 0),
                (7, 1),
                (8, 1),
                (8, 3),
                (9, 7),
                (9, 0),
            ]
        );
    }

    #[test]
    fn directed_out_degrees() {
        let (n, m) = (40, 3);
        let graph = barabasi_albert(n, m, true, Some(5)).unwrap();
        assert_eq!(graph.edges_len(), m + m * (n - m - 1));
        for v in 0..m {
            assert_eq!(graph.out_degree(v), Ok(0));
        }
        for v in m..n {
            assert_eq!(graph.out_degree(v), Ok(m));
        }
        let in_sum: usize = graph.nodes().map(|v| graph.in_degree(v).unwrap()).sum();
        assert_eq!(in_sum, graph.edges_len());
    }

    #[test]
    fn no_duplicate_edges() {
        let graph = barabasi_albert(60, 4, false, Some(13)).unwrap();
        let distinct = graph
            .edges()
            .map(|(i, j)| (i.min(j), i.max(j)))
            .unique()
            .count();
        assert_eq!(distinct, graph.edges_len());
    }

    #[test]
    fn multi_edge_rounds_keep_degrees_consistent() {
        // with m > 1 a pick early in a round shrinks the range of the later
        // draws in that same round; the degrees must still line up with the
        // edge list at the end
        let graph = barabasi_albert(50, 5, false, Some(99)).unwrap();
        for v in graph.nodes() {
            let incident = graph
                .edges()
                .filter(|&(i, j)| i == v || j == v)
                .count();
            assert_eq!(graph.degree(v), Ok(incident));
        }
        let degree_sum: usize = graph.nodes().map(|v| graph.degree(v).unwrap()).sum();
        assert_eq!(degree_sum, 2 * graph.edges_len());
    }

    #[quickcheck]
    fn edge_count_matches_formula(n: u8, m: u8, directed: bool, seed: u64) -> TestResult {
        let (n, m) = (n as usize, m as usize);
        if m < 1 || m >= n || n > 64 {
            return TestResult::discard();
        }
        let graph = barabasi_albert(n, m, directed, Some(seed)).unwrap();
        TestResult::from_bool(
            graph.len() == n && graph.edges_len() == m + m * (n - m - 1),
        )
    }

    #[quickcheck]
    fn targets_are_distinct_within_each_round(seed: u64) -> bool {
        let graph = barabasi_albert(30, 3, false, Some(seed)).unwrap();
        let edges: Vec<_> = graph.edges().collect();
        edges[3..]
            .chunks(3)
            .all(|round| round.iter().map(|&(_, dst)| dst).all_unique())
    }

    #[quickcheck]
    fn seeded_generation_is_deterministic(seed: u64, directed: bool) -> bool {
        let first = barabasi_albert(25, 2, directed, Some(seed)).unwrap();
        let second = barabasi_albert(25, 2, directed, Some(seed)).unwrap();
        first.edges().collect::<Vec<_>>() == second.edges().collect::<Vec<_>>()
    }
}
