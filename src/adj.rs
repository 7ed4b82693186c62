use rustc_hash::FxHashSet;

/// Per-node adjacency sets.
///
/// Undirected graphs record each neighbour in both endpoints' `out` sets and
/// leave `into` empty; directed graphs record successors in `out` and
/// predecessors in `into`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Adj {
    pub(crate) out: FxHashSet<usize>,
    pub(crate) into: FxHashSet<usize>,
}

impl Adj {
    pub(crate) fn out_edges_len(&self) -> usize {
        self.out.len()
    }

    pub(crate) fn in_edges_len(&self) -> usize {
        self.into.len()
    }
}
