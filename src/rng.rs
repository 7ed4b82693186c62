use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds the random source for a single generation run.
///
/// A seed yields a deterministic draw sequence, so a generator called twice
/// with the same seed and parameters produces the same graph, edge for edge.
/// `None` initialises from operating-system entropy. Each run owns its own
/// instance; nothing is shared between calls.
pub(crate) fn gen_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
