//! Seeded record reordering for order-independence tests.

use datemark_core::Corpus;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns `corpus` with its records permuted by `seed`.
pub fn shuffled(corpus: &Corpus, seed: u64) -> Corpus {
    let mut records = corpus.records().to_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    records.shuffle(&mut rng);
    Corpus::from_records(records)
}
