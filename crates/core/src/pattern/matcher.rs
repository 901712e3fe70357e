//! Raw dot-product similarity matching.

use super::features::FeatureMatrix;

/// Scores every node against the seed node.
///
/// The score is the raw dot product between the node's feature vector and
/// the seed's. Vectors are not unit-normalized, so the score is
/// scale-sensitive: a node only clears a high threshold when it matches the
/// seed closely on all four raw-scaled dimensions. Deterministic; fixed
/// accumulation order, no randomness.
pub fn similarity_scores(matrix: &FeatureMatrix, seed_index: usize) -> Vec<f64> {
    let seed = *matrix.row(seed_index);
    matrix
        .rows()
        .iter()
        .map(|row| row.iter().zip(seed.iter()).map(|(a, b)| a * b).sum())
        .collect()
}

/// Indices of every node whose score against the seed strictly exceeds
/// `threshold`.
///
/// The seed itself is subject to the same test: its self-score is its
/// squared norm, which typical table text clears under the default
/// normalization constants but which is *not* guaranteed for vectors with
/// small component magnitudes (e.g. a short non-numeric label near the left
/// margin). A seed that fails its own test produces no raw matches at all.
/// This is a known weakness of the raw dot-product formulation, kept as
/// specified behavior rather than silently corrected.
pub fn raw_matches(matrix: &FeatureMatrix, seed_index: usize, threshold: f64) -> Vec<usize> {
    similarity_scores(matrix, seed_index)
        .into_iter()
        .enumerate()
        .filter(|&(_, score)| score > threshold)
        .map(|(i, _)| i)
        .collect()
}
