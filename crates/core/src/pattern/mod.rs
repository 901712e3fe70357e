//! Pattern-propagation engine.
//!
//! Feature encoding, raw dot-product similarity matching, and expansion of
//! raw matches into full-line (paginated) or full-alignment-group (flowing)
//! selections. All functions here are pure over their inputs.

pub mod expand;
pub mod features;
pub mod matcher;
pub mod params;

pub use expand::{aligned_blocks, expand_to_lines};
pub use features::{FEATURE_DIM, FeatureMatrix, encode};
pub use matcher::{raw_matches, similarity_scores};
pub use params::MatchParams;
