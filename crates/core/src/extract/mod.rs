//! Node extraction.
//!
//! Converts provider output into uniform structural-node lists with stable,
//! deterministic identifiers. Extraction is a pure function of the
//! provider's output for a given document; re-extracting the same document
//! yields the same ids.

pub mod flowing;
pub mod paginated;
pub mod tabular;

pub use flowing::extract_blocks;
pub use paginated::extract_pages;
pub use tabular::extract_sheets;
