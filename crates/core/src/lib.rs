//! structsel - structural node model and pattern-propagation engine.
//!
//! Turns raw positioned text from semi-structured documents (paginated,
//! flowing, tabular) into addressable structural nodes, and propagates a
//! single seed selection to every node sharing the same structural role.

pub mod error;
pub mod extract;
pub mod model;
pub mod pattern;
pub mod provider;
pub mod selection;
pub mod session;

pub use error::{Result, SelectError};
pub use model::{BlockNode, DocumentKind, LineKey, NodeId, PageNode, SheetGrid};
pub use pattern::MatchParams;
pub use provider::ProviderRegistry;
pub use selection::Selection;
pub use session::Session;
