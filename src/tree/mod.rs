//! Online suffix tree construction
//!
//! This module builds a suffix tree one byte at a time with Ukkonen's
//! algorithm. Edge labels are index ranges into the text, leaves keep an open
//! end, and suffix links let each phase jump between suffixes without
//! re-scanning from the root, for amortized linear construction.
//!
//! ## Architecture
//!
//! - `types`: node ids, edge ends, the active point and [`TreeError`]
//! - `store`: the node arena and edge labels
//! - `navigate`: descending the active point by one byte
//! - `split`: creating leaves and splitting edges
//! - `suffix_link`: following suffix links with skip-count descent
//! - `builder`: the per-byte phase loop
//! - `query`, `stats`, `validate`: read-only views over a built tree
//!
//! ## Terminators
//!
//! No terminator is appended. Without one, suffixes that also occur earlier
//! in the text end inside the tree instead of at a leaf. Append a byte that
//! does not occur elsewhere to get one leaf per suffix.

pub mod builder;
pub mod navigate;
pub mod query;
pub mod split;
pub mod stats;
pub mod store;
pub mod suffix_link;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use stats::TreeStats;
pub use store::SuffixTree;
pub use types::{ActivePoint, EdgeEnd, Node, NodeId, ROOT, TreeError};
