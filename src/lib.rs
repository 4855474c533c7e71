//! # suftree - Online Suffix Trees
//!
//! suftree builds a suffix tree over a text one byte at a time using
//! Ukkonen's algorithm, in amortized linear time. Every intermediate tree is
//! a valid suffix tree of the prefix read so far, which makes it possible to
//! snapshot the tree after each phase.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Node arena, active point, suffix links and the phase loop
//! - [`output`] - Graphviz DOT snapshots and terminal reports
//! - [`utils`] - Configuration, logging and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use suftree::tree::SuffixTree;
//!
//! let tree = SuffixTree::build(b"banana$").unwrap();
//! assert!(tree.contains(b"nan"));
//! assert_eq!(tree.occurrences(b"ana").unwrap(), vec![1, 3]);
//! tree.validate().unwrap();
//! ```
//!
//! ## Terminators
//!
//! Without a terminator that occurs nowhere else in the text, suffixes that
//! repeat earlier text stay implicit: they end inside an edge rather than at
//! a leaf. Queries account for this, but callers that want exactly one leaf
//! per suffix should append a unique byte such as `$`.

pub mod output;
pub mod tree;
pub mod utils;
