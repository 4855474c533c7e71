//! Output formatting
//!
//! - [`dot`] - Graphviz snapshots of the tree, one file per phase
//! - [`report`] - Colored statistics and match listings

pub mod dot;
pub mod report;

pub use dot::{PhaseWriter, render_dot, write_dot};
pub use report::{print_matches, print_stats};
