//! Tree statistics

use super::store::SuffixTree;
use super::types::*;
use serde::{Deserialize, Serialize};

/// Summary counts for a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeStats {
    /// Bytes of text indexed
    pub text_len: usize,
    /// All nodes, root included
    pub node_count: usize,
    /// Nodes with children, root excluded
    pub internal_count: usize,
    /// Non-root nodes without children
    pub leaf_count: usize,
    /// Nodes with a suffix link set
    pub suffix_link_count: usize,
    /// Suffixes still implicit (no leaf yet)
    pub implicit_suffixes: usize,
    /// Longest path label ending at an internal node
    pub max_internal_depth: usize,
}

impl SuffixTree {
    pub fn stats(&self) -> Result<TreeStats, TreeError> {
        let mut stats = TreeStats {
            text_len: self.text.len(),
            node_count: self.nodes.len(),
            implicit_suffixes: self.implicit_suffix_len()?,
            ..Default::default()
        };

        for node in self.nodes.iter().filter(|n| n.id != ROOT) {
            if node.is_leaf() {
                stats.leaf_count += 1;
            } else {
                stats.internal_count += 1;
                stats.max_internal_depth = stats.max_internal_depth.max(node.depth);
            }
        }
        stats.suffix_link_count = self
            .nodes
            .iter()
            .filter(|n| n.suffix_link.is_some())
            .count();

        Ok(stats)
    }
}
