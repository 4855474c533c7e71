//! Suffix link traversal
//!
//! Moving from the position of `xα` to the position of `α`. When the cursor
//! is mid-edge the matched part of the edge has to be re-walked below the
//! link target; that walk hops whole edges (skip-count) and only reads the
//! first byte of each, which keeps construction linear.

use super::store::SuffixTree;
use super::types::*;

impl SuffixTree {
    /// Position reached by dropping the first character of the path at `point`
    pub fn follow_suffix_link(&self, point: ActivePoint) -> Result<ActivePoint, TreeError> {
        let node = self.node(point.node)?;
        let target = node.suffix_link.unwrap_or(ROOT);

        let Some(first) = point.edge else {
            return Ok(ActivePoint::at(target));
        };

        let child = self.child_on(point.node, first)?;
        if point.node == ROOT {
            // The leading byte is on this very edge, so skip it
            self.skip_count(ROOT, child.start + 1, point.depth - 1)
        } else {
            self.skip_count(target, child.start, point.depth)
        }
    }

    /// Walk `remaining` bytes of `text[start..]` down from `node`
    ///
    /// The path is known to exist, so only the first byte of each edge is
    /// inspected.
    pub(crate) fn skip_count(
        &self,
        mut node: NodeId,
        mut start: usize,
        mut remaining: usize,
    ) -> Result<ActivePoint, TreeError> {
        loop {
            if remaining == 0 {
                return Ok(ActivePoint::at(node));
            }

            let first = self.text[start];
            let child = self.child_on(node, first)?;
            let edge_len = self.edge_len(child);
            if remaining < edge_len {
                return Ok(ActivePoint::on_edge(node, first, remaining));
            }

            start += edge_len;
            remaining -= edge_len;
            node = child.id;
        }
    }
}
