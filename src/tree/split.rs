//! Node creation: new leaves and edge splits

use super::store::SuffixTree;
use super::types::*;

impl SuffixTree {
    /// Insert a leaf for the range `[start, end)` at `point`
    ///
    /// On a node the leaf hangs directly off it and the node is returned. In the
    /// middle of an edge the edge is split: a new internal node takes over the
    /// matched prefix, the old child keeps the rest, and the leaf becomes the
    /// internal node's second child. The internal node is returned.
    pub fn split(
        &mut self,
        point: ActivePoint,
        start: usize,
        end: EdgeEnd,
    ) -> Result<NodeId, TreeError> {
        let len = self.text.len();
        let Some(&leaf_first) = self.text.get(start) else {
            return Err(TreeError::InvalidRange {
                node: point.node,
                start,
                end: end.resolve(len),
                len,
            });
        };
        let path_depth = self.node(point.node)?.depth + point.depth;
        let suffix_start = start
            .checked_sub(path_depth)
            .ok_or(TreeError::InvalidRange {
                node: point.node,
                start,
                end: end.resolve(len),
                len,
            })?;

        let Some(first) = point.edge else {
            let leaf = self.alloc(point.node, start, end);
            self.node_mut(leaf)?.suffix_start = Some(suffix_start);
            self.node_mut(point.node)?.children.insert(leaf_first, leaf);
            return Ok(point.node);
        };

        let child = self.child_on(point.node, first)?;
        let (child_id, old_start) = (child.id, child.start);
        let split_at = old_start + point.depth;
        if point.depth == 0 || split_at >= child.end.resolve(len) {
            return Err(TreeError::InvalidRange {
                node: child_id,
                start: split_at,
                end: child.end.resolve(len),
                len,
            });
        }

        let inner = self.alloc(point.node, old_start, EdgeEnd::Fixed(split_at));
        self.node_mut(inner)?.depth = path_depth;

        let child = self.node_mut(child_id)?;
        child.start = split_at;
        child.parent = Some(inner);

        let split_first = self.text[split_at];
        self.node_mut(inner)?.children.insert(split_first, child_id);
        self.node_mut(point.node)?.children.insert(first, inner);

        let leaf = self.alloc(inner, start, end);
        self.node_mut(leaf)?.suffix_start = Some(suffix_start);
        self.node_mut(inner)?.children.insert(leaf_first, leaf);

        Ok(inner)
    }
}
