//! Read-only queries over a built tree

use super::store::SuffixTree;
use super::types::*;

impl SuffixTree {
    /// Concatenated edge labels from the root down to `id`
    pub fn path_label(&self, id: NodeId) -> Result<Vec<u8>, TreeError> {
        let mut segments = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            segments.push(self.edge_label(parent, current.id)?);
            current = self.node(parent)?;
        }

        let mut label = Vec::with_capacity(segments.iter().map(|s| s.len()).sum());
        for segment in segments.iter().rev() {
            label.extend_from_slice(segment);
        }
        Ok(label)
    }

    /// Position reached by reading `pattern` from the root, if it occurs
    pub fn locate(&self, pattern: &[u8]) -> Result<Option<ActivePoint>, TreeError> {
        let mut point = ActivePoint::root();
        for &c in pattern {
            match self.descend(point, c)? {
                Some(next) => point = next,
                None => return Ok(None),
            }
        }
        Ok(Some(point))
    }

    /// Whether `pattern` occurs anywhere in the text
    pub fn contains(&self, pattern: &[u8]) -> bool {
        matches!(self.locate(pattern), Ok(Some(_)))
    }

    /// Sorted start offsets of every occurrence of `pattern`
    ///
    /// Suffixes that still end inside the tree (no unique terminator yet) have
    /// no leaf; those are checked directly. The empty pattern occurs at every
    /// offset, `text.len()` included.
    pub fn occurrences(&self, pattern: &[u8]) -> Result<Vec<usize>, TreeError> {
        if pattern.is_empty() {
            return Ok((0..=self.text.len()).collect());
        }
        let Some(point) = self.locate(pattern)? else {
            return Ok(Vec::new());
        };

        let below = match point.edge {
            None => point.node,
            Some(first) => self.child_on(point.node, first)?.id,
        };

        let mut offsets = Vec::new();
        let mut stack = vec![below];
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            if let Some(start) = node.suffix_start {
                offsets.push(start);
            }
            stack.extend(node.children.values().copied());
        }

        let first_implicit = self.text.len() - self.implicit_suffix_len()?;
        offsets.extend(
            (first_implicit..self.text.len()).filter(|&k| self.text[k..].starts_with(pattern)),
        );

        offsets.sort_unstable();
        offsets.dedup();
        Ok(offsets)
    }

    /// Length of the longest suffix that has no leaf of its own
    pub fn implicit_suffix_len(&self) -> Result<usize, TreeError> {
        Ok(self.string_depth(self.active.node)? + self.active.depth)
    }

    /// Non-root nodes without children
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.id != ROOT && n.is_leaf())
    }
}
