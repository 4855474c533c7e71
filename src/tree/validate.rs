//! Invariant checks
//!
//! Everything here is a read over `&SuffixTree`. Large trees fan the per-leaf
//! and per-suffix checks out over rayon.

use super::store::SuffixTree;
use super::types::*;
use rayon::prelude::*;

/// Item count above which checks run in parallel
const PARALLEL_THRESHOLD: usize = 10_000;

impl SuffixTree {
    /// Check every structural invariant, returning the first violation found
    ///
    /// Covers parent/child consistency and reachability, edge ranges, first-byte
    /// disjointness, leaf path labels, suffix links and that every suffix of the
    /// text can be located from the root.
    pub fn validate(&self) -> Result<(), TreeError> {
        self.check_structure()?;

        let leaves: Vec<&Node> = self.leaves().collect();
        check_all(&leaves, |leaf| self.check_leaf(leaf))?;

        let linked: Vec<(NodeId, NodeId)> = self
            .nodes
            .iter()
            .filter_map(|n| n.suffix_link.map(|to| (n.id, to)))
            .collect();
        check_all(&linked, |&(from, to)| self.check_suffix_link(from, to))?;

        let starts: Vec<usize> = (0..=self.text.len()).collect();
        check_all(&starts, |&start| self.check_suffix_present(start))
    }

    fn check_structure(&self) -> Result<(), TreeError> {
        let len = self.text.len();
        for (index, node) in self.nodes.iter().enumerate() {
            if node.id.index() != index {
                return Err(TreeError::UnknownNode(node.id));
            }

            let end = node.end.resolve(len);
            if node.start > end || end > len {
                return Err(TreeError::InvalidRange {
                    node: node.id,
                    start: node.start,
                    end,
                    len,
                });
            }

            match node.parent {
                None if node.id != ROOT => return Err(TreeError::BrokenParent { node: node.id }),
                Some(_) if node.id == ROOT => return Err(TreeError::BrokenParent { node: ROOT }),
                None => {}
                Some(parent) => {
                    let first = *self.label_of(node).first().ok_or(TreeError::InvalidRange {
                        node: node.id,
                        start: node.start,
                        end,
                        len,
                    })?;
                    if self.node(parent)?.child(first) != Some(node.id) {
                        return Err(TreeError::BrokenParent { node: node.id });
                    }
                }
            }

            for (&key, &child) in &node.children {
                let child_node = self.node(child)?;
                if child_node.parent != Some(node.id) {
                    return Err(TreeError::BrokenParent { node: child });
                }
                let first = self.text.get(child_node.start).copied();
                if first != Some(key) {
                    return Err(TreeError::EdgeKeyMismatch {
                        node: child,
                        key,
                        first: first.unwrap_or_default(),
                    });
                }
            }
        }

        // Every node must hang below the root exactly once
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(TreeError::BrokenParent { node: id });
            }
            stack.extend(self.node(id)?.children.values().copied());
        }
        match seen.iter().position(|&reached| !reached) {
            Some(orphan) => Err(TreeError::BrokenParent {
                node: NodeId(orphan as u32),
            }),
            None => Ok(()),
        }
    }

    fn check_leaf(&self, leaf: &Node) -> Result<(), TreeError> {
        let start = leaf
            .suffix_start
            .ok_or(TreeError::BadLeafLabel { leaf: leaf.id })?;
        let expected = self
            .text
            .get(start..)
            .ok_or(TreeError::BadLeafLabel { leaf: leaf.id })?;
        if self.path_label(leaf.id)? != expected {
            return Err(TreeError::BadLeafLabel { leaf: leaf.id });
        }
        Ok(())
    }

    fn check_suffix_link(&self, from: NodeId, to: NodeId) -> Result<(), TreeError> {
        let source = self.path_label(from)?;
        let target = self.path_label(to)?;
        if source.is_empty() || source[1..] != target[..] {
            return Err(TreeError::BadSuffixLink { from, to });
        }
        Ok(())
    }

    fn check_suffix_present(&self, start: usize) -> Result<(), TreeError> {
        match self.locate(&self.text[start..])? {
            Some(_) => Ok(()),
            None => Err(TreeError::MissingSuffix { start }),
        }
    }
}

fn check_all<T, F>(items: &[T], check: F) -> Result<(), TreeError>
where
    T: Sync,
    F: Fn(&T) -> Result<(), TreeError> + Sync + Send,
{
    if items.len() > PARALLEL_THRESHOLD {
        items.par_iter().try_for_each(check)
    } else {
        items.iter().try_for_each(check)
    }
}
