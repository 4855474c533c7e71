//! Online construction
//!
//! Each appended byte starts a phase. A phase keeps inserting the pending
//! suffixes, shortest-last, until one of them is already present (the rest
//! then are too) or the root has nothing left to extend. Nodes touched in the
//! phase are chained by suffix links once the phase ends.

use super::store::SuffixTree;
use super::types::*;
use tracing::{debug, trace};

impl SuffixTree {
    /// Build a tree for `text`
    pub fn build(text: &[u8]) -> Result<Self, TreeError> {
        Self::build_with_phases(text, |_, _| {})
    }

    /// Build a tree for `text`, calling `on_phase(tree, i)` after phase `i`
    pub fn build_with_phases<F>(text: &[u8], mut on_phase: F) -> Result<Self, TreeError>
    where
        F: FnMut(&SuffixTree, usize),
    {
        let mut tree = Self::new();
        for (i, &c) in text.iter().enumerate() {
            tree.push(c)?;
            on_phase(&tree, i);
        }

        debug!(
            text_len = tree.text.len(),
            nodes = tree.nodes.len(),
            "built suffix tree"
        );
        Ok(tree)
    }

    /// Append every byte of `bytes`
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), TreeError> {
        for &c in bytes {
            self.push(c)?;
        }
        Ok(())
    }

    /// Append one byte and run its phase
    pub fn push(&mut self, c: u8) -> Result<(), TreeError> {
        let phase = self.text.len();
        self.text.push(c);

        // Nodes the phase inserted at or passed through, in suffix order
        let mut visited: Vec<NodeId> = Vec::new();
        let mut extensions = 0usize;

        loop {
            if let Some(next) = self.descend(self.active, c)? {
                visited.push(self.active.node);
                self.active = next;
                break;
            }

            let from_root = self.active.is_root();
            let anchor = self.split(self.active, phase, EdgeEnd::Open)?;
            visited.push(anchor);
            extensions += 1;

            self.active = self.follow_suffix_link(self.active)?;
            if from_root && self.active.is_root() {
                break;
            }
        }

        for pair in visited.windows(2) {
            self.link(pair[0], pair[1])?;
        }

        trace!(
            phase,
            extensions,
            nodes = self.nodes.len(),
            "phase complete"
        );
        Ok(())
    }

    /// Set `from`'s suffix link unless it already has one
    fn link(&mut self, from: NodeId, to: NodeId) -> Result<(), TreeError> {
        if from == to {
            return Ok(());
        }
        let node = self.node_mut(from)?;
        if node.suffix_link.is_none() {
            node.suffix_link = Some(to);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_labels(tree: &SuffixTree) -> Vec<Vec<u8>> {
        let mut labels: Vec<Vec<u8>> = tree
            .nodes()
            .iter()
            .filter(|n| n.id != ROOT && n.is_leaf())
            .map(|n| tree.path_label(n.id).unwrap())
            .collect();
        labels.sort();
        labels
    }

    #[test]
    fn test_single_char() {
        let tree = SuffixTree::build(b"a").unwrap();
        assert_eq!(tree.root().child_count(), 1);
        let leaf = tree.root().child(b'a').unwrap();
        assert_eq!(tree.edge_label(ROOT, leaf).unwrap(), b"a");
    }

    #[test]
    fn test_repeated_char_stays_implicit() {
        let tree = SuffixTree::build(b"aa").unwrap();
        assert_eq!(tree.root().child_count(), 1);
        // "a" is implicit: it ends one byte into the edge "aa"
        assert_eq!(tree.active_point(), ActivePoint::on_edge(ROOT, b'a', 1));
        assert!(tree.contains(b"aa"));
        assert!(tree.contains(b"a"));
    }

    #[test]
    fn test_classic_example() {
        let text = b"abcabxabcd";
        let tree = SuffixTree::build(text).unwrap();

        let expected: Vec<Vec<u8>> = {
            let mut v: Vec<Vec<u8>> = (0..text.len()).map(|i| text[i..].to_vec()).collect();
            v.sort();
            v
        };
        assert_eq!(leaf_labels(&tree), expected);
    }

    #[test]
    fn test_empty_text() {
        let tree = SuffixTree::build(b"").unwrap();
        assert_eq!(tree.node_count(), 1);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_phase_callback_sees_each_prefix() {
        let mut seen = Vec::new();
        SuffixTree::build_with_phases(b"abab", |tree, i| {
            seen.push((i, tree.text().to_vec()));
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (0, b"a".to_vec()),
                (1, b"ab".to_vec()),
                (2, b"aba".to_vec()),
                (3, b"abab".to_vec()),
            ]
        );
    }

    #[test]
    fn test_extend_matches_build() {
        let mut grown = SuffixTree::build(b"mississ").unwrap();
        grown.extend(b"ippi").unwrap();
        let built = SuffixTree::build(b"mississippi").unwrap();

        assert_eq!(grown.node_count(), built.node_count());
        assert_eq!(leaf_labels(&grown), leaf_labels(&built));
    }

    #[test]
    fn test_terminated_text_has_one_leaf_per_suffix() {
        let tree = SuffixTree::build(b"banana$").unwrap();
        let leaves = tree
            .nodes()
            .iter()
            .filter(|n| n.id != ROOT && n.is_leaf())
            .count();
        assert_eq!(leaves, 7);
    }
}
