//! End-to-end construction tests.
//!
//! These check the tree after every phase, not just the finished one: edge
//! disjointness, leaf labels and suffix links must hold for each prefix.

use proptest::prelude::*;
use std::collections::HashSet;
use suftree::tree::{ActivePoint, NodeId, ROOT, SuffixTree};

/// Root-to-leaf path labels, sorted
fn leaf_paths(tree: &SuffixTree) -> Vec<Vec<u8>> {
    let mut paths: Vec<Vec<u8>> = tree
        .leaves()
        .map(|leaf| tree.path_label(leaf.id).unwrap())
        .collect();
    paths.sort();
    paths
}

/// Build `text`, validating the tree after each phase
fn build_checked(text: &[u8]) -> SuffixTree {
    let mut failures = Vec::new();
    let tree = SuffixTree::build_with_phases(text, |tree, phase| {
        if let Err(e) = tree.validate() {
            failures.push((phase, e));
        }
    })
    .unwrap();
    assert!(failures.is_empty(), "invalid phases: {:?}", failures);
    tree
}

#[test]
fn test_scenario_single_char() {
    let tree = build_checked(b"a");
    assert_eq!(tree.root().child_count(), 1);
    let leaf = tree.root().child(b'a').unwrap();
    assert_eq!(tree.edge_label(ROOT, leaf).unwrap(), b"a");
    assert!(tree.node(leaf).unwrap().is_leaf());
}

#[test]
fn test_scenario_double_char() {
    let tree = build_checked(b"aa");
    assert_eq!(tree.root().child_count(), 1);

    let child = tree.root().child(b'a').unwrap();
    assert_eq!(tree.edge_label(ROOT, child).unwrap(), b"aa");

    // "aa" is a leaf, "a" is the implicit position one byte down the same edge
    assert_eq!(leaf_paths(&tree), vec![b"aa".to_vec()]);
    assert_eq!(tree.locate(b"a").unwrap(), Some(ActivePoint::on_edge(ROOT, b'a', 1)));
    assert_eq!(tree.occurrences(b"a").unwrap(), vec![0, 1]);
}

#[test]
fn test_scenario_abcabxabcd() {
    let text = b"abcabxabcd";
    let tree = build_checked(text);

    let expected: Vec<&[u8]> = vec![
        b"abcabxabcd",
        b"bcabxabcd",
        b"cabxabcd",
        b"abxabcd",
        b"bxabcd",
        b"xabcd",
        b"abcd",
        b"bcd",
        b"cd",
        b"d",
    ];
    let mut expected: Vec<Vec<u8>> = expected.into_iter().map(|s| s.to_vec()).collect();
    expected.sort();

    assert_eq!(leaf_paths(&tree), expected);
}

#[test]
fn test_scenario_banana_repeat_node() {
    // The terminator turns the repeated "ana" into a branching node
    let tree = build_checked(b"banana$");

    let labels: Vec<(NodeId, Vec<u8>)> = tree
        .nodes()
        .iter()
        .filter(|n| n.id != ROOT && !n.is_leaf())
        .map(|n| (n.id, tree.path_label(n.id).unwrap()))
        .collect();

    let (ana, _) = labels
        .iter()
        .find(|(_, label)| label.as_slice() == b"ana")
        .expect("internal node for \"ana\"");

    // ana -> na -> a -> root along suffix links
    let mut chain = Vec::new();
    let mut current = *ana;
    while let Some(next) = tree.node(current).unwrap().suffix_link {
        chain.push(tree.path_label(next).unwrap());
        current = next;
    }
    assert_eq!(chain, vec![b"na".to_vec(), b"a".to_vec(), Vec::new()]);
}

#[test]
fn test_scenario_banana_without_terminator() {
    let tree = build_checked(b"banana");
    // Every repeat is still implicit
    assert_eq!(tree.leaves().count(), 3);
    assert_eq!(tree.implicit_suffix_len().unwrap(), 3);
    for k in 0..6 {
        assert!(tree.contains(&b"banana"[k..]));
    }
}

#[test]
fn test_scenario_empty() {
    let tree = build_checked(b"");
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.root().child_count(), 0);
    assert!(tree.active_point().is_root());
}

#[test]
fn test_grows_across_calls() {
    let mut tree = SuffixTree::new();
    for &c in b"abracadabra$" {
        tree.push(c).unwrap();
        tree.validate().unwrap();
    }
    assert_eq!(tree.leaves().count(), 12);
    assert_eq!(tree.occurrences(b"abra").unwrap(), vec![0, 7]);
}

#[test]
fn test_reads_are_idempotent() {
    let tree = SuffixTree::build(b"mississippi$").unwrap();
    let before: Vec<_> = tree
        .nodes()
        .iter()
        .filter_map(|n| n.parent.map(|p| tree.edge_label(p, n.id).unwrap().to_vec()))
        .collect();
    for node in tree.nodes() {
        let point = ActivePoint::at(node.id);
        if !node.is_leaf() {
            assert_eq!(
                tree.follow_suffix_link(point).unwrap(),
                tree.follow_suffix_link(point).unwrap()
            );
        }
    }
    let after: Vec<_> = tree
        .nodes()
        .iter()
        .filter_map(|n| n.parent.map(|p| tree.edge_label(p, n.id).unwrap().to_vec()))
        .collect();
    assert_eq!(before, after);
}

fn small_alphabet_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..40)
}

proptest! {
    #[test]
    fn prop_every_phase_is_valid(text in small_alphabet_text()) {
        let mut tree = SuffixTree::new();
        for &c in &text {
            tree.push(c).unwrap();
            prop_assert_eq!(tree.validate(), Ok(()));
        }
    }

    #[test]
    fn prop_first_bytes_are_disjoint(text in small_alphabet_text()) {
        let tree = SuffixTree::build(&text).unwrap();
        for node in tree.nodes() {
            let firsts: Vec<u8> = node
                .children_sorted()
                .into_iter()
                .map(|(_, child)| tree.edge_label(node.id, child).unwrap()[0])
                .collect();
            let unique: HashSet<u8> = firsts.iter().copied().collect();
            prop_assert_eq!(unique.len(), firsts.len());
        }
    }

    #[test]
    fn prop_terminated_text_has_leaf_per_suffix(text in small_alphabet_text()) {
        let mut terminated = text.clone();
        terminated.push(b'$');
        let tree = SuffixTree::build(&terminated).unwrap();

        let mut expected: Vec<Vec<u8>> =
            (0..terminated.len()).map(|k| terminated[k..].to_vec()).collect();
        expected.sort();
        prop_assert_eq!(leaf_paths(&tree), expected);
    }

    #[test]
    fn prop_every_substring_is_found(text in small_alphabet_text()) {
        let tree = SuffixTree::build(&text).unwrap();
        for start in 0..text.len() {
            for end in start..=text.len() {
                prop_assert!(tree.contains(&text[start..end]));
            }
        }
    }

    #[test]
    fn prop_occurrences_match_scan(
        text in small_alphabet_text(),
        pattern in prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 1..4),
    ) {
        let tree = SuffixTree::build(&text).unwrap();
        let naive: Vec<usize> = (0..text.len())
            .filter(|&k| text[k..].starts_with(&pattern))
            .collect();
        prop_assert_eq!(tree.occurrences(&pattern).unwrap(), naive);
    }
}
