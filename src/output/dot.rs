//! Graphviz DOT rendering of a tree snapshot
//!
//! One solid edge per parent/child pair labelled with the edge text, one
//! dotted edge per suffix link, and a box for every node without children.

use crate::tree::SuffixTree;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Longest text prefix kept in a phase file name
const MAX_STEM_LEN: usize = 64;

/// Write the DOT description of `tree` as it stands after `phase`
pub fn write_dot<W: Write>(tree: &SuffixTree, phase: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph phase{} {{", phase)?;
    for node in tree.nodes() {
        for (_, child) in node.children_sorted() {
            let label = tree
                .edge_label(node.id, child)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(
                out,
                "\t{} -> {} [ label =\" {} \" ]",
                node.id,
                child,
                escape_label(label)
            )?;
        }
        if let Some(link) = node.suffix_link {
            writeln!(out, "\t{} -> {} [ style = dotted ]", node.id, link)?;
        }
        if node.is_leaf() {
            writeln!(out, "\t{} [ shape = box ]", node.id)?;
        }
    }
    writeln!(out, "}}")
}

/// Render the DOT description into a string
pub fn render_dot(tree: &SuffixTree, phase: usize) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec only fails on a corrupt tree, which renders partially
    let _ = write_dot(tree, phase, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn escape_label(label: &[u8]) -> String {
    let text = String::from_utf8_lossy(label);
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\x{:02x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Writes one DOT file per phase into a directory
pub struct PhaseWriter {
    dir: PathBuf,
    stem: String,
}

impl PhaseWriter {
    /// Create the output directory if needed
    pub fn new(dir: &Path, text: &[u8]) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            stem: file_stem(text),
        })
    }

    /// Path of the file for zero-based `phase`
    pub fn path_for(&self, phase: usize) -> PathBuf {
        self.dir
            .join(format!("suffix_tree_{}_phase_{}.DOT", self.stem, phase + 1))
    }

    /// Write the snapshot after `phase` and return its path
    pub fn write(&self, tree: &SuffixTree, phase: usize) -> Result<PathBuf> {
        let path = self.path_for(phase);
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_dot(tree, phase, &mut out)
            .and_then(|_| out.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Filename-safe form of the input text
fn file_stem(text: &[u8]) -> String {
    let stem: String = String::from_utf8_lossy(text)
        .chars()
        .take(MAX_STEM_LEN)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "empty".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_leaf() {
        let tree = SuffixTree::build(b"a").unwrap();
        assert_eq!(
            render_dot(&tree, 0),
            "digraph phase0 {\n\t0 -> 1 [ label =\" a \" ]\n\t1 [ shape = box ]\n}\n"
        );
    }

    #[test]
    fn test_empty_tree_marks_root() {
        let tree = SuffixTree::build(b"").unwrap();
        assert_eq!(render_dot(&tree, 0), "digraph phase0 {\n\t0 [ shape = box ]\n}\n");
    }

    #[test]
    fn test_suffix_links_are_dotted() {
        let tree = SuffixTree::build(b"banana$").unwrap();
        let dot = render_dot(&tree, 6);

        assert!(dot.starts_with("digraph phase6 {"));
        let dotted = dot.lines().filter(|l| l.contains("style = dotted")).count();
        let boxes = dot.lines().filter(|l| l.contains("shape = box")).count();
        let edges = dot.lines().filter(|l| l.contains("label =")).count();
        assert_eq!(dotted, 3);
        assert_eq!(boxes, 7);
        assert_eq!(edges, tree.node_count() - 1);
    }

    #[test]
    fn test_rendering_is_read_only() {
        let tree = SuffixTree::build(b"abcabxabcd").unwrap();
        assert_eq!(render_dot(&tree, 9), render_dot(&tree, 9));
    }

    #[test]
    fn test_label_escaping() {
        assert_eq!(escape_label(b"a\"b"), "a\\\"b");
        assert_eq!(escape_label(b"x\\y\n"), "x\\\\y\\n");
        assert_eq!(escape_label(b"\x00"), "\\x00");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(file_stem(b"banana"), "banana");
        assert_eq!(file_stem(b"a b/c$"), "a_b_c_");
        assert_eq!(file_stem(b""), "empty");

        let writer = PhaseWriter {
            dir: PathBuf::from("out"),
            stem: "abc".to_string(),
        };
        assert_eq!(
            writer.path_for(0),
            PathBuf::from("out").join("suffix_tree_abc_phase_1.DOT")
        );
    }
}
