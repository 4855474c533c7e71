//! Types for suffix tree construction
//!
//! Nodes live in an arena and refer to each other by [`NodeId`] only. Edge
//! labels are ranges into the shared text; a leaf's range stays open so that
//! appending to the text lengthens every leaf edge at once.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Identifier of a node in the arena, assigned sequentially from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The root is always the first node in the arena
pub const ROOT: NodeId = NodeId(0);

/// End of an edge's index range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Exclusive end offset into the text
    Fixed(usize),
    /// Tracks the current text length (leaves only)
    Open,
}

impl EdgeEnd {
    /// Resolve against the current text length
    #[inline]
    pub fn resolve(self, text_len: usize) -> usize {
        match self {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open => text_len,
        }
    }
}

/// A node of the suffix tree
///
/// The range `[start, end)` labels the edge from `parent` to this node.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    /// Children keyed by the first byte of their edge label
    pub(crate) children: FxHashMap<u8, NodeId>,
    pub start: usize,
    pub end: EdgeEnd,
    /// `None` until wired; readers treat it as the root
    pub suffix_link: Option<NodeId>,
    /// Path-label length for root and internal nodes
    pub(crate) depth: usize,
    /// Offset of the suffix spelled by a leaf's root-to-leaf path
    pub suffix_start: Option<usize>,
}

impl Node {
    pub(crate) fn new(id: NodeId, parent: Option<NodeId>, start: usize, end: EdgeEnd) -> Self {
        Self {
            id,
            parent,
            children: FxHashMap::default(),
            start,
            end,
            suffix_link: None,
            depth: 0,
            suffix_start: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child whose edge begins with `first`
    #[inline]
    pub fn child(&self, first: u8) -> Option<NodeId> {
        self.children.get(&first).copied()
    }

    /// Children ordered by the first byte of their edge
    pub fn children_sorted(&self) -> Vec<(u8, NodeId)> {
        let mut children: Vec<(u8, NodeId)> =
            self.children.iter().map(|(&b, &id)| (b, id)).collect();
        children.sort_unstable_by_key(|&(b, _)| b);
        children
    }

    /// Length of the edge into this node for a text of `text_len` bytes
    #[inline]
    pub fn edge_len(&self, text_len: usize) -> usize {
        self.end.resolve(text_len) - self.start
    }
}

/// Traversal cursor
///
/// With `edge == None` the cursor sits on `node` and `depth` is 0. Otherwise it
/// sits `depth` bytes along the edge from `node` to the child whose label
/// starts with `edge`, strictly inside that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePoint {
    pub node: NodeId,
    pub edge: Option<u8>,
    pub depth: usize,
}

impl ActivePoint {
    /// Cursor resting exactly on `node`
    pub fn at(node: NodeId) -> Self {
        Self {
            node,
            edge: None,
            depth: 0,
        }
    }

    /// Cursor `depth` bytes down the edge from `node` starting with `edge`
    pub fn on_edge(node: NodeId, edge: u8, depth: usize) -> Self {
        Self {
            node,
            edge: Some(edge),
            depth,
        }
    }

    pub fn root() -> Self {
        Self::at(ROOT)
    }

    pub fn is_root(&self) -> bool {
        self.node == ROOT && self.edge.is_none()
    }
}

impl Default for ActivePoint {
    fn default() -> Self {
        Self::root()
    }
}

/// Structural invariant violations
///
/// Any of these means the tree is corrupt; construction stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {child} is not a child of node {parent}")]
    NotParent { parent: NodeId, child: NodeId },

    #[error("node {node} has no edge starting with byte {first:#04x}")]
    MissingEdge { node: NodeId, first: u8 },

    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {node} has range [{start}, {end}) outside text of length {len}")]
    InvalidRange {
        node: NodeId,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("node {node} is keyed by byte {key:#04x} but its edge starts with {first:#04x}")]
    EdgeKeyMismatch { node: NodeId, key: u8, first: u8 },

    #[error("node {node} disagrees with its parent about their relation")]
    BrokenParent { node: NodeId },

    #[error("suffix link {from} -> {to} does not drop exactly one leading byte")]
    BadSuffixLink { from: NodeId, to: NodeId },

    #[error("leaf {leaf} does not spell the suffix at its recorded offset")]
    BadLeafLabel { leaf: NodeId },

    #[error("suffix starting at offset {start} cannot be located")]
    MissingSuffix { start: usize },
}
