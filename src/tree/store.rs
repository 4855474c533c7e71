//! Node arena and edge labels
//!
//! The tree owns the text and every node. Nodes are only ever appended, so a
//! `NodeId` stays valid for the lifetime of the tree.

use super::types::*;

/// Suffix tree over an append-only byte text
#[derive(Debug, Clone)]
pub struct SuffixTree {
    pub(crate) text: Vec<u8>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) active: ActivePoint,
}

impl SuffixTree {
    /// Create an empty tree: the root alone, with range `[0, 0)`
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            nodes: vec![Node::new(ROOT, None, 0, EdgeEnd::Fixed(0))],
            active: ActivePoint::root(),
        }
    }

    /// Text indexed so far
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes in id order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Current active point
    pub fn active_point(&self) -> ActivePoint {
        self.active
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT.index()]
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.nodes.get(id.index()).ok_or(TreeError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id.index()).ok_or(TreeError::UnknownNode(id))
    }

    /// Child of `node` whose edge begins with `first`
    pub(crate) fn child_on(&self, node: NodeId, first: u8) -> Result<&Node, TreeError> {
        let id = self
            .node(node)?
            .child(first)
            .ok_or(TreeError::MissingEdge { node, first })?;
        self.node(id)
    }

    /// Append a node to the arena and return its id
    pub(crate) fn alloc(&mut self, parent: NodeId, start: usize, end: EdgeEnd) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, Some(parent), start, end));
        id
    }

    /// Label of the edge from `parent` to `child`
    ///
    /// Fails with [`TreeError::NotParent`] if `child` does not hang off `parent`.
    pub fn edge_label(&self, parent: NodeId, child: NodeId) -> Result<&[u8], TreeError> {
        let node = self.node(child)?;
        if node.parent != Some(parent) {
            return Err(TreeError::NotParent { parent, child });
        }
        Ok(self.label_of(node))
    }

    /// Label of the edge into `node` (empty for the root)
    pub(crate) fn label_of(&self, node: &Node) -> &[u8] {
        &self.text[node.start..node.end.resolve(self.text.len())]
    }

    /// Length of the edge into `node` at the current text length
    #[inline]
    pub(crate) fn edge_len(&self, node: &Node) -> usize {
        node.edge_len(self.text.len())
    }

    /// Length of the path label from the root to `id`
    pub fn string_depth(&self, id: NodeId) -> Result<usize, TreeError> {
        let node = self.node(id)?;
        Ok(match node.suffix_start {
            Some(start) => node.end.resolve(self.text.len()) - start,
            None => node.depth,
        })
    }
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}
