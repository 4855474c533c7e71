//! Moving the active point down by one character

use super::store::SuffixTree;
use super::types::*;

impl SuffixTree {
    /// Try to extend the matched path at `point` by `c`
    ///
    /// Returns `Ok(None)` when no edge continues with `c`. A cursor that reaches
    /// the end of its edge is promoted onto the child node.
    pub fn descend(&self, point: ActivePoint, c: u8) -> Result<Option<ActivePoint>, TreeError> {
        match point.edge {
            None => {
                let Some(child) = self.node(point.node)?.child(c) else {
                    return Ok(None);
                };
                let child = self.node(child)?;
                if self.edge_len(child) == 1 {
                    Ok(Some(ActivePoint::at(child.id)))
                } else {
                    Ok(Some(ActivePoint::on_edge(point.node, c, 1)))
                }
            }
            Some(first) => {
                let child = self.child_on(point.node, first)?;
                let edge_len = self.edge_len(child);
                if point.depth >= edge_len {
                    return Ok(None);
                }
                if self.text[child.start + point.depth] != c {
                    return Ok(None);
                }

                let depth = point.depth + 1;
                if depth == edge_len {
                    Ok(Some(ActivePoint::at(child.id)))
                } else {
                    Ok(Some(ActivePoint::on_edge(point.node, first, depth)))
                }
            }
        }
    }
}
