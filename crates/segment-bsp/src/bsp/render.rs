//! Indented text rendering of a BSP tree, for inspection and tests.
//!
//! Every node prints its segments on one line, followed by the back and
//! front subtrees on their own lines, each prefixed with `|__` and indented
//! three spaces per level. A missing subtree prints as `0`.

use std::fmt::{self, Write};

use super::node::BspNode;
use super::tree::BspTree;

const INDENT: &str = "   ";
const BRANCH: &str = "|__";

/// Renders the tree as indented text.
pub fn render(tree: &BspTree) -> String {
    tree.to_string()
}

impl fmt::Display for BspNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Node: {")?;
        for (i, segment) in self.segments().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for BspTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(f, self.root(), 0)
    }
}

fn write_subtree<W: Write>(out: &mut W, node: Option<&BspNode>, level: usize) -> fmt::Result {
    let Some(node) = node else {
        return out.write_char('0');
    };

    let indent = INDENT.repeat(level);
    write!(out, "{node}\n{indent}{BRANCH}")?;
    write_subtree(out, node.back(), level + 1)?;
    write!(out, "\n{indent}{BRANCH}")?;
    write_subtree(out, node.front(), level + 1)
}
