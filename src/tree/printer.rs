//! Read-only rendering of a tree's shape.
//!
//! Nodes are written pre-order, right subtree before left, one per line.
//! A left child is marked `L--`, anything else `|--`, and each level of depth
//! adds four columns of indentation:
//!
//! ```text
//! |--7
//!     |--10
//!         |--12
//!         L--8
//!     L--3
//!     |   |--6
//! ```

use std::fmt::{self, Display, Write};

use super::avltree::{AVLTree, Node};

const RIGHT_BRANCH: &str = "|--";
const LEFT_BRANCH: &str = "L--";

/// Renders the whole tree; an empty tree renders as the empty string.
pub fn render<T: Ord + Display>(tree: &AVLTree<T>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, "", tree.root_node(), false);
    out
}

impl<T: Ord + Display> Display for AVLTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

fn write_node<W, T>(out: &mut W, prefix: &str, node: Option<&Node<T>>, is_left: bool) -> fmt::Result
where
    W: Write,
    T: Ord + Display,
{
    let Some(node) = node else {
        return Ok(());
    };

    let branch = if is_left { LEFT_BRANCH } else { RIGHT_BRANCH };
    writeln!(out, "{}{}{}", prefix, branch, node.key)?;

    let child_prefix = format!("{}{}", prefix, if is_left { "|   " } else { "    " });
    write_node(out, &child_prefix, node.right.as_deref(), false)?;
    write_node(out, &child_prefix, node.left.as_deref(), true)
}
