use std::cmp::Ordering;
use std::fmt::Debug;

use serde::Deserialize;
use tracing::trace;

use crate::error::{InvariantError, InvariantResult};

/// How `insert` treats a key equal to one already stored in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duplicates {
    /// Equal keys descend into the right subtree, so the tree holds a multiset.
    #[default]
    Right,
    /// Equal keys are dropped and the tree holds a set.
    Ignore,
}

#[derive(Debug)]
pub(crate) struct Node<T: Ord> {
    pub(crate) key: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
    height: i32,
}

/// Height of an optional subtree; an absent node has height 0.
fn height_of<T: Ord>(node: Option<&Node<T>>) -> i32 {
    node.map_or(0, |n| n.height)
}

impl<T: Ord> Node<T> {
    fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn left_height(&self) -> i32 {
        height_of(self.left.as_deref())
    }

    fn right_height(&self) -> i32 {
        height_of(self.right.as_deref())
    }

    fn balance_factor(&self) -> i32 {
        self.left_height() - self.right_height()
    }

    fn update_height(&mut self) {
        self.height = 1 + std::cmp::max(self.left_height(), self.right_height());
    }
}

/// A self-balancing binary search tree.
///
/// Every completed [`insert`](AVLTree::insert) leaves the tree ordered, with
/// the heights of the two subtrees of any node differing by at most one.
#[derive(Debug)]
pub struct AVLTree<T: Ord> {
    root: Option<Box<Node<T>>>,
    size: usize,
    duplicates: Duplicates,
}

impl<T: Ord> Default for AVLTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> AVLTree<T> {
    pub fn new() -> Self {
        Self::with_duplicates(Duplicates::default())
    }

    pub fn with_duplicates(duplicates: Duplicates) -> Self {
        AVLTree {
            root: None,
            size: 0,
            duplicates,
        }
    }

    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> i32 {
        height_of(self.root.as_deref())
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.key)
    }

    pub(crate) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn insert(&mut self, key: T) {
        let old_root = self.root.take();
        self.root = Some(self.insert_helper(old_root, key));
    }

    fn insert_helper(&mut self, node: Option<Box<Node<T>>>, key: T) -> Box<Node<T>> {
        match node {
            None => {
                self.size += 1;
                Box::new(Node::new(key))
            }
            Some(mut node) => {
                match key.cmp(&node.key) {
                    Ordering::Less => {
                        let new_left = self.insert_helper(node.left.take(), key);
                        node.left = Some(new_left);
                    }
                    Ordering::Equal if self.duplicates == Duplicates::Ignore => {
                        return node;
                    }
                    Ordering::Equal | Ordering::Greater => {
                        let new_right = self.insert_helper(node.right.take(), key);
                        node.right = Some(new_right);
                    }
                }
                node.update_height();
                Self::rebalance(node)
            }
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        false
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    // At most one rotation, single or double, fires per call.
    fn rebalance(node: Box<Node<T>>) -> Box<Node<T>> {
        let balance = node.balance_factor();
        if balance < -1 {
            let right_right_heavy = node
                .right
                .as_ref()
                .map_or(true, |right| right.right_height() >= right.left_height());
            if right_right_heavy {
                Self::rotate_left(node)
            } else {
                Self::rotate_right_left(node)
            }
        } else if balance > 1 {
            let left_left_heavy = node
                .left
                .as_ref()
                .map_or(true, |left| left.left_height() >= left.right_height());
            if left_left_heavy {
                Self::rotate_right(node)
            } else {
                Self::rotate_left_right(node)
            }
        } else {
            node
        }
    }

    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let Some(mut new_root) = node.right.take() else {
            return node;
        };
        node.right = new_root.left.take();
        node.update_height();
        new_root.left = Some(node);
        new_root.update_height();
        trace!(rotation = "single_left", height = new_root.height, "rotated subtree");
        new_root
    }

    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let Some(mut new_root) = node.left.take() else {
            return node;
        };
        node.left = new_root.right.take();
        node.update_height();
        new_root.right = Some(node);
        new_root.update_height();
        trace!(rotation = "single_right", height = new_root.height, "rotated subtree");
        new_root
    }

    /// Double left rotation for a right child that leans left.
    fn rotate_right_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        trace!(rotation = "double_left", "rotating right child first");
        node.right = node.right.take().map(Self::rotate_right);
        Self::rotate_left(node)
    }

    /// Double right rotation for a left child that leans right.
    fn rotate_left_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        trace!(rotation = "double_right", "rotating left child first");
        node.left = node.left.take().map(Self::rotate_left);
        Self::rotate_right(node)
    }
}

impl<T: Ord + Debug> AVLTree<T> {
    /// Walks the whole tree and reports the first broken invariant: key
    /// order, balance, cached heights, or the recorded size.
    pub fn validate(&self) -> InvariantResult<()> {
        let strict = self.duplicates == Duplicates::Ignore;
        let mut previous = None;
        let counted = Self::validate_node(self.root.as_deref(), &mut previous, strict)?;
        if counted != self.size {
            return Err(InvariantError::SizeMismatch {
                counted,
                recorded: self.size,
            });
        }
        Ok(())
    }

    fn validate_node<'a>(
        node: Option<&'a Node<T>>,
        previous: &mut Option<&'a T>,
        strict: bool,
    ) -> InvariantResult<usize> {
        let Some(node) = node else {
            return Ok(0);
        };

        let left_count = Self::validate_node(node.left.as_deref(), previous, strict)?;
        if let Some(prev) = *previous {
            let out_of_order = match prev.cmp(&node.key) {
                Ordering::Greater => true,
                Ordering::Equal => strict,
                Ordering::Less => false,
            };
            if out_of_order {
                return Err(InvariantError::Unordered {
                    previous: format!("{:?}", prev),
                    next: format!("{:?}", node.key),
                });
            }
        }
        *previous = Some(&node.key);
        let right_count = Self::validate_node(node.right.as_deref(), previous, strict)?;

        let computed = 1 + std::cmp::max(node.left_height(), node.right_height());
        if node.height != computed {
            return Err(InvariantError::HeightMismatch {
                key: format!("{:?}", node.key),
                stored: node.height,
                computed,
            });
        }
        let balance = node.balance_factor();
        if balance.abs() > 1 {
            return Err(InvariantError::Unbalanced {
                key: format!("{:?}", node.key),
                balance,
            });
        }
        Ok(left_count + right_count + 1)
    }
}
