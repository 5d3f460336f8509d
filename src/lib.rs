pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

pub use crate::tree::avltree::{AVLTree, Duplicates};
