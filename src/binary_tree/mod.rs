//! Generic binary tree container: a tree is either empty, or a node holding
//! one value and up to two child subtrees. No ordering is imposed on the
//! values.

mod node;
mod tree;

pub use self::tree::{BinaryTree, InorderIter, IntoIter, PostorderIter, PreorderIter};
