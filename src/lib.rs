//! A family of layered binary tree data structures: a generic binary tree
//! container, an ordered search tree with parent links built on the same
//! node shape, and a self-balancing AVL tree on top of the search tree.

pub mod arena;
pub mod avl_tree;
pub mod binary_tree;
pub mod error;
pub mod search_tree;
