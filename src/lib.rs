//! This crate exposes an ordered set backed by a Binary Search Tree (BST) that keeps itself
//! shallow by rebuilding rather than rotating.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! elements. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! one element and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an element less than
//!    its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an element greater
//!    than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the longest path from the root `Node` to a
//! leaf `Node`. Inserting sorted input into a plain BST degrades it into a chain of height
//! `N - 1`. [`OrderedTree`] avoids that by checking, after each insertion, that no `Node` has
//! subtrees whose heights differ by more than one. When one does, every element is read out in
//! order and the tree is rebuilt around repeated midpoints, giving height `floor(lg N)`.

#![deny(missing_docs)]

mod error;
mod node;
mod tree;

pub use error::RebuildError;
pub use tree::{Dump, NaturalOrder, OrderedTree};
