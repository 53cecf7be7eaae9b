//! A BST that keeps itself shallow by rebuilding. After every insertion that leaves some node
//! with subtrees whose heights differ by more than one, the whole tree is flattened and rebuilt
//! into its minimal-height shape. There are no rotations.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.height(), -1);
//! assert!(!tree.contains(&1));
//!
//! // Ascending inserts would make a chain, but the tree rebuilds itself.
//! for x in 0..10 {
//!     assert!(tree.insert(x));
//! }
//! assert_eq!(tree.size(), 10);
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_balanced());
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(4));
//! assert_eq!(tree.size(), 10);
//!
//! assert_eq!(tree.dump().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::vec;

use tracing::{debug, trace};

use crate::error::RebuildError;
use crate::node::{self, Link};

/// The comparator used by [`OrderedTree::new`].
pub type NaturalOrder<E> = fn(&E, &E) -> Ordering;

/// An ordered set of elements stored in a binary search tree that rebuilds itself into a
/// minimal-height shape whenever an insertion unbalances it.
///
/// Elements are ordered by a comparator fixed when the tree is constructed. Two elements the
/// comparator calls `Equal` are duplicates and only the first one is kept.
#[derive(Clone)]
pub struct OrderedTree<E, C = NaturalOrder<E>> {
    root: Link<E>,
    size: usize,
    comparator: C,
}

impl<E> Default for OrderedTree<E>
where
    E: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> OrderedTree<E>
where
    E: Ord,
{
    /// Generate a new, empty tree ordered by `E`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(E::cmp as NaturalOrder<E>)
    }
}

impl<E, C> OrderedTree<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Generate a new, empty tree ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 3, 2]);
    ///
    /// assert_eq!(tree.dump().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
        }
    }

    /// Inserts `element` if no equal element is stored yet. Returns whether it was inserted.
    ///
    /// If the insertion leaves the tree unbalanced (see [`is_balanced`][Self::is_balanced]) the
    /// tree is [rebuilt][Self::rebuild] before this returns, so the tree is always balanced when
    /// the caller gets control back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(4));
    /// assert!(tree.insert(3));
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.height(), 1);
    ///
    /// assert!(!tree.insert(3));
    /// assert_eq!(tree.size(), 3);
    /// ```
    pub fn insert(&mut self, element: E) -> bool {
        let was_empty = self.root.is_none();
        if !node::insert(&mut self.root, element, &self.comparator) {
            trace!(size = self.size, "rejected duplicate element");
            return false;
        }
        self.size += 1;

        // A lone root can't be unbalanced.
        if !was_empty && !self.is_balanced() {
            debug!(size = self.size, "tree unbalanced after insert, rebuilding");
            self.rebuild();
        }
        true
    }

    /// Whether an element equal to `element` is stored. This takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert("b");
    ///
    /// assert!(tree.contains(&"b"));
    /// assert!(!tree.contains(&"a"));
    /// ```
    pub fn contains(&self, element: &E) -> bool {
        node::contains(&self.root, element, &self.comparator)
    }
}

impl<E, C> OrderedTree<E, C> {
    /// Gets the height of this tree: -1 when empty, 0 for a single element, and otherwise the
    /// number of edges on the longest path from the root to a leaf.
    ///
    /// This walks the whole tree every time.
    pub fn height(&self) -> isize {
        node::height(&self.root)
    }

    /// How many elements are stored.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Whether, for every node, the heights of its left and right subtrees differ by at most one.
    /// An empty tree is balanced.
    ///
    /// Subtree heights are recomputed at every node rather than cached, so this costs
    /// `O(n * height)`. [`insert`][Self::insert] calls this after every successful insertion.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(&self.root)
    }

    /// Rebuilds the tree into its minimal-height shape, with height `floor(log2(size))`. The
    /// stored elements and [`size`][Self::size] don't change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = (1..=7).collect();
    /// tree.rebuild();
    ///
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.size(), 7);
    /// ```
    pub fn rebuild(&mut self) {
        let elements = Vec::with_capacity(self.size);
        self.rebuild_into(elements);
    }

    /// Like [`rebuild`][Self::rebuild] but reports a failure to allocate the flattening buffer
    /// instead of aborting. On error the tree is left exactly as it was.
    pub fn try_rebuild(&mut self) -> Result<(), RebuildError> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(self.size)
            .map_err(|source| RebuildError::Reserve {
                size: self.size,
                source,
            })?;
        self.rebuild_into(elements);
        Ok(())
    }

    /// Flattens the tree into `elements`, which must already have room for every element, and
    /// replaces the root with a balanced tree built from them.
    fn rebuild_into(&mut self, mut elements: Vec<E>) {
        node::drain_in_order(self.root.take(), &mut elements);
        let len = elements.len();
        self.root = node::build_balanced(&mut elements.into_iter(), 0, len);
        trace!(size = self.size, height = self.height(), "rebuilt tree");
    }

    /// The stored elements in ascending order. The returned iterator is consumed by use; call
    /// this again for another pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [3, 1, 2, 3].into_iter().collect();
    /// let mut dump = tree.dump();
    ///
    /// assert_eq!(dump.len(), 3);
    /// assert_eq!(dump.next(), Some(&1));
    /// assert_eq!(dump.collect::<Vec<_>>(), vec![&2, &3]);
    /// ```
    pub fn dump(&self) -> Dump<'_, E> {
        let mut elements = Vec::with_capacity(self.size);
        node::collect_in_order(&self.root, &mut elements);
        Dump {
            inner: elements.into_iter(),
        }
    }

    /// Writes every element, in ascending order, on its own line.
    pub fn write_in_order<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: Write,
        E: fmt::Display,
    {
        for element in self.dump() {
            writeln!(writer, "{element}")?;
        }
        writer.flush()
    }

    /// Prints every element, in ascending order, on its own line of standard output.
    pub fn print_in_order(&self) -> io::Result<()>
    where
        E: fmt::Display,
    {
        self.write_in_order(io::stdout().lock())
    }
}

impl<E, C> fmt::Debug for OrderedTree<E, C>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.dump()).finish()
    }
}

impl<E, C> Extend<E> for OrderedTree<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E> FromIterator<E> for OrderedTree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A one-shot, ascending pass over the elements of an [`OrderedTree`]. Created by
/// [`OrderedTree::dump`].
#[derive(Debug)]
pub struct Dump<'a, E> {
    inner: vec::IntoIter<&'a E>,
}

impl<'a, E> Iterator for Dump<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Dump<'_, E> {}

impl<E> FusedIterator for Dump<'_, E> {}
