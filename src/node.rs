//! The owned node graph behind [`OrderedTree`][crate::OrderedTree] and the recursive algorithms
//! that walk it. Every function here takes a [`Link`] so that an absent subtree is handled in one
//! place instead of at every call site.

use std::cmp::Ordering;
use std::vec;

/// An optional, exclusively owned child. `None` is an empty subtree.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

#[derive(Clone)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Node<E> {
    /// Construct a new leaf holding `element`.
    pub(crate) fn new_boxed(element: E) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }
}

/// Inserts `element` below `link`, attaching a new leaf where the search falls off the tree.
/// Returns `false` without touching anything if an equal element is already stored.
pub(crate) fn insert<E, C>(link: &mut Link<E>, element: E, comparator: &C) -> bool
where
    C: Fn(&E, &E) -> Ordering,
{
    match link {
        None => {
            *link = Some(Node::new_boxed(element));
            true
        }
        Some(node) => match comparator(&element, &node.element) {
            Ordering::Less => insert(&mut node.left, element, comparator),
            Ordering::Equal => false,
            Ordering::Greater => insert(&mut node.right, element, comparator),
        },
    }
}

pub(crate) fn contains<E, C>(link: &Link<E>, element: &E, comparator: &C) -> bool
where
    C: Fn(&E, &E) -> Ordering,
{
    match link {
        None => false,
        Some(node) => match comparator(element, &node.element) {
            Ordering::Less => contains(&node.left, element, comparator),
            Ordering::Equal => true,
            Ordering::Greater => contains(&node.right, element, comparator),
        },
    }
}

/// Height of the subtree, recomputed from scratch. An empty subtree has height -1 and a leaf 0.
pub(crate) fn height<E>(link: &Link<E>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Whether every node in the subtree has left and right subtrees whose heights differ by at most
/// one. Heights are not cached, so this costs `O(n * h)`.
pub(crate) fn is_balanced<E>(link: &Link<E>) -> bool {
    match link {
        None => true,
        Some(node) => {
            height(&node.left).abs_diff(height(&node.right)) <= 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        }
    }
}

/// Pushes references to every element in the subtree onto `out`, in ascending order.
pub(crate) fn collect_in_order<'a, E>(link: &'a Link<E>, out: &mut Vec<&'a E>) {
    if let Some(node) = link {
        collect_in_order(&node.left, out);
        out.push(&node.element);
        collect_in_order(&node.right, out);
    }
}

/// Moves every element out of the subtree into `out`, in ascending order. The nodes are dropped
/// as they are emptied.
pub(crate) fn drain_in_order<E>(link: Link<E>, out: &mut Vec<E>) {
    if let Some(node) = link {
        let Node {
            element,
            left,
            right,
        } = *node;
        drain_in_order(left, out);
        out.push(element);
        drain_in_order(right, out);
    }
}

/// Builds a minimal-height subtree from the sorted elements at indices `[first, last)`.
///
/// The midpoint `first + (last - first) / 2` becomes the subtree root. Because the left subtree
/// is built before the root is taken, `elements` is always positioned exactly at index `mid`
/// when the root is pulled from it, so the elements can be moved instead of cloned.
pub(crate) fn build_balanced<E>(
    elements: &mut vec::IntoIter<E>,
    first: usize,
    last: usize,
) -> Link<E> {
    if first >= last {
        return None;
    }
    let mid = first + (last - first) / 2;
    let left = build_balanced(elements, first, mid);
    let element = elements.next()?;
    let right = build_balanced(elements, mid + 1, last);

    Some(Box::new(Node {
        element,
        left,
        right,
    }))
}
