//! Unbalanced binary search tree used as an ordered priority structure.
//!
//! [`OrderedTree`] keeps distinct elements in binary-search-tree order and
//! never rebalances. Every operation costs `O(h)` where `h` is the tree
//! height, so adversarial (sorted) insertion degrades to `O(n)` per call.
//! That ceiling is part of the contract: the tree shape is observable through
//! [`OrderedTree::values`], and rebalancing would change it.
//!
//! Removal of a node with two children uses *predecessor replacement*: the
//! maximum of the left subtree moves into the removed slot.
//!
//! Descents walk `&mut Link<T>` cursors in loops rather than recursing, and
//! teardown and cloning keep their pending nodes on an explicit `Vec`, so a
//! degenerate tree does not grow the call stack.

mod traversal;

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
};

use crate::error::TreeError;

pub use self::traversal::Traversal;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    const fn leaf(element: T) -> Self {
        Self {
            element,
            left: None,
            right: None,
        }
    }
}

/// An unbalanced binary search tree over distinct, totally ordered elements.
///
/// # Examples
/// ```
/// use spanwise_core::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for value in [310, 112, 440, 330, 471] {
///     tree.insert(value)?;
/// }
/// assert_eq!(tree.find_min(), Some(&112));
/// assert_eq!(tree.to_string(), "112 310 330 440 471");
///
/// tree.remove(&440)?;
/// let pre_order: Vec<i32> = tree.values().into_iter().copied().collect();
/// assert_eq!(pre_order, [310, 112, 330, 471]);
/// # Ok::<(), spanwise_core::TreeError>(())
/// ```
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    fn clone(&self) -> Self {
        // Post-order rebuild: each subtree is finished before its parent, so
        // the parent pops its right then its left copy off `built`.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut pending: Vec<(&Node<T>, bool)> =
            self.root.as_deref().map(|node| (node, false)).into_iter().collect();
        while let Some((node, children_done)) = pending.pop() {
            if children_done {
                let right = if node.right.is_some() { built.pop() } else { None };
                let left = if node.left.is_some() { built.pop() } else { None };
                built.push(Box::new(Node {
                    element: node.element.clone(),
                    left,
                    right,
                }));
                continue;
            }
            pending.push((node, true));
            pending.extend(node.right.as_deref().map(|right| (right, false)));
            pending.extend(node.left.as_deref().map(|left| (left, false)));
        }
        Self { root: built.pop() }
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` when the tree holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the stored elements with a full traversal.
    ///
    /// The count is not cached; this is `O(n)`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.traverse(Traversal::PreOrder).len()
    }

    /// Discards every element.
    pub fn make_empty(&mut self) {
        release(self.root.take());
    }

    /// Returns the smallest element, or `None` when the tree is empty.
    #[must_use]
    pub fn find_min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// Returns the largest element, or `None` when the tree is empty.
    #[must_use]
    pub fn find_max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.element)
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    /// Returns [`TreeError::EmptyTree`] when the tree holds no elements.
    pub fn remove_min(&mut self) -> Result<T, TreeError> {
        detach_min(&mut self.root).ok_or(TreeError::EmptyTree { end: "min" })
    }

    /// Removes and returns the largest element.
    ///
    /// # Errors
    /// Returns [`TreeError::EmptyTree`] when the tree holds no elements.
    pub fn remove_max(&mut self) -> Result<T, TreeError> {
        detach_max(&mut self.root).ok_or(TreeError::EmptyTree { end: "max" })
    }

    /// Returns every element in pre-order (root, left, right).
    ///
    /// Re-inserting the returned sequence into an empty tree rebuilds the
    /// same shape.
    #[must_use]
    pub fn values(&self) -> Vec<&T> {
        self.traverse(Traversal::PreOrder)
    }

    /// Returns every element in the requested depth-first order.
    #[must_use]
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        traversal::collect(self.root.as_deref(), order)
    }

    /// Consumes the tree, yielding its elements in ascending order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::new();
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut cursor = self.root.take();
        loop {
            while let Some(mut node) = cursor {
                cursor = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { element, right, .. } = *node;
            sorted.push(element);
            cursor = right;
        }
        sorted
    }
}

impl<T: Ord + Debug> OrderedTree<T> {
    /// Inserts `item`.
    ///
    /// # Errors
    /// Returns [`TreeError::DuplicateItem`] when an equal element is already
    /// stored. The tree is left unchanged.
    pub fn insert(&mut self, item: T) -> Result<(), TreeError> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match item.cmp(&node.element) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    return Err(TreeError::DuplicateItem {
                        item: format!("{item:?}"),
                    });
                }
            };
        }
        *slot = Some(Box::new(Node::leaf(item)));
        Ok(())
    }

    /// Returns the stored element equal to `item`, if any.
    #[must_use]
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match item.cmp(&node.element) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.element),
            };
        }
        None
    }

    /// Returns `true` when an element equal to `item` is stored.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Removes and returns the stored element equal to `item`.
    ///
    /// A node with two children takes over the maximum of its left subtree
    /// (its in-order predecessor); that maximum is then unlinked from the left
    /// subtree. A node with at most one child is replaced by that child.
    ///
    /// # Errors
    /// Returns [`TreeError::ItemNotFound`] when no equal element is stored.
    pub fn remove(&mut self, item: &T) -> Result<T, TreeError> {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => item.cmp(&node.element),
                None => {
                    return Err(TreeError::ItemNotFound {
                        item: format!("{item:?}"),
                    });
                }
            };
            match (ordering, slot) {
                (Ordering::Equal, found) => {
                    slot = found;
                    break;
                }
                (Ordering::Less, Some(node)) => slot = &mut node.left,
                (Ordering::Greater, Some(node)) => slot = &mut node.right,
                (_, None) => {
                    return Err(TreeError::ItemNotFound {
                        item: format!("{item:?}"),
                    });
                }
            }
        }
        unlink(slot).ok_or_else(|| TreeError::ItemNotFound {
            item: format!("{item:?}"),
        })
    }
}

/// Frees a subtree one node at a time so the `Box` drop glue never recurses.
fn release<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Removes the element held by `slot`, splicing the subtree back together.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let predecessor = detach_max(&mut node.left)?;
        return Some(std::mem::replace(&mut node.element, predecessor));
    }
    let Node {
        element,
        left,
        right,
    } = *slot.take()?;
    *slot = left.or(right);
    Some(element)
}

fn detach_min<T>(root: &mut Link<T>) -> Option<T> {
    let mut slot = root;
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        match slot {
            Some(node) => slot = &mut node.left,
            None => break,
        }
    }
    let Node { element, right, .. } = *slot.take()?;
    *slot = right;
    Some(element)
}

fn detach_max<T>(root: &mut Link<T>) -> Option<T> {
    let mut slot = root;
    while slot.as_ref().is_some_and(|node| node.right.is_some()) {
        match slot {
            Some(node) => slot = &mut node.right,
            None => break,
        }
    }
    let Node { element, left, .. } = *slot.take()?;
    *slot = left;
    Some(element)
}

impl<T: Display> Display for OrderedTree<T> {
    /// Renders the elements in ascending order separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.traverse(Traversal::InOrder).into_iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(element, f)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.traverse(Traversal::InOrder))
            .finish()
    }
}
