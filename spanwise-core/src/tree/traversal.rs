//! Depth-first traversals over [`super::OrderedTree`].

use super::Node;

/// Depth-first visiting order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Traversal {
    /// Root, then left subtree, then right subtree.
    #[default]
    PreOrder,
    /// Left subtree, root, right subtree (ascending order).
    InOrder,
    /// Left subtree, right subtree, then root.
    PostOrder,
}

pub(super) fn collect<T>(root: Option<&Node<T>>, order: Traversal) -> Vec<&T> {
    match order {
        Traversal::PreOrder => pre_order(root),
        Traversal::InOrder => in_order(root),
        Traversal::PostOrder => post_order(root),
    }
}

fn pre_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(&node.element);
        // Right first so the left subtree is visited first.
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    out
}

fn in_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node<T>> = Vec::new();
    let mut cursor = root;
    loop {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = node.left.as_deref();
        }
        let Some(node) = stack.pop() else {
            return out;
        };
        out.push(&node.element);
        cursor = node.right.as_deref();
    }
}

fn post_order<T>(root: Option<&Node<T>>) -> Vec<&T> {
    // Reverse of a (root, right, left) walk.
    let mut out = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(&node.element);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    out.reverse();
    out
}
