use crate::entry::Entry;
use crate::red_black_tree::tree::{self, Tree};
use std::mem;

/// An enum representing the color of a node in a red-black tree.
///
/// An absent child has no stored color; it always reads as black through
/// [`tree::is_red`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red-black tree.
///
/// Nodes own their children outright; there are no parent pointers, so every
/// mutating algorithm works top-down through the owning reference.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: Tree<T, U>,
    pub right: Tree<T, U>,
}

impl<T, U> Node<T, U> {
    // New nodes start red so an insertion never changes the black-height below it.
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Toggles the colors of this node and both of its children without changing
    /// the shape of the tree.
    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    /// Promotes the right child into this node's position and demotes this node to
    /// the new root's left child. The two nodes exchange colors and the displaced
    /// grandchild is reattached before the rotation returns, so callers never
    /// observe a half-rewired subtree.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    /// Mirror image of [`Node::rotate_left`]: promotes the left child and demotes
    /// this node to the new root's right child.
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Applies the three local transforms that restore the left-leaning red-black
    /// invariants, in the order they must be checked:
    ///
    /// 1. a red right link with a non-red left sibling is rotated left;
    /// 2. two consecutive red links on the left spine are rotated right;
    /// 3. two red children are split off with a color flip, passing the red
    ///    upward the way a B-tree node split passes a key upward.
    ///
    /// Called on every node on the unwind path of an insertion or removal.
    pub fn rebalance(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        let left_spine_red = match self.left {
            Some(ref child) => child.color == Color::Red && tree::is_red(&child.left),
            None => false,
        };
        if left_spine_red {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    /// Recolors so that either the left child or its left child is red before a
    /// removal descends left, borrowing a red link from the right subtree when one
    /// is available. Requires this node to be red with a black left child whose
    /// left child is also black.
    pub fn push_red_left(&mut self) {
        self.flip_colors();
        let can_borrow = match self.right {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if can_borrow {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    /// Recolors so that either the right child or its left child is red before a
    /// removal descends right. Requires this node to be red with a black right
    /// child whose left child is also black.
    pub fn push_red_right(&mut self) {
        self.flip_colors();
        let can_borrow = match self.left {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if can_borrow {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
