use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

/// Returns `true` if the root of `tree` is red. An absent node is black.
pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

/// Recolors the root red before a removal when both of its children are black, so
/// the push-red transforms below always have a red link above them to borrow from.
pub fn prepare_removal<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

/// Forces the root black after the unwind of an insertion or removal; the split
/// transform may have left it red.
pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => {
            match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => {
                    // Overwrite in place; neither the shape nor the coloring of the
                    // tree changes.
                    let Node { ref mut entry, .. } = &mut **node;
                    Some(mem::replace(entry, new_node.entry))
                },
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.rebalance();
    }

    ret
}

// precondition: the subtree is non-empty
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let should_push = match node.left {
                Some(ref child) => child.color != Color::Red && !is_red(&child.left),
                None => false,
            };
            if should_push {
                node.push_red_left();
            }

            let min = remove_min(&mut node.left);
            node.rebalance();
            return min;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty subtree.");
    *tree = node.right.take();
    node
}

// Splices the minimum of the right subtree into the removed node's position,
// keeping the removed node's color, so the recursion rather than pointer surgery
// detaches exactly one node.
fn combine_subtrees<T, U>(
    left_tree: Tree<T, U>,
    mut right_tree: Tree<T, U>,
    color: Color,
) -> Tree<T, U> {
    let mut successor = remove_min(&mut right_tree);
    successor.left = left_tree;
    successor.right = right_tree;
    successor.color = color;
    Some(successor)
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => {
            if key < node.entry.key.borrow() {
                let should_push = match node.left {
                    Some(ref child) => child.color != Color::Red && !is_red(&child.left),
                    None => false,
                };
                if should_push {
                    node.push_red_left();
                }

                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            } else {
                if is_red(&node.left) {
                    node.rotate_right();
                }

                if key == node.entry.key.borrow() && node.right.is_none() {
                    // A left-leaning tree cannot hang a lone child off the right
                    // spine here, so the node is a leaf and simply detaches.
                    assert!(node.left.is_none());
                    return Some(node.entry);
                }

                let should_push = match node.right {
                    Some(ref child) => child.color != Color::Red && !is_red(&child.left),
                    None => false,
                };
                if should_push {
                    node.push_red_right();
                }

                if key == node.entry.key.borrow() {
                    let Node {
                        entry,
                        color,
                        left,
                        right,
                    } = *node;
                    *tree = combine_subtrees(left, right, color);
                    Some(entry)
                } else {
                    let ret = remove(&mut node.right, key);
                    *tree = Some(node);
                    ret
                }
            }
        },
        None => return None,
    };

    if let Some(ref mut node) = tree {
        node.rebalance();
    }

    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree {
        None => None,
        Some(ref node) => {
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => get(&node.left, key),
                Ordering::Greater => get(&node.right, key),
                Ordering::Equal => Some(&node.entry),
            }
        },
    }
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree {
        None => None,
        Some(ref mut node) => {
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => get_mut(&mut node.left, key),
                Ordering::Greater => get_mut(&mut node.right, key),
                Ordering::Equal => Some(&mut node.entry),
            }
        },
    }
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}
