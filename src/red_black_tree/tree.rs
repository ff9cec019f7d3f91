use crate::arena::{Handle, TypedArena};
use crate::compare::Compare;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::{Error, Result};
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Arena<T, U> = TypedArena<Node<T, U>>;

pub fn is_red<T, U>(arena: &Arena<T, U>, tree: Option<Handle>) -> bool {
    match tree {
        None => false,
        Some(handle) => arena[handle].color == Color::Red,
    }
}

// Links `new` into the position `old` occupies under its parent (or the root slot).
fn replace_child<T, U>(
    arena: &mut Arena<T, U>,
    root: &mut Option<Handle>,
    old: Handle,
    new: Handle,
) {
    let parent = arena[old].parent;
    match parent {
        None => *root = Some(new),
        Some(parent) => {
            if arena[parent].is_left_child(old) {
                arena[parent].left = Some(new);
            } else {
                arena[parent].right = Some(new);
            }
        },
    }
    arena[new].parent = parent;
}

pub fn rotate_left<T, U>(arena: &mut Arena<T, U>, root: &mut Option<Handle>, node: Handle) {
    let child = arena[node]
        .right
        .expect("Expected right child node to be `Some`.");
    trace!("rotate left at {:?}", node);
    replace_child(arena, root, node, child);

    let inner = arena[child].left;
    arena[node].right = inner;
    if let Some(inner) = inner {
        arena[inner].parent = Some(node);
    }

    arena[child].left = Some(node);
    arena[node].parent = Some(child);
}

pub fn rotate_right<T, U>(arena: &mut Arena<T, U>, root: &mut Option<Handle>, node: Handle) {
    let child = arena[node]
        .left
        .expect("Expected left child node to be `Some`.");
    trace!("rotate right at {:?}", node);
    replace_child(arena, root, node, child);

    let inner = arena[child].right;
    arena[node].left = inner;
    if let Some(inner) = inner {
        arena[inner].parent = Some(node);
    }

    arena[child].right = Some(node);
    arena[node].parent = Some(child);
}

// Restores the red black invariants after `node` was attached as a red leaf.
fn insert_fixup<T, U>(arena: &mut Arena<T, U>, root: &mut Option<Handle>, mut node: Handle) {
    loop {
        // case 1: the root is always black
        let mut parent = match arena[node].parent {
            None => {
                arena[node].color = Color::Black;
                return;
            },
            Some(parent) => parent,
        };

        // case 2: a black parent absorbs a red child
        if arena[parent].color == Color::Black {
            return;
        }

        let grandparent = arena[parent]
            .parent
            .expect("Expected a red node to have a parent.");
        let parent_is_left = arena[grandparent].is_left_child(parent);
        let uncle = arena[grandparent].child(!parent_is_left);

        // case 3: push the red up to the grandparent and retry there
        if let Some(uncle) = uncle.filter(|uncle| arena[*uncle].color == Color::Red) {
            trace!("recolor at {:?}", grandparent);
            arena[parent].color = Color::Black;
            arena[uncle].color = Color::Black;
            arena[grandparent].color = Color::Red;
            node = grandparent;
            continue;
        }

        // case 4: turn an inner grandchild into an outer one
        let node_is_left = arena[parent].is_left_child(node);
        if parent_is_left && !node_is_left {
            rotate_left(arena, root, parent);
            parent = node;
        } else if !parent_is_left && node_is_left {
            rotate_right(arena, root, parent);
            parent = node;
        }

        // case 5: rotate the grandparent away from the red pair
        arena[parent].color = Color::Black;
        arena[grandparent].color = Color::Red;
        if parent_is_left {
            rotate_right(arena, root, grandparent);
        } else {
            rotate_left(arena, root, grandparent);
        }
        return;
    }
}

/// Inserts a key-value pair. If an equal key exists, its value is replaced and the old value is
/// returned; the stored key is kept. A node is only allocated when the key is absent.
pub fn insert<T, U, C>(
    arena: &mut Arena<T, U>,
    root: &mut Option<Handle>,
    comparator: &C,
    key: T,
    value: U,
) -> Result<Option<U>>
where
    C: Compare<T>,
{
    let mut parent = None;
    let mut is_left = false;
    let mut curr = *root;

    while let Some(handle) = curr {
        let node = &mut arena[handle];
        match comparator.compare(&key, &node.entry.key) {
            Ordering::Less => {
                is_left = true;
                curr = node.left;
            },
            Ordering::Greater => {
                is_left = false;
                curr = node.right;
            },
            Ordering::Equal => return Ok(Some(mem::replace(&mut node.entry.value, value))),
        }
        parent = Some(handle);
    }

    let new_node = arena.allocate(Node::new(key, value, parent))?;
    match parent {
        None => *root = Some(new_node),
        Some(parent) => {
            if is_left {
                arena[parent].left = Some(new_node);
            } else {
                arena[parent].right = Some(new_node);
            }
        },
    }

    insert_fixup(arena, root, new_node);
    Ok(None)
}

pub fn get<T, U, C, V>(
    arena: &Arena<T, U>,
    root: Option<Handle>,
    comparator: &C,
    key: &V,
) -> Option<Handle>
where
    T: Borrow<V>,
    C: Compare<V>,
    V: ?Sized,
{
    let mut curr = root;
    while let Some(handle) = curr {
        let node = &arena[handle];
        match comparator.compare(key, node.entry.key.borrow()) {
            Ordering::Less => curr = node.left,
            Ordering::Greater => curr = node.right,
            Ordering::Equal => return Some(handle),
        }
    }
    None
}

pub fn min<T, U>(arena: &Arena<T, U>, tree: Option<Handle>) -> Option<Handle> {
    let mut curr = tree?;
    while let Some(left) = arena[curr].left {
        curr = left;
    }
    Some(curr)
}

pub fn max<T, U>(arena: &Arena<T, U>, tree: Option<Handle>) -> Option<Handle> {
    let mut curr = tree?;
    while let Some(right) = arena[curr].right {
        curr = right;
    }
    Some(curr)
}

/// Returns the in-order successor of a node by following parent links.
pub fn successor<T, U>(arena: &Arena<T, U>, node: Handle) -> Option<Handle> {
    if let Some(right) = arena[node].right {
        return min(arena, Some(right));
    }

    let mut child = node;
    let mut curr = arena[node].parent;
    while let Some(parent) = curr {
        if arena[parent].is_left_child(child) {
            return Some(parent);
        }
        child = parent;
        curr = arena[parent].parent;
    }
    None
}

// Returns the black height and the node count of a subtree.
fn verify_subtree<T, U>(
    arena: &Arena<T, U>,
    tree: Option<Handle>,
    parent: Option<Handle>,
) -> Result<(usize, usize)> {
    let handle = match tree {
        None => return Ok((1, 0)),
        Some(handle) => handle,
    };
    let node = &arena[handle];

    if node.parent != parent {
        return Err(Error::ParentMismatch);
    }
    if node.color == Color::Red && (is_red(arena, node.left) || is_red(arena, node.right)) {
        return Err(Error::RedViolation);
    }

    let (left_height, left_count) = verify_subtree(arena, node.left, Some(handle))?;
    let (right_height, right_count) = verify_subtree(arena, node.right, Some(handle))?;
    if left_height != right_height {
        return Err(Error::BlackHeightMismatch {
            left: left_height,
            right: right_height,
        });
    }

    let own_height = match node.color {
        Color::Black => 1,
        Color::Red => 0,
    };
    Ok((left_height + own_height, left_count + right_count + 1))
}

/// Checks every red black invariant, the parent links, the key order and the cached length.
pub fn verify<T, U, C>(
    arena: &Arena<T, U>,
    root: Option<Handle>,
    comparator: &C,
    len: usize,
) -> Result<()>
where
    C: Compare<T>,
{
    if is_red(arena, root) {
        return Err(Error::RedRoot);
    }

    let (_, count) = verify_subtree(arena, root, None)?;
    if count != len {
        return Err(Error::LengthMismatch {
            cached: len,
            actual: count,
        });
    }

    let mut curr = min(arena, root);
    while let Some(handle) = curr {
        let next = successor(arena, handle);
        if let Some(next) = next {
            let ordering = comparator.compare(&arena[handle].entry.key, &arena[next].entry.key);
            if ordering != Ordering::Less {
                return Err(Error::OrderViolation);
            }
        }
        curr = next;
    }
    Ok(())
}
