use crate::arena::Handle;
use crate::entry::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub left: Option<Handle>,
    pub right: Option<Handle>,
    pub parent: Option<Handle>,
}

impl<T, U> Node<T, U> {
    /// New nodes are red leaves.
    pub fn new(key: T, value: U, parent: Option<Handle>) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }

    pub fn is_left_child(&self, handle: Handle) -> bool {
        self.left == Some(handle)
    }

    pub fn child(&self, is_left: bool) -> Option<Handle> {
        if is_left {
            self.left
        } else {
            self.right
        }
    }
}
