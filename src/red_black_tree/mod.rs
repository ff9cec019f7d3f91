//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions.
//!
//! Nodes live in a `TypedArena` and refer to each other through handles. Every node keeps a
//! handle to its parent, which lets the tree rebalance bottom-up after an insertion and lets
//! iterators find in-order successors without an explicit stack.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{
    RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapKeys, RedBlackMapValues,
};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};

use std::collections::TryReserveError;
use std::result;
use thiserror::Error;

/// Default number of nodes allocated per arena chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 64;

/// Errors reported by red black tree operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The node arena could not grow.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    /// The root node is red.
    #[error("red black tree invariant violated: root is red")]
    RedRoot,
    /// A red node has a red child.
    #[error("red black tree invariant violated: red node has a red child")]
    RedViolation,
    /// Two paths from the root to an absent child contain a different number of black nodes.
    #[error("red black tree invariant violated: black height {left} differs from {right}")]
    BlackHeightMismatch { left: usize, right: usize },
    /// In-order traversal is not strictly increasing under the comparator.
    #[error("red black tree invariant violated: keys are out of order")]
    OrderViolation,
    /// A child's parent handle does not refer to the node that links to it.
    #[error("red black tree invariant violated: parent link mismatch")]
    ParentMismatch,
    /// The cached element count differs from the number of reachable nodes.
    #[error("red black tree invariant violated: cached length {cached} but {actual} nodes")]
    LengthMismatch { cached: usize, actual: usize },
}

/// Convenience `Result` type for red black tree operations.
pub type Result<T> = result::Result<T, Error>;
