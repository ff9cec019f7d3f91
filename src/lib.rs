//! Ordered maps and sets backed by an arena-allocated red black tree, with set algebra built on
//! in-order iteration and membership tests.

mod entry;
pub mod arena;
pub mod compare;
pub mod red_black_tree;
pub mod spam;
pub mod text;
