//! Error types for invariant validation.
//!
//! Ordinary tree operations never fail: a missing key is `None` or `false`.
//! These errors come only from [`RbTree::validate`](crate::RbTree::validate),
//! and any of them means the tree was corrupted.

/// Result type for validation.
pub type Result<T> = std::result::Result<T, TreeError>;

/// A broken red-black or ordering invariant, located by arena index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("root node is red")]
    RedRoot,

    #[error("sentinel node is red")]
    RedSentinel,

    #[error("red node {index} has a red parent")]
    RedRedViolation { index: u32 },

    #[error("node {index} has black-height {left} on the left and {right} on the right")]
    BlackHeightMismatch { index: u32, left: usize, right: usize },

    #[error("node {index} is out of order with respect to its ancestors")]
    OrderViolation { index: u32 },

    #[error("node {index} does not point back to its parent")]
    BrokenParentLink { index: u32 },
}
