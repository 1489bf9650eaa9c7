//! Red-black tree.
//!
//! An ordered multiset of keys with worst-case `O(log n)` search, insertion
//! and deletion. The layout follows the classic sentinel formulation: slot 0
//! of the node arena is a black `nil` node that terminates every path, so the
//! rebalancing loops can read `parent`, `left` and `right` of any node they
//! reach without special-casing absent children.
//!
//! # Example
//!
//! ```
//! use rbset::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [5, 3, 8, 1] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.in_order(), vec![1, 3, 5, 8]);
//!
//! let three = tree.search(&3).unwrap();
//! let next = tree.successor(three).unwrap();
//! assert_eq!(tree.key(next), Some(&5));
//!
//! assert!(tree.delete(&3));
//! assert!(!tree.delete(&3));
//! ```

mod delete;
mod insert;
mod iter;
mod node;
mod query;
mod rotate;
mod verify;

use std::fmt;

use static_assertions::assert_impl_all;
use tracing::error;

use crate::config::TreeConfig;

pub use iter::Iter;
pub use node::{Color, NodeHandle};

use node::{Arena, NodeId, NIL};

/// Default arena pre-allocation when no configuration is supplied.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Self-balancing binary search tree over a totally ordered key type.
///
/// Equal keys are accepted; a new key equal to an existing one is routed
/// into the left subtree. Rebalancing may later move equal keys to either
/// side, so the relative order of duplicates is not preserved.
#[derive(Clone)]
pub struct RbTree<K> {
    arena: Arena<K>,
    root: NodeId,
    validate_on_mutation: bool,
}

assert_impl_all!(RbTree<u64>: Send, Sync);

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }
}

impl<K> RbTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with room for `capacity` nodes before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: NIL,
            validate_on_mutation: false,
        }
    }

    /// Create an empty tree from loaded configuration.
    pub fn with_config(config: &TreeConfig) -> Self {
        let mut tree = Self::with_capacity(config.initial_capacity);
        tree.validate_on_mutation = config.validate_on_mutation;
        tree
    }

    /// Number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Remove every key. Outstanding handles become stale.
    pub fn clear(&mut self) {
        self.arena.release_all();
        self.root = NIL;
    }

    /// Handle to the root node, or `None` when the tree is empty.
    pub fn root(&self) -> Option<NodeHandle> {
        (self.root != NIL).then(|| self.arena.handle(self.root))
    }

    /// Key stored at `handle`, or `None` if the handle is stale.
    pub fn key(&self, handle: NodeHandle) -> Option<&K> {
        self.arena.resolve(handle).map(|id| self.arena.key(id))
    }

    /// Color of the node at `handle`, or `None` if the handle is stale.
    pub fn color(&self, handle: NodeHandle) -> Option<Color> {
        self.arena.resolve(handle).map(|id| self.arena.color(id))
    }

    /// Lazy ascending traversal. Call again to restart from the smallest key.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root)
    }

    /// Materialize the ascending key sequence.
    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().cloned().collect()
    }

    fn check_after_mutation(&self, operation: &str)
    where
        K: Ord,
    {
        if !self.validate_on_mutation {
            return;
        }
        if let Err(e) = self.validate() {
            error!(operation, error = %e, "red-black invariant violated");
            panic!("red-black invariant violated after {operation}: {e}");
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
