//! Structural checks and shape metrics.

use super::node::{NodeId, NIL};
use super::RbTree;
use crate::error::{Result, TreeError};

impl<K: Ord> RbTree<K> {
    /// Check every red-black property, parent link and the key order.
    ///
    /// Returns the black-height of the root: black nodes on any path below
    /// the root, sentinel included. An empty tree has black-height 0.
    pub fn validate(&self) -> Result<usize> {
        if self.arena.color(NIL).is_red() {
            return Err(TreeError::RedSentinel);
        }
        if self.root == NIL {
            return Ok(0);
        }
        if self.arena.color(self.root).is_red() {
            return Err(TreeError::RedRoot);
        }
        if self.arena.parent(self.root) != NIL {
            return Err(TreeError::BrokenParentLink { index: self.root });
        }

        // Counts the root itself, which is black.
        let height = self.check_subtree(self.root, None, None)?;
        Ok(height - 1)
    }

    /// Black nodes from `id` down to the sentinel, both ends included.
    ///
    /// Keys in the subtree must lie in `[lower, upper]`. The bounds are
    /// inclusive because rotations may leave equal keys on either side.
    fn check_subtree(&self, id: NodeId, lower: Option<&K>, upper: Option<&K>) -> Result<usize> {
        if id == NIL {
            return Ok(1);
        }

        let key = self.arena.key(id);
        if lower.is_some_and(|lower| key < lower) || upper.is_some_and(|upper| key > upper) {
            return Err(TreeError::OrderViolation { index: id });
        }

        let left = self.arena.left(id);
        let right = self.arena.right(id);
        for child in [left, right] {
            if child == NIL {
                continue;
            }
            if self.arena.parent(child) != id {
                return Err(TreeError::BrokenParentLink { index: child });
            }
            if self.arena.color(id).is_red() && self.arena.color(child).is_red() {
                return Err(TreeError::RedRedViolation { index: child });
            }
        }

        let left_height = self.check_subtree(left, lower, Some(key))?;
        let right_height = self.check_subtree(right, Some(key), upper)?;
        if left_height != right_height {
            return Err(TreeError::BlackHeightMismatch {
                index: id,
                left: left_height,
                right: right_height,
            });
        }

        Ok(left_height + usize::from(self.arena.color(id).is_black()))
    }
}

impl<K> RbTree<K> {
    /// Black-height of the root, measured along the leftmost path.
    pub fn black_height(&self) -> usize {
        if self.root == NIL {
            return 0;
        }
        let mut height = 0;
        let mut current = self.arena.left(self.root);
        loop {
            if self.arena.color(current).is_black() {
                height += 1;
            }
            if current == NIL {
                return height;
            }
            current = self.arena.left(current);
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    fn height_of(&self, id: NodeId) -> usize {
        if id == NIL {
            return 0;
        }
        1 + self
            .height_of(self.arena.left(id))
            .max(self.height_of(self.arena.right(id)))
    }
}
