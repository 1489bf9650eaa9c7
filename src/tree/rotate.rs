//! Rotation primitives.
//!
//! Both rotations are `O(1)`, keep the in-order key sequence intact and are
//! the only structural change the fixups make.

use tracing::trace;

use super::node::{NodeId, NIL};
use super::RbTree;

impl<K> RbTree<K> {
    /// Rotate left around `x`. `x.right` must not be the sentinel.
    ///
    /// ```text
    ///     x                y
    ///    / \              / \
    ///   a   y     =>     x   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        let y = self.arena.right(x);
        debug_assert_ne!(y, NIL, "rotate_left requires a right child");
        trace!(pivot = x, "rotate left");

        // Move b.
        let beta = self.arena.left(y);
        self.arena.set_right(x, beta);
        if beta != NIL {
            self.arena.set_parent(beta, x);
        }

        // Hang y where x was.
        let x_parent = self.arena.parent(x);
        self.arena.set_parent(y, x_parent);
        if x_parent == NIL {
            self.root = y;
        } else if x == self.arena.left(x_parent) {
            self.arena.set_left(x_parent, y);
        } else {
            self.arena.set_right(x_parent, y);
        }

        self.arena.set_left(y, x);
        self.arena.set_parent(x, y);
    }

    /// Rotate right around `y`. `y.left` must not be the sentinel.
    pub(crate) fn rotate_right(&mut self, y: NodeId) {
        let x = self.arena.left(y);
        debug_assert_ne!(x, NIL, "rotate_right requires a left child");
        trace!(pivot = y, "rotate right");

        let beta = self.arena.right(x);
        self.arena.set_left(y, beta);
        if beta != NIL {
            self.arena.set_parent(beta, y);
        }

        let y_parent = self.arena.parent(y);
        self.arena.set_parent(x, y_parent);
        if y_parent == NIL {
            self.root = x;
        } else if y == self.arena.right(y_parent) {
            self.arena.set_right(y_parent, x);
        } else {
            self.arena.set_left(y_parent, x);
        }

        self.arena.set_right(x, y);
        self.arena.set_parent(y, x);
    }
}
