//! Deletion: transplant, node removal and the deletion fixup.

use tracing::{debug, trace};

use super::node::{Color, NodeHandle, NodeId, NIL};
use super::RbTree;

impl<K: Ord> RbTree<K> {
    /// Remove one node holding `key`.
    ///
    /// Returns `false`, leaving the tree untouched, if no node matches.
    pub fn delete(&mut self, key: &K) -> bool {
        let z = self.search_id(key);
        if z == NIL {
            debug!("delete: key not found");
            return false;
        }
        self.remove_node(z);
        self.check_after_mutation("delete");
        true
    }

    /// Remove the node at `handle` and return its key.
    ///
    /// Returns `None` if the handle is stale. Use this to pick one specific
    /// node among equal keys.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<K> {
        let Some(z) = self.arena.resolve(handle) else {
            debug!(?handle, "remove: stale handle");
            return None;
        };
        let key = self.remove_node(z);
        self.check_after_mutation("remove");
        key
    }
}

impl<K> RbTree<K> {
    /// Put `v` in `u`'s place under `u`'s parent (or as root).
    ///
    /// `v` may be the sentinel; its parent is still written because the
    /// deletion fixup walks up from it.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let u_parent = self.arena.parent(u);
        if u_parent == NIL {
            self.root = v;
        } else if u == self.arena.left(u_parent) {
            self.arena.set_left(u_parent, v);
        } else {
            self.arena.set_right(u_parent, v);
        }
        self.arena.set_parent(v, u_parent);
    }

    /// Unlink `z`, rebalance, and release its slot.
    fn remove_node(&mut self, z: NodeId) -> Option<K> {
        // y is the node that leaves its position; x moves into y's old slot.
        let mut y_color = self.arena.color(z);
        let x;

        if self.arena.left(z) == NIL {
            x = self.arena.right(z);
            self.transplant(z, x);
        } else if self.arena.right(z) == NIL {
            x = self.arena.left(z);
            self.transplant(z, x);
        } else {
            let y = self.min_of(self.arena.right(z));
            y_color = self.arena.color(y);
            x = self.arena.right(y);

            if self.arena.parent(y) == z {
                self.arena.set_parent(x, y);
            } else {
                self.transplant(y, x);
                let z_right = self.arena.right(z);
                self.arena.set_right(y, z_right);
                self.arena.set_parent(z_right, y);
            }

            self.transplant(z, y);
            let z_left = self.arena.left(z);
            self.arena.set_left(y, z_left);
            self.arena.set_parent(z_left, y);
            self.arena.set_color(y, self.arena.color(z));
        }

        if y_color.is_black() {
            self.delete_fixup(x);
        }

        // Only the fixup reads the sentinel's parent.
        self.arena.set_parent(NIL, NIL);
        self.arena.release(z)
    }

    /// Restore the black-height property after a black node left the path
    /// through `x`. `x` carries the missing black until the loop ends.
    fn delete_fixup(&mut self, mut x: NodeId) {
        while x != self.root && self.arena.color(x).is_black() {
            let parent = self.arena.parent(x);

            if x == self.arena.left(parent) {
                let mut sibling = self.arena.right(parent);

                if self.arena.color(sibling).is_red() {
                    trace!(node = x, "delete case 1: red sibling");
                    self.arena.set_color(sibling, Color::Black);
                    self.arena.set_color(parent, Color::Red);
                    self.rotate_left(parent);
                    sibling = self.arena.right(self.arena.parent(x));
                }

                let near = self.arena.left(sibling);
                let far = self.arena.right(sibling);
                if self.arena.color(near).is_black() && self.arena.color(far).is_black() {
                    trace!(node = x, "delete case 2: black sibling, black nephews");
                    self.arena.set_color(sibling, Color::Red);
                    x = self.arena.parent(x);
                    continue;
                }

                if self.arena.color(far).is_black() {
                    trace!(node = x, "delete case 3: red near nephew");
                    self.arena.set_color(near, Color::Black);
                    self.arena.set_color(sibling, Color::Red);
                    self.rotate_right(sibling);
                    sibling = self.arena.right(self.arena.parent(x));
                }

                trace!(node = x, "delete case 4: red far nephew");
                let parent = self.arena.parent(x);
                self.arena.set_color(sibling, self.arena.color(parent));
                self.arena.set_color(parent, Color::Black);
                let far = self.arena.right(sibling);
                self.arena.set_color(far, Color::Black);
                self.rotate_left(parent);
                x = self.root;
            } else {
                let mut sibling = self.arena.left(parent);

                if self.arena.color(sibling).is_red() {
                    trace!(node = x, "delete case 1: red sibling (mirrored)");
                    self.arena.set_color(sibling, Color::Black);
                    self.arena.set_color(parent, Color::Red);
                    self.rotate_right(parent);
                    sibling = self.arena.left(self.arena.parent(x));
                }

                let near = self.arena.right(sibling);
                let far = self.arena.left(sibling);
                if self.arena.color(near).is_black() && self.arena.color(far).is_black() {
                    trace!(node = x, "delete case 2: black sibling, black nephews (mirrored)");
                    self.arena.set_color(sibling, Color::Red);
                    x = self.arena.parent(x);
                    continue;
                }

                if self.arena.color(far).is_black() {
                    trace!(node = x, "delete case 3: red near nephew (mirrored)");
                    self.arena.set_color(near, Color::Black);
                    self.arena.set_color(sibling, Color::Red);
                    self.rotate_left(sibling);
                    sibling = self.arena.left(self.arena.parent(x));
                }

                trace!(node = x, "delete case 4: red far nephew (mirrored)");
                let parent = self.arena.parent(x);
                self.arena.set_color(sibling, self.arena.color(parent));
                self.arena.set_color(parent, Color::Black);
                let far = self.arena.left(sibling);
                self.arena.set_color(far, Color::Black);
                self.rotate_right(parent);
                x = self.root;
            }
        }

        self.arena.set_color(x, Color::Black);
    }
}
