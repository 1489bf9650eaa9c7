//! Insertion and the insertion fixup.

use tracing::trace;

use super::node::{Color, NodeHandle, NodeId, NIL};
use super::RbTree;

impl<K: Ord> RbTree<K> {
    /// Insert `key` and return a handle to its new node.
    ///
    /// Always succeeds. A key equal to one already present goes to the left.
    pub fn insert(&mut self, key: K) -> NodeHandle {
        // New nodes start red.
        let z = self.arena.alloc(key);

        if self.root == NIL {
            self.root = z;
            self.arena.set_color(z, Color::Black);
        } else {
            let mut parent = NIL;
            let mut current = self.root;
            let mut goes_left = false;
            while current != NIL {
                parent = current;
                goes_left = self.arena.key(z) <= self.arena.key(current);
                current = if goes_left {
                    self.arena.left(current)
                } else {
                    self.arena.right(current)
                };
            }

            self.arena.set_parent(z, parent);
            if goes_left {
                self.arena.set_left(parent, z);
            } else {
                self.arena.set_right(parent, z);
            }

            self.insert_fixup(z);
        }

        self.check_after_mutation("insert");
        self.arena.handle(z)
    }

    /// Restore the red-black properties after `z` was attached red.
    ///
    /// The root's parent is the sentinel, which is black, so the loop stops
    /// at the root at the latest.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.arena.color(self.arena.parent(z)).is_red() {
            // A red parent is never the root, so the grandparent is real.
            let parent = self.arena.parent(z);
            let grandparent = self.arena.parent(parent);

            if parent == self.arena.left(grandparent) {
                let uncle = self.arena.right(grandparent);

                if self.arena.color(uncle).is_red() {
                    trace!(node = z, "insert case 1: red uncle");
                    self.arena.set_color(parent, Color::Black);
                    self.arena.set_color(uncle, Color::Black);
                    self.arena.set_color(grandparent, Color::Red);
                    z = grandparent;
                    continue;
                }

                if z == self.arena.right(parent) {
                    trace!(node = z, "insert case 2: inner child");
                    z = parent;
                    self.rotate_left(z);
                }

                trace!(node = z, "insert case 3: outer child");
                let parent = self.arena.parent(z);
                let grandparent = self.arena.parent(parent);
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
                break;
            } else {
                let uncle = self.arena.left(grandparent);

                if self.arena.color(uncle).is_red() {
                    trace!(node = z, "insert case 1: red uncle (mirrored)");
                    self.arena.set_color(parent, Color::Black);
                    self.arena.set_color(uncle, Color::Black);
                    self.arena.set_color(grandparent, Color::Red);
                    z = grandparent;
                    continue;
                }

                if z == self.arena.left(parent) {
                    trace!(node = z, "insert case 2: inner child (mirrored)");
                    z = parent;
                    self.rotate_right(z);
                }

                trace!(node = z, "insert case 3: outer child (mirrored)");
                let parent = self.arena.parent(z);
                let grandparent = self.arena.parent(parent);
                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
                break;
            }
        }

        // Case 1 can paint the root red.
        let root = self.root;
        self.arena.set_color(root, Color::Black);
    }
}
