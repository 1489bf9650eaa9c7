//! Read-only queries: search, extremes, and in-order neighbours.

use std::cmp::Ordering;

use tracing::debug;

use super::node::{NodeHandle, NodeId, NIL};
use super::RbTree;

impl<K: Ord> RbTree<K> {
    /// Find a node holding `key`. With duplicates, any one of them.
    pub fn search(&self, key: &K) -> Option<NodeHandle> {
        let id = self.search_id(key);
        (id != NIL).then(|| self.arena.handle(id))
    }

    /// Returns `true` if at least one node holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.search_id(key) != NIL
    }

    pub(crate) fn search_id(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NIL {
            match key.cmp(self.arena.key(current)) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.arena.left(current),
                Ordering::Greater => current = self.arena.right(current),
            }
        }
        NIL
    }
}

impl<K> RbTree<K> {
    /// Node with the smallest key, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<NodeHandle> {
        let id = self.min_of(self.root);
        (id != NIL).then(|| self.arena.handle(id))
    }

    /// Node with the largest key, or `None` for an empty tree.
    pub fn maximum(&self) -> Option<NodeHandle> {
        let id = self.max_of(self.root);
        (id != NIL).then(|| self.arena.handle(id))
    }

    /// In-order predecessor of `handle`.
    ///
    /// Returns `None` for the first node and for stale handles.
    pub fn predecessor(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let Some(id) = self.arena.resolve(handle) else {
            debug!(?handle, "predecessor of stale handle");
            return None;
        };
        let pred = self.predecessor_of(id);
        (pred != NIL).then(|| self.arena.handle(pred))
    }

    /// In-order successor of `handle`.
    ///
    /// Returns `None` for the last node and for stale handles.
    pub fn successor(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let Some(id) = self.arena.resolve(handle) else {
            debug!(?handle, "successor of stale handle");
            return None;
        };
        let succ = self.successor_of(id);
        (succ != NIL).then(|| self.arena.handle(succ))
    }

    /// Leftmost node of the subtree at `id`; the sentinel maps to itself.
    pub(crate) fn min_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        if current == NIL {
            return NIL;
        }
        while self.arena.left(current) != NIL {
            current = self.arena.left(current);
        }
        current
    }

    /// Rightmost node of the subtree at `id`; the sentinel maps to itself.
    pub(crate) fn max_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        if current == NIL {
            return NIL;
        }
        while self.arena.right(current) != NIL {
            current = self.arena.right(current);
        }
        current
    }

    pub(crate) fn predecessor_of(&self, id: NodeId) -> NodeId {
        if self.arena.left(id) != NIL {
            return self.max_of(self.arena.left(id));
        }

        // First ancestor reached from its right subtree.
        let mut current = id;
        let mut ancestor = self.arena.parent(id);
        while ancestor != NIL && current == self.arena.left(ancestor) {
            current = ancestor;
            ancestor = self.arena.parent(ancestor);
        }
        ancestor
    }

    pub(crate) fn successor_of(&self, id: NodeId) -> NodeId {
        if self.arena.right(id) != NIL {
            return self.min_of(self.arena.right(id));
        }

        // First ancestor reached from its left subtree.
        let mut current = id;
        let mut ancestor = self.arena.parent(id);
        while ancestor != NIL && current == self.arena.right(ancestor) {
            current = ancestor;
            ancestor = self.arena.parent(ancestor);
        }
        ancestor
    }
}
