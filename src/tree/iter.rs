//! In-order traversal.

use std::iter::FusedIterator;

use super::node::{Arena, NodeId, NIL};

/// Ascending iterator over the keys of an [`RbTree`](super::RbTree).
///
/// Uses an explicit stack bounded by the tree height, so it never recurses.
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, root: NodeId) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            remaining: arena.len(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NIL {
            self.stack.push(id);
            id = self.arena.left(id);
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let id = self.stack.pop()?;
        self.push_left_spine(arena.right(id));
        self.remaining -= 1;
        Some(arena.key(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
