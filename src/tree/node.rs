//! Arena-backed node storage.
//!
//! Every node of a tree lives in one `Vec` owned by that tree and is
//! addressed by a `u32` index. Slot [`NIL`] is the sentinel: it stands in for
//! every absent child and for the root's parent, and it is black for the
//! whole life of the tree. Relations are plain indices, so the `parent`
//! back-reference never owns anything.

use static_assertions::assert_impl_all;
use tracing::debug;

/// Arena index of a node.
pub(crate) type NodeId = u32;

/// Index of the sentinel slot.
pub(crate) const NIL: NodeId = 0;

/// Red-black node color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Color::Red`].
    pub fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` if the color is [`Color::Black`].
    pub fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

/// Reference to a node inside one [`RbTree`](super::RbTree).
///
/// Handles are cheap to copy. A handle outlives the node it names: once the
/// node is removed the handle becomes stale and every lookup through it
/// reports not-found, even after the slot is reused by a later insert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) index: NodeId,
    pub(crate) generation: u32,
}

assert_impl_all!(NodeHandle: Copy, Send, Sync);

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// `None` for the sentinel and for released slots.
    pub(crate) key: Option<K>,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) generation: u32,
}

impl<K> Node<K> {
    const fn sentinel() -> Self {
        Self {
            key: None,
            color: Color::Black,
            parent: NIL,
            left: NIL,
            right: NIL,
            generation: 0,
        }
    }

    fn new(key: K) -> Self {
        Self {
            key: Some(key),
            color: Color::Red,
            parent: NIL,
            left: NIL,
            right: NIL,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<K> {
    pub(crate) nodes: Vec<Node<K>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<K> Arena<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live (non-sentinel) nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Allocate a detached red node, reusing a released slot when one exists.
    pub(crate) fn alloc(&mut self, key: K) -> NodeId {
        self.len += 1;
        if let Some(id) = self.free.pop() {
            let node = &mut self.nodes[id as usize];
            node.key = Some(key);
            node.color = Color::Red;
            node.parent = NIL;
            node.left = NIL;
            node.right = NIL;
            return id;
        }

        let Ok(id) = NodeId::try_from(self.nodes.len()) else {
            panic!("node arena exhausted: more than {} nodes", NodeId::MAX);
        };
        self.nodes.push(Node::new(key));
        id
    }

    /// Release a node's storage, returning its key.
    ///
    /// The caller must already have unlinked the node from the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<K> {
        debug_assert_ne!(id, NIL, "the sentinel is never released");
        let node = &mut self.nodes[id as usize];
        let key = node.key.take()?;
        node.color = Color::Black;
        node.parent = NIL;
        node.left = NIL;
        node.right = NIL;
        node.generation = node.generation.wrapping_add(1);
        self.free.push(id);
        self.len -= 1;
        debug!(index = id, "released node slot");
        Some(key)
    }

    /// Release every live node and reset the sentinel.
    pub(crate) fn release_all(&mut self) {
        for id in 1..self.nodes.len() {
            if self.nodes[id].key.is_some() {
                // `id` fits: it indexes a slot that alloc numbered.
                self.release(id as NodeId);
            }
        }
        self.nodes[NIL as usize] = Node::sentinel();
    }

    pub(crate) fn handle(&self, id: NodeId) -> NodeHandle {
        NodeHandle {
            index: id,
            generation: self.nodes[id as usize].generation,
        }
    }

    /// Map a handle back to a live node, or `None` if it is stale.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<NodeId> {
        if handle.index == NIL {
            return None;
        }
        let node = self.nodes.get(handle.index as usize)?;
        (node.generation == handle.generation && node.key.is_some()).then_some(handle.index)
    }

    pub(crate) fn key(&self, id: NodeId) -> &K {
        match self.nodes[id as usize].key.as_ref() {
            Some(key) => key,
            None => unreachable!("node {id} is not live"),
        }
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.nodes[id as usize].color
    }

    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].parent
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].left
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.nodes[id as usize].right
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(
            id != NIL || color.is_black(),
            "attempted to color the sentinel red"
        );
        self.nodes[id as usize].color = color;
    }

    /// Writes to the sentinel's parent are allowed; deletion fixup reads it.
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[id as usize].parent = parent;
    }

    pub(crate) fn set_left(&mut self, id: NodeId, left: NodeId) {
        debug_assert_ne!(id, NIL, "the sentinel has no children");
        self.nodes[id as usize].left = left;
    }

    pub(crate) fn set_right(&mut self, id: NodeId, right: NodeId) {
        debug_assert_ne!(id, NIL, "the sentinel has no children");
        self.nodes[id as usize].right = right;
    }
}
