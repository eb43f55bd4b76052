//! Arena storage for list nodes, addressed by stable handles.

use std::ops::{Index, IndexMut};

use slab::Slab;

/// Stable handle to a node in a [`DList`](crate::DList).
///
/// Returned by every insertion. A `NodeId` stays valid until its own node is
/// removed; after that it is stale and resolves to nothing until the slot is
/// reused, at which point it names the new occupant (same discipline as the
/// `slab` crate).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for "no node": the chain ends and the links of an unlinked
    /// node. Never resolves to a slot.
    pub(crate) const NIL: NodeId = NodeId(u32::MAX);

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) const fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }
}

/// A list node: the stored value plus its chain links.
///
/// Fresh nodes are unlinked (both links `NIL`) until the list splices them in.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) prev: NodeId,
    pub(crate) next: NodeId,
}

impl Node {
    #[inline]
    pub(crate) const fn new(value: i64) -> Self {
        Self {
            value,
            prev: NodeId::NIL,
            next: NodeId::NIL,
        }
    }
}

/// Typed arena owning every node of one list.
///
/// Wraps `slab::Slab` so the rest of the crate deals in [`NodeId`]s instead
/// of raw slab keys. Grows on demand; removal frees slots in place for reuse.
#[derive(Debug)]
pub(crate) struct Arena {
    slots: Slab<Node>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self { slots: Slab::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
        }
    }

    /// Stores a node and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the slot index would collide with the `NIL` sentinel
    /// (`u32::MAX` live nodes).
    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        let index = self.slots.insert(node);
        assert!(index < u32::MAX as usize, "arena exhausted the handle space");
        NodeId(index as u32)
    }

    /// Frees a node's slot and returns the node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    #[inline]
    pub(crate) fn remove(&mut self, id: NodeId) -> Node {
        self.slots.remove(id.index())
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_nil() {
            return None;
        }
        self.slots.get(id.index())
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Frees every slot, keeping the allocated capacity.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

// Panicking access for ids the chain invariant guarantees are occupied,
// mirroring slab's own Index impl.
impl Index<NodeId> for Arena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.index()]
    }
}

impl IndexMut<NodeId> for Arena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.index()]
    }
}
