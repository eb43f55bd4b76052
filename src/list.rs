//! The list itself: chain bookkeeping over the node arena.
//!
//! `DList` keeps three words of state (head, tail, length); everything else
//! lives in the nodes' `prev`/`next` links. Structural operations splice
//! links and never move values.
//!
//! # Chain Invariant
//!
//! Every occupied arena slot is linked into the chain exactly once, and the
//! chain is consistent in both directions: following `next` from the head
//! visits every node, and following `prev` from the tail visits them in
//! reverse. The ends carry `NIL`. Operations validate their inputs before
//! touching any link, so a failed call leaves the chain as it was.

use std::fmt;
use std::mem;

use crate::arena::{Arena, Node, NodeId};
use crate::error::ListError;

/// A doubly linked list of non-negative `i64` values.
///
/// Nodes live in an internal arena; the list itself is three words of
/// bookkeeping plus the links inside each node. Positional operations
/// ([`get`](DList::get), [`insert_at`](DList::insert_at),
/// [`remove_at`](DList::remove_at)) walk the chain from the head; handle
/// operations ([`remove_node`](DList::remove_node)) splice in O(1).
///
/// # Example
///
/// ```
/// use dlist::DList;
///
/// let mut list = DList::new();
///
/// let a = list.push_back(1).unwrap();
/// list.push_back(2).unwrap();
/// list.push_back(3).unwrap();
///
/// // Positional access walks from the head
/// assert_eq!(list.get(1), Ok(2));
///
/// // Handle access does not
/// assert_eq!(list.remove_node(a), Some(1));
///
/// // 2, 3
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.front(), Some(2));
/// assert_eq!(list.back(), Some(3));
/// ```
pub struct DList {
    arena: Arena,
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl DList {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates an empty list. Allocates nothing until the first insertion.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: NodeId::NIL,
            tail: NodeId::NIL,
            len: 0,
        }
    }

    /// Creates an empty list with arena room for `capacity` nodes before the
    /// first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: NodeId::NIL,
            tail: NodeId::NIL,
            len: 0,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns how many nodes the arena can hold before reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    // ========================================================================
    // The ends
    // ========================================================================

    /// Returns the first value without removing it.
    #[inline]
    pub fn front(&self) -> Option<i64> {
        self.arena.get(self.head).map(|node| node.value)
    }

    /// Returns the last value without removing it.
    #[inline]
    pub fn back(&self) -> Option<i64> {
        self.arena.get(self.tail).map(|node| node.value)
    }

    /// Prepends `value`, returning the new node's handle.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NegativeValue`] if `value < 0`.
    #[inline]
    pub fn push_front(&mut self, value: i64) -> Result<NodeId, ListError> {
        let id = self.alloc(value)?;
        self.link_front(id);
        Ok(id)
    }

    /// Appends `value`, returning the new node's handle.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NegativeValue`] if `value < 0`.
    #[inline]
    pub fn push_back(&mut self, value: i64) -> Result<NodeId, ListError> {
        let id = self.alloc(value)?;
        self.link_back(id);
        Ok(id)
    }

    /// Removes and returns the first value, or `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<i64> {
        let id = self.head;
        if id.is_nil() {
            return None;
        }
        self.unlink(id);
        Some(self.arena.remove(id).value)
    }

    /// Removes and returns the last value, or `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<i64> {
        let id = self.tail;
        if id.is_nil() {
            return None;
        }
        self.unlink(id);
        Some(self.arena.remove(id).value)
    }

    // ========================================================================
    // Positional operations (walk from the head)
    // ========================================================================

    /// Returns the value at position `index`. O(index).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<i64, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.arena[self.node_at(index)].value)
    }

    /// Inserts `value` at position `index`, returning the new node's handle.
    ///
    /// Position `0` prepends and position `len` appends; anything in between
    /// pushes the elements from `index` onwards one position toward the tail.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NegativeValue`] if `value < 0`, then
    /// [`ListError::InvalidIndex`] if `index > len`. Either way the list is
    /// unchanged.
    pub fn insert_at(&mut self, value: i64, index: usize) -> Result<NodeId, ListError> {
        if value < 0 {
            return Err(ListError::NegativeValue { value });
        }
        if index > self.len {
            return Err(ListError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.push_front(value);
        }
        if index == self.len {
            return self.push_back(value);
        }

        let before = self.node_at(index);
        let id = self.arena.insert(Node::new(value));
        self.link_before(id, before);
        Ok(id)
    }

    /// Returns the position of the first element equal to `value`, scanning
    /// from the head. `None` if no element matches.
    ///
    /// The list never stores negative values, so probing for one always
    /// comes back `None`.
    pub fn find(&self, value: i64) -> Option<usize> {
        let mut id = self.head;
        let mut index = 0;
        while !id.is_nil() {
            let node = &self.arena[id];
            if node.value == value {
                return Some(index);
            }
            id = node.next;
            index += 1;
        }
        None
    }

    /// Removes the element at position `index` and returns its value.
    ///
    /// The elements after `index` shift one position toward the head.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`; the list is
    /// unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<i64, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let id = self.node_at(index);
        self.unlink(id);
        Ok(self.arena.remove(id).value)
    }

    // ========================================================================
    // Handle operations
    // ========================================================================

    /// Removes the node behind `id` and returns its value. O(1), no walk.
    ///
    /// Returns `None` for a stale handle (one whose node was already
    /// removed) and leaves the list unchanged.
    #[inline]
    pub fn remove_node(&mut self, id: NodeId) -> Option<i64> {
        if self.arena.get(id).is_none() {
            return None;
        }
        self.unlink(id);
        Some(self.arena.remove(id).value)
    }

    // ========================================================================
    // Whole-list operations
    // ========================================================================

    /// Removes every element.
    ///
    /// The arena keeps its allocated capacity, so refilling the list does
    /// not reallocate.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NodeId::NIL;
        self.tail = NodeId::NIL;
        self.len = 0;
    }

    /// Squares every element in place.
    ///
    /// Multiplication saturates at `i64::MAX`, so a square can never wrap
    /// into a negative value.
    pub fn map_square(&mut self) {
        let mut id = self.head;
        while !id.is_nil() {
            let node = &mut self.arena[id];
            node.value = node.value.saturating_mul(node.value);
            id = node.next;
        }
    }

    /// Reverses the list in place.
    ///
    /// Single pass: swap each node's links, then swap head and tail. O(n)
    /// time, O(1) extra space.
    pub fn reverse(&mut self) {
        let mut id = self.head;
        while !id.is_nil() {
            let node = &mut self.arena[id];
            mem::swap(&mut node.prev, &mut node.next);
            // links already swapped, so the old next is now prev
            id = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Writes the list to stdout, one `<value>$` line per element.
    pub fn print(&self) {
        print!("{self}");
    }

    // ========================================================================
    // Chain bookkeeping (splice only, no validation)
    // ========================================================================

    /// Checks the payload and stores an unlinked node for it.
    fn alloc(&mut self, value: i64) -> Result<NodeId, ListError> {
        if value < 0 {
            return Err(ListError::NegativeValue { value });
        }
        Ok(self.arena.insert(Node::new(value)))
    }

    /// Splices an unlinked node in as the new head.
    fn link_front(&mut self, id: NodeId) {
        let old_head = self.head;
        {
            let node = &mut self.arena[id];
            node.prev = NodeId::NIL;
            node.next = old_head;
        }

        if old_head.is_nil() {
            self.tail = id;
        } else {
            self.arena[old_head].prev = id;
        }

        self.head = id;
        self.len += 1;
    }

    /// Splices an unlinked node in as the new tail.
    fn link_back(&mut self, id: NodeId) {
        let old_tail = self.tail;
        {
            let node = &mut self.arena[id];
            node.prev = old_tail;
            node.next = NodeId::NIL;
        }

        if old_tail.is_nil() {
            self.head = id;
        } else {
            self.arena[old_tail].next = id;
        }

        self.tail = id;
        self.len += 1;
    }

    /// Splices an unlinked node in directly before `before`.
    fn link_before(&mut self, id: NodeId, before: NodeId) {
        let prev = self.arena[before].prev;
        {
            let node = &mut self.arena[id];
            node.prev = prev;
            node.next = before;
        }

        self.arena[before].prev = id;
        if prev.is_nil() {
            self.head = id;
        } else {
            self.arena[prev].next = id;
        }

        self.len += 1;
    }

    /// Splices a node out of the chain. The slot stays occupied until the
    /// caller frees it.
    fn unlink(&mut self, id: NodeId) {
        debug_assert_eq!(self.arena.len(), self.len, "chain out of sync with arena");
        let node = &self.arena[id];
        let prev = node.prev;
        let next = node.next;

        if prev.is_nil() {
            self.head = next;
        } else {
            self.arena[prev].next = next;
        }

        if next.is_nil() {
            self.tail = prev;
        } else {
            self.arena[next].prev = prev;
        }

        self.len -= 1;
    }

    /// Walks from the head to the node at `index`. The caller has already
    /// bounds-checked `index`.
    fn node_at(&self, index: usize) -> NodeId {
        debug_assert!(index < self.len, "walk past the tail");
        let mut id = self.head;
        for _ in 0..index {
            id = self.arena[id].next;
        }
        id
    }
}

impl Default for DList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut id = self.head;
        while !id.is_nil() {
            let node = &self.arena[id];
            writeln!(f, "{}$", node.value)?;
            id = node.next;
        }
        Ok(())
    }
}

impl fmt::Debug for DList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        let mut id = self.head;
        while !id.is_nil() {
            let node = &self.arena[id];
            entries.entry(&node.value);
            id = node.next;
        }
        entries.finish()
    }
}
