//! A doubly linked list of non-negative integers, backed by a slab arena.
//!
//! Lists built from a box per node pay one heap allocation per element and
//! can only name a node by walking to it. This crate separates storage from
//! structure instead:
//!
//! ```text
//! Arena (slab::Slab<Node>)  - owns every node, hands out stable handles
//! DList (head/tail/len)     - splices handles together, owns no nodes itself
//! ```
//!
//! Benefits:
//! - **Stable handles**: a [`NodeId`] survives unrelated insertions and removals
//! - **Slot reuse**: removing a node frees its slot for the next insertion
//! - **O(1) structural ops**: push, pop, and removal by handle only splice links
//! - **Cache locality**: nodes live in one growable arena, not scattered boxes
//!
//! # Quick Start
//!
//! ```
//! use dlist::DList;
//!
//! let mut list = DList::new();
//!
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//! list.push_front(0).unwrap();
//!
//! // 0, 1, 2
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(0), Ok(0));
//! assert_eq!(list.get(2), Ok(2));
//!
//! list.reverse();
//! assert_eq!(list.get(0), Ok(2));
//! assert_eq!(list.find(0), Some(2));
//! ```
//!
//! # Handles
//!
//! Every insertion returns a [`NodeId`] for the new node. The handle allows
//! O(1) removal later, with no positional walk:
//!
//! ```
//! use dlist::DList;
//!
//! let mut list = DList::new();
//!
//! let a = list.push_back(10).unwrap();
//! let _b = list.push_back(20).unwrap();
//!
//! assert_eq!(list.remove_node(a), Some(10));
//! assert_eq!(list.remove_node(a), None); // stale now
//! assert_eq!(list.len(), 1);
//! ```
//!
//! A handle is valid until its own node is removed. After that it is stale:
//! it resolves to nothing while the slot sits vacant, and once the slot is
//! reused it names the new occupant instead (same discipline as the `slab`
//! crate). Don't hold handles across the removal of their node.
//!
//! # Non-Negative Values
//!
//! The list stores `i64` but every insertion rejects negative values, so
//! anything read back out is guaranteed non-negative:
//!
//! ```
//! use dlist::{DList, ListError};
//!
//! let mut list = DList::new();
//!
//! assert_eq!(list.push_back(-3), Err(ListError::NegativeValue { value: -3 }));
//! assert!(list.is_empty());
//! ```
//!
//! # Errors, Not Sentinels
//!
//! Fallible operations return [`Result`] or [`Option`]; there are no in-band
//! sentinel values, and a failed operation never leaves the list partially
//! mutated. Out of memory is not an error value: arena growth aborts the
//! process if allocation fails, the same as the std collections.
//!
//! # Output Format
//!
//! [`DList::print`] and the [`Display`](std::fmt::Display) impl render one
//! `<value>$` line per element, head to tail:
//!
//! ```
//! use dlist::DList;
//!
//! let mut list = DList::new();
//! list.push_back(3).unwrap();
//! list.push_back(1).unwrap();
//! list.push_back(4).unwrap();
//!
//! assert_eq!(list.to_string(), "3$\n1$\n4$\n");
//! ```

#![warn(missing_docs)]

mod arena;
pub mod error;
mod list;

pub use arena::NodeId;
pub use error::ListError;
pub use list::DList;
