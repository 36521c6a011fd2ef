//! An ordered symbol table backed by an order-statistic binary search tree.
//!
//! This crate provides [`OrderedSymbolTable`], an ordered key-value map that
//! augments every tree node with its subtree size, giving O(height)
//! order-statistic operations on top of the usual ordered-map surface:
//!
//! - [`rank`](OrderedSymbolTable::rank) - How many stored keys are strictly
//!   less than a given key
//! - [`select`](OrderedSymbolTable::select) - The key at a given sorted
//!   position
//! - Indexing by [`Rank`] - e.g., `table[Rank(0)]` for the value of the
//!   smallest key
//!
//! # Example
//!
//! ```
//! use ost_tree::{OrderedSymbolTable, Rank};
//!
//! let mut scores = OrderedSymbolTable::new();
//! scores.put("Alice", Some(100));
//! scores.put("Bob", Some(85));
//! scores.put("Carol", Some(92));
//!
//! // Ordered-map operations
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//! assert_eq!(scores.min().unwrap(), &"Alice");
//!
//! // Order-statistic operations (O(height))
//! assert_eq!(scores.rank(&"Carol"), 2); // Carol is third alphabetically
//! assert_eq!(scores.select(1).unwrap(), &"Bob");
//! assert_eq!(scores[Rank(0)], 100); // Alice's score
//!
//! // An absent value is a deletion request
//! scores.put("Bob", None);
//! assert!(!scores.contains(&"Bob"));
//! ```
//!
//! # Implementation
//!
//! The table is an unbalanced binary search tree of uniquely-owned nodes.
//! Every mutating operation recursively rebuilds the path it descended,
//! recomputing the cached subtree size of each visited node, so the ordering
//! invariant and the size counters are maintained together. Deletion uses
//! Hibbard's method: a node with two children is replaced by the minimum of
//! its right subtree.
//!
//! There is deliberately no rebalancing. Expected height is O(log n) for
//! random insertion order, and O(n) in the worst case; callers that feed
//! adversarial orderings get the degenerate height they paid for, in
//! exchange for a structure simple enough to verify by eye.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod symbol_table;

pub use error::Error;
pub use order_statistic::Rank;
pub use symbol_table::OrderedSymbolTable;
